//! YAML 1.2 implicit scalar typing.
//!
//! Given the literal text of a scalar node and its quoting flags, this crate
//! decides which implicit type a YAML loader assigns to it under the Core or
//! the JSON schema, and coerces classified literals into native values.
//!
//! # Overview
//!
//! - [`classify`] - Type of an optional node under a chosen schema
//! - [`classify_core`] - Core schema rules; never fails
//! - [`classify_json`] - JSON schema rules; no string fallback for plain scalars
//! - [`coerce_bool`], [`coerce_int`], [`coerce_float`] - Literal to native value
//! - [`resolve`] - Classify and coerce in one step
//! - [`ScalarClassifier`] - Classifier bound to one schema
//!
//! Everything here is pure and stateless; all functions are safe to call
//! from any number of threads.
//!
//! # Examples
//!
//! ```
//! use core_types::{ScalarNode, ScalarType, ScalarValue, SchemaKind};
//! use scalar_classifier::{classify, resolve};
//!
//! let node = ScalarNode::plain("-.inf");
//! assert_eq!(classify(Some(&node), SchemaKind::Core).unwrap(), ScalarType::Float);
//!
//! let value = resolve(Some(&node), SchemaKind::Core).unwrap();
//! assert_eq!(value, ScalarValue::Float(f64::NEG_INFINITY));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod classifier;
mod coerce;
mod core_schema;
mod json_schema;
mod literals;

pub use classifier::{classify, resolve, ScalarClassifier};
pub use coerce::{coerce_bool, coerce_float, coerce_int, parse_integer};
pub use core_schema::classify_core;
pub use json_schema::classify_json;

// Re-export the data model for convenience
pub use core_types::{ErrorKind, ScalarError, ScalarNode, ScalarResult, ScalarType, ScalarValue, SchemaKind};
