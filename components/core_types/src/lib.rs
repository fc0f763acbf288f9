//! Core scalar types and error handling for YAML implicit typing.
//!
//! This crate provides the data model shared by the classifier and its
//! callers: the scalar node as handed over by the AST layer, the type tag a
//! classification produces, the native value a coercion produces, the schema
//! selector, and the error taxonomy.
//!
//! # Overview
//!
//! - [`ScalarNode`] - Literal text of a scalar plus its quoting flags
//! - [`ScalarType`] - Implicit type tag (null, bool, int, float, string)
//! - [`ScalarValue`] - Native value of a resolved scalar
//! - [`SchemaKind`] - YAML 1.2 Core or JSON schema
//! - [`ScalarError`] - Classification and coercion failures
//! - [`ErrorKind`] - Payload-free kind of a [`ScalarError`]
//!
//! # Examples
//!
//! ```
//! use core_types::{ScalarNode, ScalarType, SchemaKind};
//!
//! let node = ScalarNode::plain("42");
//! assert!(node.is_plain());
//! assert_eq!(SchemaKind::default(), SchemaKind::Core);
//! assert_eq!(ScalarType::Int.to_string(), "int");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod node;
mod schema;
mod value;

pub use error::{ErrorKind, ScalarError, ScalarResult};
pub use node::ScalarNode;
pub use schema::SchemaKind;
pub use value::{ScalarType, ScalarValue};
