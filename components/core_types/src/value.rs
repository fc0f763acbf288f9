//! Type tags and resolved scalar values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The implicit type assigned to a scalar.
///
/// Exactly one tag is produced per classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    /// `null`, `~` or the empty scalar
    Null,
    /// Boolean literal
    Bool,
    /// Integer literal
    Int,
    /// Floating point literal, including `.inf` and `.nan`
    Float,
    /// Anything else, and every quoted scalar
    String,
}

impl ScalarType {
    /// Lowercase name of the type
    pub fn name(&self) -> &'static str {
        match self {
            ScalarType::Null => "null",
            ScalarType::Bool => "bool",
            ScalarType::Int => "int",
            ScalarType::Float => "float",
            ScalarType::String => "string",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The native value of a resolved scalar.
///
/// Serializes as the bare value, so a resolved document maps directly onto
/// JSON.
///
/// # Examples
///
/// ```
/// use core_types::{ScalarType, ScalarValue};
///
/// let value = ScalarValue::Int(15);
/// assert_eq!(value.scalar_type(), ScalarType::Int);
/// assert_eq!(value.as_i64(), Some(15));
/// assert!(!value.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// Null
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// IEEE 754 double
    Float(f64),
    /// String
    String(String),
}

impl ScalarValue {
    /// The type tag corresponding to this value
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            ScalarValue::Null => ScalarType::Null,
            ScalarValue::Bool(_) => ScalarType::Bool,
            ScalarValue::Int(_) => ScalarType::Int,
            ScalarValue::Float(_) => ScalarType::Float,
            ScalarValue::String(_) => ScalarType::String,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Get the boolean, if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer, if this is an `Int`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScalarValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the float, if this is a `Float`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text, if this is a `String`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => write!(f, "null"),
            ScalarValue::Bool(b) => write!(f, "{}", b),
            ScalarValue::Int(n) => write!(f, "{}", n),
            ScalarValue::Float(n) if n.is_nan() => write!(f, ".nan"),
            ScalarValue::Float(n) if n.is_infinite() => {
                write!(f, "{}", if *n > 0.0 { ".inf" } else { "-.inf" })
            }
            ScalarValue::Float(n) => write!(f, "{:?}", n),
            ScalarValue::String(s) => write!(f, "{}", s),
        }
    }
}
