//! Scalar classification and coercion errors.
//!
//! Every failure carries the offending text so a loader can report it
//! without re-reading the node.

use thiserror::Error;

/// The kind of a scalar error.
///
/// Mirrors the variants of [`ScalarError`] without their payloads, so callers
/// can branch on the failure without destructuring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Text is not one of the six boolean literals
    InvalidBoolean,
    /// Text is not a base-10, base-8 or base-16 integer numeral
    InvalidInteger,
    /// Text is neither a special float nor a float literal
    InvalidFloat,
    /// Literal matches no JSON schema grammar
    UnrecognizedScalar,
    /// Schema name is not known
    UnsupportedSchema,
}

/// An error raised while classifying or coercing a scalar.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, ScalarError};
///
/// let error = ScalarError::InvalidBoolean {
///     input: "yes".to_string(),
/// };
///
/// assert_eq!(error.kind(), ErrorKind::InvalidBoolean);
/// assert_eq!(error.to_string(), "Invalid boolean \"yes\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScalarError {
    /// Text does not exactly match a boolean literal
    #[error("Invalid boolean \"{input}\"")]
    InvalidBoolean {
        /// The rejected text
        input: String,
    },

    /// Text is not a valid integer numeral
    #[error("Invalid integer \"{input}\"")]
    InvalidInteger {
        /// The rejected text
        input: String,
    },

    /// Text is not a recognized float
    #[error("Invalid float \"{input}\"")]
    InvalidFloat {
        /// The rejected text
        input: String,
    },

    /// JSON schema has no string fallback for plain scalars
    #[error("could not determine scalar type of \"{input}\"")]
    UnrecognizedScalar {
        /// The unmatched literal
        input: String,
    },

    /// Schema name does not select a known schema
    #[error("unsupported schema \"{name}\"")]
    UnsupportedSchema {
        /// The rejected schema name
        name: String,
    },
}

impl ScalarError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScalarError::InvalidBoolean { .. } => ErrorKind::InvalidBoolean,
            ScalarError::InvalidInteger { .. } => ErrorKind::InvalidInteger,
            ScalarError::InvalidFloat { .. } => ErrorKind::InvalidFloat,
            ScalarError::UnrecognizedScalar { .. } => ErrorKind::UnrecognizedScalar,
            ScalarError::UnsupportedSchema { .. } => ErrorKind::UnsupportedSchema,
        }
    }

    /// Returns the text that caused the failure.
    pub fn input(&self) -> &str {
        match self {
            ScalarError::InvalidBoolean { input }
            | ScalarError::InvalidInteger { input }
            | ScalarError::InvalidFloat { input }
            | ScalarError::UnrecognizedScalar { input } => input,
            ScalarError::UnsupportedSchema { name } => name,
        }
    }
}

/// Result type for scalar operations
pub type ScalarResult<T> = Result<T, ScalarError>;
