//! YAML 1.2 JSON schema implicit typing.

use crate::literals;
use core_types::{ScalarError, ScalarNode, ScalarResult, ScalarType};

/// Determine the type of a scalar under the YAML 1.2 JSON schema.
///
/// Only quoted scalars are strings. A plain literal that is not `null`,
/// `true`, `false` or a strict JSON number has no type under this schema and
/// fails with [`ScalarError::UnrecognizedScalar`].
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, ScalarNode, ScalarType};
/// use scalar_classifier::classify_json;
///
/// assert_eq!(classify_json(&ScalarNode::plain("-0")).unwrap(), ScalarType::Int);
/// assert_eq!(classify_json(&ScalarNode::single_quoted("x")).unwrap(), ScalarType::String);
///
/// let err = classify_json(&ScalarNode::plain("01")).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnrecognizedScalar);
/// ```
pub fn classify_json(node: &ScalarNode) -> ScalarResult<ScalarType> {
    match json_type_of(node) {
        Some(tag) => {
            tracing::trace!(schema = "json", value = %node.value, tag = %tag, "classified scalar");
            Ok(tag)
        }
        None => {
            tracing::debug!(schema = "json", value = %node.value, "unrecognized scalar");
            Err(ScalarError::UnrecognizedScalar {
                input: node.value.clone(),
            })
        }
    }
}

fn json_type_of(node: &ScalarNode) -> Option<ScalarType> {
    if node.is_quoted() {
        return Some(ScalarType::String);
    }

    let value = node.as_str();

    if value == literals::JSON_NULL {
        Some(ScalarType::Null)
    } else if value == literals::JSON_TRUE || value == literals::JSON_FALSE {
        Some(ScalarType::Bool)
    } else if literals::is_json_int(value) {
        Some(ScalarType::Int)
    } else if literals::is_json_float(value) {
        Some(ScalarType::Float)
    } else {
        None
    }
}
