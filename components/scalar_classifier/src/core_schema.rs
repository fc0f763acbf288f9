//! YAML 1.2 Core schema implicit typing.

use crate::literals;
use core_types::{ScalarNode, ScalarType};

/// Determine the type of a scalar under the YAML 1.2 Core schema.
///
/// Checks run in a fixed order and the first match wins: quoting, null,
/// bool, int, float, and finally the string fallback. The function is total.
///
/// # Examples
///
/// ```
/// use core_types::{ScalarNode, ScalarType};
/// use scalar_classifier::classify_core;
///
/// assert_eq!(classify_core(&ScalarNode::plain("~")), ScalarType::Null);
/// assert_eq!(classify_core(&ScalarNode::plain("0x1F")), ScalarType::Int);
/// assert_eq!(classify_core(&ScalarNode::double_quoted("0x1F")), ScalarType::String);
/// ```
pub fn classify_core(node: &ScalarNode) -> ScalarType {
    let tag = core_type_of(node);
    tracing::trace!(schema = "core", value = %node.value, tag = %tag, "classified scalar");
    tag
}

fn core_type_of(node: &ScalarNode) -> ScalarType {
    // Quoted or block scalars are never implicitly typed
    if node.double_quoted || node.single_quoted || !node.plain_scalar {
        return ScalarType::String;
    }

    let value = node.as_str();

    if literals::is_core_null(value) {
        ScalarType::Null
    } else if literals::is_core_bool(value) {
        ScalarType::Bool
    } else if literals::is_core_int(value) {
        ScalarType::Int
    } else if literals::is_core_float(value) {
        ScalarType::Float
    } else {
        ScalarType::String
    }
}
