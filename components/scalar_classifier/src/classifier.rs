//! Schema dispatch and resolution of scalars into native values.

use crate::coerce::{coerce_bool, coerce_float, coerce_int};
use crate::core_schema::classify_core;
use crate::json_schema::classify_json;
use core_types::{ScalarNode, ScalarResult, ScalarType, ScalarValue, SchemaKind};

/// Determine the implicit type of a scalar under the given schema.
///
/// An absent node classifies as [`ScalarType::Null`], so callers holding an
/// optional node do not need to check it first. Core schema classification
/// never fails; JSON schema classification fails for literals it has no
/// grammar for.
///
/// # Examples
///
/// ```
/// use core_types::{ScalarNode, ScalarType, SchemaKind};
/// use scalar_classifier::classify;
///
/// let node = ScalarNode::plain("01");
/// assert_eq!(classify(Some(&node), SchemaKind::Core).unwrap(), ScalarType::Int);
/// assert!(classify(Some(&node), SchemaKind::Json).is_err());
/// assert_eq!(classify(None, SchemaKind::Json).unwrap(), ScalarType::Null);
/// ```
pub fn classify(node: Option<&ScalarNode>, schema: SchemaKind) -> ScalarResult<ScalarType> {
    let Some(node) = node else {
        tracing::trace!(schema = %schema, "absent scalar classified as null");
        return Ok(ScalarType::Null);
    };

    match schema {
        SchemaKind::Core => Ok(classify_core(node)),
        SchemaKind::Json => classify_json(node),
    }
}

/// Classify a scalar and coerce its literal into the matching native value.
///
/// Strings keep their literal text unchanged. Coercion failures are returned
/// as is; for instance a Core integer too large for `i64` fails with
/// `InvalidInteger`.
///
/// # Examples
///
/// ```
/// use core_types::{ScalarNode, ScalarValue, SchemaKind};
/// use scalar_classifier::resolve;
///
/// let value = resolve(Some(&ScalarNode::plain("0o17")), SchemaKind::Core).unwrap();
/// assert_eq!(value, ScalarValue::Int(15));
///
/// let value = resolve(Some(&ScalarNode::double_quoted("0o17")), SchemaKind::Core).unwrap();
/// assert_eq!(value, ScalarValue::String("0o17".to_string()));
/// ```
pub fn resolve(node: Option<&ScalarNode>, schema: SchemaKind) -> ScalarResult<ScalarValue> {
    let tag = classify(node, schema)?;
    let text = node.map(ScalarNode::as_str).unwrap_or_default();

    let value = match tag {
        ScalarType::Null => ScalarValue::Null,
        ScalarType::Bool => ScalarValue::Bool(coerce_bool(text)?),
        ScalarType::Int => ScalarValue::Int(coerce_int(text)?),
        ScalarType::Float => ScalarValue::Float(coerce_float(text)?),
        ScalarType::String => ScalarValue::String(text.to_string()),
    };

    Ok(value)
}

/// A classifier bound to one schema.
///
/// Holds no state beyond the schema choice, so it is `Copy` and can be shared
/// freely across threads.
///
/// # Examples
///
/// ```
/// use core_types::{ScalarNode, ScalarType, SchemaKind};
/// use scalar_classifier::ScalarClassifier;
///
/// let classifier = ScalarClassifier::new().with_schema(SchemaKind::Json);
/// assert_eq!(classifier.schema(), SchemaKind::Json);
///
/// let node = ScalarNode::plain("true");
/// assert_eq!(classifier.classify(Some(&node)).unwrap(), ScalarType::Bool);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScalarClassifier {
    schema: SchemaKind,
}

impl ScalarClassifier {
    /// Create a classifier using the Core schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema
    pub fn with_schema(mut self, schema: SchemaKind) -> Self {
        self.schema = schema;
        self
    }

    /// The schema in use
    pub fn schema(&self) -> SchemaKind {
        self.schema
    }

    /// Determine the implicit type of a scalar
    pub fn classify(&self, node: Option<&ScalarNode>) -> ScalarResult<ScalarType> {
        classify(node, self.schema)
    }

    /// Classify a scalar and coerce it into its native value
    pub fn resolve(&self, node: Option<&ScalarNode>) -> ScalarResult<ScalarValue> {
        resolve(node, self.schema)
    }
}
