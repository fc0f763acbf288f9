//! The scalar node consumed by the classifier.

/// A scalar node as produced by the YAML AST layer.
///
/// Only the literal text and the presentation flags matter for implicit
/// typing. At most one of `double_quoted` / `single_quoted` is set, and a
/// quoted node is never a plain scalar.
///
/// # Examples
///
/// ```
/// use core_types::ScalarNode;
///
/// let plain = ScalarNode::plain("true");
/// assert!(plain.is_plain());
///
/// let quoted = ScalarNode::double_quoted("true");
/// assert!(quoted.is_quoted());
/// assert!(!quoted.is_plain());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ScalarNode {
    /// Literal text of the scalar, with quotes and escapes already removed
    pub value: String,
    /// Written in double quotes
    pub double_quoted: bool,
    /// Written in single quotes
    pub single_quoted: bool,
    /// Written unquoted, in flow or block context
    pub plain_scalar: bool,
}

impl ScalarNode {
    /// Create a node from raw flags.
    ///
    /// Use this when the caller already holds the flags, e.g. for block
    /// scalars, which are neither quoted nor plain.
    pub fn new(
        value: impl Into<String>,
        double_quoted: bool,
        single_quoted: bool,
        plain_scalar: bool,
    ) -> Self {
        debug_assert!(
            !(double_quoted && single_quoted),
            "scalar cannot be both double and single quoted"
        );
        debug_assert!(
            !(plain_scalar && (double_quoted || single_quoted)),
            "quoted scalar cannot be plain"
        );
        Self {
            value: value.into(),
            double_quoted,
            single_quoted,
            plain_scalar,
        }
    }

    /// Create an unquoted node
    pub fn plain(value: impl Into<String>) -> Self {
        Self::new(value, false, false, true)
    }

    /// Create a double-quoted node
    pub fn double_quoted(value: impl Into<String>) -> Self {
        Self::new(value, true, false, false)
    }

    /// Create a single-quoted node
    pub fn single_quoted(value: impl Into<String>) -> Self {
        Self::new(value, false, true, false)
    }

    /// Check whether the node was written in either quote style
    pub fn is_quoted(&self) -> bool {
        self.double_quoted || self.single_quoted
    }

    /// Check whether the node is an unquoted plain scalar
    pub fn is_plain(&self) -> bool {
        self.plain_scalar && !self.is_quoted()
    }

    /// Literal text of the node
    pub fn as_str(&self) -> &str {
        &self.value
    }
}
