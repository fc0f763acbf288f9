//! Literal sets and grammars for implicit typing.
//!
//! Matching is by exact, case-sensitive equality; `tRUE` is not a boolean.

use regex::Regex;
use std::sync::LazyLock;

/// Core schema null literals. The empty scalar is null too.
pub(crate) const CORE_NULL: &[&str] = &["null", "Null", "NULL", "~", ""];

pub(crate) const TRUE_LITERALS: &[&str] = &["true", "True", "TRUE"];

pub(crate) const FALSE_LITERALS: &[&str] = &["false", "False", "FALSE"];

pub(crate) const NAN_LITERALS: &[&str] = &[".nan", ".NaN", ".NAN"];

pub(crate) const JSON_NULL: &str = "null";

pub(crate) const JSON_TRUE: &str = "true";

pub(crate) const JSON_FALSE: &str = "false";

/// Prefix selecting base 8 in Core integers
pub(crate) const OCTAL_PREFIX: &str = "0o";

/// Prefix selecting base 16 in Core integers
pub(crate) const HEX_PREFIX: &str = "0x";

// =============================================================================
// CORE SCHEMA
// =============================================================================

static CORE_INT_BASE10: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").unwrap());

static CORE_INT_BASE8: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^0o[0-7]+$").unwrap());

static CORE_INT_BASE16: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]+$").unwrap());

static CORE_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(\.[0-9]+|[0-9]+(\.[0-9]*)?)([eE][-+]?[0-9]+)?$").unwrap()
});

/// Signed infinity; group 1 holds the sign, if any.
static INFINITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([-+])?(?:\.inf|\.Inf|\.INF)$").unwrap());

// =============================================================================
// JSON SCHEMA
// =============================================================================

static JSON_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?(0|[1-9][0-9]*)$").unwrap());

static JSON_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(0|[1-9][0-9]*)(\.[0-9]*)?([eE][-+]?[0-9]+)?$").unwrap()
});

pub(crate) fn is_core_null(value: &str) -> bool {
    CORE_NULL.contains(&value)
}

pub(crate) fn is_core_bool(value: &str) -> bool {
    TRUE_LITERALS.contains(&value) || FALSE_LITERALS.contains(&value)
}

pub(crate) fn is_core_int(value: &str) -> bool {
    CORE_INT_BASE10.is_match(value)
        || CORE_INT_BASE8.is_match(value)
        || CORE_INT_BASE16.is_match(value)
}

pub(crate) fn is_core_float(value: &str) -> bool {
    CORE_FLOAT.is_match(value) || INFINITY.is_match(value) || is_nan_literal(value)
}

pub(crate) fn is_nan_literal(value: &str) -> bool {
    NAN_LITERALS.contains(&value)
}

/// Sign of a signed-infinity literal: `Some(true)` for `-`, `Some(false)`
/// for `+` or no sign, `None` if the text is not an infinity.
pub(crate) fn infinity_is_negative(value: &str) -> Option<bool> {
    INFINITY
        .captures(value)
        .map(|caps| caps.get(1).map(|m| m.as_str()) == Some("-"))
}

pub(crate) fn is_json_int(value: &str) -> bool {
    JSON_INT.is_match(value)
}

pub(crate) fn is_json_float(value: &str) -> bool {
    JSON_FLOAT.is_match(value)
}
