//! Coercion of classified literals into native values.
//!
//! Each function parses the whole text; trailing characters are an error,
//! not ignored.

use crate::literals;
use core_types::{ScalarError, ScalarResult};

/// Convert a boolean literal into a `bool`.
///
/// Accepts exactly `true`, `True`, `TRUE`, `false`, `False` and `FALSE`.
/// No case folding is applied.
///
/// # Examples
///
/// ```
/// use scalar_classifier::coerce_bool;
///
/// assert_eq!(coerce_bool("TRUE").unwrap(), true);
/// assert_eq!(coerce_bool("False").unwrap(), false);
/// assert!(coerce_bool("yes").is_err());
/// ```
pub fn coerce_bool(text: &str) -> ScalarResult<bool> {
    if literals::TRUE_LITERALS.contains(&text) {
        Ok(true)
    } else if literals::FALSE_LITERALS.contains(&text) {
        Ok(false)
    } else {
        tracing::debug!(input = %text, "invalid boolean");
        Err(ScalarError::InvalidBoolean {
            input: text.to_string(),
        })
    }
}

/// Convert an integer literal into an `i64`.
///
/// A leading `0o` selects base 8 for the rest of the text. Anything else
/// goes through [`parse_integer`], which takes an optional sign and detects
/// a `0x` prefix on its own.
///
/// # Examples
///
/// ```
/// use scalar_classifier::coerce_int;
///
/// assert_eq!(coerce_int("0o17").unwrap(), 15);
/// assert_eq!(coerce_int("42").unwrap(), 42);
/// assert_eq!(coerce_int("0x1F").unwrap(), 31);
/// assert!(coerce_int("abc").is_err());
/// ```
pub fn coerce_int(text: &str) -> ScalarResult<i64> {
    let parsed = match text.strip_prefix(literals::OCTAL_PREFIX) {
        Some(digits) => parse_unsigned_radix(digits, 8).and_then(|n| i64::try_from(n).ok()),
        None => parse_integer(text),
    };

    parsed.ok_or_else(|| {
        tracing::debug!(input = %text, "invalid integer");
        ScalarError::InvalidInteger {
            input: text.to_string(),
        }
    })
}

/// Parse a signed integer numeral, detecting the radix from its prefix.
///
/// `[-+]?0x<hex digits>` is base 16; `[-+]?<digits>` is base 10. Returns
/// `None` on empty digits, stray characters or overflow.
pub fn parse_integer(text: &str) -> Option<i64> {
    let (negative, unsigned) = if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    };

    let (digits, radix) = match unsigned
        .strip_prefix(literals::HEX_PREFIX)
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (unsigned, 10),
    };

    let magnitude = parse_unsigned_radix(digits, radix)?;
    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// Parse bare digits in the given radix. Signs are rejected here since
/// `from_str_radix` would otherwise accept them.
fn parse_unsigned_radix(digits: &str, radix: u32) -> Option<u64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

/// Convert a float literal into an `f64`.
///
/// `.nan`, `.NaN` and `.NAN` give NaN. `.inf`, `.Inf` and `.INF`, optionally
/// signed, give an infinity of that sign. Any other text must parse as a
/// standard float literal and must not come out as NaN.
///
/// # Examples
///
/// ```
/// use scalar_classifier::coerce_float;
///
/// assert!(coerce_float(".nan").unwrap().is_nan());
/// assert_eq!(coerce_float("-.inf").unwrap(), f64::NEG_INFINITY);
/// assert_eq!(coerce_float("3.14e2").unwrap(), 314.0);
/// assert!(coerce_float("pi").is_err());
/// ```
pub fn coerce_float(text: &str) -> ScalarResult<f64> {
    if literals::is_nan_literal(text) {
        return Ok(f64::NAN);
    }

    if let Some(negative) = literals::infinity_is_negative(text) {
        return Ok(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    match text.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => {
            tracing::debug!(input = %text, "invalid float");
            Err(ScalarError::InvalidFloat {
                input: text.to_string(),
            })
        }
    }
}
