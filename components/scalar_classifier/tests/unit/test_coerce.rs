//! Tests for literal coercion

use scalar_classifier::{coerce_bool, coerce_float, coerce_int, parse_integer, ErrorKind};

// ============================================================================
// Bool
// ============================================================================

#[test]
fn test_coerce_bool_true_forms() {
    for text in ["true", "True", "TRUE"] {
        assert!(coerce_bool(text).unwrap(), "{:?}", text);
    }
}

#[test]
fn test_coerce_bool_false_forms() {
    for text in ["false", "False", "FALSE"] {
        assert!(!coerce_bool(text).unwrap(), "{:?}", text);
    }
}

#[test]
fn test_coerce_bool_rejects_other_text() {
    for text in ["yes", "no", "tRUE", "fAlse", "1", "", " true"] {
        let err = coerce_bool(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBoolean, "{:?}", text);
        assert_eq!(err.input(), text);
    }
}

// ============================================================================
// Int
// ============================================================================

#[test]
fn test_coerce_int_decimal() {
    assert_eq!(coerce_int("42").unwrap(), 42);
    assert_eq!(coerce_int("-17").unwrap(), -17);
    assert_eq!(coerce_int("+3").unwrap(), 3);
    assert_eq!(coerce_int("007").unwrap(), 7);
    assert_eq!(coerce_int("-0").unwrap(), 0);
}

#[test]
fn test_coerce_int_octal() {
    assert_eq!(coerce_int("0o17").unwrap(), 15);
    assert_eq!(coerce_int("0o0").unwrap(), 0);
    assert_eq!(coerce_int("0o777").unwrap(), 511);
}

#[test]
fn test_coerce_int_hex_via_auto_detection() {
    assert_eq!(coerce_int("0x1F").unwrap(), 31);
    assert_eq!(coerce_int("0xff").unwrap(), 255);
    assert_eq!(coerce_int("0XFF").unwrap(), 255);
}

#[test]
fn test_coerce_int_rejects_invalid() {
    for text in ["abc", "", "0o", "0o8", "0o-7", "0x", "0xG", "12abc", "1.5", " 1", "1_000"] {
        let err = coerce_int(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInteger, "{:?}", text);
    }
}

#[test]
fn test_coerce_int_rejects_overflow() {
    assert_eq!(coerce_int("9223372036854775807").unwrap(), i64::MAX);
    assert!(coerce_int("9223372036854775808").is_err());
    assert!(coerce_int("0o1777777777777777777777").is_err());
}

#[test]
fn test_parse_integer_is_public() {
    assert_eq!(parse_integer("-0x1F"), Some(-31));
    assert_eq!(parse_integer("0o17"), None);
}

// ============================================================================
// Float
// ============================================================================

#[test]
fn test_coerce_float_nan() {
    for text in [".nan", ".NaN", ".NAN"] {
        let value = coerce_float(text).unwrap();
        assert!(value.is_nan(), "{:?}", text);
        assert!(value != value);
    }
}

#[test]
fn test_coerce_float_infinity() {
    assert_eq!(coerce_float(".inf").unwrap(), f64::INFINITY);
    assert_eq!(coerce_float("+.Inf").unwrap(), f64::INFINITY);
    assert_eq!(coerce_float("-.inf").unwrap(), f64::NEG_INFINITY);
    assert_eq!(coerce_float("-.INF").unwrap(), f64::NEG_INFINITY);
}

#[test]
fn test_coerce_float_decimal() {
    assert_eq!(coerce_float("3.14e2").unwrap(), 314.0);
    assert_eq!(coerce_float("1.5").unwrap(), 1.5);
    assert_eq!(coerce_float(".5").unwrap(), 0.5);
    assert_eq!(coerce_float("-2.").unwrap(), -2.0);
    assert_eq!(coerce_float("1e3").unwrap(), 1000.0);
    assert_eq!(coerce_float("42").unwrap(), 42.0);
}

#[test]
fn test_coerce_float_rejects_invalid() {
    for text in ["pi", "", ".", "1.2.3", "nan", "NaN", "+.nan", "1.5abc"] {
        let err = coerce_float(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFloat, "{:?}", text);
    }
}
