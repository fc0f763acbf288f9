//! Core vs JSON schema comparison tests
//!
//! Tables of literals with their expected tag under each schema. `None`
//! marks a literal the JSON schema cannot type.

use core_types::{ScalarNode, ScalarType, SchemaKind};
use scalar_classifier::classify;

const TABLE: &[(&str, ScalarType, Option<ScalarType>)] = &[
    ("", ScalarType::Null, None),
    ("~", ScalarType::Null, None),
    ("null", ScalarType::Null, Some(ScalarType::Null)),
    ("Null", ScalarType::Null, None),
    ("true", ScalarType::Bool, Some(ScalarType::Bool)),
    ("TRUE", ScalarType::Bool, None),
    ("0", ScalarType::Int, Some(ScalarType::Int)),
    ("-0", ScalarType::Int, Some(ScalarType::Int)),
    ("+1", ScalarType::Int, None),
    ("01", ScalarType::Int, None),
    ("0o17", ScalarType::Int, None),
    ("0x1F", ScalarType::Int, None),
    ("1.5", ScalarType::Float, Some(ScalarType::Float)),
    ("1.", ScalarType::Float, Some(ScalarType::Float)),
    (".5", ScalarType::Float, None),
    ("1e3", ScalarType::Float, Some(ScalarType::Float)),
    (".inf", ScalarType::Float, None),
    (".nan", ScalarType::Float, None),
    ("yes", ScalarType::String, None),
    ("hello world", ScalarType::String, None),
];

#[test]
fn test_core_column() {
    for (text, core, _) in TABLE {
        let node = ScalarNode::plain(*text);
        assert_eq!(
            classify(Some(&node), SchemaKind::Core).unwrap(),
            *core,
            "{:?}",
            text
        );
    }
}

#[test]
fn test_json_column() {
    for (text, _, json) in TABLE {
        let node = ScalarNode::plain(*text);
        assert_eq!(
            classify(Some(&node), SchemaKind::Json).ok(),
            *json,
            "{:?}",
            text
        );
    }
}

#[test]
fn test_quoted_column() {
    for (text, _, _) in TABLE {
        for node in [ScalarNode::double_quoted(*text), ScalarNode::single_quoted(*text)] {
            for schema in [SchemaKind::Core, SchemaKind::Json] {
                assert_eq!(
                    classify(Some(&node), schema).unwrap(),
                    ScalarType::String,
                    "{:?} {}",
                    text,
                    schema
                );
            }
        }
    }
}
