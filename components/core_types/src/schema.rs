//! Schema selection.

use crate::ScalarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The YAML 1.2 schema whose literal grammar governs implicit typing.
///
/// Hosts usually read this from their own configuration, so it parses from
/// and serializes to the lowercase names `core` and `json`.
///
/// # Examples
///
/// ```
/// use core_types::SchemaKind;
///
/// let schema: SchemaKind = "json".parse().unwrap();
/// assert_eq!(schema, SchemaKind::Json);
/// assert_eq!(schema.to_string(), "json");
/// assert!("failsafe".parse::<SchemaKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    /// YAML 1.2 Core schema
    #[default]
    Core,
    /// YAML 1.2 JSON schema
    Json,
}

impl SchemaKind {
    /// Lowercase name of the schema
    pub fn name(&self) -> &'static str {
        match self {
            SchemaKind::Core => "core",
            SchemaKind::Json => "json",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemaKind {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("core") {
            Ok(SchemaKind::Core)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(SchemaKind::Json)
        } else {
            Err(ScalarError::UnsupportedSchema {
                name: s.to_string(),
            })
        }
    }
}
