//! Integration test suite for YAML implicit scalar typing
//!
//! This crate provides integration tests that exercise the data model and the
//! classifier together, the way a loader's scalar constructor drives them.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use scalar_classifier;
}

use core_types::{ScalarNode, ScalarResult, ScalarValue, SchemaKind};

/// Resolve a sequence of scalar nodes the way a loader builds a flow sequence.
///
/// Stops at the first scalar that fails to resolve.
pub fn resolve_sequence(nodes: &[ScalarNode], schema: SchemaKind) -> ScalarResult<Vec<ScalarValue>> {
    nodes
        .iter()
        .map(|node| scalar_classifier::resolve(Some(node), schema))
        .collect()
}
