//! Unit tests for scalar_classifier

mod test_coerce;
