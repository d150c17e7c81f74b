//! Environment-driven knobs consumed by CI test runs.

pub mod property_test_profile;
