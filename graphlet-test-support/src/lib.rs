//! Shared test utilities used across graphlet crates.

pub mod ci;
pub mod tracing;
