//! Benchmark support crate for graphlet.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for shortest paths, spanning forests and prefix sums.

pub mod error;
pub mod params;
pub mod synthetic;
