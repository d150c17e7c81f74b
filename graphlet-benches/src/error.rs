//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` and the Criterion entry point
//! turns the final error into a panic message.

use graphlet_core::{FenwickError, MstError, ShortestPathError};
use thiserror::Error;

/// Errors that may occur during benchmark setup.
#[derive(Debug, Error)]
pub enum BenchSetupError {
    /// Synthetic graph parameters were rejected.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A warm-up shortest-path run failed.
    #[error("shortest-path warm-up failed: {0}")]
    ShortestPath(#[from] ShortestPathError),
    /// A warm-up spanning-forest run failed.
    #[error("spanning-forest warm-up failed: {0}")]
    Mst(#[from] MstError),
    /// Populating a Fenwick tree failed.
    #[error("fenwick setup failed: {0}")]
    Fenwick(#[from] FenwickError),
}

/// Invalid synthetic graph configuration.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SyntheticError {
    /// The graph must contain at least one vertex.
    #[error("vertex_count must be greater than zero")]
    NoVertices,
    /// The weight range is empty.
    #[error("weight range is empty: min {min} exceeds max {max}")]
    EmptyWeightRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },
}
