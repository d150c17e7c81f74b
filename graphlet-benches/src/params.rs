//! Benchmark parameter types.

use std::fmt;

/// Size parameters for a graph benchmark run, rendered as the Criterion
/// parameter label.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Average out-degree of the generated graph.
    pub degree: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.degree)
    }
}
