//! Seeded synthetic graphs for benchmarking.
//!
//! Every graph contains a Hamiltonian backbone `0 -> 1 -> ... -> n-1` so all
//! vertices are reachable from vertex 0, plus `degree - 1` random extra edges
//! per vertex.

use graphlet_core::Edge;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::SyntheticError;

/// Configuration for [`generate_graph`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Out-edges per vertex including the backbone edge.
    pub degree: usize,
    /// Smallest edge weight, inclusive.
    pub min_weight: i64,
    /// Largest edge weight, inclusive.
    pub max_weight: i64,
    /// RNG seed.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Non-negative weights in `[1, 1000]`, usable by every algorithm.
    #[must_use]
    pub const fn non_negative(vertex_count: usize, degree: usize, seed: u64) -> Self {
        Self {
            vertex_count,
            degree,
            min_weight: 1,
            max_weight: 1_000,
            seed,
        }
    }
}

/// Generates a directed edge list from `config`.
///
/// # Errors
/// Returns [`SyntheticError::NoVertices`] for an empty graph and
/// [`SyntheticError::EmptyWeightRange`] when `min_weight > max_weight`.
///
/// # Examples
/// ```
/// use graphlet_benches::synthetic::{SyntheticGraphConfig, generate_graph};
///
/// let edges = generate_graph(&SyntheticGraphConfig::non_negative(10, 3, 7))?;
/// assert_eq!(edges.len(), 9 + 10 * 2);
/// # Ok::<(), graphlet_benches::error::SyntheticError>(())
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Vec<Edge>, SyntheticError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::NoVertices);
    }
    if config.min_weight > config.max_weight {
        return Err(SyntheticError::EmptyWeightRange {
            min: config.min_weight,
            max: config.max_weight,
        });
    }

    let n = config.vertex_count;
    let extra = config.degree.saturating_sub(1);
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut edges = Vec::with_capacity((n - 1).saturating_add(n.saturating_mul(extra)));
    let weights = config.min_weight..=config.max_weight;

    for vertex in 1..n {
        edges.push(Edge::new(vertex - 1, vertex, rng.gen_range(weights.clone())));
    }
    for source in 0..n {
        for _ in 0..extra {
            let target = rng.gen_range(0..n);
            edges.push(Edge::new(source, target, rng.gen_range(weights.clone())));
        }
    }
    Ok(edges)
}
