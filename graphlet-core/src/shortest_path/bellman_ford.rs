//! Bellman-Ford relaxation with negative-cycle detection.

use tracing::{debug, instrument, warn};

use crate::edge::Edge;

use super::{
    Distances, ShortestPathError, Tentative, record_negative_cycle, record_relaxations,
    validate_graph,
};

/// Computes shortest distances from `source` with the Bellman-Ford algorithm.
///
/// Runs up to `vertex_count - 1` passes over `edges` in input order, relaxing
/// every edge whose tail is already reachable. A pass that changes nothing
/// ends the loop early. A final pass then looks for an edge that can still be
/// relaxed; if one exists, a negative cycle is reachable from `source` and no
/// distances are returned. Path lengths are summed in `i128`, so a cycle
/// with huge weights is still reported as a cycle rather than an overflow.
///
/// Time: O(V * E)
///
/// # Errors
///
/// Returns an error when:
/// - `source >= vertex_count`
/// - an edge references a vertex `>= vertex_count`
/// - a negative cycle is reachable from `source`
/// - a shortest distance does not fit in `i64`
///
/// # Examples
/// ```
/// use graphlet_core::{Edge, ShortestPathError, bellman_ford};
///
/// let edges = [
///     Edge::new(0, 1, 1),
///     Edge::new(1, 2, -1),
///     Edge::new(2, 3, -1),
///     Edge::new(3, 1, -1),
/// ];
/// let result = bellman_ford(&edges, 0, 4);
/// assert!(matches!(result, Err(ShortestPathError::NegativeCycle { .. })));
/// ```
#[instrument(
    name = "shortest_path.bellman_ford",
    err,
    skip(edges),
    fields(edges = edges.len(), source = source, vertex_count = vertex_count),
)]
pub fn bellman_ford(
    edges: &[Edge],
    source: usize,
    vertex_count: usize,
) -> Result<Distances, ShortestPathError> {
    validate_graph(edges, source, vertex_count)?;

    let mut tentative = Tentative::seeded(vertex_count, source);
    let mut relaxations = 0_u64;
    let mut passes = 0_usize;
    for _ in 1..vertex_count {
        passes += 1;
        let updated = relax_pass(edges, &mut tentative);
        relaxations += updated;
        if updated == 0 {
            break;
        }
    }
    record_relaxations("bellman_ford", relaxations);

    if let Some(edge) = edges.iter().find(|edge| tentative.improves(edge)) {
        record_negative_cycle();
        warn!(
            from = edge.source(),
            to = edge.target(),
            "negative cycle reachable from source"
        );
        return Err(ShortestPathError::NegativeCycle {
            from: edge.source(),
            to: edge.target(),
        });
    }

    let distances = tentative.into_distances()?;
    debug!(
        passes,
        relaxations,
        reachable = distances.iter().count(),
        "bellman-ford completed"
    );
    Ok(distances)
}

/// Relaxes every edge once and returns how many distances improved.
fn relax_pass(edges: &[Edge], tentative: &mut Tentative) -> u64 {
    let mut updated = 0;
    for edge in edges {
        if tentative.relax(edge).is_some() {
            updated += 1;
        }
    }
    updated
}
