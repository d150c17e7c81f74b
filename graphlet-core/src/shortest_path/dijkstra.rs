//! Dijkstra's algorithm for graphs with non-negative weights.

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::{debug, instrument};

use crate::edge::Edge;

use super::{Distances, ShortestPathError, Tentative, record_relaxations, validate_graph};

/// Computes shortest distances from `source` with Dijkstra's algorithm.
///
/// Every edge is read as directed from [`Edge::source`] to [`Edge::target`].
/// Unreachable vertices hold [`super::UNREACHABLE`].
///
/// Stale heap entries are skipped by comparing the popped distance with the
/// recorded one, so no separate visited set is kept. Path lengths are summed
/// in `i128`; only a final distance that does not fit in `i64` is an error.
///
/// Time: O((V + E) log V)
///
/// # Errors
///
/// Returns an error when:
/// - `source >= vertex_count`
/// - an edge references a vertex `>= vertex_count`
/// - an edge weight is negative
/// - a shortest distance does not fit in `i64`
///
/// # Examples
/// ```
/// use graphlet_core::{Edge, dijkstra};
///
/// let edges = [
///     Edge::new(0, 1, 4),
///     Edge::new(0, 2, 1),
///     Edge::new(2, 1, 2),
///     Edge::new(1, 3, 1),
///     Edge::new(2, 3, 5),
/// ];
/// let distances = dijkstra(&edges, 0, 4)?;
/// assert_eq!(distances.as_slice(), &[0, 3, 1, 4]);
/// # Ok::<(), graphlet_core::ShortestPathError>(())
/// ```
#[instrument(
    name = "shortest_path.dijkstra",
    err,
    skip(edges),
    fields(edges = edges.len(), source = source, vertex_count = vertex_count),
)]
pub fn dijkstra(
    edges: &[Edge],
    source: usize,
    vertex_count: usize,
) -> Result<Distances, ShortestPathError> {
    validate_graph(edges, source, vertex_count)?;
    if let Some(edge) = edges.iter().find(|edge| edge.weight() < 0) {
        return Err(ShortestPathError::NegativeWeight {
            from: edge.source(),
            to: edge.target(),
            weight: edge.weight(),
        });
    }

    let adjacency = build_adjacency(edges, vertex_count);
    let mut tentative = Tentative::seeded(vertex_count, source);
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0_i128, source)));

    let mut relaxations = 0_u64;
    let mut stale = 0_u64;
    while let Some(Reverse((distance, vertex))) = heap.pop() {
        if tentative.get(vertex) != Some(distance) {
            stale += 1;
            continue;
        }

        for edge in &adjacency[vertex] {
            if let Some(candidate) = tentative.relax(edge) {
                heap.push(Reverse((candidate, edge.target())));
                relaxations += 1;
            }
        }
    }
    let distances = tentative.into_distances()?;

    record_relaxations("dijkstra", relaxations);
    debug!(
        relaxations,
        stale_entries = stale,
        reachable = distances.iter().count(),
        "dijkstra completed"
    );
    Ok(distances)
}

/// Groups edges by tail vertex, preserving input order within each list.
fn build_adjacency(edges: &[Edge], vertex_count: usize) -> Vec<Vec<Edge>> {
    let mut adjacency = vec![Vec::new(); vertex_count];
    for edge in edges {
        adjacency[edge.source()].push(*edge);
    }
    adjacency
}
