//! Minimum spanning tree (MST) construction.
//!
//! Kruskal's algorithm over undirected integer-weighted edges. Edges are
//! drawn from a binary heap in ascending `(weight, source, target,
//! sequence)` order and accepted when a [`DisjointSet`] reports that their
//! endpoints are still in different components.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::{disjoint_set::DisjointSet, edge::Edge, error::define_error_codes};

/// Errors returned while computing a minimum spanning tree/forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The caller requested an MST for an empty graph.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// An edge referenced a vertex that is not present in the graph.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// The invalid vertex referenced by an edge.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Machine-readable error codes for [`MstError`].
    enum MstErrorCode for MstError {
        /// The caller requested an MST for an empty graph.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// An edge referenced a vertex that is not present in the graph.
        InvalidVertex => InvalidVertex { .. } => "MST_INVALID_VERTEX",
    }
}

/// A single MST edge in canonical undirected form (`source < target`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MstEdge {
    source: usize,
    target: usize,
    weight: i64,
    sequence: usize,
}

impl MstEdge {
    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Returns the position of the edge in the caller's input slice.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sequence(&self) -> usize { self.sequence }

    /// Returns the edge as a plain [`Edge`] triple.
    #[must_use]
    pub const fn to_edge(&self) -> Edge {
        Edge::new(self.source, self.target, self.weight)
    }
}

impl Ord for MstEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for MstEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree
/// and [`MinimumSpanningForest::is_tree`] returns `true`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinimumSpanningForest {
    edges: Vec<MstEdge>,
    component_count: usize,
}

impl MinimumSpanningForest {
    /// Returns the accepted edges in ascending order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[MstEdge] { &self.edges }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    ///
    /// A `false` result means no spanning tree exists for the input and the
    /// forest holds fewer than `vertex_count - 1` edges.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the number of accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when no edge was accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Returns the sum of accepted edge weights.
    ///
    /// Accumulated as `i128` so that no combination of `i64` weights can
    /// overflow.
    #[must_use]
    pub fn total_weight(&self) -> i128 {
        self.edges
            .iter()
            .map(|edge| i128::from(edge.weight))
            .sum()
    }
}

/// Computes a minimum spanning forest using Kruskal's algorithm.
///
/// The input edges are interpreted as undirected and are canonicalised to
/// `(min(u, v), max(u, v))`. Self-edges are ignored. Equal weights are
/// resolved by `(source, target)` and then by input position, so the output
/// is fully deterministic. Negative weights are allowed.
///
/// Construction stops as soon as `vertex_count - 1` edges are accepted.
///
/// # Errors
///
/// Returns an error when:
/// - `vertex_count == 0`
/// - an edge references a vertex `>= vertex_count`
///
/// # Examples
/// ```
/// use graphlet_core::{Edge, kruskal};
///
/// let edges = [
///     Edge::new(0, 1, 1),
///     Edge::new(0, 2, 4),
///     Edge::new(1, 2, 2),
///     Edge::new(1, 3, 5),
///     Edge::new(2, 3, 3),
/// ];
/// let forest = kruskal(&edges, 4)?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), 6);
/// # Ok::<(), graphlet_core::MstError>(())
/// ```
#[instrument(
    name = "mst.kruskal",
    err,
    skip(edges),
    fields(edges = edges.len(), vertex_count = vertex_count),
)]
pub fn kruskal(edges: &[Edge], vertex_count: usize) -> Result<MinimumSpanningForest, MstError> {
    if vertex_count == 0 {
        return Err(MstError::EmptyGraph);
    }

    let mut heap = prepare_edge_heap(edges, vertex_count)?;
    let target_len = vertex_count - 1;
    let mut disjoint_set = DisjointSet::new(vertex_count);
    let mut forest_edges = Vec::with_capacity(target_len.min(heap.len()));

    let mut discarded = 0_usize;
    while forest_edges.len() < target_len {
        let Some(Reverse(edge)) = heap.pop() else {
            break;
        };
        if disjoint_set.find(edge.source) == disjoint_set.find(edge.target) {
            discarded += 1;
            continue;
        }
        disjoint_set.union(edge.source, edge.target);
        forest_edges.push(edge);
    }

    record_accepted(forest_edges.len());
    debug!(
        accepted = forest_edges.len(),
        discarded,
        untouched = heap.len(),
        components = disjoint_set.component_count(),
        "kruskal completed"
    );
    Ok(MinimumSpanningForest {
        edges: forest_edges,
        component_count: disjoint_set.component_count(),
    })
}

/// Validates, canonicalises and heapifies the input edges.
fn prepare_edge_heap(
    edges: &[Edge],
    vertex_count: usize,
) -> Result<BinaryHeap<Reverse<MstEdge>>, MstError> {
    let mut candidates = Vec::with_capacity(edges.len());
    for (sequence, edge) in edges.iter().enumerate() {
        if let Some(vertex) = edge.out_of_range_endpoint(vertex_count) {
            return Err(MstError::InvalidVertex {
                vertex,
                vertex_count,
            });
        }
        if edge.is_self_loop() {
            continue;
        }
        let canonical = edge.canonicalise();
        candidates.push(Reverse(MstEdge {
            source: canonical.source(),
            target: canonical.target(),
            weight: canonical.weight(),
            sequence,
        }));
    }
    Ok(BinaryHeap::from(candidates))
}

#[cfg(feature = "metrics")]
fn record_accepted(count: usize) {
    metrics::counter!("mst_edges_accepted").increment(u64::try_from(count).unwrap_or(u64::MAX));
}

#[cfg(not(feature = "metrics"))]
fn record_accepted(_count: usize) {}


#[cfg(test)]
mod property;
