//! Single-source shortest paths over integer-weighted directed graphs.
//!
//! Two algorithms share the same input shape (`&[Edge]`, source, vertex
//! count) and result type ([`Distances`]):
//!
//! - [`dijkstra`]: label-setting relaxation driven by a binary heap. Requires
//!   every weight to be non-negative and rejects inputs that break this.
//! - [`bellman_ford`]: repeated relaxation passes over the edge list. Accepts
//!   negative weights and reports a reachable negative cycle as
//!   [`ShortestPathError::NegativeCycle`] instead of returning distances.

mod bellman_ford;
mod dijkstra;

use thiserror::Error;

use crate::{edge::Edge, error::define_error_codes};

pub use self::{bellman_ford::bellman_ford, dijkstra::dijkstra};

/// Sentinel stored in [`Distances`] for vertices the source cannot reach.
pub const UNREACHABLE: i64 = i64::MAX;

/// Errors returned by the shortest-path entry points.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ShortestPathError {
    /// The source vertex is not below the vertex count.
    #[error("source vertex {vertex} is out of range for vertex_count {vertex_count}")]
    InvalidSource {
        /// The requested source vertex.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge referenced a vertex that is not below the vertex count.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// The invalid vertex referenced by an edge.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// Dijkstra was given an edge with a negative weight.
    #[error("edge ({from}, {to}) has negative weight {weight}")]
    NegativeWeight {
        /// Tail of the offending edge.
        from: usize,
        /// Head of the offending edge.
        to: usize,
        /// The negative weight.
        weight: i64,
    },
    /// A negative-weight cycle is reachable from the source.
    #[error("negative cycle detected: edge ({from}, {to}) still relaxes after all passes")]
    NegativeCycle {
        /// Tail of the first edge found relaxable in the detection pass.
        from: usize,
        /// Head of that edge.
        to: usize,
    },
    /// A path length left the representable range.
    #[error("path length through edge ({from}, {to}) overflows i64")]
    DistanceOverflow {
        /// Tail of the edge whose relaxation overflowed.
        from: usize,
        /// Head of that edge.
        to: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ShortestPathError`] variants.
    enum ShortestPathErrorCode for ShortestPathError {
        /// The source vertex is not below the vertex count.
        InvalidSource => InvalidSource { .. } => "SHORTEST_PATH_INVALID_SOURCE",
        /// An edge referenced a vertex that is not below the vertex count.
        InvalidVertex => InvalidVertex { .. } => "SHORTEST_PATH_INVALID_VERTEX",
        /// Dijkstra was given an edge with a negative weight.
        NegativeWeight => NegativeWeight { .. } => "SHORTEST_PATH_NEGATIVE_WEIGHT",
        /// A negative-weight cycle is reachable from the source.
        NegativeCycle => NegativeCycle { .. } => "SHORTEST_PATH_NEGATIVE_CYCLE",
        /// A path length left the representable range.
        DistanceOverflow => DistanceOverflow { .. } => "SHORTEST_PATH_DISTANCE_OVERFLOW",
    }
}

/// Best-known distance from the source to every vertex.
///
/// Indexed by vertex. Unreachable vertices hold [`UNREACHABLE`] in the raw
/// slice and read as `None` through [`Distances::get`].
///
/// # Examples
/// ```
/// use graphlet_core::{Edge, UNREACHABLE, dijkstra};
///
/// let distances = dijkstra(&[Edge::new(0, 1, 7)], 0, 3)?;
/// assert_eq!(distances.get(1), Some(7));
/// assert_eq!(distances.get(2), None);
/// assert_eq!(distances.as_slice(), &[0, 7, UNREACHABLE]);
/// # Ok::<(), graphlet_core::ShortestPathError>(())
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Distances {
    values: Vec<i64>,
}

impl Distances {
    /// Returns the distance to `vertex`, or `None` when it is unreachable or
    /// out of range.
    #[must_use]
    pub fn get(&self, vertex: usize) -> Option<i64> {
        self.values
            .get(vertex)
            .copied()
            .filter(|&distance| distance != UNREACHABLE)
    }

    /// Returns `true` when the source reaches `vertex`.
    #[must_use]
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.get(vertex).is_some()
    }

    /// Returns the raw distances, using [`UNREACHABLE`] for unreachable
    /// vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_slice(&self) -> &[i64] { &self.values }

    /// Returns the number of vertices covered.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.values.len() }

    /// Returns `true` for a zero-vertex result.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Iterates over `(vertex, distance)` for every reachable vertex.
    pub fn iter(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &distance)| distance != UNREACHABLE)
            .map(|(vertex, &distance)| (vertex, distance))
    }

    /// Consumes the result and returns the raw distance vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }
}

/// Checks the source and every endpoint against `vertex_count`.
fn validate_graph(
    edges: &[Edge],
    source: usize,
    vertex_count: usize,
) -> Result<(), ShortestPathError> {
    if source >= vertex_count {
        return Err(ShortestPathError::InvalidSource {
            vertex: source,
            vertex_count,
        });
    }
    match edges
        .iter()
        .find_map(|edge| edge.out_of_range_endpoint(vertex_count))
    {
        Some(vertex) => Err(ShortestPathError::InvalidVertex {
            vertex,
            vertex_count,
        }),
        None => Ok(()),
    }
}

/// Working distances for one solver run.
///
/// Path lengths are tracked as `i128` so that intermediate sums never wrap;
/// only the final distances must fit in `i64`. Each reached vertex also
/// remembers the tail of the edge that last improved it, which names the
/// offending edge when a final distance is out of range.
#[derive(Debug)]
struct Tentative {
    values: Vec<Option<i128>>,
    via: Vec<usize>,
}

impl Tentative {
    fn seeded(vertex_count: usize, source: usize) -> Self {
        let mut values = vec![None; vertex_count];
        values[source] = Some(0);
        Self {
            values,
            via: (0..vertex_count).collect(),
        }
    }

    #[rustfmt::skip]
    fn get(&self, vertex: usize) -> Option<i128> { self.values[vertex] }

    /// Length of the path to `edge.target()` through `edge`, when the tail
    /// has been reached.
    fn candidate(&self, edge: &Edge) -> Option<i128> {
        self.get(edge.source())
            .map(|tail| tail.saturating_add(i128::from(edge.weight())))
    }

    /// Relaxes `edge` and returns the new head distance when it improved.
    fn relax(&mut self, edge: &Edge) -> Option<i128> {
        let candidate = self.candidate(edge)?;
        let head = edge.target();
        if self.values[head].is_some_and(|current| current <= candidate) {
            return None;
        }
        self.values[head] = Some(candidate);
        self.via[head] = edge.source();
        Some(candidate)
    }

    /// Returns `true` when `edge` would still shorten its head.
    fn improves(&self, edge: &Edge) -> bool {
        self.candidate(edge).is_some_and(|candidate| {
            self.get(edge.target())
                .is_none_or(|current| candidate < current)
        })
    }

    /// Narrows the run to `i64` distances.
    ///
    /// A reached vertex whose distance falls outside `i64`, or lands on
    /// [`UNREACHABLE`], fails with [`ShortestPathError::DistanceOverflow`]
    /// naming the edge that produced it.
    fn into_distances(self) -> Result<Distances, ShortestPathError> {
        let mut values = Vec::with_capacity(self.values.len());
        for (vertex, value) in self.values.into_iter().enumerate() {
            let distance = match value {
                None => UNREACHABLE,
                Some(length) => i64::try_from(length)
                    .ok()
                    .filter(|&distance| distance != UNREACHABLE)
                    .ok_or(ShortestPathError::DistanceOverflow {
                        from: self.via[vertex],
                        to: vertex,
                    })?,
            };
            values.push(distance);
        }
        Ok(Distances { values })
    }
}

#[cfg(feature = "metrics")]
fn record_relaxations(algorithm: &'static str, count: u64) {
    metrics::counter!("shortest_path_relaxations", "algorithm" => algorithm).increment(count);
}

#[cfg(not(feature = "metrics"))]
fn record_relaxations(_algorithm: &'static str, _count: u64) {}

#[cfg(feature = "metrics")]
fn record_negative_cycle() {
    metrics::counter!("shortest_path_negative_cycles").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_negative_cycle() {}


#[cfg(test)]
mod property;
