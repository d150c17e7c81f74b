//! Weighted edge shared by the shortest-path and spanning-forest entry points.

/// A weighted edge between two vertex indices.
///
/// Shortest-path algorithms read the edge as directed from
/// [`Edge::source`] to [`Edge::target`]. [`crate::kruskal`] treats it as
/// undirected.
///
/// # Examples
/// ```
/// use graphlet_core::Edge;
///
/// let edge = Edge::new(2, 0, -3);
/// assert_eq!(edge.source(), 2);
/// assert_eq!(edge.target(), 0);
/// assert_eq!(edge.weight(), -3);
/// assert_eq!(edge.canonicalise(), Edge::new(0, 2, -3));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: i64,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: i64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the tail vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the head vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the edge with `source <= target`.
    ///
    /// Direction is irrelevant for undirected spanning-forest construction.
    #[must_use]
    pub const fn canonicalise(self) -> Self {
        if self.source <= self.target {
            self
        } else {
            Self {
                source: self.target,
                target: self.source,
                weight: self.weight,
            }
        }
    }

    /// Returns the first endpoint that is not below `vertex_count`, if any.
    pub(crate) const fn out_of_range_endpoint(&self, vertex_count: usize) -> Option<usize> {
        if self.source >= vertex_count {
            Some(self.source)
        } else if self.target >= vertex_count {
            Some(self.target)
        } else {
            None
        }
    }
}

impl From<(usize, usize, i64)> for Edge {
    fn from((source, target, weight): (usize, usize, i64)) -> Self {
        Self::new(source, target, weight)
    }
}
