//! Union-find (disjoint set union) over a fixed number of elements.
//!
//! Used by [`crate::kruskal`] to reject edges that would close a cycle, and
//! exported for callers that need incremental connectivity on their own.

/// Disjoint-set forest with path compression and union by rank.
///
/// Elements are the indices `0..len`. The structure is never resized.
///
/// # Examples
/// ```
/// use graphlet_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert!(set.union(0, 1));
/// assert!(set.union(2, 3));
/// assert!(!set.union(1, 0));
/// assert!(set.connected(0, 1));
/// assert!(!set.connected(1, 2));
/// assert_eq!(set.component_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates a forest where every element is its own representative.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the forest holds no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the current number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the component containing `element`.
    ///
    /// Every node visited on the way up is repointed directly at the
    /// representative, so repeated lookups are near constant time.
    ///
    /// # Panics
    /// Panics when `element >= self.len()`.
    pub fn find(&mut self, mut element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[element] != element {
            let parent = self.parent[element];
            self.parent[element] = root;
            element = parent;
        }

        root
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `false` without touching the forest when both are already in
    /// the same component. The lower-ranked representative is attached under
    /// the higher-ranked one; on a tie the smaller index survives and its
    /// rank grows by one.
    ///
    /// # Panics
    /// Panics when either element is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        let (parent, child) = choose_parent_child(left_root, right_root, left_rank, right_rank);

        self.parent[child] = parent;
        if left_rank == right_rank {
            self.rank[parent] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }

    /// Returns `true` when `left` and `right` share a representative.
    ///
    /// # Panics
    /// Panics when either element is `>= self.len()`.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: u8,
    right_rank: u8,
) -> (usize, usize) {
    if left_rank > right_rank {
        return (left_root, right_root);
    }
    if right_rank > left_rank {
        return (right_root, left_root);
    }

    if left_root <= right_root {
        (left_root, right_root)
    } else {
        (right_root, left_root)
    }
}
