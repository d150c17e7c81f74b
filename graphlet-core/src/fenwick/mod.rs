//! Fenwick tree (binary indexed tree) over signed integers.
//!
//! Positions are 1-based: a tree of size `n` covers `1..=n`, and
//! `prefix_sum(0)` is the empty sum. Internal nodes hold `i128` partial sums,
//! so only the sums a caller actually queries must fit in `i64`.

use thiserror::Error;

use crate::error::define_error_codes;

/// Errors returned by [`FenwickTree`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FenwickError {
    /// The index falls outside the positions covered by the tree.
    #[error("index {index} is out of range for a tree of size {size}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of positions in the tree.
        size: usize,
    },
    /// The range bounds are reversed.
    #[error("range {left}..={right} is empty")]
    InvalidRange {
        /// The lower bound supplied by the caller.
        left: usize,
        /// The upper bound supplied by the caller.
        right: usize,
    },
    /// A queried sum left the `i64` range.
    #[error("sum overflows i64 at index {index}")]
    Overflow {
        /// The queried upper bound, or the internal node for an update.
        index: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`FenwickError`] variants.
    enum FenwickErrorCode for FenwickError {
        /// The index falls outside the positions covered by the tree.
        IndexOutOfRange => IndexOutOfRange { .. } => "FENWICK_INDEX_OUT_OF_RANGE",
        /// The range bounds are reversed.
        InvalidRange => InvalidRange { .. } => "FENWICK_INVALID_RANGE",
        /// A queried sum left the `i64` range.
        Overflow => Overflow { .. } => "FENWICK_OVERFLOW",
    }
}

/// Prefix sums with O(log n) point updates and queries.
///
/// # Examples
/// ```
/// use graphlet_core::FenwickTree;
///
/// let mut tree = FenwickTree::new(10);
/// for i in 1..=10 {
///     tree.add(i, i64::try_from(i)?)?;
/// }
/// assert_eq!(tree.prefix_sum(4)?, 10);
/// assert_eq!(tree.prefix_sum(10)?, 55);
/// assert_eq!(tree.range_sum(3, 5)?, 12);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FenwickTree {
    // Slot 0 is unused so that node indices match the 1-based positions.
    tree: Vec<i128>,
}

impl FenwickTree {
    /// Creates a tree covering positions `1..=size`, all zero.
    ///
    /// # Panics
    /// Panics with a capacity overflow when `size + 1` nodes cannot be
    /// allocated, which includes `size == usize::MAX`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            tree: vec![0; size.saturating_add(1)],
        }
    }

    /// Returns the number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    /// Returns `true` when the tree covers no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `delta` to the value at `index`.
    ///
    /// # Errors
    /// Returns [`FenwickError::IndexOutOfRange`] unless `1 <= index <= len`,
    /// and [`FenwickError::Overflow`] when an internal `i128` node would
    /// overflow. The tree is unchanged on error.
    pub fn add(&mut self, index: usize, delta: i64) -> Result<(), FenwickError> {
        self.check_position(index)?;
        if index == 0 {
            return Err(self.out_of_range(index));
        }

        let mut updated = Vec::new();
        let mut node = index;
        while node < self.tree.len() {
            let sum = self.tree[node]
                .checked_add(i128::from(delta))
                .ok_or(FenwickError::Overflow { index: node })?;
            updated.push((node, sum));
            node += lowest_bit(node);
        }
        for (node, sum) in updated {
            self.tree[node] = sum;
        }
        Ok(())
    }

    /// Returns the sum of positions `1..=index`.
    ///
    /// # Errors
    /// Returns [`FenwickError::IndexOutOfRange`] when `index > len` and
    /// [`FenwickError::Overflow`] when the sum leaves the `i64` range.
    pub fn prefix_sum(&self, index: usize) -> Result<i64, FenwickError> {
        let sum = self.wide_prefix_sum(index)?;
        i64::try_from(sum).map_err(|_| FenwickError::Overflow { index })
    }

    /// Returns the sum of positions `left..=right`.
    ///
    /// A `left` of zero is read as one. Only the range sum itself must fit
    /// in `i64`; the prefixes it is derived from may not.
    ///
    /// # Errors
    /// Returns [`FenwickError::InvalidRange`] when `left > right`, plus the
    /// errors of [`FenwickTree::prefix_sum`].
    pub fn range_sum(&self, left: usize, right: usize) -> Result<i64, FenwickError> {
        if left > right {
            return Err(FenwickError::InvalidRange { left, right });
        }
        let upper = self.wide_prefix_sum(right)?;
        let lower = self.wide_prefix_sum(left.saturating_sub(1))?;
        upper
            .checked_sub(lower)
            .and_then(|sum| i64::try_from(sum).ok())
            .ok_or(FenwickError::Overflow { index: right })
    }

    fn wide_prefix_sum(&self, index: usize) -> Result<i128, FenwickError> {
        self.check_position(index)?;
        let mut sum = 0_i128;
        let mut node = index;
        while node > 0 {
            sum = sum
                .checked_add(self.tree[node])
                .ok_or(FenwickError::Overflow { index })?;
            node -= lowest_bit(node);
        }
        Ok(sum)
    }

    fn check_position(&self, index: usize) -> Result<(), FenwickError> {
        if index > self.len() {
            return Err(self.out_of_range(index));
        }
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> FenwickError {
        FenwickError::IndexOutOfRange {
            index,
            size: self.len(),
        }
    }
}

fn lowest_bit(node: usize) -> usize {
    node & node.wrapping_neg()
}
