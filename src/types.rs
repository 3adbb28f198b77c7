//! Numeric kinds for LPB weights and type-safe handles for splitting tree nodes.

use std::fmt;

use num_traits::Zero;

/// A numeric kind usable as an LPB coefficient or threshold.
///
/// Only ordering, addition and a zero element are required, so all primitive
/// numbers and the arbitrary-precision integers from `num-bigint` qualify.
pub trait Coefficient: Zero + Clone + PartialOrd + fmt::Display {
    /// Returns `true` if the value is at least zero.
    ///
    /// Values without an order, such as `NaN`, are not non-negative.
    fn is_non_negative(&self) -> bool {
        *self >= Self::zero()
    }

    /// Returns `true` if the value is comparable with itself, i.e. not `NaN`.
    fn is_comparable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }
}

impl<T> Coefficient for T where T: Zero + Clone + PartialOrd + fmt::Display {}

/// Position of a node inside a [`TreeContext`][crate::tree::TreeContext].
///
/// The column is the number of variables eliminated on the path from the
/// root, the row is the position of the node within its column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId {
    column: usize,
    row: usize,
}

impl NodeId {
    pub fn new(column: usize, row: usize) -> Self {
        NodeId { column, row }
    }

    pub fn column(self) -> usize {
        self.column
    }

    pub fn row(self) -> usize {
        self.row
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}_{}", self.column, self.row)
    }
}
