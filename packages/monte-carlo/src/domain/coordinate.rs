//! (row, column) positions on the tableau.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Linear index for a row-major layout with `stride` columns.
    pub const fn to_index(self, stride: usize) -> usize {
        self.row * stride + self.col
    }

    /// Inverse of [`Coordinate::to_index`]. `stride` must be non-zero.
    pub const fn from_index(index: usize, stride: usize) -> Self {
        Self {
            row: index / stride,
            col: index % stride,
        }
    }

    /// Row and column each differ by at most one. A coordinate counts as
    /// adjacent to itself; callers that pair distinct slots check that
    /// separately.
    pub const fn is_adjacent_to(self, other: Coordinate) -> bool {
        self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
