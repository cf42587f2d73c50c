//! Cell addressing in the column layout.
//!
//! A cell is a `(column, position)` pair. Coordinates are signed so that
//! neighbour arithmetic can step off the edge of the honeycomb; the grid
//! decides whether a coordinate is inside.

use std::ops::{Add, Neg, Sub};

use crate::NEIGHBOR_COUNT;

/// A position in the honeycomb's column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Column index, 0 is the leftmost column
    pub column: i64,
    /// Position within the column
    pub position: i64,
}

impl Cell {
    /// The first cell of the first column.
    pub const ORIGIN: Self = Self {
        column: 0,
        position: 0,
    };

    /// Create a new cell address.
    pub const fn new(column: i64, position: i64) -> Self {
        Self { column, position }
    }

    /// The eight neighbour offsets: every `(dc, dp)` in `{-1, 0, 1}²`
    /// except `(0, 0)`.
    pub const NEIGHBOR_OFFSETS: [Self; NEIGHBOR_COUNT] = [
        Self { column: -1, position: -1 },
        Self { column: -1, position: 0 },
        Self { column: -1, position: 1 },
        Self { column: 0, position: -1 },
        Self { column: 0, position: 1 },
        Self { column: 1, position: -1 },
        Self { column: 1, position: 0 },
        Self { column: 1, position: 1 },
    ];

    /// Chebyshev distance between two cells in index space.
    pub fn distance(&self, other: &Self) -> u64 {
        let dc = (self.column - other.column).unsigned_abs();
        let dp = (self.position - other.position).unsigned_abs();
        dc.max(dp)
    }

    /// All eight neighbouring addresses, in or out of bounds.
    pub fn neighbors(&self) -> [Self; NEIGHBOR_COUNT] {
        Self::NEIGHBOR_OFFSETS.map(|d| *self + d)
    }
}

impl Add for Cell {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            column: self.column + other.column,
            position: self.position + other.position,
        }
    }
}

impl Sub for Cell {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            column: self.column - other.column,
            position: self.position - other.position,
        }
    }
}

impl Neg for Cell {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            column: -self.column,
            position: -self.position,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.position)
    }
}
