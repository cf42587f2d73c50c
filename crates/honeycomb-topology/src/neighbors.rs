//! 8-neighbour adjacency.
//!
//! Neighbours are taken in column/position index space. The relation is
//! symmetric and translation-invariant; bounds are applied by the grid.

use crate::Cell;

/// Check if two cells are neighbours.
pub fn are_neighbors(a: Cell, b: Cell) -> bool {
    Cell::NEIGHBOR_OFFSETS.contains(&(b - a))
}
