//! Honeycomb Topology
//!
//! Geometry of the layered hexagon used by the honeycomb word search.
//!
//! # Layers
//!
//! A honeycomb of `L` layers is a regular hexagon: layer 0 is the single
//! center cell and layer `k > 0` is the ring of `6k` cells around it. The
//! whole hexagon holds `1 + 3n(n+1)` cells where `n = L - 1`.
//!
//! # Columns
//!
//! The hexagon is stored as `2L - 1` columns of letters. The center column
//! holds `2L - 1` cells and every step away from it, left or right, drops
//! one cell. A cell is addressed by `(column, position)`.
//!
//! # Adjacency
//!
//! Two cells are neighbours when both their column and their position differ
//! by at most one. That is the 8-neighbourhood of the column/position index
//! grid, not true screen-space hex adjacency, and it is the adjacency the
//! puzzle is defined over.

mod cell;
mod error;
mod grid;
mod layers;
mod neighbors;

pub use cell::Cell;
pub use error::{Error, Result};
pub use grid::HoneycombGrid;
pub use layers::{
    cells_in_layer, column_count, column_len, half_layer_len, total_cells_through,
};
pub use neighbors::are_neighbors;

/// Number of neighbour offsets around a cell.
pub const NEIGHBOR_COUNT: usize = 8;

/// First letter of the cell alphabet.
pub const FIRST_LETTER: u8 = b'A';

/// Last letter of the cell alphabet.
pub const LAST_LETTER: u8 = b'Z';

/// Whether `byte` is a valid cell letter.
#[inline]
pub const fn is_cell_letter(byte: u8) -> bool {
    byte >= FIRST_LETTER && byte <= LAST_LETTER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_bounds() {
        assert!(is_cell_letter(b'A'));
        assert!(is_cell_letter(b'Z'));
        assert!(!is_cell_letter(b'a'));
        assert!(!is_cell_letter(b'-'));
        assert!(!is_cell_letter(b'['));
    }

    #[test]
    fn neighbor_count_matches_offsets() {
        assert_eq!(Cell::NEIGHBOR_OFFSETS.len(), NEIGHBOR_COUNT);
    }
}
