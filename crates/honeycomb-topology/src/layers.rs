//! Layer and column arithmetic.
//!
//! Layer `k > 0` is read as a top cell, a right half, a bottom cell and a
//! left half. Each half holds `2 + 3(k-1)` cells, so the layer holds
//! `2 + 2(2 + 3(k-1)) = 6k` cells.

/// Cells in one half (left or right) of layer `layer`.
///
/// - Layer 0: 0 (the center has no halves)
/// - Layer k > 0: 2 + 3(k-1)
#[inline]
pub const fn half_layer_len(layer: usize) -> usize {
    if layer == 0 {
        0
    } else {
        2 + 3 * (layer - 1)
    }
}

/// Total number of cells in layer `layer`.
///
/// - Layer 0: 1 cell (center)
/// - Layer k > 0: 6k cells
#[inline]
pub const fn cells_in_layer(layer: usize) -> usize {
    if layer == 0 {
        1
    } else {
        2 + 2 * half_layer_len(layer)
    }
}

/// Total cells through layer `layer` (inclusive).
///
/// Formula: 1 + 3n(n+1)
#[inline]
pub const fn total_cells_through(layer: usize) -> usize {
    1 + 3 * layer * (layer + 1)
}

/// Number of columns in a honeycomb of `layers` layers: `2L - 1`.
#[inline]
pub const fn column_count(layers: usize) -> usize {
    (2 * layers).saturating_sub(1)
}

/// Length of column `column` in a honeycomb of `layers` layers.
///
/// The center column (`L - 1`) holds `2L - 1` cells and each step away
/// from it drops one. Returns 0 for a column outside the honeycomb.
#[inline]
pub const fn column_len(layers: usize, column: usize) -> usize {
    if layers == 0 || column >= column_count(layers) {
        return 0;
    }
    let center = layers - 1;
    let distance = if column > center {
        column - center
    } else {
        center - column
    };
    column_count(layers) - distance
}
