//! The honeycomb grid and its layered-text parser.
//!
//! # Input order
//!
//! The center cell comes first. Each layer `k = 1..L-1` then follows as
//! its top cell, its right half in reverse order, its bottom cell and its
//! left half in reading order. Each half holds `2 + 3(k-1)` cells.
//!
//! # Folding halves into columns
//!
//! Top and bottom cells land directly at the two ends of the center
//! column. Each half layer is folded into the columns on its side: column
//! `i` steps from the center takes a contiguous run of `i + 2` cells from
//! layer `i + 1`, and every layer further out contributes one cell to each
//! end of that column. Column `i` therefore holds `2(L-1) - i` cells.

use std::fmt;

use tracing::debug;

use crate::{
    column_count, column_len, half_layer_len, is_cell_letter, Cell, Error, Result,
};

/// A parsed honeycomb: `2L - 1` columns of uppercase letters.
///
/// Letters are stored flat, column after column, so every cell also has a
/// dense index in `0..cell_count()`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoneycombGrid {
    layers: usize,
    letters: Vec<u8>,
    /// Start of each column in `letters`, followed by the end of the last.
    starts: Vec<usize>,
}

impl HoneycombGrid {
    /// Parse the layered text form.
    ///
    /// The leading run of digits is the layer count. Every non-whitespace
    /// character after it is one cell, so cells may be separated by any
    /// whitespace or none at all, including from the count itself.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim_start();
        let split = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        let (count, rest) = text.split_at(split);

        let layers: usize = count.parse().map_err(|_| {
            let token = text.split_whitespace().next().unwrap_or_default();
            Error::InvalidLayerCount(token.to_string())
        })?;

        let mut cells = Vec::with_capacity(rest.len());
        for (index, ch) in rest.chars().filter(|c| !c.is_whitespace()).enumerate() {
            match u8::try_from(ch) {
                Ok(byte) if is_cell_letter(byte) => cells.push(byte),
                _ => return Err(Error::InvalidCell { index, ch }),
            }
        }

        Self::from_layers(layers, &cells)
    }

    /// Build a grid from cells already split out of the text, in input order.
    pub fn from_layers(layers: usize, cells: &[u8]) -> Result<Self> {
        let expected = expected_cells(layers)?;

        if let Some(index) = cells.iter().position(|&b| !is_cell_letter(b)) {
            return Err(Error::InvalidCell {
                index,
                ch: char::from(cells[index]),
            });
        }
        if cells.len() < expected {
            return Err(Error::Truncated {
                expected,
                found: cells.len(),
            });
        }
        if cells.len() > expected {
            return Err(Error::TrailingInput {
                expected,
                found: cells.len(),
            });
        }

        let outer = layers - 1;
        let mut reader = LayerReader::new(cells);

        let mut center = vec![0u8; 2 * outer + 1];
        center[outer] = reader.take();

        let mut right = Vec::with_capacity(outer);
        let mut left = Vec::with_capacity(outer);
        for layer in 1..=outer {
            let half = half_layer_len(layer);

            center[outer + layer] = reader.take();

            // right half arrives outermost-first
            let mut right_half = reader.take_n(half).to_vec();
            right_half.reverse();
            right.push(right_half);

            center[outer - layer] = reader.take();
            left.push(reader.take_n(half).to_vec());
        }

        let mut columns = Vec::with_capacity(column_count(layers));
        columns.extend(fold_half_layers(&left).into_iter().rev());
        columns.push(center);
        columns.extend(fold_half_layers(&right));

        let grid = Self::from_columns(layers, columns)?;
        debug!(
            layers,
            columns = grid.column_count(),
            cells = grid.cell_count(),
            "honeycomb grid built"
        );
        Ok(grid)
    }

    /// Build a grid directly from its columns, leftmost first.
    ///
    /// Column lengths must match [`column_len`] for `layers`.
    pub fn from_columns(layers: usize, columns: Vec<Vec<u8>>) -> Result<Self> {
        let expected = expected_cells(layers)?;
        if columns.len() != column_count(layers) {
            return Err(Error::ColumnLength {
                column: columns.len(),
                expected: column_count(layers),
                actual: columns.len(),
            });
        }

        let mut letters = Vec::with_capacity(expected);
        let mut starts = Vec::with_capacity(columns.len() + 1);
        for (column, cells) in columns.into_iter().enumerate() {
            let wanted = column_len(layers, column);
            if cells.len() != wanted {
                return Err(Error::ColumnLength {
                    column,
                    expected: wanted,
                    actual: cells.len(),
                });
            }
            if let Some(position) = cells.iter().position(|&b| !is_cell_letter(b)) {
                return Err(Error::InvalidCell {
                    index: letters.len() + position,
                    ch: char::from(cells[position]),
                });
            }
            starts.push(letters.len());
            letters.extend(cells);
        }
        starts.push(letters.len());

        Ok(Self {
            layers,
            letters,
            starts,
        })
    }

    /// A one-layer honeycomb holding a single letter.
    pub fn single(letter: u8) -> Result<Self> {
        Self::from_layers(1, &[letter])
    }

    /// Number of layers, including the center.
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Number of columns (`2L - 1`).
    pub fn column_count(&self) -> usize {
        self.starts.len() - 1
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.letters.len()
    }

    /// Index of the center column.
    pub fn center_column(&self) -> usize {
        self.layers - 1
    }

    /// Letters of one column.
    pub fn column(&self, column: usize) -> Option<&[u8]> {
        let start = *self.starts.get(column)?;
        let end = *self.starts.get(column + 1)?;
        Some(&self.letters[start..end])
    }

    /// Length of one column, 0 outside the grid.
    pub fn column_len(&self, column: usize) -> usize {
        self.column(column).map_or(0, <[u8]>::len)
    }

    /// All columns, leftmost first.
    pub fn columns(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.starts
            .windows(2)
            .map(move |w| &self.letters[w[0]..w[1]])
    }

    /// Dense index of a cell, or `None` if it is outside the grid.
    #[inline]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        let column = usize::try_from(cell.column).ok()?;
        let position = usize::try_from(cell.position).ok()?;
        let start = *self.starts.get(column)?;
        let end = *self.starts.get(column + 1)?;
        (position < end - start).then_some(start + position)
    }

    /// Whether a cell lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some()
    }

    /// Letter at a cell.
    pub fn get(&self, cell: Cell) -> Option<u8> {
        self.index_of(cell).map(|i| self.letters[i])
    }

    /// Letter at a dense index.
    #[inline]
    pub fn letter(&self, index: usize) -> Option<u8> {
        self.letters.get(index).copied()
    }

    /// Every cell in dense-index order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.starts.windows(2).enumerate().flat_map(|(column, w)| {
            (0..w[1] - w[0]).map(move |position| Cell::new(column as i64, position as i64))
        })
    }

    /// In-bounds neighbours of a cell.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neighbors().into_iter().filter(move |&n| self.contains(n))
    }
}

impl fmt::Display for HoneycombGrid {
    /// One column per line, indented by its distance from the center.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let center = self.center_column();
        for (index, column) in self.columns().enumerate() {
            write!(f, "{:width$}", "", width = index.abs_diff(center))?;
            for (position, &letter) in column.iter().enumerate() {
                if position > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", char::from(letter))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// `1 + 3n(n+1)` for `n = layers - 1`, rejecting zero and overflow.
fn expected_cells(layers: usize) -> Result<usize> {
    let invalid = || Error::InvalidLayerCount(layers.to_string());
    let outer = layers.checked_sub(1).ok_or_else(invalid)?;
    outer
        .checked_add(1)
        .and_then(|next| next.checked_mul(outer))
        .and_then(|product| product.checked_mul(3))
        .and_then(|product| product.checked_add(1))
        .ok_or_else(invalid)
}

/// Fold one side's half layers into that side's columns, nearest the
/// center first.
fn fold_half_layers(halves: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let outer = halves.len();
    (0..outer)
        .map(|i| {
            let mut column = vec![0u8; 2 * outer - i];
            column[outer - i - 1..=outer].copy_from_slice(&halves[i][i..2 * i + 2]);
            for (j, half) in halves.iter().enumerate().skip(i + 1) {
                column[outer - j - 1] = half[i];
                column[outer - i + j] = half[3 * j + 1 - i];
            }
            column
        })
        .collect()
}

/// Sequential reader over a cell slice whose length is already checked.
struct LayerReader<'a> {
    cells: &'a [u8],
    pos: usize,
}

impl<'a> LayerReader<'a> {
    fn new(cells: &'a [u8]) -> Self {
        Self { cells, pos: 0 }
    }

    fn take(&mut self) -> u8 {
        let cell = self.cells[self.pos];
        self.pos += 1;
        cell
    }

    fn take_n(&mut self, n: usize) -> &'a [u8] {
        let run = &self.cells[self.pos..self.pos + n];
        self.pos += n;
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{are_neighbors, total_cells_through};
    use proptest::prelude::*;

    fn columns_of(grid: &HoneycombGrid) -> Vec<String> {
        grid.columns()
            .map(|c| String::from_utf8_lossy(c).into_owned())
            .collect()
    }

    #[test]
    fn single_layer_is_one_cell() {
        let grid = HoneycombGrid::parse("1\nQ\n").unwrap();
        assert_eq!(grid.layers(), 1);
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.cell_count(), 1);
        assert_eq!(grid.get(Cell::ORIGIN), Some(b'Q'));
        assert_eq!(grid.neighbors(Cell::ORIGIN).count(), 0);
        assert_eq!(grid, HoneycombGrid::single(b'Q').unwrap());
    }

    #[test]
    fn two_layers_layout() {
        let grid = HoneycombGrid::parse("2\nA\nT S G D C O\n").unwrap();
        assert_eq!(columns_of(&grid), vec!["CO", "DAT", "GS"]);
    }

    #[test]
    fn three_layers_layout() {
        let grid = HoneycombGrid::parse("3 A B C D E F G H I J K L M N O P Q R S").unwrap();
        assert_eq!(
            columns_of(&grid),
            vec!["PQR", "OFGS", "NEABH", "MDCI", "LKJ"]
        );
        assert_eq!(grid.center_column(), 2);
    }

    #[test]
    fn four_layers_layout() {
        // 37 cells; every column away from the center borrows one cell at
        // each end from two or more layers further out
        let grid = HoneycombGrid::parse(
            "4 A B C D E F G H I J K L M N O P Q R S T U V W X Y Z A B C D E F G H I J K",
        )
        .unwrap();
        assert_eq!(
            columns_of(&grid),
            vec!["FGHI", "EPQRJ", "DOFGSK", "CNEABHT", "BMDCIU", "ALKJV", "ZYXW"]
        );
        assert_eq!(grid.center_column(), 3);
    }

    #[test]
    fn whitespace_between_cells_is_optional() {
        let spaced = HoneycombGrid::parse("2\nA T S G D C O").unwrap();
        let packed = HoneycombGrid::parse("  2\tATSG\nDCO").unwrap();
        assert_eq!(spaced, packed);
    }

    #[test]
    fn layer_count_may_touch_first_cell() {
        assert_eq!(
            HoneycombGrid::parse("1A").unwrap(),
            HoneycombGrid::single(b'A').unwrap()
        );
        assert_eq!(
            HoneycombGrid::parse("2ATSGDCO").unwrap(),
            HoneycombGrid::parse("2 A T S G D C O").unwrap()
        );
    }

    #[test]
    fn center_neighbors_whole_first_ring() {
        let grid = HoneycombGrid::parse("2 A T S G D C O").unwrap();
        let center = Cell::new(1, 1);
        assert_eq!(grid.get(center), Some(b'A'));
        assert_eq!(grid.neighbors(center).count(), 6);
    }

    #[test]
    fn out_of_bounds_cells() {
        let grid = HoneycombGrid::parse("2 A T S G D C O").unwrap();
        assert_eq!(grid.index_of(Cell::new(-1, 0)), None);
        assert_eq!(grid.index_of(Cell::new(0, 2)), None);
        assert_eq!(grid.index_of(Cell::new(3, 0)), None);
        assert_eq!(grid.index_of(Cell::new(2, 1)), Some(6));
        assert!(!grid.contains(Cell::new(1, -1)));
    }

    #[test]
    fn cells_follow_dense_index() {
        let grid = HoneycombGrid::parse("3 A B C D E F G H I J K L M N O P Q R S").unwrap();
        for (index, cell) in grid.cells().enumerate() {
            assert_eq!(grid.index_of(cell), Some(index));
        }
        assert_eq!(grid.cells().count(), 19);
    }

    #[test]
    fn rejects_bad_layer_count() {
        assert_eq!(
            HoneycombGrid::parse("x A"),
            Err(Error::InvalidLayerCount("x".to_string()))
        );
        assert!(matches!(
            HoneycombGrid::parse("0"),
            Err(Error::InvalidLayerCount(_))
        ));
        assert!(matches!(
            HoneycombGrid::parse(""),
            Err(Error::InvalidLayerCount(_))
        ));
        assert!(matches!(
            HoneycombGrid::parse("-2 A"),
            Err(Error::InvalidLayerCount(_))
        ));
    }

    #[test]
    fn rejects_wrong_cell_count() {
        assert_eq!(
            HoneycombGrid::parse("2 A T S G D C"),
            Err(Error::Truncated {
                expected: 7,
                found: 6
            })
        );
        assert_eq!(
            HoneycombGrid::parse("1 A B"),
            Err(Error::TrailingInput {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn rejects_non_alphabet_cells() {
        assert_eq!(
            HoneycombGrid::parse("2 A T s G D C O"),
            Err(Error::InvalidCell { index: 2, ch: 's' })
        );
        assert!(matches!(
            HoneycombGrid::parse("1 É"),
            Err(Error::InvalidCell { index: 0, .. })
        ));
    }

    #[test]
    fn from_columns_checks_lengths() {
        let err = HoneycombGrid::from_columns(2, vec![b"AB".to_vec(), b"CD".to_vec(), b"EF".to_vec()]);
        assert_eq!(
            err,
            Err(Error::ColumnLength {
                column: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn display_indents_by_distance() {
        let grid = HoneycombGrid::parse("2 A T S G D C O").unwrap();
        assert_eq!(grid.to_string(), " C O\nD A T\n G S\n");
    }

    fn honeycomb_input() -> impl Strategy<Value = (usize, Vec<u8>)> {
        (1usize..8).prop_flat_map(|layers| {
            (
                Just(layers),
                prop::collection::vec(b'A'..=b'Z', total_cells_through(layers - 1)),
            )
        })
    }

    proptest! {
        #[test]
        fn column_count_is_two_l_minus_one((layers, cells) in honeycomb_input()) {
            let grid = HoneycombGrid::from_layers(layers, &cells).unwrap();
            prop_assert_eq!(grid.column_count(), 2 * layers - 1);
        }

        #[test]
        fn column_lengths_are_symmetric((layers, cells) in honeycomb_input()) {
            let grid = HoneycombGrid::from_layers(layers, &cells).unwrap();
            let last = grid.column_count() - 1;
            for column in 0..=last {
                prop_assert_eq!(grid.column_len(column), grid.column_len(last - column));
            }
            prop_assert_eq!(grid.column_len(grid.center_column()), 2 * layers - 1);
        }

        #[test]
        fn every_input_cell_is_placed_once((layers, cells) in honeycomb_input()) {
            let grid = HoneycombGrid::from_layers(layers, &cells).unwrap();
            let mut placed: Vec<u8> = grid.columns().flatten().copied().collect();
            let mut given = cells.clone();
            placed.sort_unstable();
            given.sort_unstable();
            prop_assert_eq!(placed, given);
        }

        #[test]
        fn neighbors_are_symmetric((layers, cells) in honeycomb_input()) {
            let grid = HoneycombGrid::from_layers(layers, &cells).unwrap();
            for cell in grid.cells() {
                for n in grid.neighbors(cell) {
                    prop_assert!(are_neighbors(n, cell));
                    prop_assert!(grid.neighbors(n).any(|m| m == cell));
                }
            }
        }
    }
}
