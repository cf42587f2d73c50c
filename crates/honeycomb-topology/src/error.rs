//! Error types for honeycomb-topology.

use thiserror::Error;

/// Result type for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a honeycomb grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The leading layer count is missing, not a number, or zero.
    #[error("invalid layer count: {0:?}")]
    InvalidLayerCount(String),

    /// A cell character is outside 'A'..='Z'.
    #[error("invalid cell {index}: {ch:?} is not an uppercase letter")]
    InvalidCell { index: usize, ch: char },

    /// Fewer cells than the layer count requires.
    #[error("honeycomb truncated: expected {expected} cells, found {found}")]
    Truncated { expected: usize, found: usize },

    /// More cells than the layer count allows.
    #[error("trailing input: expected {expected} cells, found {found}")]
    TrailingInput { expected: usize, found: usize },

    /// A redistributed column came out with the wrong length.
    #[error("column {column} has length {actual}, expected {expected}")]
    ColumnLength {
        column: usize,
        expected: usize,
        actual: usize,
    },
}
