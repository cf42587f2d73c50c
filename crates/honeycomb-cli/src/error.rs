//! Error types for the honeycomb CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end a CLI run.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of positional arguments.
    #[error("expected 2 arguments, got {0}\nNeed two files (honeycomb file and dictionary file) as input.")]
    Usage(usize),

    /// An input file could not be read.
    #[error("{role} file {path:?} could not be read: {source}")]
    MissingInput {
        role: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The honeycomb file is malformed.
    #[error("malformed honeycomb: {0}")]
    Honeycomb(#[from] honeycomb_topology::Error),

    /// The dictionary file is malformed.
    #[error("invalid dictionary: {0}")]
    Dictionary(#[from] honeycomb_lexicon::Error),

    /// An unusable configuration value.
    #[error("invalid configuration: {key}={value:?}")]
    Config { key: &'static str, value: String },

    /// Writing results failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
