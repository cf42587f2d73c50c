//! Error types for honeycomb-lexicon.

use thiserror::Error;

/// Result type for lexicon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a trie.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A word contains a character outside 'A'..='Z'.
    #[error("invalid character {ch:?} in word {word:?}")]
    InvalidCharacter { word: String, ch: char },

    /// An empty word cannot be inserted.
    #[error("empty word")]
    EmptyWord,

    /// A dictionary line was rejected.
    #[error("dictionary line {line}: {source}")]
    InvalidWord {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    /// An unrecognised dictionary load mode.
    #[error("unknown load mode {0:?} (expected \"strict\" or \"skip\")")]
    UnknownLoadMode(String),
}
