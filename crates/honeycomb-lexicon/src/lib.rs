//! Honeycomb Lexicon
//!
//! Dictionary index for the honeycomb word search: a prefix tree over the
//! 26 uppercase letters `'A'..='Z'`.
//!
//! Nodes live in a single arena and are addressed by [`NodeId`]. Each node
//! has a dense 26-slot child table, so stepping from a prefix to its
//! extension by one letter is O(1).
//!
//! # Example
//!
//! ```
//! use honeycomb_lexicon::Trie;
//!
//! let trie = Trie::from_lines(["CAT", "CATS", "DOG"]).unwrap();
//! assert!(trie.contains("CATS"));
//! assert!(trie.contains_prefix("CA"));
//! assert!(!trie.contains("CA"));
//! ```

mod error;
mod trie;

pub use error::{Error, Result};
pub use trie::{letter_index, LoadMode, NodeId, Trie, ALPHABET_SIZE};
