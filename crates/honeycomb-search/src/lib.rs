//! Honeycomb Search
//!
//! Finds every dictionary word that can be traced through a
//! [`HoneycombGrid`] by stepping between neighbouring cells, using each
//! cell at most once per trace.
//!
//! # Design
//!
//! Every cell is tried as the start of a trace. From there a depth-first
//! walk follows the [`Trie`]: a step is taken only while the letters so far
//! are a prefix of some dictionary word, so dead branches are cut after a
//! single lookup.
//!
//! Cells on the current trace are held in a [`VisitedSet`] owned by the
//! search session; the grid itself is never mutated. A second bitset keyed
//! by trie node records which words were already reported, so each word is
//! reported once no matter how many traces spell it.
//!
//! # Example
//!
//! ```
//! use honeycomb_lexicon::Trie;
//! use honeycomb_search::find_words;
//! use honeycomb_topology::HoneycombGrid;
//!
//! let grid = HoneycombGrid::parse("2\nA\nT S G D C O\n").unwrap();
//! let trie = Trie::from_lines(["CAT", "CATS", "DOG"]).unwrap();
//!
//! let found = find_words(&grid, &trie).into_sorted();
//! assert_eq!(found, vec!["CAT".to_string(), "CATS".to_string()]);
//! ```

mod finder;
mod store;
mod visited;

pub use finder::{find_words, FinderOptions, SearchReport, SearchStats, WordFinder};
pub use store::{FoundWord, WordStore};
pub use visited::VisitedSet;

pub use honeycomb_lexicon::Trie;
pub use honeycomb_topology::{Cell, HoneycombGrid};
