//! Trie-guided depth-first search.

use honeycomb_lexicon::{NodeId, Trie};
use honeycomb_topology::{Cell, HoneycombGrid};
use tracing::{debug, trace};

use crate::{VisitedSet, WordStore};

/// Tunables for a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinderOptions {
    /// Longest trace to follow. `None` leaves only the cell count as bound.
    pub max_word_len: Option<usize>,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Traces started, one per cell.
    pub traces: u64,
    /// In-bounds, unvisited cells examined.
    pub steps: u64,
    /// Steps cut because the letters were not a dictionary prefix.
    pub pruned: u64,
    /// Distinct words reported.
    pub reported: u64,
}

/// Result of [`WordFinder::search`].
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub words: WordStore,
    pub stats: SearchStats,
}

/// Searches one grid against one dictionary.
///
/// Both inputs are borrowed immutably; all per-search state lives in a
/// session created by each call, so a finder can be run repeatedly.
#[derive(Debug, Clone, Copy)]
pub struct WordFinder<'a> {
    grid: &'a HoneycombGrid,
    trie: &'a Trie,
    options: FinderOptions,
}

impl<'a> WordFinder<'a> {
    /// Create a finder with default options.
    pub fn new(grid: &'a HoneycombGrid, trie: &'a Trie) -> Self {
        Self::with_options(grid, trie, FinderOptions::default())
    }

    /// Create a finder with explicit options.
    pub fn with_options(grid: &'a HoneycombGrid, trie: &'a Trie, options: FinderOptions) -> Self {
        Self {
            grid,
            trie,
            options,
        }
    }

    /// Find every traceable dictionary word.
    pub fn find_words(&self) -> WordStore {
        self.search().words
    }

    /// Find every traceable dictionary word and report search counters.
    pub fn search(&self) -> SearchReport {
        let mut session = Session::new(self);

        for cell in self.grid.cells() {
            trace!(%cell, "starting trace");
            session.stats.traces += 1;
            session.visit(NodeId::ROOT, cell);
            debug_assert!(session.visited.is_empty() && session.word.is_empty());
        }

        debug!(
            traces = session.stats.traces,
            steps = session.stats.steps,
            pruned = session.stats.pruned,
            reported = session.stats.reported,
            "search finished"
        );

        SearchReport {
            words: session.store,
            stats: session.stats,
        }
    }
}

/// Find every dictionary word traceable in `grid`.
pub fn find_words(grid: &HoneycombGrid, trie: &Trie) -> WordStore {
    WordFinder::new(grid, trie).find_words()
}

/// Mutable state of one search.
struct Session<'f> {
    grid: &'f HoneycombGrid,
    trie: &'f Trie,
    max_len: usize,
    /// Letters on the current trace.
    word: String,
    /// Cells on the current trace, parallel to `word`.
    path: Vec<Cell>,
    visited: VisitedSet,
    /// Trie nodes whose word has been reported.
    reported: VisitedSet,
    store: WordStore,
    stats: SearchStats,
}

impl<'f> Session<'f> {
    fn new(finder: &WordFinder<'f>) -> Self {
        let cells = finder.grid.cell_count();
        let max_len = finder.options.max_word_len.unwrap_or(cells).min(cells);
        Self {
            grid: finder.grid,
            trie: finder.trie,
            max_len,
            word: String::with_capacity(max_len),
            path: Vec::with_capacity(max_len),
            visited: VisitedSet::with_capacity(cells),
            reported: VisitedSet::with_capacity(finder.trie.node_count()),
            store: WordStore::new(),
            stats: SearchStats::default(),
        }
    }

    /// Extend the current trace from `parent` onto `cell`.
    ///
    /// On return the trace, the visited set and the word buffer are exactly
    /// as they were on entry.
    fn visit(&mut self, parent: NodeId, cell: Cell) {
        let Some(index) = self.grid.index_of(cell) else {
            return;
        };
        if self.visited.contains(index) || self.word.len() >= self.max_len {
            return;
        }
        let Some(letter) = self.grid.letter(index) else {
            return;
        };

        self.stats.steps += 1;
        let Some(node) = self.trie.child(parent, letter) else {
            self.stats.pruned += 1;
            return;
        };

        self.word.push(char::from(letter));
        self.path.push(cell);

        if self.trie.is_word(node) && self.reported.insert(node.index()) {
            self.store.record(&self.word, &self.path);
            self.stats.reported += 1;
        }

        if self.trie.has_children(node) {
            self.visited.insert(index);
            for offset in Cell::NEIGHBOR_OFFSETS {
                self.visit(node, cell + offset);
            }
            self.visited.remove(index);
        }

        self.path.pop();
        self.word.pop();
    }
}
