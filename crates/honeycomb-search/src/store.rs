//! Collection of words found during a search.

use std::collections::HashMap;

use honeycomb_topology::Cell;

/// A word together with the first trace that spelled it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Cell>,
}

/// Distinct words in the order they were found.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    entries: Vec<FoundWord>,
    index: HashMap<String, usize>,
}

impl WordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word and its trace. Returns `false` if the word was already
    /// present, in which case the first trace is kept.
    pub fn record(&mut self, word: &str, path: &[Cell]) -> bool {
        if self.index.contains_key(word) {
            return false;
        }
        self.index.insert(word.to_string(), self.entries.len());
        self.entries.push(FoundWord {
            word: word.to_string(),
            path: path.to_vec(),
        });
        true
    }

    /// Whether `word` was found.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// The first trace that spelled `word`.
    pub fn path(&self, word: &str) -> Option<&[Cell]> {
        self.index
            .get(word)
            .map(|&i| self.entries[i].path.as_slice())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Found words in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &FoundWord> {
        self.entries.iter()
    }

    /// The words, sorted ascending.
    pub fn into_sorted(self) -> Vec<String> {
        let mut words: Vec<String> = self.entries.into_iter().map(|e| e.word).collect();
        words.sort_unstable();
        words
    }
}

impl<'a> IntoIterator for &'a WordStore {
    type Item = &'a FoundWord;
    type IntoIter = std::slice::Iter<'a, FoundWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_first_path() {
        let mut store = WordStore::new();
        assert!(store.record("AB", &[Cell::new(0, 0), Cell::new(0, 1)]));
        assert!(!store.record("AB", &[Cell::new(1, 0), Cell::new(1, 1)]));

        assert_eq!(store.len(), 1);
        assert_eq!(store.path("AB"), Some(&[Cell::new(0, 0), Cell::new(0, 1)][..]));
        assert_eq!(store.path("BA"), None);
    }

    #[test]
    fn sorted_output() {
        let mut store = WordStore::new();
        for word in ["DOG", "CATS", "CAT", "ANT"] {
            store.record(word, &[]);
        }
        let discovered: Vec<_> = store.iter().map(|f| f.word.as_str()).collect();
        assert_eq!(discovered, vec!["DOG", "CATS", "CAT", "ANT"]);
        assert_eq!(store.into_sorted(), vec!["ANT", "CAT", "CATS", "DOG"]);
    }

    #[test]
    fn empty_store() {
        let store = WordStore::new();
        assert!(store.is_empty());
        assert!(!store.contains("A"));
        assert!(store.into_sorted().is_empty());
    }
}
