//! Arena trie over the uppercase alphabet.

use std::str::FromStr;

use tracing::{debug, warn};

use crate::{Error, Result};

/// Number of letters in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Child slot for an uppercase letter, `None` for anything else.
#[inline]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter - b'A') as usize)
    } else {
        None
    }
}

/// Index of a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node, representing the empty prefix.
    pub const ROOT: Self = Self(0);

    /// Raw arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<NodeId>; ALPHABET_SIZE],
    is_end: bool,
}

/// How dictionary lines with invalid characters are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Reject the whole dictionary.
    Strict,
    /// Drop the word and log a warning.
    #[default]
    Skip,
}

impl FromStr for LoadMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "skip" => Ok(Self::Skip),
            _ => Err(Error::UnknownLoadMode(s.to_string())),
        }
    }
}

/// Prefix tree of dictionary words.
///
/// A node reached by the letters `c1..ck` represents that prefix; it is
/// marked as a word end iff the prefix itself was inserted.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create a trie holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: 0,
        }
    }

    /// Build from dictionary lines, rejecting any invalid word.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_lines_with(lines, LoadMode::Strict)
    }

    /// Build from dictionary lines.
    ///
    /// A trailing `\n` or `\r\n` is stripped from each line and blank lines
    /// are ignored. No case folding happens: a lowercase word is invalid.
    pub fn from_lines_with<I, S>(lines: I, mode: LoadMode) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        let mut skipped = 0usize;

        for (number, line) in lines.into_iter().enumerate() {
            let word = line.as_ref().trim_end_matches(&['\n', '\r'][..]);
            if word.is_empty() {
                continue;
            }
            match trie.insert(word) {
                Ok(_) => {}
                Err(e) if mode == LoadMode::Skip => {
                    warn!(line = number + 1, "skipping dictionary word: {}", e);
                    skipped += 1;
                }
                Err(e) => {
                    return Err(Error::InvalidWord {
                        line: number + 1,
                        source: Box::new(e),
                    })
                }
            }
        }

        debug!(
            words = trie.len(),
            nodes = trie.node_count(),
            skipped,
            "dictionary trie built"
        );
        Ok(trie)
    }

    /// Insert a word. Returns `true` if it was not already present.
    ///
    /// The word is validated before any node is created, so a rejected word
    /// leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        if word.is_empty() {
            return Err(Error::EmptyWord);
        }
        if let Some(ch) = word.chars().find(|&c| !c.is_ascii_uppercase()) {
            return Err(Error::InvalidCharacter {
                word: word.to_string(),
                ch,
            });
        }

        let mut node = NodeId::ROOT;
        for letter in word.bytes() {
            let slot = (letter - b'A') as usize;
            node = match self.nodes[node.0].children[slot] {
                Some(child) => child,
                None => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(Node::default());
                    self.nodes[node.0].children[slot] = Some(child);
                    child
                }
            };
        }

        let end = &mut self.nodes[node.0].is_end;
        let added = !*end;
        *end = true;
        if added {
            self.words += 1;
        }
        Ok(added)
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Step from `node` along `letter`.
    #[inline]
    pub fn child(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        let slot = letter_index(letter)?;
        self.nodes.get(node.0)?.children[slot]
    }

    /// Whether `node` ends a dictionary word.
    #[inline]
    pub fn is_word(&self, node: NodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| n.is_end)
    }

    /// Whether `node` has any children.
    pub fn has_children(&self, node: NodeId) -> bool {
        self.nodes
            .get(node.0)
            .is_some_and(|n| n.children.iter().any(Option::is_some))
    }

    /// Follow a whole string from the root.
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .bytes()
            .try_fold(NodeId::ROOT, |node, letter| self.child(node, letter))
    }

    /// Whether `word` was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|n| self.is_word(n))
    }

    /// Whether any inserted word starts with `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
