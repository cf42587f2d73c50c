//! Fixed-capacity bitset over dense indices.

/// A set of dense indices in `0..capacity`, one bit each.
///
/// Used for the cells on the current trace and for the trie nodes that
/// were already reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    blocks: Vec<u64>,
    capacity: usize,
}

impl VisitedSet {
    const BITS: usize = u64::BITS as usize;

    /// Create an empty set able to hold `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            blocks: vec![0; capacity.div_ceil(Self::BITS)],
            capacity,
        }
    }

    /// Add `index`. Returns `true` if it was not already present.
    ///
    /// Indices past the capacity are ignored.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        let (block, mask) = Self::locate(index);
        let was_set = self.blocks[block] & mask != 0;
        self.blocks[block] |= mask;
        !was_set
    }

    /// Remove `index`. Returns `true` if it was present.
    #[inline]
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        let (block, mask) = Self::locate(index);
        let was_set = self.blocks[block] & mask != 0;
        self.blocks[block] &= !mask;
        was_set
    }

    /// Whether `index` is present.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        let (block, mask) = Self::locate(index);
        self.blocks[block] & mask != 0
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&b| b == 0)
    }

    #[inline]
    fn locate(index: usize) -> (usize, u64) {
        (index / Self::BITS, 1u64 << (index % Self::BITS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut set = VisitedSet::with_capacity(130);
        assert!(set.is_empty());

        assert!(set.insert(0));
        assert!(set.insert(64));
        assert!(set.insert(129));
        assert!(!set.insert(64));

        assert!(set.contains(129));
        assert!(!set.contains(128));

        assert!(set.remove(64));
        assert!(!set.remove(64));
        assert!(!set.contains(64));

        assert!(set.remove(0));
        assert!(set.remove(129));
        assert!(set.is_empty());
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut set = VisitedSet::with_capacity(10);
        assert!(!set.insert(10));
        assert!(!set.contains(10));
        assert!(!set.remove(99));
        assert!(set.is_empty());
    }

    #[test]
    fn zero_capacity() {
        let mut set = VisitedSet::with_capacity(0);
        assert!(!set.insert(0));
        assert!(set.is_empty());
    }
}
