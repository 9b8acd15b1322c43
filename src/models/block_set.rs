//! Value-unique collection of [`Block`]s.

use super::Block;
use itertools::Itertools;
use std::collections::BTreeSet;
use std::fmt;

/// Set of blocks, iterated in ascending address order (shorter prefix first at equal address).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockSet {
    blocks: BTreeSet<Block>,
}

impl BlockSet {
    /// Create a new empty BlockSet.
    pub fn new() -> BlockSet {
        BlockSet {
            blocks: BTreeSet::new(),
        }
    }

    /// Add a block. Returns false if an equal block was already present.
    pub fn insert(&mut self, block: Block) -> bool {
        self.blocks.insert(block)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Sorted view of the blocks.
    pub fn iter(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.iter()
    }

    /// Sorted copy of the blocks.
    pub fn to_vec(&self) -> Vec<Block> {
        self.blocks.iter().copied().collect()
    }

    /// CIDR strings, always with an explicit prefix.
    pub fn to_cidr_strings(&self) -> Vec<String> {
        self.blocks.iter().map(|b| b.to_string()).collect()
    }

    /// Total addresses covered, counting overlaps more than once.
    pub fn address_count(&self) -> u64 {
        self.blocks.iter().map(|b| b.size()).sum()
    }
}

impl FromIterator<Block> for BlockSet {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        BlockSet {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for BlockSet {
    type Item = Block;
    type IntoIter = std::collections::btree_set::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a BlockSet {
    type Item = &'a Block;
    type IntoIter = std::collections::btree_set::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl fmt::Display for BlockSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.blocks.iter().join(", "))
    }
}
