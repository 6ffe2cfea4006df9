//! Fixed-capacity bitset over dictionary word indices

const BLOCK_BITS: usize = u64::BITS as usize;

/// Set of dictionary word indices, one bit per word
///
/// Capacity is fixed at construction to the dictionary size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordSet {
    blocks: Vec<u64>,
    capacity: usize,
}

impl WordSet {
    /// Empty set able to hold indices `0..capacity`
    #[must_use]
    pub fn empty(capacity: usize) -> Self {
        Self {
            blocks: vec![0; capacity.div_ceil(BLOCK_BITS)],
            capacity,
        }
    }

    /// Set containing every index `0..capacity`
    #[must_use]
    pub fn full(capacity: usize) -> Self {
        let mut set = Self {
            blocks: vec![u64::MAX; capacity.div_ceil(BLOCK_BITS)],
            capacity,
        };
        let tail = capacity % BLOCK_BITS;
        if let (Some(last), true) = (set.blocks.last_mut(), tail != 0) {
            *last = (1u64 << tail) - 1;
        }
        set
    }

    /// Number of indices the set can hold
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Backing 64-bit blocks, lowest indices first
    #[inline]
    #[must_use]
    pub fn blocks(&self) -> &[u64] {
        &self.blocks
    }

    /// Add an index
    ///
    /// # Panics
    /// Panics if `index >= capacity`
    pub fn insert(&mut self, index: usize) {
        assert!(index < self.capacity, "index {index} out of range");
        self.blocks[index / BLOCK_BITS] |= 1u64 << (index % BLOCK_BITS);
    }

    /// True if the index is in the set
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index < self.capacity && self.blocks[index / BLOCK_BITS] & (1u64 << (index % BLOCK_BITS)) != 0
    }

    /// Number of indices in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// True if no index is in the set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&b| b == 0)
    }

    /// Keep only indices also in `other`
    pub fn intersect_with(&mut self, other: &Self) {
        debug_assert_eq!(self.capacity, other.capacity);
        for (mine, theirs) in self.blocks.iter_mut().zip(&other.blocks) {
            *mine &= theirs;
        }
    }

    /// Size of the intersection of `self` and every set in `others`
    ///
    /// Computed block by block without allocating.
    #[must_use]
    pub fn intersection_len(&self, others: &[&Self]) -> usize {
        self.blocks
            .iter()
            .enumerate()
            .map(|(i, &block)| {
                others
                    .iter()
                    .fold(block, |acc, other| acc & other.blocks[i])
                    .count_ones() as usize
            })
            .sum()
    }

    /// Iterate over the indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.blocks.iter().enumerate().flat_map(|(i, &block)| {
            (0..BLOCK_BITS)
                .filter(move |bit| block & (1u64 << bit) != 0)
                .map(move |bit| i * BLOCK_BITS + bit)
        })
    }
}
