//! Memoized pattern match counting

use crate::core::{Pattern, PatternKey};
use crate::dictionary::WordMasks;
use rustc_hash::FxHashMap;

/// Counts dictionary words consistent with a pattern, caching by `PatternKey`
///
/// The cache depends only on the masks, so one checker may serve several runs over
/// the same dictionary.
#[derive(Debug)]
pub struct MatchChecker<'d> {
    masks: &'d WordMasks,
    cache: FxHashMap<PatternKey, usize>,
    hits: u64,
    misses: u64,
}

impl<'d> MatchChecker<'d> {
    /// Create a checker with an empty cache
    #[must_use]
    pub fn new(masks: &'d WordMasks) -> Self {
        Self {
            masks,
            cache: FxHashMap::default(),
            hits: 0,
            misses: 0,
        }
    }

    /// Number of dictionary words consistent with `pattern`
    ///
    /// Only the first query for a given pattern intersects masks; later queries are
    /// answered from the cache.
    ///
    /// # Examples
    /// ```
    /// use wordgrid_difficulty::core::Pattern;
    /// use wordgrid_difficulty::dictionary::Dictionary;
    /// use wordgrid_difficulty::search::MatchChecker;
    ///
    /// let dictionary = Dictionary::build(["apple", "maple", "grape"]);
    /// let mut checker = MatchChecker::new(dictionary.masks());
    ///
    /// let pattern = Pattern::parse("___le").unwrap();
    /// assert_eq!(checker.count_matches(&pattern), 2);
    /// assert_eq!(checker.count_matches(&pattern), 2);
    /// assert_eq!((checker.misses(), checker.hits()), (1, 1));
    /// ```
    pub fn count_matches(&mut self, pattern: &Pattern) -> usize {
        let key = pattern.key();
        if let Some(&count) = self.cache.get(&key) {
            self.hits += 1;
            return count;
        }

        self.misses += 1;
        let count = self.masks.count_matches(pattern);
        self.cache.insert(key, count);
        count
    }

    /// Queries answered from the cache
    #[inline]
    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Queries that had to intersect masks
    #[inline]
    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Number of distinct patterns cached
    #[inline]
    #[must_use]
    pub fn cached_patterns(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached count and reset the hit/miss counters
    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
