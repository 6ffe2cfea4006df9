//! Per-position, per-letter word masks
//!
//! `masks[position][letter]` has bit `i` set iff word `i` has `letter` at
//! `position`. Counting the words consistent with a pattern is then the popcount of
//! the all-words mask intersected with one mask per filled slot.

use super::WordSet;
use crate::core::{ALPHABET_SIZE, Letter, Pattern, WORD_LENGTH, Word};

/// Immutable bitmasks indexing a word list by letter position
#[derive(Debug, Clone)]
pub struct WordMasks {
    masks: Vec<WordSet>,
    all_words: WordSet,
}

impl WordMasks {
    /// Build masks for `words`, numbering each word by its position in the slice
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        let mut masks = vec![WordSet::empty(words.len()); WORD_LENGTH * ALPHABET_SIZE];

        for (index, word) in words.iter().enumerate() {
            for (position, &letter) in word.letters().iter().enumerate() {
                masks[Self::slot(position, letter)].insert(index);
            }
        }

        Self {
            masks,
            all_words: WordSet::full(words.len()),
        }
    }

    #[inline]
    const fn slot(position: usize, letter: Letter) -> usize {
        position * ALPHABET_SIZE + letter.index()
    }

    /// Words having `letter` at `position`
    #[inline]
    #[must_use]
    pub fn mask(&self, position: usize, letter: Letter) -> &WordSet {
        &self.masks[Self::slot(position, letter)]
    }

    /// Mask with every word set, meaning "no constraint"
    #[inline]
    #[must_use]
    pub const fn all_words(&self) -> &WordSet {
        &self.all_words
    }

    /// Number of indexed words
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.all_words.capacity()
    }

    /// Words consistent with every filled slot of `pattern`
    #[must_use]
    pub fn candidates(&self, pattern: &Pattern) -> WordSet {
        let mut candidates = self.all_words.clone();
        for (position, letter) in pattern.constraints() {
            candidates.intersect_with(self.mask(position, letter));
        }
        candidates
    }

    /// Number of words consistent with every filled slot of `pattern`
    ///
    /// Empty slots impose no constraint.
    #[must_use]
    pub fn count_matches(&self, pattern: &Pattern) -> usize {
        let constraints: Vec<&WordSet> = pattern
            .constraints()
            .map(|(position, letter)| self.mask(position, letter))
            .collect();
        self.all_words.intersection_len(&constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn masks_mark_letter_positions() {
        let list = words(&["apple", "grape", "melon"]);
        let masks = WordMasks::build(&list);
        let p = Letter::from_byte(b'p').unwrap();

        // 'p' at position 1: apple only
        assert_eq!(masks.mask(1, p).iter().collect::<Vec<_>>(), vec![0]);
        // 'p' at position 3: grape only
        assert_eq!(masks.mask(3, p).iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(masks.all_words().len(), 3);
        assert_eq!(masks.word_count(), 3);
    }

    #[test]
    fn count_matches_empty_pattern_is_all_words() {
        let list = words(&["apple", "grape", "melon"]);
        let masks = WordMasks::build(&list);
        assert_eq!(masks.count_matches(&Pattern::EMPTY), 3);
    }

    #[test]
    fn count_matches_partial_patterns() {
        let list = words(&["apple", "grape", "melon", "maple"]);
        let masks = WordMasks::build(&list);

        assert_eq!(masks.count_matches(&Pattern::parse("____e").unwrap()), 3);
        assert_eq!(masks.count_matches(&Pattern::parse("m____").unwrap()), 2);
        assert_eq!(masks.count_matches(&Pattern::parse("m___e").unwrap()), 1);
        assert_eq!(masks.count_matches(&Pattern::parse("z____").unwrap()), 0);
    }

    #[test]
    fn candidates_agree_with_count() {
        let list = words(&["apple", "grape", "melon", "maple"]);
        let masks = WordMasks::build(&list);
        let pattern = Pattern::parse("___le").unwrap();

        let candidates = masks.candidates(&pattern);
        assert_eq!(candidates.iter().collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(candidates.len(), masks.count_matches(&pattern));
    }

    #[test]
    fn empty_word_list_matches_nothing() {
        let masks = WordMasks::build(&[]);
        assert_eq!(masks.count_matches(&Pattern::EMPTY), 0);
        assert_eq!(masks.count_matches(&Pattern::parse("a____").unwrap()), 0);
    }
}
