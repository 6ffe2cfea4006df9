//! Row and column patterns and their compact keys
//!
//! A pattern is the content of one grid line: five slots, each empty or holding a
//! letter. Patterns are memoized by `PatternKey`, which packs each slot into 5 bits:
//! - 0 = empty
//! - 1-26 = letter a-z
//!
//! Slot `i` occupies bits `5*i .. 5*i + 5`, so the key fits in 25 bits and two
//! patterns are equal exactly when their keys are equal.

use super::word::WORD_LENGTH;
use super::{Letter, Word};
use std::fmt;

const BITS_PER_SLOT: u32 = 5;
const SLOT_MASK: u32 = (1 << BITS_PER_SLOT) - 1;

/// Collision-free integer encoding of a `Pattern`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternKey(u32);

impl PatternKey {
    /// Get the raw key value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Contents of one row or column, partial or complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pattern([Option<Letter>; WORD_LENGTH]);

impl Pattern {
    /// Pattern with every slot empty
    pub const EMPTY: Self = Self([None; WORD_LENGTH]);

    /// Create a pattern from its slots
    #[inline]
    #[must_use]
    pub const fn new(slots: [Option<Letter>; WORD_LENGTH]) -> Self {
        Self(slots)
    }

    /// Fully filled pattern spelling `word`
    #[must_use]
    pub fn from_word(word: &Word) -> Self {
        Self((*word.letters()).map(Some))
    }

    /// Parse a pattern from a string like `"ap__e"`
    ///
    /// Accepts letters (either case) for filled slots and `_`, `.` or `-` for
    /// empty slots.
    ///
    /// # Examples
    /// ```
    /// use wordgrid_difficulty::core::Pattern;
    ///
    /// let pattern = Pattern::parse("ap__e").unwrap();
    /// assert_eq!(pattern.filled_count(), 3);
    /// assert_eq!(pattern.to_string(), "ap__e");
    /// assert!(Pattern::parse("ap_e").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut slots = [None; WORD_LENGTH];
        for (slot, ch) in slots.iter_mut().zip(chars) {
            *slot = match ch {
                '_' | '.' | '-' => None,
                _ => Some(Letter::from_char(ch)?),
            };
        }
        Some(Self(slots))
    }

    /// Get the slots in order
    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[Option<Letter>; WORD_LENGTH] {
        &self.0
    }

    /// Get the slot at a position (0-4)
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Option<Letter> {
        self.0[position]
    }

    /// Copy of this pattern with one slot replaced
    #[must_use]
    pub fn with(mut self, position: usize, letter: Option<Letter>) -> Self {
        self.0[position] = letter;
        self
    }

    /// Number of non-empty slots
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when no slot is empty
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Letters of a fully filled pattern, or `None` if any slot is empty
    #[must_use]
    pub fn letters(&self) -> Option<[Letter; WORD_LENGTH]> {
        let mut letters = [Letter::from_index(0); WORD_LENGTH];
        for (out, slot) in letters.iter_mut().zip(self.0) {
            *out = slot?;
        }
        Some(letters)
    }

    /// Iterate over `(position, letter)` for every non-empty slot
    pub fn constraints(&self) -> impl Iterator<Item = (usize, Letter)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(position, slot)| slot.map(|letter| (position, letter)))
    }

    /// Compact memoization key for this pattern
    ///
    /// # Examples
    /// ```
    /// use wordgrid_difficulty::core::Pattern;
    ///
    /// assert_eq!(Pattern::EMPTY.key().value(), 0);
    /// // 'b' is code 2 in slot 0
    /// assert_eq!(Pattern::parse("b____").unwrap().key().value(), 2);
    /// // 'a' is code 1 in slot 1 => 1 << 5
    /// assert_eq!(Pattern::parse("_a___").unwrap().key().value(), 32);
    /// ```
    #[must_use]
    pub fn key(&self) -> PatternKey {
        let mut key = 0u32;
        for (position, slot) in self.0.iter().enumerate() {
            let code = slot.map_or(0, |letter| letter.index() as u32 + 1);
            key |= code << (BITS_PER_SLOT * position as u32);
        }
        PatternKey(key)
    }

    /// Rebuild the pattern a key was made from
    ///
    /// Returns `None` for values no pattern encodes to.
    #[must_use]
    pub fn from_key(key: PatternKey) -> Option<Self> {
        if key.0 >> (BITS_PER_SLOT * WORD_LENGTH as u32) != 0 {
            return None;
        }

        let mut slots = [None; WORD_LENGTH];
        for (position, slot) in slots.iter_mut().enumerate() {
            let code = (key.0 >> (BITS_PER_SLOT * position as u32)) & SLOT_MASK;
            *slot = match code {
                0 => None,
                1..=26 => Some(Letter::from_index(code as u8 - 1)),
                _ => return None,
            };
        }
        Some(Self(slots))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            match slot {
                Some(letter) => write!(f, "{letter}")?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_has_zero_key() {
        assert_eq!(Pattern::EMPTY.key().value(), 0);
        assert_eq!(Pattern::EMPTY.filled_count(), 0);
        assert!(!Pattern::EMPTY.is_full());
    }

    #[test]
    fn full_pattern_from_word() {
        let word = Word::new("apple").unwrap();
        let pattern = Pattern::from_word(&word);

        assert!(pattern.is_full());
        assert_eq!(pattern.letters(), Some(*word.letters()));
        assert_eq!(pattern.to_string(), "apple");
    }

    #[test]
    fn partial_pattern_has_no_letters() {
        let pattern = Pattern::parse("appl_").unwrap();
        assert!(!pattern.is_full());
        assert_eq!(pattern.letters(), None);
    }

    #[test]
    fn keys_distinguish_position() {
        let a_first = Pattern::parse("a____").unwrap();
        let a_second = Pattern::parse("_a___").unwrap();
        assert_ne!(a_first.key(), a_second.key());
    }

    #[test]
    fn keys_distinguish_empty_from_letter_a() {
        // 'a' must not share the empty code
        let empty = Pattern::parse("_____").unwrap();
        let a = Pattern::parse("a____").unwrap();
        assert_ne!(empty.key(), a.key());
    }

    #[test]
    fn key_decodes_back_to_pattern() {
        for s in ["zzzzz", "a_b_c", "_____", "____z", "grape", "q.u.x"] {
            let pattern = Pattern::parse(s).unwrap();
            assert_eq!(Pattern::from_key(pattern.key()), Some(pattern), "{s}");
        }
    }

    #[test]
    fn from_key_rejects_unused_codes() {
        // code 27 in slot 0
        assert_eq!(Pattern::from_key(PatternKey(27)), None);
        // bit beyond slot 4
        assert_eq!(Pattern::from_key(PatternKey(1 << 25)), None);
    }

    #[test]
    fn with_replaces_single_slot() {
        let pattern = Pattern::EMPTY.with(2, Letter::from_byte(b'x'));
        assert_eq!(pattern.to_string(), "__x__");
        assert_eq!(pattern.with(2, None), Pattern::EMPTY);
    }

    #[test]
    fn constraints_skip_empty_slots() {
        let pattern = Pattern::parse("a_c_e").unwrap();
        let positions: Vec<usize> = pattern.constraints().map(|(p, _)| p).collect();
        assert_eq!(positions, vec![0, 2, 4]);
    }

    #[test]
    fn parse_rejects_invalid() {
        assert!(Pattern::parse("abcdef").is_none());
        assert!(Pattern::parse("ab").is_none());
        assert!(Pattern::parse("ab3de").is_none());
        assert!(Pattern::parse("").is_none());
    }
}
