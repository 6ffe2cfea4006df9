//! Dictionary and word masks
//!
//! Built once per word list and shared read-only by every search over it.

mod masks;
mod word_set;

pub use masks::WordMasks;
pub use word_set::WordSet;

use crate::core::{Letter, Pattern, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

/// Immutable 5-letter word list with exact membership and positional masks
///
/// Word `i` is the `i`-th accepted entry of the input, and owns bit `i` of every
/// mask.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    members: FxHashSet<[Letter; WORD_LENGTH]>,
    masks: WordMasks,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are trimmed; blank lines are ignored. Entries that are not valid
    /// 5-letter words, and repeats of an earlier entry, are skipped with a warning.
    ///
    /// # Examples
    /// ```
    /// use wordgrid_difficulty::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::build(["apple", "grape", "kiwi", "apple"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains_str("grape"));
    /// assert!(!dictionary.contains_str("kiwi"));
    /// ```
    pub fn build<'a>(entries: impl IntoIterator<Item = &'a str>) -> Self {
        let mut words = Vec::new();
        let mut members = FxHashSet::default();

        for (line, entry) in entries.into_iter().enumerate() {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                continue;
            }
            match Word::new(trimmed) {
                Ok(word) => {
                    if members.insert(*word.letters()) {
                        words.push(word);
                    } else {
                        log::warn!("Skipping duplicate word {trimmed:?} (entry {})", line + 1);
                    }
                }
                Err(e) => log::warn!("Skipping entry {} {trimmed:?}: {e}", line + 1),
            }
        }

        Self::from_words(words, members)
    }

    fn from_words(words: Vec<Word>, members: FxHashSet<[Letter; WORD_LENGTH]>) -> Self {
        let masks = WordMasks::build(&words);
        log::info!("Indexed {} dictionary words", words.len());
        Self {
            words,
            members,
            masks,
        }
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the dictionary has no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in index order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Positional masks over the words
    #[inline]
    #[must_use]
    pub const fn masks(&self) -> &WordMasks {
        &self.masks
    }

    /// Exact membership test on a full line of letters
    #[inline]
    #[must_use]
    pub fn contains(&self, letters: &[Letter; WORD_LENGTH]) -> bool {
        self.members.contains(letters)
    }

    /// Exact membership test on a string, ignoring case
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(word.letters()))
    }

    /// True if `pattern` is fully filled and spells a dictionary word
    ///
    /// Partial patterns are never members.
    #[must_use]
    pub fn is_word(&self, pattern: &Pattern) -> bool {
        pattern
            .letters()
            .is_some_and(|letters| self.contains(&letters))
    }
}
