//! Buildable-words curve
//!
//! A coarse difficulty signal independent of the grid search: for each prefix of a
//! sequence, how many dictionary words could be spelled from the prefix's letters
//! if order and placement did not matter. Entry `i` of the curve covers the first
//! `i` letters, for `i` in `0..=min(25, len)`.

use crate::core::{ALPHABET_SIZE, CELL_COUNT, Letter, Sequence, Word};
use rayon::prelude::*;

/// Multiset of letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts([u8; ALPHABET_SIZE]);

impl LetterCounts {
    /// Count the letters of a slice
    #[must_use]
    pub fn from_letters(letters: &[Letter]) -> Self {
        let mut counts = Self::default();
        for &letter in letters {
            counts.add(letter);
        }
        counts
    }

    /// Count the letters of a word
    #[must_use]
    pub fn from_word(word: &Word) -> Self {
        Self::from_letters(word.letters())
    }

    /// Add one occurrence of `letter`
    #[inline]
    pub const fn add(&mut self, letter: Letter) {
        self.0[letter.index()] = self.0[letter.index()].saturating_add(1);
    }

    /// Occurrences of `letter`
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: Letter) -> u8 {
        self.0[letter.index()]
    }

    /// True if every letter occurs in `self` no more often than in `other`
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).all(|(mine, theirs)| mine <= theirs)
    }
}

/// Number of words buildable from each prefix of `sequence`
///
/// # Examples
/// ```
/// use wordgrid_difficulty::core::{Sequence, Word};
/// use wordgrid_difficulty::curve::buildable_curve;
///
/// let words: Vec<Word> = ["apple", "plead"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// let sequence = Sequence::parse("appledx").unwrap();
///
/// // "apple" needs 5 letters, "plead" needs the 'd' at index 5
/// assert_eq!(buildable_curve(&words, &sequence), vec![0, 0, 0, 0, 0, 1, 2, 2]);
/// ```
#[must_use]
pub fn buildable_curve(words: &[Word], sequence: &Sequence) -> Vec<usize> {
    let prefix = sequence.prefix(CELL_COUNT);
    let mut curve = vec![0usize; prefix.len() + 1];

    // Each word becomes buildable at one prefix length and stays buildable after it
    for word in words {
        let needed = LetterCounts::from_word(word);
        let mut available = LetterCounts::default();
        let first = (0..=prefix.len()).find(|&len| {
            if len > 0 {
                available.add(prefix[len - 1]);
            }
            needed.is_subset_of(&available)
        });
        if let Some(len) = first {
            curve[len] += 1;
        }
    }

    for i in 1..curve.len() {
        curve[i] += curve[i - 1];
    }
    curve
}

/// Buildable curves for many sequences, in input order
#[must_use]
pub fn buildable_curves(words: &[Word], sequences: &[Sequence]) -> Vec<Vec<usize>> {
    sequences
        .par_iter()
        .map(|sequence| buildable_curve(words, sequence))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn letter(byte: u8) -> Letter {
        Letter::from_byte(byte).unwrap()
    }

    #[test]
    fn letter_counts_subset() {
        let apple = LetterCounts::from_word(&Word::new("apple").unwrap());
        assert_eq!(apple.get(letter(b'p')), 2);

        let mut bag = LetterCounts::from_letters(&[letter(b'a'), letter(b'p'), letter(b'l')]);
        bag.add(letter(b'e'));
        assert!(!apple.is_subset_of(&bag));
        bag.add(letter(b'p'));
        assert!(apple.is_subset_of(&bag));
        assert!(LetterCounts::default().is_subset_of(&bag));
    }

    #[test]
    fn curve_starts_at_zero_and_is_non_decreasing() {
        let list = words(&["apple", "grape", "maple", "melon", "lemon"]);
        let sequence = Sequence::parse("elpamgronlepzq").unwrap();
        let curve = buildable_curve(&list, &sequence);

        assert_eq!(curve.len(), sequence.len() + 1);
        assert_eq!(curve[0], 0);
        assert!(curve.windows(2).all(|w| w[0] <= w[1]));
        assert!(*curve.last().unwrap() <= list.len());
    }

    #[test]
    fn curve_is_capped_at_25_letters() {
        let list = words(&["aaaaa"]);
        let sequence = Sequence::parse(&"a".repeat(40)).unwrap();
        let curve = buildable_curve(&list, &sequence);

        assert_eq!(curve.len(), CELL_COUNT + 1);
        assert_eq!(curve[4], 0);
        assert_eq!(curve[5], 1);
        assert_eq!(curve[25], 1);
    }

    #[test]
    fn curve_respects_repeated_letters() {
        let list = words(&["apple"]);
        // only one 'p' ever drawn
        let sequence = Sequence::parse("aplexyz").unwrap();
        assert!(buildable_curve(&list, &sequence).iter().all(|&n| n == 0));
    }

    #[test]
    fn curve_of_empty_sequence() {
        let list = words(&["apple"]);
        let sequence = Sequence::parse("").unwrap();
        assert_eq!(buildable_curve(&list, &sequence), vec![0]);
    }

    #[test]
    fn batch_curves_keep_input_order() {
        let list = words(&["apple", "melon"]);
        let sequences: Vec<Sequence> = ["melonapple", "applemelon", "zzz"]
            .iter()
            .map(|s| Sequence::parse(s).unwrap())
            .collect();

        let curves = buildable_curves(&list, &sequences);
        assert_eq!(curves.len(), 3);
        for (curve, sequence) in curves.iter().zip(&sequences) {
            assert_eq!(curve, &buildable_curve(&list, sequence));
        }
        assert_eq!(curves[0][5], 1);
        assert_eq!(curves[1][5], 1);
        assert_eq!(curves[2], vec![0, 0, 0, 0]);
    }
}
