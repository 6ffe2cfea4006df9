//! Dictionary word representation
//!
//! A Word stores a 5-letter lowercase word as both text and letter indices.

use super::Letter;
use std::fmt;

/// Number of letters in every word, and cells in every row and column
pub const WORD_LENGTH: usize = 5;

/// A 5-letter lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [Letter; WORD_LENGTH],
}

/// Why a dictionary entry is not a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word has non-ASCII characters"),
            Self::InvalidCharacters => write!(f, "Word may only contain letters a-z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Validate and index a word
    ///
    /// Input is lower-cased before validation.
    ///
    /// # Errors
    /// `NonAscii` is checked first, then `InvalidLength`, then
    /// `InvalidCharacters` for anything outside a-z.
    ///
    /// # Examples
    /// ```
    /// use wordgrid_difficulty::core::Word;
    ///
    /// let word = Word::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(Word::new("pear").is_err());
    /// assert!(Word::new("app1e").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        let mut letters = [Letter::from_index(0); WORD_LENGTH];
        for (slot, &byte) in letters.iter_mut().zip(text.as_bytes()) {
            *slot = Letter::from_byte(byte).ok_or(WordError::InvalidCharacters)?;
        }

        Ok(Self { text, letters })
    }

    /// Lowercase text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters in order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// If `position` is not below `WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
