//! Ordered letter sequence driving one game

use super::Letter;
use std::fmt;
use std::str::FromStr;

/// The ordered letters to be placed, one per turn
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence(Vec<Letter>);

/// Error type for invalid sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A character that is neither a letter nor whitespace, with its character offset
    InvalidCharacter { ch: char, offset: usize },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { ch, offset } => {
                write!(f, "Sequence contains invalid character {ch:?} at offset {offset}")
            }
        }
    }
}

impl std::error::Error for SequenceError {}

impl Sequence {
    /// Parse a sequence, ignoring case and whitespace
    ///
    /// # Errors
    /// Returns `SequenceError::InvalidCharacter` for any character that is not an
    /// ASCII letter or whitespace.
    ///
    /// # Examples
    /// ```
    /// use wordgrid_difficulty::core::Sequence;
    ///
    /// let sequence = Sequence::parse("ApPle\n").unwrap();
    /// assert_eq!(sequence.to_string(), "apple");
    /// assert!(Sequence::parse("ap-ple").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, SequenceError> {
        text.chars()
            .enumerate()
            .filter(|(_, ch)| !ch.is_whitespace())
            .map(|(offset, ch)| {
                Letter::from_char(ch).ok_or(SequenceError::InvalidCharacter { ch, offset })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Get the letters in draw order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    /// Letter drawn at `index`, or `None` past the end
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Letter> {
        self.0.get(index).copied()
    }

    /// Number of letters in the sequence
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the sequence has no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first `len` letters (or all of them if shorter)
    #[must_use]
    pub fn prefix(&self, len: usize) -> &[Letter] {
        &self.0[..len.min(self.0.len())]
    }
}

impl From<Vec<Letter>> for Sequence {
    fn from(letters: Vec<Letter>) -> Self {
        Self(letters)
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
