//! Single lowercase letter representation
//!
//! A `Letter` is stored as its alphabet index (a = 0 ... z = 25) so it can be used
//! directly to index per-letter tables.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A lowercase ASCII letter stored as its alphabet index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from an ASCII byte, accepting either case
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use wordgrid_difficulty::core::Letter;
    ///
    /// assert_eq!(Letter::from_byte(b'c').unwrap().index(), 2);
    /// assert_eq!(Letter::from_byte(b'C'), Letter::from_byte(b'c'));
    /// assert!(Letter::from_byte(b'3').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_lowercase() - b'a'))
        } else {
            None
        }
    }

    /// Create a letter from a `char`, accepting either case
    #[inline]
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        u8::try_from(ch).ok().and_then(Self::from_byte)
    }

    /// Create a letter from its alphabet index (0-25)
    ///
    /// # Panics
    /// Panics in debug mode if index >= 26
    #[inline]
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        debug_assert!((index as usize) < ALPHABET_SIZE, "Letter index must be < 26");
        Self(index)
    }

    /// Alphabet index (a = 0 ... z = 25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Lowercase ASCII byte for this letter
    #[inline]
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        b'a' + self.0
    }

    /// Lowercase `char` for this letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        self.to_byte() as char
    }

    /// Iterate over all 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_SIZE as u8).map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
