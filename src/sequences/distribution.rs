//! Letter tile distributions and random sequence generation

use crate::core::{ALPHABET_SIZE, Letter, Sequence};
use rand::Rng;
use std::fmt;

/// Standard English Scrabble tile counts, a-z, without blanks
const SCRABBLE_COUNTS: [u32; ALPHABET_SIZE] = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
];

/// Sequence length drawn when none is given
pub const DEFAULT_SEQUENCE_LENGTH: usize = 50;

/// Number of tiles of each letter in the bag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterDistribution([u32; ALPHABET_SIZE]);

/// Error type for sequence generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    NotEnoughTiles { requested: usize, available: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughTiles {
                requested,
                available,
            } => write!(
                f,
                "Cannot draw {requested} letters from a bag of {available} tiles"
            ),
        }
    }
}

impl std::error::Error for GenerateError {}

impl LetterDistribution {
    /// Create a distribution from per-letter counts, a-z
    #[must_use]
    pub const fn from_counts(counts: [u32; ALPHABET_SIZE]) -> Self {
        Self(counts)
    }

    /// The 98 lettered tiles of English Scrabble
    #[must_use]
    pub const fn scrabble() -> Self {
        Self(SCRABBLE_COUNTS)
    }

    /// Tiles of `letter` in the bag
    #[must_use]
    pub const fn count(&self, letter: Letter) -> u32 {
        self.0[letter.index()]
    }

    /// Total tiles in the bag
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }

    /// Every tile in the bag, alphabetically
    fn tiles(&self) -> Vec<Letter> {
        Letter::all()
            .flat_map(|letter| std::iter::repeat_n(letter, self.count(letter) as usize))
            .collect()
    }

    /// Draw `length` tiles without replacement, in draw order
    ///
    /// # Errors
    /// Returns `GenerateError::NotEnoughTiles` if the bag holds fewer than
    /// `length` tiles.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordgrid_difficulty::sequences::LetterDistribution;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let sequence = LetterDistribution::scrabble().draw(25, &mut rng).unwrap();
    /// assert_eq!(sequence.len(), 25);
    /// ```
    pub fn draw<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Result<Sequence, GenerateError> {
        let mut bag = self.tiles();
        if length > bag.len() {
            return Err(GenerateError::NotEnoughTiles {
                requested: length,
                available: bag.len(),
            });
        }

        let mut drawn = Vec::with_capacity(length);
        for _ in 0..length {
            let index = rng.random_range(0..bag.len());
            drawn.push(bag.swap_remove(index));
        }
        Ok(Sequence::from(drawn))
    }
}

impl Default for LetterDistribution {
    fn default() -> Self {
        Self::scrabble()
    }
}
