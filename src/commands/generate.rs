//! Generate command
//!
//! Draws random sequences from a letter distribution.

use crate::sequences::{DEFAULT_SEQUENCE_LENGTH, GenerateError, LetterDistribution, SequenceRecord};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for sequence generation
pub struct GenerateConfig {
    pub count: usize,
    pub length: usize,
    pub seed: Option<u64>,
    pub distribution: LetterDistribution,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            length: DEFAULT_SEQUENCE_LENGTH,
            seed: None,
            distribution: LetterDistribution::scrabble(),
        }
    }
}

/// Generate `config.count` records with ids `0..count`
///
/// Each record is an independent draw from a full bag. The same seed always
/// yields the same records.
///
/// # Errors
///
/// Returns `GenerateError::NotEnoughTiles` if `config.length` exceeds the bag size.
pub fn generate_records(config: &GenerateConfig) -> Result<Vec<SequenceRecord>, GenerateError> {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    (0..config.count)
        .map(|id| {
            Ok(SequenceRecord {
                id: id.to_string(),
                sequence: config.distribution.draw(config.length, &mut rng)?,
            })
        })
        .collect()
}
