//! Curve command
//!
//! Computes the buildable-words curve for every record of a batch.

use crate::curve::buildable_curves;
use crate::dictionary::Dictionary;
use crate::sequences::SequenceRecord;
use std::time::{Duration, Instant};

/// Curves for a batch of records, in input order
pub struct CurveResult {
    pub records: Vec<SequenceRecord>,
    pub curves: Vec<Vec<usize>>,
    pub duration: Duration,
}

impl CurveResult {
    /// Final curve value of each record, i.e. words buildable from the full prefix
    #[must_use]
    pub fn final_counts(&self) -> Vec<usize> {
        self.curves
            .iter()
            .map(|curve| curve.last().copied().unwrap_or(0))
            .collect()
    }
}

/// Compute curves for `records` against `dictionary`
#[must_use]
pub fn run_curve(dictionary: &Dictionary, records: Vec<SequenceRecord>) -> CurveResult {
    let start = Instant::now();
    let sequences: Vec<_> = records.iter().map(|r| r.sequence.clone()).collect();
    let curves = buildable_curves(dictionary.words(), &sequences);
    log::info!("Computed {} curves", curves.len());

    CurveResult {
        records,
        curves,
        duration: start.elapsed(),
    }
}
