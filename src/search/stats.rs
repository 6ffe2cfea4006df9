//! Run statistics and progress projection
//!
//! State-space counters are exact `BigUint`s: 25! is about 1.55e25, far past the
//! range where `f64` holds integers exactly. Floats appear only in derived ratios.

use crate::core::{BoardSnapshot, CELL_COUNT};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use std::time::{Duration, Instant};

/// Fixed-point scale used when dividing two big counters
const RATIO_SCALE: u64 = 1_000_000_000_000;

/// `n!` as an exact integer
///
/// # Examples
/// ```
/// use num_bigint::BigUint;
/// use wordgrid_difficulty::search::factorial;
///
/// assert_eq!(factorial(0), BigUint::from(1u32));
/// assert_eq!(factorial(5), BigUint::from(120u32));
/// assert_eq!(factorial(25).to_string(), "15511210043330985984000000");
/// ```
#[must_use]
pub fn factorial(n: usize) -> BigUint {
    (2..=n as u64).fold(BigUint::one(), |acc, k| acc * k)
}

/// `numerator / denominator` as a float, exact to twelve decimal places
fn ratio(numerator: &BigUint, denominator: &BigUint) -> f64 {
    if denominator.is_zero() {
        return 0.0;
    }
    let scaled = numerator.clone() * RATIO_SCALE / denominator;
    scaled.to_f64().unwrap_or(f64::INFINITY) / RATIO_SCALE as f64
}

/// Counters for one search run
#[derive(Debug, Clone)]
pub struct Stats {
    factorials: Vec<BigUint>,
    pub total_possible_states: BigUint,
    pub visited_states: u64,
    pub pruned_branches: u64,
    pub pruned_states: BigUint,
    pub winning_states: u64,
    pub winning_boards: Vec<BoardSnapshot>,
    pub memo_hits: u64,
    pub memo_misses: u64,
    started: Instant,
    elapsed: Option<Duration>,
}

/// Snapshot of how far a run has got
#[derive(Debug, Clone, Copy)]
pub struct SearchProgress {
    /// `(visited + pruned) / total`, in `[0, 1]`
    pub fraction_complete: f64,
    pub elapsed: Duration,
    /// Extrapolated run time at the current rate, once any progress exists
    pub projected_total: Option<Duration>,
}

/// Final figures of a completed (or cancelled) run
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub elapsed: Duration,
    pub total_possible_states: BigUint,
    pub visited_states: u64,
    pub pruned_branches: u64,
    pub pruned_states: BigUint,
    pub winning_states: u64,
    /// `pruned_states / total_possible_states`, in `[0, 1]`
    pub fraction_pruned: f64,
    pub memo_hits: u64,
    pub memo_misses: u64,
}

impl SearchReport {
    /// Fraction of match-count queries answered from the cache
    #[must_use]
    pub fn memo_hit_rate(&self) -> f64 {
        let total = self.memo_hits + self.memo_misses;
        if total == 0 {
            0.0
        } else {
            self.memo_hits as f64 / total as f64
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    /// Fresh counters; the clock starts now
    #[must_use]
    pub fn new() -> Self {
        let mut factorials = Vec::with_capacity(CELL_COUNT + 1);
        factorials.push(BigUint::one());
        for k in 1..=CELL_COUNT as u64 {
            let next = factorials[factorials.len() - 1].clone() * k;
            factorials.push(next);
        }

        Self {
            total_possible_states: factorials[CELL_COUNT].clone(),
            factorials,
            visited_states: 0,
            pruned_branches: 0,
            pruned_states: BigUint::zero(),
            winning_states: 0,
            winning_boards: Vec::new(),
            memo_hits: 0,
            memo_misses: 0,
            started: Instant::now(),
            elapsed: None,
        }
    }

    /// Count one placed letter
    #[inline]
    pub const fn record_visit(&mut self) {
        self.visited_states += 1;
    }

    /// Number of states below a placement made at `sequence_index`
    fn remainder_states(&self, sequence_index: usize) -> &BigUint {
        let empty_cells = CELL_COUNT.saturating_sub(sequence_index + 1);
        &self.factorials[empty_cells]
    }

    /// Count a placement that completed a dictionary word
    ///
    /// The rest of the branch is counted as pruned, never simulated. `board` is
    /// kept when given.
    pub fn record_win(&mut self, sequence_index: usize, board: Option<BoardSnapshot>) {
        self.winning_states += 1;
        self.record_pruned_branch(sequence_index);
        if let Some(board) = board {
            self.winning_boards.push(board);
        }
    }

    /// Count a placement after which no line can still become a word
    pub fn record_dead_branch(&mut self, sequence_index: usize) {
        self.record_pruned_branch(sequence_index);
    }

    fn record_pruned_branch(&mut self, sequence_index: usize) {
        self.pruned_branches += 1;
        let remainder = self.remainder_states(sequence_index).clone();
        self.pruned_states += remainder;
    }

    /// Copy memoization counters in from the match checker
    pub const fn record_memo(&mut self, hits: u64, misses: u64) {
        self.memo_hits = hits;
        self.memo_misses = misses;
    }

    /// Stop the clock
    pub fn complete(&mut self) {
        if self.elapsed.is_none() {
            self.elapsed = Some(self.started.elapsed());
        }
    }

    /// True once `complete` has been called
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Time since the run started, frozen at completion
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.started.elapsed())
    }

    /// `(visited + pruned) / total` and the run time it extrapolates to
    #[must_use]
    pub fn progress(&self) -> SearchProgress {
        let covered = self.pruned_states.clone() + self.visited_states;
        let fraction_complete = ratio(&covered, &self.total_possible_states);
        let elapsed = self.elapsed();
        let projected_total = (fraction_complete > 0.0)
            .then(|| Duration::try_from_secs_f64(elapsed.as_secs_f64() / fraction_complete).ok())
            .flatten();

        SearchProgress {
            fraction_complete,
            elapsed,
            projected_total,
        }
    }

    /// Final figures of the run
    #[must_use]
    pub fn report(&self) -> SearchReport {
        SearchReport {
            elapsed: self.elapsed(),
            total_possible_states: self.total_possible_states.clone(),
            visited_states: self.visited_states,
            pruned_branches: self.pruned_branches,
            pruned_states: self.pruned_states.clone(),
            winning_states: self.winning_states,
            fraction_pruned: ratio(&self.pruned_states, &self.total_possible_states),
            memo_hits: self.memo_hits,
            memo_misses: self.memo_misses,
        }
    }
}
