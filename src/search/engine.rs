//! Depth-bounded backtracking search over letter placements
//!
//! For each of the first `depth` letters of a sequence, every empty cell is tried
//! in row-major order. A placement that completes a dictionary word in its row or
//! column is a win; one that leaves every row and column with zero matching words
//! is a dead branch. Both stop the branch and count the `(25 - index - 1)!` states
//! below it as pruned. Otherwise the search recurses on the next letter.

use super::match_checker::MatchChecker;
use super::stats::Stats;
use crate::core::{CELL_COUNT, GRID_SIZE, GameBoard, Letter, Sequence};
use crate::dictionary::Dictionary;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Number of leading letters explored when no depth is given
pub const DEFAULT_DEPTH: usize = 6;

/// Search configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of leading letters to place exhaustively
    pub depth: usize,
    /// Keep a snapshot of every winning board
    pub capture_boards: bool,
}

impl SearchConfig {
    #[must_use]
    pub const fn new(depth: usize) -> Self {
        Self {
            depth,
            capture_boards: true,
        }
    }

    #[must_use]
    pub const fn with_capture_boards(mut self, capture_boards: bool) -> Self {
        self.capture_boards = capture_boards;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

/// Shared flag asking a running search to stop
///
/// Checked once per recursive call. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the search to stop at its next check
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Hook called as top-level placements finish
pub trait SearchObserver {
    /// Called after every trial of the first letter, with counters so far
    fn top_level_trial(&mut self, letter: Letter, row: usize, col: usize, stats: &Stats) {
        let _ = (letter, row, col, stats);
    }
}

/// Observer that ignores every event
impl SearchObserver for () {}

/// Result of one search run
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub stats: Stats,
    /// Depth actually searched after clamping to the sequence and grid
    pub depth: usize,
    /// True if the run stopped early on a `CancelFlag`
    pub cancelled: bool,
}

/// Depth-first placer bound to one dictionary and sequence
#[derive(Debug)]
pub struct Searcher<'a> {
    dictionary: &'a Dictionary,
    checker: MatchChecker<'a>,
    sequence: &'a Sequence,
    config: SearchConfig,
    stats: Stats,
    cancel: CancelFlag,
}

impl<'a> Searcher<'a> {
    /// Prepare a search
    ///
    /// Depth is clamped to the sequence length and the number of cells.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, sequence: &'a Sequence, config: SearchConfig) -> Self {
        let depth = config.depth.min(sequence.len()).min(CELL_COUNT);
        if depth < config.depth {
            log::warn!(
                "Search depth {} exceeds available letters; clamping to {depth}",
                config.depth
            );
        }

        Self {
            dictionary,
            checker: MatchChecker::new(dictionary.masks()),
            sequence,
            config: SearchConfig { depth, ..config },
            stats: Stats::new(),
            cancel: CancelFlag::new(),
        }
    }

    /// Stop early when `cancel` is set
    #[must_use]
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Depth that will be searched
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.config.depth
    }

    /// Run the search to completion (or cancellation)
    pub fn run<O: SearchObserver>(mut self, observer: &mut O) -> SearchOutcome {
        log::info!(
            "Searching {} letters of {:?} against {} words",
            self.config.depth,
            self.sequence.to_string(),
            self.dictionary.len()
        );

        let mut board = GameBoard::new(self.dictionary.len());
        let flow = self.explore(&mut board, 0, observer);
        debug_assert_eq!(board.filled_count(), 0, "board not restored");

        self.stats.record_memo(self.checker.hits(), self.checker.misses());
        self.stats.complete();
        log::info!(
            "Search finished: {} visited, {} winning, {:?} elapsed",
            self.stats.visited_states,
            self.stats.winning_states,
            self.stats.elapsed()
        );

        SearchOutcome {
            stats: self.stats,
            depth: self.config.depth,
            cancelled: flow.is_break(),
        }
    }

    fn explore<O: SearchObserver>(
        &mut self,
        board: &mut GameBoard,
        index: usize,
        observer: &mut O,
    ) -> ControlFlow<()> {
        if index >= self.config.depth {
            return ControlFlow::Continue(());
        }
        if self.cancel.is_cancelled() {
            return ControlFlow::Break(());
        }
        let Some(letter) = self.sequence.get(index) else {
            return ControlFlow::Continue(());
        };

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if !board.is_empty_cell(row, col) {
                    continue;
                }

                self.trial(board, index, letter, row, col, observer)?;

                if index == 0 {
                    log::debug!("{letter} => ({row}, {col})");
                    observer.top_level_trial(letter, row, col, &self.stats);
                }
            }
        }

        ControlFlow::Continue(())
    }

    /// Place `letter` at `(row, col)`, classify the result, and undo it
    fn trial<O: SearchObserver>(
        &mut self,
        board: &mut GameBoard,
        index: usize,
        letter: Letter,
        row: usize,
        col: usize,
        observer: &mut O,
    ) -> ControlFlow<()> {
        let mut placed = board.place(row, col, letter);
        self.stats.record_visit();

        let row_pattern = placed.row(row);
        let col_pattern = placed.col(col);
        let row_wins = self.dictionary.is_word(&row_pattern);
        let col_wins = self.dictionary.is_word(&col_pattern);

        if row_wins || col_wins {
            let snapshot = self.config.capture_boards.then(|| placed.snapshot());
            self.stats.record_win(index, snapshot);
            return ControlFlow::Continue(());
        }

        let row_matches = self.checker.count_matches(&row_pattern);
        let col_matches = self.checker.count_matches(&col_pattern);
        placed.set_row_matches(row, row_matches);
        placed.set_col_matches(col, col_matches);

        if placed.is_still_winnable() {
            self.explore(&mut placed, index + 1, observer)
        } else {
            self.stats.record_dead_branch(index);
            ControlFlow::Continue(())
        }
    }
}

/// Search `sequence` against `dictionary` without an observer or cancellation
///
/// # Examples
/// ```
/// use wordgrid_difficulty::core::Sequence;
/// use wordgrid_difficulty::dictionary::Dictionary;
/// use wordgrid_difficulty::search::{SearchConfig, search};
///
/// let dictionary = Dictionary::build(["apple", "grape"]);
/// let sequence = Sequence::parse("apple").unwrap();
/// let outcome = search(&dictionary, &sequence, SearchConfig::new(2));
///
/// // every first placement leaves some line open, so all 25 * 24 follow-ups run
/// assert_eq!(outcome.stats.visited_states, 25 + 25 * 24);
/// assert_eq!(outcome.stats.winning_states, 0);
/// ```
#[must_use]
pub fn search(dictionary: &Dictionary, sequence: &Sequence, config: SearchConfig) -> SearchOutcome {
    Searcher::new(dictionary, sequence, config).run(&mut ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::factorial;

    #[test]
    fn depth_zero_visits_nothing() {
        let dictionary = Dictionary::build(["apple"]);
        let sequence = Sequence::parse("apple").unwrap();
        let outcome = search(&dictionary, &sequence, SearchConfig::new(0));

        assert_eq!(outcome.stats.visited_states, 0);
        assert_eq!(outcome.depth, 0);
        assert!(!outcome.cancelled);
    }

    #[test]
    fn depth_is_clamped_to_sequence_length() {
        let dictionary = Dictionary::build(["apple"]);
        let sequence = Sequence::parse("ap").unwrap();
        let searcher = Searcher::new(&dictionary, &sequence, SearchConfig::new(10));
        assert_eq!(searcher.depth(), 2);

        let outcome = searcher.run(&mut ());
        assert_eq!(outcome.stats.visited_states, 25 + 25 * 24);
    }

    #[test]
    fn depth_is_clamped_to_cell_count() {
        let dictionary = Dictionary::build(["apple"]);
        let sequence = Sequence::parse(&"a".repeat(40)).unwrap();
        let searcher = Searcher::new(&dictionary, &sequence, SearchConfig::new(40));
        assert_eq!(searcher.depth(), CELL_COUNT);
    }

    #[test]
    fn empty_dictionary_prunes_every_first_move() {
        let dictionary = Dictionary::build(std::iter::empty());
        let sequence = Sequence::parse("abcdef").unwrap();
        let outcome = search(&dictionary, &sequence, SearchConfig::new(3));

        assert_eq!(outcome.stats.visited_states, 25);
        assert_eq!(outcome.stats.pruned_branches, 25);
        assert_eq!(outcome.stats.pruned_states, factorial(24) * 25u32);
        assert_eq!(outcome.stats.pruned_states, outcome.stats.total_possible_states);
    }

    #[test]
    fn unmatched_letter_prunes_placement_lines() {
        // no word contains 'z' anywhere, but other lines stay open
        let dictionary = Dictionary::build(["apple"]);
        let sequence = Sequence::parse("z").unwrap();
        let outcome = search(&dictionary, &sequence, SearchConfig::new(1));

        assert_eq!(outcome.stats.visited_states, 25);
        assert_eq!(outcome.stats.pruned_branches, 0);
    }

    #[test]
    fn winning_row_is_detected_and_captured() {
        let dictionary = Dictionary::build(["aaaaa"]);
        let sequence = Sequence::parse("aaaaa").unwrap();
        let outcome = search(&dictionary, &sequence, SearchConfig::new(5));

        assert!(outcome.stats.winning_states > 0);
        assert_eq!(
            outcome.stats.winning_boards.len() as u64,
            outcome.stats.winning_states
        );
        for board in &outcome.stats.winning_boards {
            assert!(board.lines().any(|line| dictionary.is_word(&line)));
        }
    }

    #[test]
    fn capture_can_be_disabled() {
        let dictionary = Dictionary::build(["aaaaa"]);
        let sequence = Sequence::parse("aaaaa").unwrap();
        let config = SearchConfig::new(5).with_capture_boards(false);
        let outcome = search(&dictionary, &sequence, config);

        assert!(outcome.stats.winning_states > 0);
        assert!(outcome.stats.winning_boards.is_empty());
    }

    #[test]
    fn cancelled_search_stops_immediately() {
        let dictionary = Dictionary::build(["apple"]);
        let sequence = Sequence::parse("apple").unwrap();
        let cancel = CancelFlag::new();
        cancel.cancel();

        let outcome = Searcher::new(&dictionary, &sequence, SearchConfig::new(3))
            .with_cancel_flag(cancel)
            .run(&mut ());

        assert!(outcome.cancelled);
        assert_eq!(outcome.stats.visited_states, 0);
        assert!(outcome.stats.is_complete());
    }

    struct CancelAfter {
        trials: usize,
        cancel: CancelFlag,
        seen: usize,
    }

    impl SearchObserver for CancelAfter {
        fn top_level_trial(&mut self, _letter: Letter, _row: usize, _col: usize, _stats: &Stats) {
            self.seen += 1;
            if self.seen == self.trials {
                self.cancel.cancel();
            }
        }
    }

    #[test]
    fn cancel_mid_run_keeps_partial_counts() {
        let dictionary = Dictionary::build(["apple", "grape"]);
        let sequence = Sequence::parse("apple").unwrap();
        let cancel = CancelFlag::new();
        let mut observer = CancelAfter {
            trials: 3,
            cancel: cancel.clone(),
            seen: 0,
        };

        let outcome = Searcher::new(&dictionary, &sequence, SearchConfig::new(2))
            .with_cancel_flag(cancel)
            .run(&mut observer);

        assert!(outcome.cancelled);
        // three full first-letter subtrees, then the fourth trial is cut short at the
        // cancellation check
        assert_eq!(observer.seen, 3);
        assert_eq!(outcome.stats.visited_states, 3 * (1 + 24) + 1);
    }

    struct RecordingObserver(Vec<(usize, usize)>);

    impl SearchObserver for RecordingObserver {
        fn top_level_trial(&mut self, _letter: Letter, row: usize, col: usize, _stats: &Stats) {
            self.0.push((row, col));
        }
    }

    #[test]
    fn observer_sees_row_major_top_level_trials() {
        let dictionary = Dictionary::build(["apple"]);
        let sequence = Sequence::parse("a").unwrap();
        let mut observer = RecordingObserver(Vec::new());
        let _ = Searcher::new(&dictionary, &sequence, SearchConfig::new(1)).run(&mut observer);

        assert_eq!(observer.0.len(), CELL_COUNT);
        assert_eq!(observer.0[0], (0, 0));
        assert_eq!(observer.0[1], (0, 1));
        assert_eq!(observer.0[5], (1, 0));
        assert_eq!(observer.0[24], (4, 4));
    }

    #[test]
    fn memo_counters_are_recorded() {
        let dictionary = Dictionary::build(["apple", "grape"]);
        let sequence = Sequence::parse("ap").unwrap();
        let outcome = search(&dictionary, &sequence, SearchConfig::new(2));

        let stats = &outcome.stats;
        // two queries per non-winning placement
        assert_eq!(stats.memo_hits + stats.memo_misses, 2 * stats.visited_states);
        assert!(stats.memo_hits > stats.memo_misses);
    }
}
