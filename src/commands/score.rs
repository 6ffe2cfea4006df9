//! Score command
//!
//! Runs the difficulty search for one sequence and collects its report.

use crate::core::{BoardSnapshot, CELL_COUNT, Letter, Sequence};
use crate::dictionary::Dictionary;
use crate::search::{
    CancelFlag, DEFAULT_DEPTH, SearchConfig, SearchObserver, SearchReport, Searcher, Stats,
};
use indicatif::{ProgressBar, ProgressStyle};

/// Configuration for scoring a sequence
pub struct ScoreConfig {
    pub depth: usize,
    pub capture_boards: bool,
    pub show_progress: bool,
}

impl ScoreConfig {
    #[must_use]
    pub const fn new(depth: usize) -> Self {
        Self {
            depth,
            capture_boards: true,
            show_progress: false,
        }
    }
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

/// Result of scoring a sequence
pub struct ScoreResult {
    pub sequence: String,
    pub depth: usize,
    pub dictionary_size: usize,
    pub report: SearchReport,
    pub winning_boards: Vec<BoardSnapshot>,
    pub cancelled: bool,
}

/// Progress bar over the 25 top-level placements
struct ProgressReporter {
    pb: ProgressBar,
}

impl ProgressReporter {
    fn new(visible: bool) -> Self {
        if !visible {
            return Self {
                pb: ProgressBar::hidden(),
            };
        }

        let pb = ProgressBar::new(CELL_COUNT as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} cells | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        Self { pb }
    }
}

impl SearchObserver for ProgressReporter {
    fn top_level_trial(&mut self, letter: Letter, row: usize, col: usize, stats: &Stats) {
        let progress = stats.progress();
        let projected = progress
            .projected_total
            .map_or_else(|| "?".to_string(), |d| format!("{:.1} min", d.as_secs_f64() / 60.0));
        self.pb.set_message(format!(
            "{letter} => ({row}, {col}) | visited {} | progress {:.10}% | projected {projected}",
            stats.visited_states,
            progress.fraction_complete * 100.0
        ));
        self.pb.inc(1);
    }
}

/// Score a sequence against a dictionary
///
/// If `cancel` is given, the search stops as soon as it is set and the result
/// holds the partial counts.
#[must_use]
pub fn score_sequence(
    dictionary: &Dictionary,
    sequence: &Sequence,
    config: &ScoreConfig,
    cancel: Option<CancelFlag>,
) -> ScoreResult {
    let search_config =
        SearchConfig::new(config.depth).with_capture_boards(config.capture_boards);
    let mut searcher = Searcher::new(dictionary, sequence, search_config);
    if let Some(cancel) = cancel {
        searcher = searcher.with_cancel_flag(cancel);
    }

    let mut reporter = ProgressReporter::new(config.show_progress && searcher.depth() > 0);
    let outcome = searcher.run(&mut reporter);
    reporter.pb.finish_and_clear();

    ScoreResult {
        sequence: sequence.to_string(),
        depth: outcome.depth,
        dictionary_size: dictionary.len(),
        report: outcome.stats.report(),
        winning_boards: outcome.stats.winning_boards,
        cancelled: outcome.cancelled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::factorial;

    #[test]
    fn score_reports_search_counts() {
        let dictionary = Dictionary::build(["apple", "grape"]);
        let sequence = Sequence::parse("apple").unwrap();
        let result = score_sequence(&dictionary, &sequence, &ScoreConfig::new(1), None);

        assert_eq!(result.sequence, "apple");
        assert_eq!(result.depth, 1);
        assert_eq!(result.dictionary_size, 2);
        assert_eq!(result.report.visited_states, 25);
        assert_eq!(result.report.total_possible_states, factorial(25));
        assert!(!result.cancelled);
    }

    #[test]
    fn score_empty_dictionary_prunes_everything() {
        let dictionary = Dictionary::build(std::iter::empty());
        let sequence = Sequence::parse("apple").unwrap();
        let result = score_sequence(&dictionary, &sequence, &ScoreConfig::default(), None);

        assert_eq!(result.report.pruned_branches, 25);
        assert!((result.report.fraction_pruned - 1.0).abs() < 1e-12);
        assert!(result.winning_boards.is_empty());
    }

    #[test]
    fn score_honours_cancel() {
        let dictionary = Dictionary::build(["apple"]);
        let sequence = Sequence::parse("apple").unwrap();
        let cancel = CancelFlag::new();
        cancel.cancel();

        let result = score_sequence(&dictionary, &sequence, &ScoreConfig::new(4), Some(cancel));
        assert!(result.cancelled);
        assert_eq!(result.report.visited_states, 0);
    }

    #[test]
    fn hidden_progress_reporter_still_counts() {
        let dictionary = Dictionary::build(["apple"]);
        let sequence = Sequence::parse("a").unwrap();
        let mut reporter = ProgressReporter::new(false);
        let _ = Searcher::new(&dictionary, &sequence, SearchConfig::new(1)).run(&mut reporter);
        assert_eq!(reporter.pb.position(), CELL_COUNT as u64);
    }
}
