//! Difficulty search
//!
//! Exhaustively places the leading letters of a sequence and measures how much of
//! the full state space is decided early by a win or a dead board.

mod engine;
mod match_checker;
mod stats;

pub use engine::{
    CancelFlag, DEFAULT_DEPTH, SearchConfig, SearchObserver, SearchOutcome, Searcher, search,
};
pub use match_checker::MatchChecker;
pub use stats::{SearchProgress, SearchReport, Stats, factorial};
