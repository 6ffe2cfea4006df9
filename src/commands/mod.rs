//! Command implementations

pub mod curve;
pub mod generate;
pub mod score;

pub use curve::{CurveResult, run_curve};
pub use generate::{GenerateConfig, generate_records};
pub use score::{ScoreConfig, ScoreResult, score_sequence};
