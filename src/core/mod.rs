//! Core domain types for the word grid
//!
//! Letters, words, line patterns, drawn sequences and the 5x5 board. Nothing here
//! knows about the dictionary.

mod board;
mod letter;
mod pattern;
mod sequence;
mod word;

pub use board::{BoardSnapshot, CELL_COUNT, GRID_SIZE, GameBoard, Placement};
pub use letter::{ALPHABET_SIZE, Letter};
pub use pattern::{Pattern, PatternKey};
pub use sequence::{Sequence, SequenceError};
pub use word::{WORD_LENGTH, Word, WordError};
