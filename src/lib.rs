//! Wordgrid Difficulty
//!
//! Difficulty scoring for a 5x5 word-placement grid game. Letters are drawn in a
//! fixed order and each one is placed on an empty cell; the game is won once any
//! row or column spells a dictionary word. The scorer explores every placement of
//! a sequence's first letters, pruning whole subtrees with per-position bitmask
//! match counts.
//!
//! # Quick Start
//!
//! ```rust
//! use wordgrid_difficulty::core::Sequence;
//! use wordgrid_difficulty::dictionary::Dictionary;
//! use wordgrid_difficulty::search::{SearchConfig, search};
//!
//! let dictionary = Dictionary::build(["apple", "grape", "lemon"]);
//! let sequence = Sequence::parse("apple").unwrap();
//!
//! let outcome = search(&dictionary, &sequence, SearchConfig::new(2));
//! let report = outcome.stats.report();
//! println!("visited {} states", report.visited_states);
//! ```

// Core domain types
pub mod core;

// Word bitmasks and the dictionary
pub mod dictionary;

// Placement search and its statistics
pub mod search;

// Buildable-words curve
pub mod curve;

// Sequence files and generation
pub mod sequences;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
