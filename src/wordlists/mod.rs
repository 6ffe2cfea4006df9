//! Word lists for the grid game
//!
//! Loads dictionaries from plain-text word lists.

pub mod loader;

pub use loader::{dictionary_from_str, load_from_file};
