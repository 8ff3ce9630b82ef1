//! Puzzles for Bracket City
//!
//! The default puzzle is embedded in the binary; others load from TOML files.

mod embedded;
pub mod loader;
mod puzzle;

pub use embedded::{SEED_CLUES, SEED_CLUES_COUNT, SEED_TEXT};
pub use puzzle::{Puzzle, PuzzleError};
