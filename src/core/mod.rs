//! Core domain types for Bracket City
//!
//! Clue lookup, clue extraction and guess resolution. Everything here is a pure
//! function of its inputs and carries no session state.

mod clue_table;
mod extractor;
mod resolve;

pub use clue_table::ClueTable;
pub use extractor::{ClueSpan, contains_brackets, find_live_clues};
pub use resolve::{Resolution, normalize_guess, resolve_guess};
