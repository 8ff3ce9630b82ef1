//! Terminal output formatting
//!
//! Display utilities for CLI results and highlighted puzzle text.

pub mod display;
pub mod formatters;

pub use display::{print_clue_listing, print_solve_result, print_verify_report};
pub use formatters::{Segment, colorize_puzzle, highlight_segments};
