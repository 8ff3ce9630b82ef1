//! Bracket City
//!
//! A word puzzle where every blank is a bracketed clue. Answering a clue replaces
//! it with its answer, which may complete the text of an enclosing clue.
//!
//! # Quick Start
//!
//! ```rust
//! use bracket_city::game::{Feedback, Session};
//! use bracket_city::puzzles::Puzzle;
//!
//! let mut session = Session::new(Puzzle::embedded());
//! session.submit_guess("baa");
//!
//! assert_eq!(session.feedback(), Feedback::Correct);
//! assert!(session.text().contains("[farm animal that makes a baa sound]"));
//! ```

// Core domain types
pub mod core;

// Guess-resolution state machine
pub mod game;

// Embedded and file-based puzzles
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logging setup
pub mod telemetry;
