//! Command implementations

pub mod clues;
pub mod simple;
pub mod solve;
pub mod verify;

pub use clues::{ClueInfo, ClueListing, list_clues};
pub use simple::run_simple;
pub use solve::{ResolutionOrder, SolveConfig, SolveResult, SolveStep, solve_puzzle};
pub use verify::{VerifyReport, verify_puzzle};
