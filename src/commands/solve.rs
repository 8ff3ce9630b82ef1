//! Puzzle solving command
//!
//! Plays a puzzle to completion by answering live clues from its own clue table.

use crate::game::{GuessOutcome, Session};
use crate::puzzles::Puzzle;
use rand::prelude::IndexedRandom;

/// Which live clue to answer at each step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionOrder {
    /// Always the leftmost live clue
    #[default]
    First,
    /// A uniformly random live clue
    Random,
}

/// Configuration for solving a puzzle
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveConfig {
    pub order: ResolutionOrder,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(order: ResolutionOrder) -> Self {
        Self { order }
    }
}

/// Result of solving a puzzle
pub struct SolveResult {
    pub solved: bool,
    pub steps: Vec<SolveStep>,
    pub final_text: String,
}

/// A single resolution in the solution path
pub struct SolveStep {
    pub clue: String,
    pub answer: String,
    pub text_after: String,
    pub live_before: usize,
    pub live_after: usize,
}

/// Solve a puzzle by submitting answers from its clue table
///
/// Stops when the puzzle is solved or when no live clue remains. Each correct
/// guess removes one bracket pair, so the loop always terminates.
#[must_use]
pub fn solve_puzzle(puzzle: &Puzzle, config: SolveConfig) -> SolveResult {
    let mut session = Session::new(puzzle.clone());
    let mut steps = Vec::new();

    while !session.is_solved() {
        let live = session.live_clues();
        let span = match config.order {
            ResolutionOrder::First => live.first(),
            ResolutionOrder::Random => live.choose(&mut rand::rng()),
        };
        let Some(span) = span else {
            break;
        };
        let Some(answer) = puzzle.clues().answer(span.clue()) else {
            break;
        };

        let live_before = live.len();
        let answer = answer.to_string();

        match session.submit_guess(&answer) {
            GuessOutcome::Correct { clue, answer, .. } => steps.push(SolveStep {
                clue,
                answer,
                text_after: session.text().to_string(),
                live_before,
                live_after: session.live_clues().len(),
            }),
            _ => break,
        }
    }

    SolveResult {
        solved: session.is_solved(),
        steps,
        final_text: session.text().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_embedded_puzzle_in_order() {
        let result = solve_puzzle(&Puzzle::embedded(), SolveConfig::default());

        assert!(result.solved);
        assert_eq!(result.steps.len(), 8);
        let answers: Vec<&str> = result.steps.iter().map(|s| s.answer.as_str()).collect();
        assert_eq!(
            answers,
            vec!["baa", "sheep", "milk", "fox", "dog", "white", "yellow", "apple"]
        );
    }

    #[test]
    fn random_order_also_solves() {
        for _ in 0..20 {
            let result = solve_puzzle(&Puzzle::embedded(), SolveConfig::new(ResolutionOrder::Random));
            assert!(result.solved);
            assert_eq!(result.steps.len(), 8);
            assert!(!result.final_text.contains('['));
        }
    }

    #[test]
    fn steps_record_live_counts() {
        let result = solve_puzzle(&Puzzle::embedded(), SolveConfig::default());
        let first = &result.steps[0];
        assert_eq!(first.clue, "sound a sheep makes");
        assert_eq!(first.live_before, 6);
        assert_eq!(first.live_after, 6);
        assert_eq!(result.steps.last().map(|s| s.live_after), Some(0));
    }

    #[test]
    fn reports_stuck_puzzle() {
        // "[note]" never becomes a clue, so the brackets can never go away
        let puzzle = Puzzle::new("[x] [note]", [("x", "1")]).unwrap();
        let result = solve_puzzle(&puzzle, SolveConfig::default());

        assert!(!result.solved);
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.final_text, "1 [note]");
    }
}
