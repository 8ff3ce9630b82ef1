//! Clue listing command
//!
//! Lists the clues a player can answer straight away, without revealing answers.

use crate::core::{ClueSpan, find_live_clues};
use crate::puzzles::Puzzle;

/// A live clue with its answer length
pub struct ClueInfo {
    pub clue: String,
    pub start: usize,
    pub answer_len: usize,
}

/// Live clues of a puzzle's seed text
pub struct ClueListing {
    pub text: String,
    pub spans: Vec<ClueSpan>,
    pub clues: Vec<ClueInfo>,
    pub total_clues: usize,
}

/// List the clues that are live in the seed text
#[must_use]
pub fn list_clues(puzzle: &Puzzle) -> ClueListing {
    let spans = find_live_clues(puzzle.seed(), puzzle.clues());

    let clues = spans
        .iter()
        .map(|span| ClueInfo {
            clue: span.clue().to_string(),
            start: span.start(),
            answer_len: puzzle
                .clues()
                .answer(span.clue())
                .map_or(0, |answer| answer.chars().count()),
        })
        .collect();

    ClueListing {
        text: puzzle.seed().to_string(),
        spans,
        clues,
        total_clues: puzzle.clues().len(),
    }
}
