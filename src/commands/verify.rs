//! Puzzle verification - exhaustive resolution-order search
//!
//! Explores every puzzle state reachable by correct guesses and reports whether
//! any order of play leaves brackets that no guess can remove.

use crate::core::{ClueTable, contains_brackets, find_live_clues, normalize_guess, resolve_guess};
use crate::puzzles::Puzzle;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of exploring a puzzle's state space
#[derive(Debug)]
pub struct VerifyReport {
    pub states: usize,
    pub depth: usize,
    pub solved_ends: usize,
    pub stuck_ends: Vec<String>,
    pub duration: Duration,
}

impl VerifyReport {
    /// True when every end state is solved
    #[must_use]
    pub fn is_sound(&self) -> bool {
        self.stuck_ends.is_empty() && self.solved_ends > 0
    }
}

/// Texts reachable from `text` with one correct guess
///
/// Guesses rather than spans are enumerated, and each guess is normalized the way
/// a session normalizes player input, so clues sharing an answer behave exactly as
/// they do in play.
fn successors(text: &str, table: &ClueTable) -> Vec<String> {
    let mut guesses: Vec<String> = find_live_clues(text, table)
        .iter()
        .filter_map(|span| table.answer(span.clue()))
        .map(normalize_guess)
        .filter(|guess| !guess.is_empty())
        .collect();
    guesses.sort_unstable();
    guesses.dedup();

    let mut next: Vec<String> = guesses
        .iter()
        .filter_map(|guess| resolve_guess(text, table, guess))
        .map(|resolution| resolution.text)
        .collect();
    next.sort_unstable();
    next.dedup();
    next
}

/// Explore every resolution order of a puzzle breadth-first
///
/// Each frontier is expanded in parallel. Pass `show_progress` to draw a spinner
/// on stderr.
#[must_use]
pub fn verify_puzzle(puzzle: &Puzzle, show_progress: bool) -> VerifyReport {
    let start = Instant::now();
    let table = puzzle.clues();
    let seed = puzzle.seed();

    let pb = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} depth {pos} | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut seen: FxHashSet<String> = FxHashSet::default();
    seen.insert(seed.to_string());
    let mut frontier = vec![seed.to_string()];
    let mut depth = 0;
    let mut solved_ends = 0;
    let mut stuck_ends = Vec::new();

    while !frontier.is_empty() {
        let expanded: Vec<(String, Vec<String>)> = frontier
            .into_par_iter()
            .map(|text| {
                let next = successors(&text, table);
                (text, next)
            })
            .collect();

        let mut next_frontier = Vec::new();
        for (text, next) in expanded {
            if next.is_empty() {
                if !contains_brackets(&text) && text != seed {
                    solved_ends += 1;
                } else {
                    stuck_ends.push(text);
                }
                continue;
            }
            for candidate in next {
                if seen.insert(candidate.clone()) {
                    next_frontier.push(candidate);
                }
            }
        }

        debug!(depth, frontier = next_frontier.len(), "Expanded frontier");
        if !next_frontier.is_empty() {
            depth += 1;
        }
        pb.set_position(depth as u64);
        pb.set_message(format!("{} states", seen.len()));
        frontier = next_frontier;
    }

    pb.finish_and_clear();

    VerifyReport {
        states: seen.len(),
        depth,
        solved_ends,
        stuck_ends,
        duration: start.elapsed(),
    }
}
