//! Puzzle session state machine
//!
//! Owns the current puzzle text, the pending input, the feedback line and the
//! solved flag. Every text mutation is followed by [`Session::advance_derived_state`],
//! which recomputes the live clue list and the solved flag.

use super::{Feedback, GuessOutcome, Statistics};
use crate::core::{ClueSpan, contains_brackets, find_live_clues, normalize_guess, resolve_guess};
use crate::puzzles::Puzzle;
use tracing::{debug, info, warn};

/// Coarse state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleStatus {
    Unsolved,
    Solved,
}

/// A single play-through of one puzzle
#[derive(Debug, Clone)]
pub struct Session {
    puzzle: Puzzle,
    text: String,
    input: String,
    feedback: Feedback,
    solved: bool,
    live_clues: Vec<ClueSpan>,
    stats: Statistics,
}

impl Session {
    /// Start a session at the puzzle's seed text
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let text = puzzle.seed().to_string();
        let mut session = Self {
            puzzle,
            text,
            input: String::new(),
            feedback: Feedback::Empty,
            solved: false,
            live_clues: Vec::new(),
            stats: Statistics::default(),
        };
        session.advance_derived_state();
        session
    }

    /// Submit a guess
    ///
    /// The guess is trimmed and lowercased. A blank guess clears the feedback and
    /// changes nothing else. Otherwise at most one live clue is resolved: the first,
    /// in text order, whose answer equals the guess.
    pub fn submit_guess(&mut self, raw_input: &str) -> GuessOutcome {
        if self.solved {
            return GuessOutcome::Rejected;
        }

        let guess = normalize_guess(raw_input);
        if guess.is_empty() {
            self.feedback = Feedback::Empty;
            return GuessOutcome::Ignored;
        }

        self.stats.attempts += 1;

        let Some(resolution) = resolve_guess(&self.text, self.puzzle.clues(), &guess) else {
            debug!(%guess, "Guess matched no live clue");
            self.stats.incorrect += 1;
            self.feedback = Feedback::Incorrect;
            return GuessOutcome::Incorrect;
        };

        debug!(
            clue = resolution.span.clue(),
            start = resolution.span.start(),
            "Resolved clue"
        );
        self.stats.correct += 1;
        self.text = resolution.text;
        self.input.clear();
        self.feedback = Feedback::Correct;
        self.advance_derived_state();

        GuessOutcome::Correct {
            clue: resolution.span.clue().to_string(),
            answer: resolution.answer,
            start: resolution.span.start(),
        }
    }

    /// Submit the pending input as a guess
    pub fn submit_input(&mut self) -> GuessOutcome {
        let input = self.input.clone();
        self.submit_guess(&input)
    }

    /// Recompute everything derived from the puzzle text
    ///
    /// Becoming solved overwrites the feedback with the completion message. A solved
    /// session whose text regains brackets drops back to unsolved without feedback.
    pub fn advance_derived_state(&mut self) {
        self.live_clues = find_live_clues(&self.text, self.puzzle.clues());

        let has_brackets = contains_brackets(&self.text);
        if !has_brackets && self.text != self.puzzle.seed() {
            if !self.solved {
                self.solved = true;
                self.feedback = Feedback::Solved;
                info!(attempts = self.stats.attempts, "Puzzle solved");
            }
        } else if self.solved && has_brackets {
            warn!("Brackets reappeared in a solved puzzle; marking it unsolved");
            self.solved = false;
        }
    }

    /// Return to the seed text, as a reload would
    pub fn reset(&mut self) {
        self.text = self.puzzle.seed().to_string();
        self.input.clear();
        self.feedback = Feedback::Empty;
        self.solved = false;
        self.stats = Statistics::default();
        self.advance_derived_state();
    }

    /// Current puzzle text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Live clues of the current text, in start order
    #[inline]
    #[must_use]
    pub fn live_clues(&self) -> &[ClueSpan] {
        &self.live_clues
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub const fn status(&self) -> PuzzleStatus {
        if self.solved {
            PuzzleStatus::Solved
        } else {
            PuzzleStatus::Unsolved
        }
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> Statistics {
        self.stats
    }

    /// Pending (not yet submitted) input
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_session() -> Session {
        Session::new(Puzzle::embedded())
    }

    const SOLUTION: [&str; 8] = [
        "baa", "sheep", "milk", "fox", "dog", "white", "yellow", "apple",
    ];

    #[test]
    fn new_session_starts_unsolved() {
        let session = seed_session();
        assert_eq!(session.status(), PuzzleStatus::Unsolved);
        assert_eq!(session.text(), crate::puzzles::SEED_TEXT);
        assert_eq!(session.live_clues().len(), 6);
        assert!(session.feedback().is_empty());
    }

    #[test]
    fn correct_guess_replaces_span() {
        let mut session = seed_session();
        let outcome = session.submit_guess("baa");

        assert!(matches!(
            outcome,
            GuessOutcome::Correct { ref clue, .. } if clue == "sound a sheep makes"
        ));
        assert!(!session.text().contains("[sound a sheep makes]"));
        assert!(session.text().contains("[farm animal that makes a baa sound]"));
        assert_eq!(session.feedback(), Feedback::Correct);
    }

    #[test]
    fn dependent_clue_becomes_live() {
        let mut session = seed_session();
        session.submit_guess("baa");
        assert!(
            session
                .live_clues()
                .iter()
                .any(|s| s.clue() == "farm animal that makes a baa sound")
        );

        assert!(session.submit_guess("sheep").is_correct());
        assert!(session.text().starts_with("[drink from a sheep]."));
        assert_eq!(session.feedback(), Feedback::Correct);
    }

    #[test]
    fn incorrect_guess_leaves_text_unchanged() {
        let mut session = seed_session();
        let before = session.text().to_string();

        assert_eq!(session.submit_guess("zebra"), GuessOutcome::Incorrect);
        assert_eq!(session.text(), before);
        assert_eq!(session.feedback(), Feedback::Incorrect);
    }

    #[test]
    fn answer_to_hidden_clue_is_incorrect() {
        // "milk" answers a clue that is not live until sheep is resolved
        let mut session = seed_session();
        assert_eq!(session.submit_guess("milk"), GuessOutcome::Incorrect);
    }

    #[test]
    fn empty_guess_clears_feedback() {
        let mut session = seed_session();
        session.submit_guess("zebra");
        let before = session.text().to_string();

        assert_eq!(session.submit_guess("   "), GuessOutcome::Ignored);
        assert_eq!(session.text(), before);
        assert!(session.feedback().is_empty());
        assert_eq!(session.stats().attempts, 1);
    }

    #[test]
    fn guesses_are_normalized() {
        let mut a = seed_session();
        let mut b = seed_session();
        a.submit_guess("  FoX\t");
        b.submit_guess("fox");
        assert_eq!(a.text(), b.text());
        assert!(a.text().contains("quick brown fox jumps"));
    }

    #[test]
    fn duplicate_clues_resolve_leftmost_first() {
        let puzzle = Puzzle::new("[pet] and [pet]", [("pet", "cat")]).unwrap();
        let mut session = Session::new(puzzle);

        session.submit_guess("cat");
        assert_eq!(session.text(), "cat and [pet]");
        assert!(!session.is_solved());

        session.submit_guess("cat");
        assert_eq!(session.text(), "cat and cat");
        assert!(session.is_solved());
    }

    #[test]
    fn full_solution_solves_puzzle() {
        let mut session = seed_session();
        for answer in SOLUTION {
            assert!(session.submit_guess(answer).is_correct(), "{answer} rejected");
        }

        assert!(session.is_solved());
        assert_eq!(session.feedback(), Feedback::Solved);
        assert!(session.live_clues().is_empty());
        assert_eq!(
            session.text(),
            "milk. The quick brown fox jumps over the lazy dog. \
             Is the sky white or yellow? I prefer apple."
        );
    }

    #[test]
    fn solved_puzzle_rejects_guesses() {
        let mut session = seed_session();
        for answer in SOLUTION {
            session.submit_guess(answer);
        }
        let solved_text = session.text().to_string();

        assert_eq!(session.submit_guess("apple"), GuessOutcome::Rejected);
        assert_eq!(session.submit_guess(""), GuessOutcome::Rejected);
        assert_eq!(session.text(), solved_text);
        assert_eq!(session.feedback(), Feedback::Solved);
    }

    #[test]
    fn correct_guess_clears_pending_input() {
        let mut session = seed_session();
        for c in "dog".chars() {
            session.push_input(c);
        }
        assert!(session.submit_input().is_correct());
        assert_eq!(session.input(), "");

        for c in "cow".chars() {
            session.push_input(c);
        }
        assert_eq!(session.submit_input(), GuessOutcome::Incorrect);
        assert_eq!(session.input(), "cow");
    }

    #[test]
    fn reappearing_brackets_clear_solved_flag() {
        let mut session = seed_session();
        for answer in SOLUTION {
            session.submit_guess(answer);
        }
        assert!(session.is_solved());

        session.text.push_str(" [stray]");
        session.advance_derived_state();

        assert_eq!(session.status(), PuzzleStatus::Unsolved);
        assert_eq!(session.feedback(), Feedback::Solved);
    }

    #[test]
    fn solved_flag_tracks_brackets_and_seed() {
        let mut session = seed_session();
        session.text = session.puzzle().seed().replace(['[', ']'], "");
        session.advance_derived_state();
        assert!(session.is_solved());

        session.text = session.puzzle().seed().to_string();
        session.advance_derived_state();
        assert!(!session.is_solved());
    }

    #[test]
    fn reset_restores_seed() {
        let mut session = seed_session();
        session.submit_guess("dog");
        session.submit_guess("zebra");
        session.reset();

        assert_eq!(session.text(), crate::puzzles::SEED_TEXT);
        assert_eq!(session.stats(), Statistics::default());
        assert!(session.feedback().is_empty());
    }

    #[test]
    fn statistics_count_attempts() {
        let mut session = seed_session();
        session.submit_guess("dog");
        session.submit_guess("zebra");
        session.submit_guess("");

        let stats = session.stats();
        assert_eq!(stats.attempts, 2);
        assert_eq!(stats.correct, 1);
        assert_eq!(stats.incorrect, 1);
    }
}
