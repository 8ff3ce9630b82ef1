//! Guess outcomes and the feedback shown to the player

use std::fmt;

/// Feedback line reflecting the last guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    Empty,
    Correct,
    Incorrect,
    Solved,
}

impl Feedback {
    /// Text shown to the player
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Correct => "✅ Correct!",
            Self::Incorrect => "❌ Incorrect guess. Try again!",
            Self::Solved => "🎉 Puzzle Solved! 🎉",
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What a single call to `submit_guess` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Input was blank after normalization; nothing changed
    Ignored,
    /// The puzzle is already solved; nothing changed
    Rejected,
    /// No live clue accepts the guess
    Incorrect,
    /// One clue span was replaced by its answer
    Correct {
        clue: String,
        answer: String,
        start: usize,
    },
}

impl GuessOutcome {
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }
}

/// Running counts for the current session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub attempts: usize,
    pub correct: usize,
    pub incorrect: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_feedback_is_empty() {
        assert!(Feedback::default().is_empty());
        assert_eq!(Feedback::default().to_string(), "");
    }

    #[test]
    fn feedback_messages() {
        assert!(Feedback::Correct.message().contains('✅'));
        assert!(Feedback::Incorrect.message().contains('❌'));
        assert_eq!(format!("{}", Feedback::Solved), "🎉 Puzzle Solved! 🎉");
    }

    #[test]
    fn outcome_correctness() {
        let correct = GuessOutcome::Correct {
            clue: "a".into(),
            answer: "b".into(),
            start: 0,
        };
        assert!(correct.is_correct());
        assert!(!GuessOutcome::Incorrect.is_correct());
        assert!(!GuessOutcome::Ignored.is_correct());
    }
}
