//! Validated puzzle definition
//!
//! A puzzle is a seed text plus the clue table that answers it.

use super::{SEED_CLUES, SEED_TEXT};
use crate::core::{ClueTable, find_live_clues};
use std::fmt;
use std::io;
use std::path::PathBuf;

/// A seed text and its clue table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    seed: String,
    clues: ClueTable,
}

/// Error type for invalid or unreadable puzzles
#[derive(Debug)]
pub enum PuzzleError {
    EmptyText,
    EmptyClue,
    EmptyAnswer(String),
    InvalidClue(String),
    InvalidAnswer(String),
    PaddedAnswer(String),
    DuplicateClue(String),
    NoLiveClues,
    Io { path: PathBuf, source: io::Error },
    Parse(toml::de::Error),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyText => write!(f, "Puzzle text is empty"),
            Self::EmptyClue => write!(f, "Clue text must not be empty"),
            Self::EmptyAnswer(clue) => write!(f, "Clue '{clue}' has an empty answer"),
            Self::InvalidClue(clue) => {
                write!(f, "Clue '{clue}' must not contain brackets or line breaks")
            }
            Self::InvalidAnswer(clue) => {
                write!(f, "Answer to '{clue}' must not contain brackets")
            }
            Self::PaddedAnswer(clue) => {
                write!(f, "Answer to '{clue}' has leading or trailing whitespace")
            }
            Self::DuplicateClue(clue) => write!(f, "Clue '{clue}' is defined twice"),
            Self::NoLiveClues => write!(f, "Puzzle text contains no known clue"),
            Self::Io { path, source } => {
                write!(f, "Failed to read {}: {source}", path.display())
            }
            Self::Parse(e) => write!(f, "Invalid puzzle file: {e}"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for PuzzleError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl Puzzle {
    /// Create a puzzle from a seed text and clue/answer pairs
    ///
    /// # Errors
    /// Returns `PuzzleError` if:
    /// - The seed text is blank
    /// - A clue is empty, repeated, or contains brackets or line terminators
    /// - An answer is blank, padded with whitespace, or contains brackets
    /// - The seed text holds no bracketed clue from the table
    ///
    /// # Examples
    /// ```
    /// use bracket_city::puzzles::Puzzle;
    ///
    /// let puzzle = Puzzle::new("The lazy [animal that barks].", [("animal that barks", "dog")]).unwrap();
    /// assert_eq!(puzzle.clues().len(), 1);
    ///
    /// assert!(Puzzle::new("no clues", [("animal that barks", "dog")]).is_err());
    /// ```
    pub fn new<K, V>(
        seed: impl Into<String>,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, PuzzleError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let seed = seed.into();
        if seed.trim().is_empty() {
            return Err(PuzzleError::EmptyText);
        }

        let mut clues = ClueTable::new();
        for (clue, answer) in pairs {
            let clue: String = clue.into();
            let answer: String = answer.into();

            if clue.is_empty() {
                return Err(PuzzleError::EmptyClue);
            }
            if clue.contains(['[', ']', '\n', '\r', '\u{2028}', '\u{2029}']) {
                return Err(PuzzleError::InvalidClue(clue));
            }
            if answer.trim().is_empty() {
                return Err(PuzzleError::EmptyAnswer(clue));
            }
            if answer.contains(['[', ']']) {
                return Err(PuzzleError::InvalidAnswer(clue));
            }
            if answer.trim() != answer {
                return Err(PuzzleError::PaddedAnswer(clue));
            }
            if clues.contains(&clue) {
                return Err(PuzzleError::DuplicateClue(clue));
            }
            clues.insert(clue, answer);
        }

        if find_live_clues(&seed, &clues).is_empty() {
            return Err(PuzzleError::NoLiveClues);
        }

        Ok(Self { seed, clues })
    }

    /// The puzzle compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            seed: SEED_TEXT.to_string(),
            clues: SEED_CLUES.iter().copied().collect(),
        }
    }

    /// The fully-bracketed starting text
    #[inline]
    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    #[inline]
    #[must_use]
    pub const fn clues(&self) -> &ClueTable {
        &self.clues
    }
}
