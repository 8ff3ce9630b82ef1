//! Clue table: the fixed clue → answer lookup for a puzzle
//!
//! Keys are matched exactly (case-sensitive) against bracketed text. Answers are
//! compared case-insensitively against guesses.

use rustc_hash::FxHashMap;

/// Immutable mapping from clue text to answer text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueTable {
    answers: FxHashMap<String, String>,
}

impl ClueTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the answer for a clue, if the clue is known
    ///
    /// # Examples
    /// ```
    /// use bracket_city::core::ClueTable;
    ///
    /// let table: ClueTable = [("animal that barks", "dog")].into_iter().collect();
    /// assert_eq!(table.answer("animal that barks"), Some("dog"));
    /// assert_eq!(table.answer("Animal That Barks"), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn answer(&self, clue: &str) -> Option<&str> {
        self.answers.get(clue).map(String::as_str)
    }

    /// Check whether `clue` is a key of the table
    #[inline]
    #[must_use]
    pub fn contains(&self, clue: &str) -> bool {
        self.answers.contains_key(clue)
    }

    /// Check whether an already-normalized guess answers `clue`
    ///
    /// Returns false for unknown clues.
    #[must_use]
    pub fn accepts(&self, clue: &str, normalized_guess: &str) -> bool {
        self.answer(clue)
            .is_some_and(|answer| answer.to_lowercase() == normalized_guess)
    }

    /// Insert a pair, returning the previous answer if the clue was already present
    pub(crate) fn insert(&mut self, clue: String, answer: String) -> Option<String> {
        self.answers.insert(clue, answer)
    }

    /// Number of clues in the table
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ClueTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (clue, answer) in iter {
            table.insert(clue.into(), answer.into());
        }
        table
    }
}
