//! Guess resolution
//!
//! Pure functions shared by the interactive session and the offline tools.

use super::{ClueSpan, ClueTable, find_live_clues};

/// Normalize a raw guess: surrounding whitespace removed, lowercased
///
/// # Examples
/// ```
/// use bracket_city::core::normalize_guess;
///
/// assert_eq!(normalize_guess("  BaA \n"), "baa");
/// assert_eq!(normalize_guess("   "), "");
/// ```
#[must_use]
pub fn normalize_guess(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Outcome of applying a correct guess to a puzzle text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The puzzle text after the replacement
    pub text: String,
    /// The span that was resolved, as located before the replacement
    pub span: ClueSpan,
    /// The answer text written in place of the span
    pub answer: String,
}

/// Resolve at most one live clue answered by `normalized_guess`
///
/// Spans are tried in start order. The first one whose answer matches has the first
/// textual occurrence of its bracketed text replaced by the answer as stored in the
/// table. Returns `None` when no live clue accepts the guess.
#[must_use]
pub fn resolve_guess(text: &str, table: &ClueTable, normalized_guess: &str) -> Option<Resolution> {
    if normalized_guess.is_empty() {
        return None;
    }

    let span = find_live_clues(text, table)
        .into_iter()
        .find(|span| table.accepts(span.clue(), normalized_guess))?;
    let answer = table.answer(span.clue())?.to_string();

    Some(Resolution {
        text: text.replacen(span.full_text(), &answer, 1),
        span,
        answer,
    })
}
