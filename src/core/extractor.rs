//! Clue extraction
//!
//! Scans puzzle text for bracketed clue spans. Matching is innermost-first: a span
//! opens at a `[` and closes at the first following `]`, provided no other bracket
//! or line terminator (`\n`, `\r`, U+2028, U+2029) sits in between. For `[a[b]]`
//! the scan yields `[b]` only.
//!
//! Only spans whose inner text is a key of the [`ClueTable`] are returned; every
//! other bracketed substring is dropped silently.

use super::ClueTable;

/// A live clue located in the puzzle text
///
/// Offsets are byte offsets into the text the span was extracted from. Spans are
/// derived values: recompute them after every change to the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClueSpan {
    full_text: String,
    start: usize,
}

impl ClueSpan {
    fn new(full_text: &str, start: usize) -> Self {
        Self {
            full_text: full_text.to_string(),
            start,
        }
    }

    /// The span including its brackets, e.g. `[animal that barks]`
    #[inline]
    #[must_use]
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// The clue between the brackets
    #[inline]
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.full_text[1..self.full_text.len() - 1]
    }

    /// Byte offset of the opening bracket
    #[inline]
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the closing bracket
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.full_text.len()
    }
}

/// Find every live clue in `text`, ordered by start offset
///
/// Never fails; text without brackets simply yields no spans.
///
/// # Examples
/// ```
/// use bracket_city::core::{ClueTable, find_live_clues};
///
/// let table: ClueTable = [("b", "bee")].into_iter().collect();
/// let spans = find_live_clues("[a[b]] and [c]", &table);
///
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].full_text(), "[b]");
/// assert_eq!(spans[0].start(), 2);
/// ```
#[must_use]
pub fn find_live_clues(text: &str, table: &ClueTable) -> Vec<ClueSpan> {
    let mut spans = Vec::new();
    let mut open: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        match ch {
            '[' => open = Some(idx),
            ']' => {
                if let Some(start) = open.take() {
                    let inner = &text[start + 1..idx];
                    if table.contains(inner) {
                        spans.push(ClueSpan::new(&text[start..=idx], start));
                    }
                }
            }
            '\n' | '\r' | '\u{2028}' | '\u{2029}' => open = None,
            _ => {}
        }
    }

    spans
}

/// Check whether the text still holds any bracket character
#[inline]
#[must_use]
pub fn contains_brackets(text: &str) -> bool {
    text.contains(['[', ']'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::{SEED_CLUES, SEED_TEXT};

    fn seed_table() -> ClueTable {
        SEED_CLUES.iter().copied().collect()
    }

    fn clues(spans: &[ClueSpan]) -> Vec<&str> {
        spans.iter().map(ClueSpan::clue).collect()
    }

    #[test]
    fn seed_text_live_clues() {
        let spans = find_live_clues(SEED_TEXT, &seed_table());
        assert_eq!(
            clues(&spans),
            vec![
                "sound a sheep makes",
                "animal that jumps",
                "animal that barks",
                "opposite of black",
                "color of the sun",
                "a common red fruit",
            ]
        );
    }

    #[test]
    fn spans_point_at_their_text() {
        let spans = find_live_clues(SEED_TEXT, &seed_table());
        for span in &spans {
            assert_eq!(&SEED_TEXT[span.start()..span.end()], span.full_text());
        }
    }

    const STRAY_AND_NESTED: &str = "]] [x] [[y] [x] [z[x]] ] [y]";

    fn stray_table() -> ClueTable {
        [("x", "1"), ("y", "2"), ("z[x]", "3")].into_iter().collect()
    }

    #[test]
    fn offsets_strictly_increase() {
        let spans = find_live_clues(SEED_TEXT, &seed_table());
        assert!(spans.windows(2).all(|w| w[0].end() <= w[1].start()));

        let spans = find_live_clues(STRAY_AND_NESTED, &stray_table());
        assert_eq!(clues(&spans), vec!["x", "y", "x", "x", "y"]);
        assert!(spans.windows(2).all(|w| w[0].start() < w[1].start()));
        assert!(spans.windows(2).all(|w| w[0].end() <= w[1].start()));
    }

    #[test]
    fn unknown_brackets_are_dropped() {
        let table: ClueTable = [("known", "k")].into_iter().collect();
        let spans = find_live_clues("[submit] [known] [Known]", &table);
        assert_eq!(clues(&spans), vec!["known"]);
        assert_eq!(spans[0].start(), 9);
    }

    #[test]
    fn nested_brackets_yield_innermost() {
        let table: ClueTable = [("b", "x"), ("a[b]", "y"), ("a", "z")].into_iter().collect();
        let spans = find_live_clues("[a[b]]", &table);
        assert_eq!(clues(&spans), vec!["b"]);
    }

    #[test]
    fn outer_clue_appears_once_inner_is_resolved() {
        let table = seed_table();
        let text = "[drink from a [farm animal that makes a baa sound]]";
        assert_eq!(
            clues(&find_live_clues(text, &table)),
            vec!["farm animal that makes a baa sound"]
        );
        assert_eq!(
            clues(&find_live_clues("[drink from a sheep]", &table)),
            vec!["drink from a sheep"]
        );
    }

    #[test]
    fn stray_brackets_are_tolerated() {
        let table: ClueTable = [("x", "1")].into_iter().collect();
        assert_eq!(clues(&find_live_clues("]] [x] [[ [", &table)), vec!["x"]);
        assert!(find_live_clues("[x", &table).is_empty());
    }

    #[test]
    fn spans_do_not_cross_line_breaks() {
        let table: ClueTable = [("a\nb", "1"), ("c", "2")].into_iter().collect();
        let spans = find_live_clues("[a\nb] [c]", &table);
        assert_eq!(clues(&spans), vec!["c"]);
    }

    #[test]
    fn spans_do_not_cross_unicode_separators() {
        let table: ClueTable = [
            ("a\u{2028}b", "1"),
            ("a\u{2029}b", "2"),
            ("c", "3"),
        ]
        .into_iter()
        .collect();
        let spans = find_live_clues("[a\u{2028}b] [a\u{2029}b] [c]", &table);
        assert_eq!(clues(&spans), vec!["c"]);
    }

    #[test]
    fn multibyte_offsets_are_byte_offsets() {
        let table: ClueTable = [("café", "1")].into_iter().collect();
        let text = "ü [café]";
        let spans = find_live_clues(text, &table);
        assert_eq!(spans[0].start(), 3);
        assert_eq!(&text[spans[0].start()..spans[0].end()], "[café]");
    }

    #[test]
    fn extraction_is_idempotent() {
        let table = seed_table();
        assert_eq!(
            find_live_clues(SEED_TEXT, &table),
            find_live_clues(SEED_TEXT, &table)
        );

        let table = stray_table();
        assert_eq!(
            find_live_clues(STRAY_AND_NESTED, &table),
            find_live_clues(STRAY_AND_NESTED, &table)
        );
    }

    #[test]
    fn bracket_detection() {
        assert!(contains_brackets("a [b"));
        assert!(contains_brackets("a ]"));
        assert!(!contains_brackets("plain text"));
    }
}
