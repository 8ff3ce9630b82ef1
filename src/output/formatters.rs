//! Formatting utilities for puzzle text

use crate::core::ClueSpan;
use colored::Colorize;

/// A piece of puzzle text, either plain or a highlighted clue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Clue(&'a str),
}

/// Split `text` into plain and highlighted segments
///
/// Spans are painted in start order. A span that starts before the previous
/// painted span ends, or that no longer fits the text, is skipped.
#[must_use]
pub fn highlight_segments<'a>(text: &'a str, spans: &[ClueSpan]) -> Vec<Segment<'a>> {
    let mut sorted: Vec<&ClueSpan> = spans.iter().collect();
    sorted.sort_by_key(|span| span.start());

    let mut segments = Vec::with_capacity(sorted.len() * 2 + 1);
    let mut last = 0;

    for span in sorted {
        if span.start() < last {
            continue;
        }
        let Some(clue) = text.get(span.start()..span.end()) else {
            continue;
        };
        if span.start() > last {
            segments.push(Segment::Plain(&text[last..span.start()]));
        }
        segments.push(Segment::Clue(clue));
        last = span.end();
    }

    if last < text.len() {
        segments.push(Segment::Plain(&text[last..]));
    }

    segments
}

/// Render puzzle text for a color terminal, clues highlighted
#[must_use]
pub fn colorize_puzzle(text: &str, spans: &[ClueSpan]) -> String {
    highlight_segments(text, spans)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(s) => s.normal().to_string(),
            Segment::Clue(s) => s.black().on_bright_yellow().to_string(),
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        width
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
