//! TUI rendering with ratatui
//!
//! Puzzle display, input line, feedback and status for the game screen.

use super::app::{App, InputMode};
use crate::core::ClueSpan;
use crate::game::Feedback;
use crate::output::{Segment, highlight_segments};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // How to play
            Constraint::Min(5),    // Puzzle
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Feedback
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_instructions(f, chunks[1]);
    render_puzzle(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_feedback(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("BRACKET CITY")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_instructions(f: &mut Frame, area: Rect) {
    let clue_style = Style::default()
        .fg(Color::Black)
        .bg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);

    let content = vec![
        Line::from(vec![
            Span::raw("In Bracket City you can solve "),
            Span::styled("any clue", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" just by submitting an answer."),
        ]),
        Line::from(vec![
            Span::raw("Type the answer to any "),
            Span::styled("highlighted clue", clue_style),
            Span::raw(" and hit enter!"),
        ]),
        Line::from("Keep guessing until you get one!"),
    ];

    let paragraph = Paragraph::new(content)
        .style(Style::default().fg(Color::Magenta))
        .block(
            Block::default()
                .title(" How To Play ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Build display lines for puzzle text with clue spans highlighted
///
/// Line breaks (`\n` or `\r\n`) inside plain text start a new line; clue spans
/// never contain one.
#[must_use]
pub fn puzzle_lines<'a>(text: &'a str, spans: &[ClueSpan]) -> Vec<Line<'a>> {
    let clue_style = Style::default()
        .fg(Color::Black)
        .bg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    let mut current: Vec<Span<'a>> = Vec::new();

    for segment in highlight_segments(text, spans) {
        match segment {
            Segment::Clue(s) => current.push(Span::styled(s, clue_style)),
            Segment::Plain(s) => {
                for (i, part) in s.split('\n').enumerate() {
                    let part = part.strip_suffix('\r').unwrap_or(part);
                    if i > 0 {
                        lines.push(Line::from(std::mem::take(&mut current)));
                    }
                    if !part.is_empty() {
                        current.push(Span::raw(part));
                    }
                }
            }
        }
    }
    lines.push(Line::from(current));

    lines
}

fn render_puzzle(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;

    let paragraph = if session.is_solved() {
        Paragraph::new(session.text()).style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Paragraph::new(puzzle_lines(session.text(), session.live_clues()))
    };

    let paragraph = paragraph
        .block(
            Block::default()
                .title(" Puzzle ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'r' to play again or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type any answer... | Enter to submit, Esc to clear ",
            app.session.input(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_feedback(f: &mut Frame, app: &App, area: Rect) {
    let feedback = app.session.feedback();
    let style = match feedback {
        Feedback::Correct | Feedback::Solved => Style::default().fg(Color::Green),
        Feedback::Incorrect => Style::default().fg(Color::Red),
        Feedback::Empty => Style::default().fg(Color::Gray),
    };

    let paragraph = Paragraph::new(feedback.message())
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let stats = app.session.stats();

    let guesses = Paragraph::new(format!("Guesses: {}", stats.attempts)).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[0]);

    let score = Paragraph::new(format!("Correct: {} | Wrong: {}", stats.correct, stats.incorrect))
        .alignment(Alignment::Center);
    f.render_widget(score, chunks[1]);

    let live = Paragraph::new(format!("Live clues: {}", app.session.live_clues().len()))
        .alignment(Alignment::Center);
    f.render_widget(live, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::WinCelebration => "q: Quit | r: Play Again",
        InputMode::Guessing => "Enter: Submit | Ctrl-C: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
