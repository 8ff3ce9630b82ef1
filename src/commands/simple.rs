//! Simple interactive CLI mode
//!
//! Text-based play without the TUI

use crate::game::{Feedback, GuessOutcome, Session};
use crate::output::colorize_puzzle;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(session: &mut Session) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Bracket City - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("In Bracket City you can solve any clue just by submitting an answer.");
    println!("Type the answer to any highlighted clue and hit enter!");
    println!("Keep guessing until you get one!\n");
    println!("Commands: ':quit' to exit, ':reset' to start the puzzle over\n");

    loop {
        println!("{}", "─".repeat(60));
        println!("{}", colorize_puzzle(session.text(), session.live_clues()));
        println!("{}", "─".repeat(60));

        let input = get_user_input("Your answer")?;

        let guess = match parse_line(&input) {
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::Reset => {
                session.reset();
                println!("\n🔄 Puzzle reset!\n");
                continue;
            }
            LineCommand::Guess(guess) => guess,
        };

        let outcome = session.submit_guess(guess);
        print_feedback(session.feedback());

        if let GuessOutcome::Correct { clue, answer, .. } = &outcome {
            println!("   [{}] → {}", clue.bright_black(), answer.bright_white().bold());
        }

        if session.is_solved() {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!("{}", session.text().bright_green().bold());
            println!("{}", "═".repeat(60).bright_cyan());

            let stats = session.stats();
            println!(
                "\n  Solved with {} correct and {} wrong guesses",
                stats.correct.to_string().bright_cyan().bold(),
                stats.incorrect.to_string().bright_cyan().bold()
            );
            println!();

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session.reset();
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// What a line typed in simple mode asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineCommand<'a> {
    Quit,
    Reset,
    Guess(&'a str),
}

/// Commands carry a `:` prefix so that every plain word stays a valid guess
fn parse_line(input: &str) -> LineCommand<'_> {
    match input.to_lowercase().as_str() {
        ":quit" | ":exit" | ":q" => LineCommand::Quit,
        ":reset" => LineCommand::Reset,
        _ => LineCommand::Guess(input),
    }
}

fn print_feedback(feedback: Feedback) {
    match feedback {
        Feedback::Empty => {}
        Feedback::Correct | Feedback::Solved => println!("\n{}", feedback.message().green().bold()),
        Feedback::Incorrect => println!("\n{}", feedback.message().red()),
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("Input closed".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::Puzzle;

    #[test]
    fn prefixed_words_are_commands() {
        assert_eq!(parse_line(":quit"), LineCommand::Quit);
        assert_eq!(parse_line(":EXIT"), LineCommand::Quit);
        assert_eq!(parse_line(":q"), LineCommand::Quit);
        assert_eq!(parse_line(":reset"), LineCommand::Reset);
    }

    #[test]
    fn bare_words_are_guesses() {
        for word in ["quit", "exit", "reset", "Reset", ""] {
            assert_eq!(parse_line(word), LineCommand::Guess(word));
        }
    }

    #[test]
    fn answers_named_like_commands_are_solvable() {
        let puzzle = Puzzle::new(
            "[leave the game] or [start over]",
            [("leave the game", "quit"), ("start over", "reset")],
        )
        .unwrap();
        let mut session = Session::new(puzzle);

        for line in ["quit", "reset"] {
            let LineCommand::Guess(guess) = parse_line(line) else {
                panic!("{line} should be a guess");
            };
            session.submit_guess(guess);
        }

        assert!(session.is_solved());
        assert_eq!(session.text(), "quit or reset");
    }
}
