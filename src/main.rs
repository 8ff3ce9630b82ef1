//! Bracket City - CLI
//!
//! Nested-clue word puzzle with TUI and CLI modes.

use anyhow::{Context, Result, bail};
use bracket_city::{
    commands::{ResolutionOrder, SolveConfig, list_clues, run_simple, solve_puzzle, verify_puzzle},
    game::Session,
    output::{print_clue_listing, print_solve_result, print_verify_report},
    puzzles::{Puzzle, loader::load_from_file},
    telemetry::init_tracing,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "bracket_city",
    about = "Bracket City: solve any bracketed clue just by submitting its answer",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle file (TOML). Defaults to the built-in puzzle
    #[arg(short, long, global = true)]
    puzzle: Option<PathBuf>,

    /// Write logs to this file instead of stderr (required for logs in play mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line play without TUI)
    Simple,

    /// Auto-solve the puzzle from its own clue table
    Solve {
        /// Answer a random live clue at each step instead of the first
        #[arg(short, long)]
        random: bool,

        /// Show the puzzle text after every step
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the clues that are live at the start
    Clues,

    /// Check that every resolution order solves the puzzle
    Verify,
}

/// Load the puzzle named by `--puzzle`, or the embedded one
fn load_puzzle(path: Option<&Path>) -> Result<Puzzle> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Could not load puzzle from {}", path.display())),
        None => Ok(Puzzle::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Keep stderr logging off the alternate screen
    if !matches!(command, Commands::Play) || cli.log_file.is_some() {
        init_tracing(cli.log_file.as_deref())?;
    }

    let puzzle = load_puzzle(cli.puzzle.as_deref())?;

    match command {
        Commands::Play => run_play_command(puzzle),
        Commands::Simple => run_simple_command(puzzle),
        Commands::Solve { random, verbose } => {
            run_solve_command(&puzzle, random, verbose);
            Ok(())
        }
        Commands::Clues => {
            print_clue_listing(&list_clues(&puzzle));
            Ok(())
        }
        Commands::Verify => run_verify_command(&puzzle),
    }
}

fn run_solve_command(puzzle: &Puzzle, random: bool, verbose: bool) {
    let order = if random {
        ResolutionOrder::Random
    } else {
        ResolutionOrder::First
    };
    let result = solve_puzzle(puzzle, SolveConfig::new(order));
    print_solve_result(&result, verbose);
}

fn run_verify_command(puzzle: &Puzzle) -> Result<()> {
    println!("Exploring every resolution order of {} clues...", puzzle.clues().len());

    let report = verify_puzzle(puzzle, true);
    print_verify_report(&report);

    if !report.is_sound() {
        bail!(
            "{} resolution path(s) end with unsolvable brackets",
            report.stuck_ends.len()
        );
    }
    Ok(())
}

fn run_simple_command(puzzle: Puzzle) -> Result<()> {
    let mut session = Session::new(puzzle);
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(puzzle: Puzzle) -> Result<()> {
    use bracket_city::interactive::{App, run_tui};

    let app = App::new(Session::new(puzzle));
    run_tui(app)
}
