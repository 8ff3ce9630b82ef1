//! Display functions for command results

use super::formatters::{colorize_puzzle, create_progress_bar};
use crate::commands::{ClueListing, SolveResult, VerifyReport};
use colored::Colorize;

/// Print the result of auto-solving a puzzle
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Solving puzzle".bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nStep {}: [{}] → {}",
            i + 1,
            step.clue,
            step.answer.bright_white().bold()
        );

        if verbose {
            println!(
                "  Live clues: {} → {}",
                step.live_before, step.live_after
            );
            println!("  {}", step.text_after);
        }
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ Solved in {} steps!", result.steps.len())
                .green()
                .bold()
        );
        println!("{}", result.final_text.green());
    } else {
        println!(
            "{}",
            format!(
                "❌ Stuck after {} steps: brackets remain but no clue is live",
                result.steps.len()
            )
            .red()
            .bold()
        );
        println!("{}", result.final_text);
    }
}

/// Print the live clues of a puzzle's seed text
pub fn print_clue_listing(listing: &ClueListing) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE CLUES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}\n", colorize_puzzle(&listing.text, &listing.spans));

    println!(
        "📋 {} of {} clues live at start:",
        listing.clues.len(),
        listing.total_clues
    );
    for clue in &listing.clues {
        println!(
            "   @{:<4} {} ({} letters)",
            clue.start,
            clue.clue.bright_yellow(),
            clue.answer_len
        );
    }
}

/// Print the result of exploring every resolution order
pub fn print_verify_report(report: &VerifyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "VERIFICATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let ends = report.solved_ends + report.stuck_ends.len();
    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!("   States explored:  {}", report.states);
    println!("   Deepest path:     {} resolutions", report.depth);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    println!("\n📈 {}", "End states:".bright_cyan().bold());
    println!(
        "   Solved: {} {}",
        create_progress_bar(report.solved_ends, ends, 30).green(),
        report.solved_ends
    );
    println!(
        "   Stuck:  {} {}",
        create_progress_bar(report.stuck_ends.len(), ends, 30).red(),
        report.stuck_ends.len()
    );

    for text in report.stuck_ends.iter().take(5) {
        println!("   • {}", text.bright_black());
    }

    println!();
    if report.is_sound() {
        println!(
            "{}",
            "✅ Every resolution order solves the puzzle".green().bold()
        );
    } else {
        println!(
            "{}",
            "❌ Some resolution orders leave the puzzle stuck".red().bold()
        );
    }
}
