//! Interactive TUI mode

mod app;
mod rendering;

pub use app::{App, InputMode, run_tui};
pub use rendering::puzzle_lines;
