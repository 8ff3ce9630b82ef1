//! TUI application state and logic

use crate::game::{GuessOutcome, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: Session,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let input_mode = if session.is_solved() {
            InputMode::WinCelebration
        } else {
            InputMode::Guessing
        };

        Self {
            session,
            input_mode,
            should_quit: false,
        }
    }

    /// Submit the pending input and switch modes if the puzzle got solved
    pub fn submit(&mut self) -> GuessOutcome {
        let outcome = self.session.submit_input();
        if self.session.is_solved() {
            self.input_mode = InputMode::WinCelebration;
        }
        outcome
    }

    /// Start the puzzle over from its seed text
    pub fn reset(&mut self) {
        self.session.reset();
        self.input_mode = InputMode::Guessing;
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('r') => {
                    self.reset();
                }
                _ => {
                    // Input is disabled once solved
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char(c) => {
                    self.session.push_input(c);
                }
                KeyCode::Backspace => {
                    self.session.pop_input();
                }
                KeyCode::Esc => {
                    self.session.clear_input();
                }
                KeyCode::Enter => {
                    self.submit();
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
