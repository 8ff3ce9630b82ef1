//! Game session: the guess-resolution state machine

mod feedback;
mod session;

pub use feedback::{Feedback, GuessOutcome, Statistics};
pub use session::{PuzzleStatus, Session};
