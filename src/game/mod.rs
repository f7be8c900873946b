//! Guess engine
//!
//! Validates guesses, classifies them against the target, tracks the
//! per-letter aggregate and decides when the game ends.

mod session;
mod start;

pub use session::{GameSession, GameStatus, GuessError, GuessOutcome, GuessRecord};
pub use start::{RestoreOutcome, SessionError, StartedSession, start_session};

/// Attempts allowed per game
pub const MAX_GUESSES: usize = 6;
