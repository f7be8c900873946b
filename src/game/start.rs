//! Session start and replay of saved guesses

use super::session::{GameSession, GuessError};
use crate::daily::{SelectError, SelectionMethod, target_word_for_date};
use crate::wordlists::WordLists;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while starting a session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The session cannot start at all
    #[error("Cannot start session: {0}")]
    InvalidInput(#[from] SelectError),
    /// Saved guesses did not replay cleanly
    #[error("Saved guess {index} ({guess:?}) was rejected: {reason}")]
    CorruptState {
        index: usize,
        guess: String,
        reason: GuessError,
    },
}

/// What happened to the saved guesses passed to [`start_session`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Nothing to restore
    Fresh,
    /// All saved guesses replayed
    Resumed { guesses: usize },
    /// Saved guesses were invalid and have been dropped
    Discarded(SessionError),
}

/// A started session plus how its saved state was handled
#[derive(Debug)]
pub struct StartedSession<'a> {
    pub session: GameSession<'a>,
    pub restore: RestoreOutcome,
}

impl GameSession<'_> {
    /// Apply saved guesses in order, exactly as if they were typed live
    ///
    /// # Errors
    ///
    /// Returns `SessionError::CorruptState` for the first guess the session
    /// rejects, including any guess after the game has ended.
    pub fn replay<S: AsRef<str>>(&mut self, guesses: &[S]) -> Result<(), SessionError> {
        for (index, guess) in guesses.iter().enumerate() {
            let guess = guess.as_ref();
            self.submit_guess(guess)
                .map_err(|reason| SessionError::CorruptState {
                    index,
                    guess: guess.to_string(),
                    reason,
                })?;
        }
        Ok(())
    }
}

/// Start the session for a date, optionally resuming saved guesses
///
/// A corrupt saved sequence never fails the call: it is discarded, the
/// session starts fresh, and the reason is reported in
/// [`StartedSession::restore`] so the host can clear its storage.
///
/// # Errors
///
/// Returns `SessionError::InvalidInput` if no target can be chosen.
pub fn start_session<'a>(
    lists: &'a WordLists,
    date: NaiveDate,
    method: SelectionMethod,
    restored: Option<&[String]>,
) -> Result<StartedSession<'a>, SessionError> {
    let target = target_word_for_date(date, lists.targets(), method)?;
    let fresh = GameSession::new(target, lists.guesses());

    let restored = match restored {
        Some(guesses) if !guesses.is_empty() => guesses,
        _ => {
            return Ok(StartedSession {
                session: fresh,
                restore: RestoreOutcome::Fresh,
            });
        }
    };

    let mut session = fresh.clone();
    match session.replay(restored) {
        Ok(()) => {
            tracing::info!(guesses = restored.len(), %date, "resumed saved session");
            Ok(StartedSession {
                session,
                restore: RestoreOutcome::Resumed {
                    guesses: restored.len(),
                },
            })
        }
        Err(err) => {
            tracing::warn!(error = %err, %date, "discarding corrupt saved session");
            Ok(StartedSession {
                session: fresh,
                restore: RestoreOutcome::Discarded(err),
            })
        }
    }
}
