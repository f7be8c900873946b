//! Runtime settings shared by every play surface

use crate::daily::SelectionMethod;
use crate::persistence::StateStore;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Settings for one run of the game
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Calendar day being played
    pub date: NaiveDate,
    pub method: SelectionMethod,
    /// Where the day's progress is saved
    pub state_path: PathBuf,
}

impl GameConfig {
    #[must_use]
    pub fn new(
        date: Option<NaiveDate>,
        method: SelectionMethod,
        state_path: Option<PathBuf>,
    ) -> Self {
        Self {
            date: date.unwrap_or_else(today),
            method,
            state_path: state_path.unwrap_or_else(StateStore::default_path),
        }
    }

    /// Whether the configured date is the local calendar day
    ///
    /// Sharing only makes sense for today's game.
    #[must_use]
    pub fn is_today(&self) -> bool {
        self.date == today()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(None, SelectionMethod::default(), None)
    }
}

/// Local calendar date
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
