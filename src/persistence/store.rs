//! File-backed store for the day's progress
//!
//! The saved record mirrors what the game keeps between visits: the ordered
//! guesses of the current day, when they were last saved, the player's name
//! and whether a score was already submitted.

use crate::wordlists::WordList;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access state file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to encode saved game: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persisted per-day record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedGame {
    /// Guesses submitted today, in order
    pub guesses: Vec<String>,
    /// Milliseconds since the Unix epoch of the last save
    pub last_save_time: Option<i64>,
    pub name: Option<String>,
    pub submitted_high_score: bool,
}

impl SavedGame {
    /// Whether the record was last written on `today` (local calendar date)
    #[must_use]
    pub fn is_from(&self, today: NaiveDate) -> bool {
        self.last_save_time
            .is_some_and(|ms| is_same_local_day(ms, today))
    }

    /// Keep the record if it belongs to `today`, otherwise reset it
    ///
    /// The player name survives a reset.
    #[must_use]
    pub fn for_day(self, today: NaiveDate) -> Self {
        if self.is_from(today) {
            return self;
        }
        if self.last_save_time.is_some() || !self.guesses.is_empty() {
            tracing::debug!(%today, "saved game is from another day, starting over");
        }
        Self {
            name: self.name,
            ..Self::default()
        }
    }

    /// Replace the saved guesses and stamp the save time
    pub fn record(&mut self, guesses: Vec<String>, now: DateTime<Utc>) {
        self.guesses = guesses;
        self.last_save_time = Some(now.timestamp_millis());
    }

    /// Drop today's progress, keeping the player name
    pub fn clear_progress(&mut self) {
        self.guesses.clear();
        self.last_save_time = None;
        self.submitted_high_score = false;
    }

    /// The player name, picking a random allowed word the first time
    pub fn ensure_name(&mut self, words: &WordList) -> &str {
        use rand::prelude::IndexedRandom;

        self.name.get_or_insert_with(|| {
            words
                .words()
                .choose(&mut rand::rng())
                .map_or_else(|| "PLAYER".to_string(), |word| word.text().to_string())
        })
    }
}

/// True if the epoch-millisecond timestamp falls on `day` in local time
#[must_use]
pub fn is_same_local_day(ms: i64, day: NaiveDate) -> bool {
    Local
        .timestamp_millis_opt(ms)
        .single()
        .is_some_and(|time| time.date_naive() == day)
}

/// JSON file holding one [`SavedGame`]
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform data directory, or the working directory if there is none
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::data_dir().map_or_else(
            || PathBuf::from("nickle_state.json"),
            |dir| dir.join("nickle").join("state.json"),
        )
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved game
    ///
    /// A missing file yields the default record. A file that cannot be
    /// parsed is treated the same way, with a warning, so corrupt storage
    /// never blocks play.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be read.
    pub fn load(&self) -> Result<SavedGame, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(SavedGame::default()),
            Err(source) => return Err(self.io_error(source)),
        };

        if content.trim().is_empty() {
            return Ok(SavedGame::default());
        }

        match serde_json::from_str(&content) {
            Ok(saved) => Ok(saved),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "ignoring unreadable saved game"
                );
                Ok(SavedGame::default())
            }
        }
    }

    /// Write the saved game, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` on file system failures.
    pub fn save(&self, saved: &SavedGame) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let json = serde_json::to_string_pretty(saved)?;
        fs::write(&self.path, json).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}
