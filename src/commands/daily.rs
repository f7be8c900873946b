//! Today's game wired to local persistence
//!
//! Shared by every play surface. Today's game loads the saved record,
//! resumes or resets it, and saves after each accepted guess. Games for any
//! other date only read the player name and never write the store.

use crate::config::GameConfig;
use crate::game::{
    GameSession, GuessError, GuessOutcome, RestoreOutcome, SessionError, start_session,
};
use crate::output::share_text;
use crate::persistence::{SavedGame, StateStore};
use crate::wordlists::WordLists;
use chrono::Utc;

/// A session for the configured day plus its saved record
pub struct DailyGame<'a> {
    pub session: GameSession<'a>,
    pub restore: RestoreOutcome,
    config: GameConfig,
    store: StateStore,
    saved: SavedGame,
    /// Only today's game is saved
    persistent: bool,
}

impl<'a> DailyGame<'a> {
    /// Start the configured day's game
    ///
    /// Today's game resumes saved progress from today. Other dates start
    /// fresh and leave the saved record untouched.
    ///
    /// Storage problems are logged and play continues without them.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidInput` if no target word can be chosen.
    pub fn open(lists: &'a WordLists, config: &GameConfig) -> Result<Self, SessionError> {
        let store = StateStore::new(&config.state_path);
        let loaded = store.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not load saved game");
            SavedGame::default()
        });
        let persistent = config.is_today();
        let mut saved = if persistent {
            loaded.for_day(config.date)
        } else {
            SavedGame {
                name: loaded.name,
                ..SavedGame::default()
            }
        };
        saved.ensure_name(lists.guesses());

        let restored = persistent.then_some(saved.guesses.as_slice());
        let started = start_session(lists, config.date, config.method, restored)?;

        let mut game = Self {
            session: started.session,
            restore: started.restore,
            config: config.clone(),
            store,
            saved,
            persistent,
        };

        if matches!(game.restore, RestoreOutcome::Discarded(_)) {
            game.saved.clear_progress();
        }
        game.persist();

        Ok(game)
    }

    /// Submit a guess and save progress when it is accepted
    ///
    /// # Errors
    ///
    /// Passes through the session's `GuessError`.
    pub fn submit(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        let outcome = self.session.submit_guess(raw)?;
        self.saved.record(self.session.guesses(), Utc::now());
        self.persist();
        Ok(outcome)
    }

    fn persist(&self) {
        if !self.persistent {
            tracing::debug!(date = %self.config.date, "not saving a game for another day");
            return;
        }
        if let Err(e) = self.store.save(&self.saved) {
            tracing::warn!(error = %e, "could not save game");
        }
    }

    /// Share text for the current board
    #[must_use]
    pub fn share_text(&self) -> String {
        share_text(self.config.date, &self.session)
    }

    /// Only today's game can be shared
    #[must_use]
    pub fn is_shareable(&self) -> bool {
        self.config.is_today()
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        self.saved.name.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::SelectionMethod;
    use crate::game::GameStatus;
    use crate::wordlists::WordList;
    use chrono::NaiveDate;
    use std::path::Path;

    fn lists() -> WordLists {
        WordLists::new(
            WordList::parse("cluck\n"),
            WordList::parse("cluck\nlaugh\nblurb\ncrane\n"),
        )
        .unwrap()
    }

    fn config(path: &Path, date: NaiveDate) -> GameConfig {
        GameConfig::new(Some(date), SelectionMethod::Legacy, Some(path.to_path_buf()))
    }

    #[test]
    fn progress_survives_reopening_the_same_day() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let lists = lists();
        let today = crate::config::today();

        let mut game = DailyGame::open(&lists, &config(&path, today)).unwrap();
        assert_eq!(game.restore, RestoreOutcome::Fresh);
        game.submit("laugh").unwrap();
        game.submit("blurb").unwrap();
        let name = game.player_name().to_string();
        assert!(!name.is_empty());

        let reopened = DailyGame::open(&lists, &config(&path, today)).unwrap();
        assert_eq!(reopened.restore, RestoreOutcome::Resumed { guesses: 2 });
        assert_eq!(reopened.session.board_state(), game.session.board_state());
        assert_eq!(reopened.player_name(), name);
        assert!(reopened.is_shareable());
    }

    #[test]
    fn rejected_guess_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let lists = lists();
        let today = crate::config::today();

        let mut game = DailyGame::open(&lists, &config(&path, today)).unwrap();
        assert!(game.submit("zzzzz").is_err());

        let saved = StateStore::new(&path).load().unwrap();
        assert!(saved.guesses.is_empty());
    }

    #[test]
    fn other_dates_start_fresh_and_are_not_shareable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let lists = lists();
        let today = crate::config::today();

        let mut game = DailyGame::open(&lists, &config(&path, today)).unwrap();
        game.submit("cluck").unwrap();
        assert_eq!(game.session.status(), GameStatus::Won);

        let tomorrow = today.succ_opt().unwrap();
        let next = DailyGame::open(&lists, &config(&path, tomorrow)).unwrap();
        assert_eq!(next.restore, RestoreOutcome::Fresh);
        assert_eq!(next.session.guess_count(), 0);
        assert!(!next.is_shareable());
    }

    #[test]
    fn playing_a_past_date_keeps_todays_progress() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let lists = lists();
        let today = crate::config::today();

        let mut game = DailyGame::open(&lists, &config(&path, today)).unwrap();
        game.submit("laugh").unwrap();
        game.submit("blurb").unwrap();
        let name = game.player_name().to_string();
        let before = StateStore::new(&path).load().unwrap();

        let past = NaiveDate::from_ymd_opt(2022, 1, 15).unwrap();
        let mut old = DailyGame::open(&lists, &config(&path, past)).unwrap();
        assert_eq!(old.session.guess_count(), 0);
        assert_eq!(old.player_name(), name);
        old.submit("crane").unwrap();
        assert_eq!(StateStore::new(&path).load().unwrap(), before);

        let reopened = DailyGame::open(&lists, &config(&path, today)).unwrap();
        assert_eq!(reopened.restore, RestoreOutcome::Resumed { guesses: 2 });
        assert_eq!(reopened.session.guesses(), vec!["LAUGH", "BLURB"]);
    }

    #[test]
    fn corrupt_saved_guesses_are_cleared() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let lists = lists();
        let today = crate::config::today();

        let mut bogus = SavedGame::default();
        bogus.record(vec!["QQQQQ".to_string()], Utc::now());
        StateStore::new(&path).save(&bogus).unwrap();

        let game = DailyGame::open(&lists, &config(&path, today)).unwrap();
        assert!(matches!(game.restore, RestoreOutcome::Discarded(_)));
        assert_eq!(game.session.guess_count(), 0);
        assert!(StateStore::new(&path).load().unwrap().guesses.is_empty());
    }
}
