//! Per-game guess state machine
//!
//! A [`GameSession`] owns the target word, the accepted guesses and the
//! letter aggregate. It is mutated only by [`GameSession::submit_guess`]
//! and is frozen once the game is won or lost.

use super::MAX_GUESSES;
use crate::core::{Feedback, LetterState, LetterStates, WORD_LENGTH, Word};
use crate::wordlists::WordList;
use thiserror::Error;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Rejected guess
///
/// None of these change the session. The `Display` text is meant to be
/// shown to the player as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("Guess must be five characters")]
    WrongLength { expected: usize, actual: usize },
    #[error("Not in word list")]
    NotInDictionary(String),
    #[error("The game is already over")]
    GameOver,
}

/// One accepted guess and its hints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub status: GameStatus,
}

/// A single game against one target word
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    dictionary: &'a WordList,
    target: Word,
    rows: Vec<GuessRecord>,
    letters: LetterStates,
    status: GameStatus,
}

impl<'a> GameSession<'a> {
    /// Start a fresh game
    ///
    /// # Parameters
    /// - `target`: The word to guess
    /// - `dictionary`: Words accepted as guesses
    #[must_use]
    pub fn new(target: Word, dictionary: &'a WordList) -> Self {
        Self {
            dictionary,
            target,
            rows: Vec::with_capacity(MAX_GUESSES),
            letters: LetterStates::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Submit a guess
    ///
    /// Validation runs in order: game over, length, dictionary membership.
    ///
    /// # Errors
    ///
    /// - `GuessError::GameOver` once the game is won or lost
    /// - `GuessError::WrongLength` if the input is not five characters
    /// - `GuessError::NotInDictionary` if the upper-cased input is not an
    ///   allowed guess
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::GameOver);
        }

        let actual = raw.chars().count();
        if actual != WORD_LENGTH {
            return Err(GuessError::WrongLength {
                expected: WORD_LENGTH,
                actual,
            });
        }

        let word = Word::new(raw)
            .ok()
            .filter(|word| self.dictionary.contains(word))
            .ok_or_else(|| GuessError::NotInDictionary(raw.to_uppercase()))?;

        let feedback = Feedback::classify(&word, &self.target);
        self.letters.record(&word, &feedback);

        let row = self.rows.len() + 1;
        self.status = if word == self.target {
            GameStatus::Won
        } else if row >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        tracing::debug!(
            guess = %word,
            hints = %feedback,
            row,
            status = ?self.status,
            "guess accepted"
        );
        self.rows.push(GuessRecord { word, feedback });

        Ok(GuessOutcome {
            feedback,
            status: self.status,
        })
    }

    /// Whether a letter may be typed into the next row
    ///
    /// False exactly when the letter is already known to be absent.
    #[must_use]
    pub fn can_type_letter(&self, letter: char) -> bool {
        self.letters.can_type(letter)
    }

    /// Per-row, per-position codes (1 = Absent, 2 = Present, 3 = Correct)
    ///
    /// Only submitted rows are included.
    #[must_use]
    pub fn board_state(&self) -> Vec<Vec<u8>> {
        self.rows.iter().map(|row| row.feedback.codes()).collect()
    }

    /// Best-known state of a single letter
    #[must_use]
    pub fn letter_state(&self, letter: char) -> LetterState {
        self.letters.get(letter)
    }

    #[must_use]
    pub const fn letter_states(&self) -> &LetterStates {
        &self.letters
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRecord] {
        &self.rows
    }

    /// Submitted guesses as plain strings, for persistence
    #[must_use]
    pub fn guesses(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.word.text().to_string()).collect()
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The target word; hosts should only reveal it once the game is over
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HintKind::{Absent, Correct, Present};

    fn dictionary() -> WordList {
        WordList::parse(
            "cluck\nlaugh\nblurb\nsprig\nsours\ncrane\nslate\nirate\ngrate\nabbey\neerie\n",
        )
    }

    fn session<'a>(target: &str, dictionary: &'a WordList) -> GameSession<'a> {
        GameSession::new(Word::new(target).unwrap(), dictionary)
    }

    #[test]
    fn new_session_is_empty() {
        let dict = dictionary();
        let game = session("cluck", &dict);

        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.guess_count(), 0);
        assert!(game.board_state().is_empty());
        assert_eq!(game.target().text(), "CLUCK");
    }

    #[test]
    fn short_guess_is_wrong_length() {
        let dict = dictionary();
        let mut game = session("cluck", &dict);

        let err = game.submit_guess("cluc").unwrap_err();
        assert_eq!(
            err,
            GuessError::WrongLength {
                expected: 5,
                actual: 4
            }
        );
        assert_eq!(err.to_string(), "Guess must be five characters");
        assert_eq!(game.guess_count(), 0);
        assert_eq!(game.letter_state('C'), LetterState::Unknown);
    }

    #[test]
    fn long_guess_is_wrong_length() {
        let dict = dictionary();
        let mut game = session("cluck", &dict);

        assert!(matches!(
            game.submit_guess("clucks"),
            Err(GuessError::WrongLength { actual: 6, .. })
        ));
        assert_eq!(game.guess_count(), 0);
    }

    #[test]
    fn unknown_word_is_not_in_dictionary() {
        let dict = dictionary();
        let mut game = session("cluck", &dict);

        let err = game.submit_guess("zzzzz").unwrap_err();
        assert_eq!(err, GuessError::NotInDictionary("ZZZZZ".to_string()));
        assert_eq!(err.to_string(), "Not in word list");
        assert_eq!(game.guess_count(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.can_type_letter('z'));
    }

    #[test]
    fn non_letters_are_not_in_dictionary() {
        let dict = dictionary();
        let mut game = session("cluck", &dict);

        assert!(matches!(
            game.submit_guess("cl0ck"),
            Err(GuessError::NotInDictionary(_))
        ));
        assert_eq!(game.guess_count(), 0);
    }

    #[test]
    fn guess_is_case_insensitive() {
        let dict = dictionary();
        let mut game = session("cluck", &dict);

        let outcome = game.submit_guess("LaUgH").unwrap();
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(game.guesses(), vec!["LAUGH".to_string()]);
    }

    #[test]
    fn hints_come_from_the_live_target_each_time() {
        let dict = dictionary();
        let mut game = session("cluck", &dict);

        let first = game.submit_guess("laugh").unwrap();
        assert_eq!(first.feedback.hints(), &[Present, Absent, Correct, Absent, Absent]);

        let second = game.submit_guess("blurb").unwrap();
        assert_eq!(second.feedback.hints()[1], Correct);
        assert_eq!(game.board_state(), vec![vec![2, 1, 3, 1, 1], vec![1, 3, 3, 1, 1]]);
    }

    #[test]
    fn sprig_against_sours_board_codes() {
        let dict = dictionary();
        let mut game = session("sours", &dict);

        game.submit_guess("sprig").unwrap();
        assert_eq!(game.board_state(), vec![vec![3, 1, 2, 1, 1]]);
        assert!(game.can_type_letter('S'));
        assert!(!game.can_type_letter('P'));
    }

    #[test]
    fn winning_guess_ends_game() {
        for misses in 0..MAX_GUESSES {
            let dict = dictionary();
            let mut game = session("cluck", &dict);
            for _ in 0..misses {
                game.submit_guess("crane").unwrap();
            }

            let outcome = game.submit_guess("cluck").unwrap();
            assert_eq!(outcome.status, GameStatus::Won);
            assert!(outcome.feedback.is_perfect());
            assert_eq!(game.status(), GameStatus::Won);
            assert_eq!(game.guess_count(), misses + 1);
        }
    }

    #[test]
    fn six_misses_lose() {
        let dict = dictionary();
        let mut game = session("cluck", &dict);

        for guess in ["crane", "slate", "irate", "grate", "laugh"] {
            assert_eq!(game.submit_guess(guess).unwrap().status, GameStatus::InProgress);
        }
        let outcome = game.submit_guess("blurb").unwrap();
        assert_eq!(outcome.status, GameStatus::Lost);
        assert_eq!(game.guess_count(), MAX_GUESSES);
    }

    #[test]
    fn each_accepted_guess_appends_its_own_row() {
        let dict = dictionary();
        let mut game = session("cluck", &dict);

        for (row, guess) in ["laugh", "blurb", "crane"].into_iter().enumerate() {
            let outcome = game.submit_guess(guess).unwrap();
            assert_eq!(game.guess_count(), row + 1);
            let last = game.rows().last().unwrap();
            assert_eq!(last.word.text(), guess.to_uppercase());
            assert_eq!(last.feedback, outcome.feedback);
        }
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn finished_game_rejects_further_guesses() {
        let dict = dictionary();
        let mut game = session("cluck", &dict);
        game.submit_guess("cluck").unwrap();

        let before = game.board_state();
        assert_eq!(game.submit_guess("laugh"), Err(GuessError::GameOver));
        assert_eq!(game.submit_guess("x"), Err(GuessError::GameOver));
        assert_eq!(game.board_state(), before);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn letter_states_never_downgrade() {
        let dict = dictionary();
        let mut game = session("cluck", &dict);

        game.submit_guess("blurb").unwrap();
        assert_eq!(game.letter_state('L'), LetterState::Correct);
        game.submit_guess("laugh").unwrap();
        assert_eq!(game.letter_state('L'), LetterState::Correct);
        assert_eq!(game.letter_state('U'), LetterState::Correct);
        assert_eq!(game.letter_state('B'), LetterState::Absent);
    }

    #[test]
    fn guess_outside_targets_but_in_dictionary_is_accepted() {
        let targets = WordList::parse("cluck\n");
        let guesses = dictionary();
        let mut game = GameSession::new(targets.get(0).unwrap().clone(), &guesses);

        assert!(game.submit_guess("abbey").is_ok());
    }
}
