//! Formatting utilities for boards, keyboards and share text

use crate::core::{Feedback, HintKind, LetterState, LetterStates};
use crate::game::GameSession;
use chrono::NaiveDate;
use colored::{ColoredString, Colorize};

/// Keyboard rows in on-screen order
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Share text: title line, blank line, one emoji row per guess
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use nickle::core::Word;
/// use nickle::game::GameSession;
/// use nickle::output::formatters::share_text;
/// use nickle::wordlists::WordList;
///
/// let words = WordList::parse("sprig\nsours\n");
/// let mut game = GameSession::new(Word::new("sours").unwrap(), &words);
/// game.submit_guess("sprig").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(share_text(date, &game), "Nickle 2024-03-09\n\n🟩⬛🟨⬛⬛");
/// ```
#[must_use]
pub fn share_text(date: NaiveDate, session: &GameSession<'_>) -> String {
    let board = session
        .rows()
        .iter()
        .map(|row| row.feedback.to_emoji())
        .collect::<Vec<_>>()
        .join("\n");
    format!("Nickle {date}\n\n{board}")
}

/// Score line used in share text and end-of-game messages, e.g. "3/6"
#[must_use]
pub fn score_label(session: &GameSession<'_>) -> String {
    use crate::game::{GameStatus, MAX_GUESSES};

    match session.status() {
        GameStatus::Won => format!("{}/{MAX_GUESSES}", session.guess_count()),
        GameStatus::Lost => format!("X/{MAX_GUESSES}"),
        GameStatus::InProgress => format!("{}/{MAX_GUESSES} so far", session.guess_count()),
    }
}

/// One letter tile coloured by its hint
#[must_use]
pub fn hint_tile(letter: char, hint: HintKind) -> ColoredString {
    let tile = format!(" {letter} ");
    match hint {
        HintKind::Correct => tile.black().on_green().bold(),
        HintKind::Present => tile.black().on_yellow().bold(),
        HintKind::Absent => tile.white().on_bright_black(),
    }
}

/// A guessed word rendered as coloured tiles
#[must_use]
pub fn colored_guess(word: &str, feedback: &Feedback) -> String {
    word.chars()
        .zip(feedback.hints())
        .map(|(letter, &hint)| hint_tile(letter, hint).to_string())
        .collect()
}

/// One keyboard key coloured by the best-known letter state
#[must_use]
pub fn key_tile(letter: char, state: LetterState) -> ColoredString {
    let key = letter.to_string();
    match state {
        LetterState::Correct => key.green().bold(),
        LetterState::Present => key.yellow().bold(),
        LetterState::Absent => key.bright_black().dimmed(),
        LetterState::Unknown => key.white(),
    }
}

/// Keyboard rows with each key coloured by its letter state
#[must_use]
pub fn colored_keyboard(states: &LetterStates) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|letter| key_tile(letter, states.get(letter)).to_string())
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}
