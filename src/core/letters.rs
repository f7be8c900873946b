//! Best-known hint per letter across a session
//!
//! Drives keyboard colouring and the rule that a letter already proven
//! absent cannot be typed again.

use super::{Feedback, HintKind, Word};

/// Best hint observed for a letter so far
///
/// Ordering: Unknown < Absent < Present < Correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LetterState {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl From<HintKind> for LetterState {
    fn from(hint: HintKind) -> Self {
        match hint {
            HintKind::Absent => Self::Absent,
            HintKind::Present => Self::Present,
            HintKind::Correct => Self::Correct,
        }
    }
}

/// Upgrade-only mapping from A-Z to [`LetterState`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterStates([LetterState; 26]);

impl LetterStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one classified guess
    ///
    /// Each letter keeps the maximum of its current state and the new hint.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &hint) in guess.chars().iter().zip(feedback.hints()) {
            let slot = &mut self.0[usize::from(letter - b'A')];
            *slot = (*slot).max(LetterState::from(hint));
        }
    }

    /// State for a letter, case-insensitive
    ///
    /// Characters outside A-Z report `Unknown`.
    #[must_use]
    pub fn get(&self, letter: char) -> LetterState {
        index_of(letter).map_or(LetterState::Unknown, |i| self.0[i])
    }

    /// Whether a letter may still be typed
    ///
    /// False exactly for letters proven absent, and for non-letters.
    #[must_use]
    pub fn can_type(&self, letter: char) -> bool {
        index_of(letter).is_some_and(|i| self.0[i] != LetterState::Absent)
    }

    /// Iterate `(letter, state)` pairs from A to Z
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        (b'A'..=b'Z')
            .zip(self.0.iter())
            .map(|(letter, &state)| (char::from(letter), state))
    }
}

fn index_of(letter: char) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| usize::from(letter.to_ascii_uppercase() as u8 - b'A'))
}
