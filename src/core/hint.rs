//! Per-letter hint classification for a guess
//!
//! Each position of a guess receives one of three hints:
//! - Absent (letter not in the target, or already accounted for)
//! - Present (letter in the target, wrong position)
//! - Correct (letter in the right position)
//!
//! Integer codes 1/2/3 are the board-state encoding handed to renderers.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HintKind {
    Absent,
    Present,
    Correct,
}

impl HintKind {
    /// Board-state code: 1 = Absent, 2 = Present, 3 = Correct
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// Inverse of [`HintKind::code`]
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Absent),
            2 => Some(Self::Present),
            3 => Some(Self::Correct),
            _ => None,
        }
    }

    /// Square used in share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬛',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Hints for every position of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([HintKind; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([HintKind::Correct; WORD_LENGTH]);

    /// Build feedback from raw hints
    #[must_use]
    pub const fn new(hints: [HintKind; WORD_LENGTH]) -> Self {
        Self(hints)
    }

    /// Classify `guess` against `target`
    ///
    /// Duplicate letters are reconciled against the multiset of target
    /// letters, so a letter is never reported more often than the target
    /// contains it.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the pool
    /// 2. Second pass, left to right: mark Present while the pool still
    ///    holds the letter, consuming one occurrence each time
    ///
    /// The pool is rebuilt from the target on every call; earlier guesses
    /// never influence it.
    ///
    /// # Examples
    /// ```
    /// use nickle::core::{Feedback, HintKind::*, Word};
    ///
    /// let guess = Word::new("sprig").unwrap();
    /// let target = Word::new("sours").unwrap();
    ///
    /// assert_eq!(
    ///     Feedback::classify(&guess, &target).hints(),
    ///     &[Correct, Absent, Present, Absent, Absent]
    /// );
    /// ```
    #[must_use]
    pub fn classify(guess: &Word, target: &Word) -> Self {
        let mut result = [HintKind::Absent; WORD_LENGTH];
        let mut pool = target.letter_counts();

        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == target.char_at(i) {
                result[i] = HintKind::Correct;
                pool[usize::from(guess.char_at(i) - b'A')] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == HintKind::Correct {
                continue;
            }
            let available = &mut pool[usize::from(guess.char_at(i) - b'A')];
            if *available > 0 {
                result[i] = HintKind::Present;
                *available -= 1;
            }
        }

        Self(result)
    }

    /// Hints in position order
    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &[HintKind; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions with the given hint
    #[must_use]
    pub fn count(&self, kind: HintKind) -> usize {
        self.0.iter().filter(|&&hint| hint == kind).count()
    }

    /// Board-state codes for this row
    #[must_use]
    pub fn codes(&self) -> Vec<u8> {
        self.0.iter().map(|hint| hint.code()).collect()
    }

    /// Row of share squares, e.g. "🟩⬛⬛🟨⬛"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|hint| hint.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
