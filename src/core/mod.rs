//! Core domain types for Nickle
//!
//! Words, per-guess hint classification and the per-letter aggregate.
//! Everything here is pure and independent of I/O.

mod hint;
mod letters;
mod word;

pub use hint::{Feedback, HintKind};
pub use letters::{LetterState, LetterStates};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;
