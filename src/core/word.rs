//! Nickle word representation
//!
//! A Word stores a validated five-letter uppercase word as bytes.

use super::WORD_LENGTH;
use std::fmt;
use thiserror::Error;

/// A five-letter word, normalized to uppercase ASCII
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is upper-cased. Length is counted in characters, not bytes.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use nickle::core::Word;
    ///
    /// let word = Word::new("laugh").unwrap();
    /// assert_eq!(word.text(), "LAUGH");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let text = text.to_ascii_uppercase();
        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific uppercase letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Count of each letter in the word, indexed by `letter - b'A'`
    ///
    /// Used as the available pool when classifying duplicate letters.
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &ch in &self.chars {
            counts[usize::from(ch - b'A')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CLUCK").unwrap();
        assert_eq!(word.text(), "CLUCK");
        assert_eq!(word.chars(), b"CLUCK");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("sprig").unwrap();
        assert_eq!(word.text(), "SPRIG");

        let word2 = Word::new("SpRiG").unwrap();
        assert_eq!(word2.text(), "SPRIG");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        // Five characters, more than five bytes
        assert_eq!(Word::new("caf\u{e9}s"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("blurb").unwrap();
        assert_eq!(word.char_at(0), b'B');
        assert_eq!(word.char_at(1), b'L');
        assert_eq!(word.char_at(4), b'B');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("laugh").unwrap();
        assert!(word.has_letter(b'L'));
        assert!(word.has_letter(b'H'));
        assert!(!word.has_letter(b'Z'));
        assert!(!word.has_letter(b'l'));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("sours").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[usize::from(b'S' - b'A')], 2);
        assert_eq!(counts[usize::from(b'O' - b'A')], 1);
        assert_eq!(counts[usize::from(b'U' - b'A')], 1);
        assert_eq!(counts[usize::from(b'R' - b'A')], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }

    #[test]
    fn word_equality_ignores_input_case() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }
}
