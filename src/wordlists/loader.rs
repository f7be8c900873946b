//! Word list loading utilities
//!
//! Parses newline-delimited word lists (embedded or from files) into
//! [`WordList`]s with constant-time membership checks.

use super::{GUESSES, TARGETS};
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors raised while building word lists
#[derive(Error, Debug)]
pub enum WordListError {
    #[error("{0} word list is empty")]
    Empty(&'static str),
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// An ordered, immutable list of words
///
/// Order is preserved because daily selection indexes into it.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Parse newline-delimited text
    ///
    /// Lines are trimmed (so CRLF endings are fine) and upper-cased. Blank
    /// lines are ignored; lines that are not five ASCII letters are skipped
    /// and reported once as a warning. Duplicates keep their first position.
    ///
    /// # Examples
    /// ```
    /// use nickle::wordlists::WordList;
    ///
    /// let list = WordList::parse("crane\r\nslate\n\nirate\n");
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.get(1).unwrap().text(), "SLATE");
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut list = Self::default();
        let mut skipped = 0usize;

        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            match Word::new(line) {
                Ok(word) => list.push(word),
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, kept = list.len(), "skipped malformed word list entries");
        }

        list
    }

    /// Convert a string slice (such as an embedded list) to a `WordList`
    ///
    /// # Examples
    /// ```
    /// use nickle::wordlists::{TARGETS, WordList};
    ///
    /// let words = WordList::from_slice(TARGETS);
    /// assert_eq!(words.len(), TARGETS.len());
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        let mut list = Self::default();
        for word in slice.iter().filter_map(|&s| Word::new(s).ok()) {
            list.push(word);
        }
        list
    }

    /// Load words from a file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    fn push(&mut self, word: Word) {
        if self.index.insert(word.clone()) {
            self.words.push(word);
        }
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Word at a position in list order
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

/// The two lists a game needs
///
/// `targets` feeds daily selection; `guesses` gates which submissions are
/// accepted. A guess only has to be in `guesses`.
#[derive(Debug, Clone)]
pub struct WordLists {
    targets: WordList,
    guesses: WordList,
}

impl WordLists {
    /// Build from newline-delimited text of both lists
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if either list has no usable words.
    pub fn load(targets: &str, guesses: &str) -> Result<Self, WordListError> {
        Self::new(WordList::parse(targets), WordList::parse(guesses))
    }

    /// Build from already parsed lists
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if either list is empty.
    pub fn new(targets: WordList, guesses: WordList) -> Result<Self, WordListError> {
        if targets.is_empty() {
            return Err(WordListError::Empty("target"));
        }
        if guesses.is_empty() {
            return Err(WordListError::Empty("guess"));
        }
        Ok(Self { targets, guesses })
    }

    /// Lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded data is empty.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(WordList::from_slice(TARGETS), WordList::from_slice(GUESSES))
    }

    /// Load either list from a file, falling back to the embedded one
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Io` if a given file cannot be read and
    /// `WordListError::Empty` if a resulting list is empty.
    pub fn from_paths(
        targets: Option<&Path>,
        guesses: Option<&Path>,
    ) -> Result<Self, WordListError> {
        let read = |path: Option<&Path>, fallback: &[&str]| match path {
            Some(path) => WordList::load_from_file(path).map_err(|source| WordListError::Io {
                path: path.display().to_string(),
                source,
            }),
            None => Ok(WordList::from_slice(fallback)),
        };

        Self::new(read(targets, TARGETS)?, read(guesses, GUESSES)?)
    }

    #[must_use]
    pub const fn targets(&self) -> &WordList {
        &self.targets
    }

    #[must_use]
    pub const fn guesses(&self) -> &WordList {
        &self.guesses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_converts_valid_words() {
        let words = WordList::from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words.get(0).unwrap().text(), "CRANE");
        assert_eq!(words.get(1).unwrap().text(), "SLATE");
        assert_eq!(words.get(2).unwrap().text(), "IRATE");
    }

    #[test]
    fn from_slice_skips_invalid() {
        let words = WordList::from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words.get(0).unwrap().text(), "CRANE");
        assert_eq!(words.get(1).unwrap().text(), "SLATE");
    }

    #[test]
    fn parse_normalizes_case_and_line_endings() {
        let list = WordList::parse("Laugh\r\nBLURB\r\n\r\ncluck");

        assert_eq!(list.len(), 3);
        assert!(list.contains(&Word::new("LAUGH").unwrap()));
        assert!(list.contains(&Word::new("blurb").unwrap()));
        assert_eq!(list.get(2).unwrap().text(), "CLUCK");
    }

    #[test]
    fn parse_drops_duplicates_keeping_first_position() {
        let list = WordList::parse("crane\nslate\nCRANE\n");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().text(), "CRANE");
        assert_eq!(list.get(1).unwrap().text(), "SLATE");
    }

    #[test]
    fn parse_empty_text() {
        assert!(WordList::parse("").is_empty());
        assert!(WordList::parse("\n\n  \n").is_empty());
    }

    #[test]
    fn lists_reject_empty_targets() {
        let result = WordLists::load("", "crane\n");
        assert!(matches!(result, Err(WordListError::Empty("target"))));

        let result = WordLists::load("crane\n", "bad\n");
        assert!(matches!(result, Err(WordListError::Empty("guess"))));
    }

    #[test]
    fn guess_membership_is_independent_of_targets() {
        let lists = WordLists::load("cluck\n", "laugh\nblurb\n").unwrap();
        let cluck = Word::new("cluck").unwrap();

        assert!(lists.targets().contains(&cluck));
        assert!(!lists.guesses().contains(&cluck));
        assert!(lists.guesses().contains(&Word::new("laugh").unwrap()));
    }

    #[test]
    fn load_from_file_reads_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "sprig\nsours\n").unwrap();

        let list = WordList::load_from_file(&path).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.words()[1].text(), "SOURS");
    }

    #[test]
    fn from_paths_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let result = WordLists::from_paths(Some(&missing), None);
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }

    #[test]
    fn from_paths_defaults_to_embedded() {
        let lists = WordLists::from_paths(None, None).unwrap();
        assert_eq!(lists.targets().len(), TARGETS.len());
        assert_eq!(lists.guesses().len(), GUESSES.len());
    }
}
