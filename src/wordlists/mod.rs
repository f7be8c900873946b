//! Word lists for Nickle
//!
//! Target and guess lists, embedded at build time or loaded from files.

mod embedded;
pub mod loader;

pub use embedded::{GUESSES, GUESSES_COUNT, TARGETS, TARGETS_COUNT};
pub use loader::{WordList, WordListError, WordLists};
