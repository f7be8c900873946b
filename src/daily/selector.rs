//! Date-seeded target word selection
//!
//! The legacy formula concatenates the date fields into a decimal seed and
//! takes the fractional part of `seed * K1 * sin(seed + K2)`, evaluated in
//! plain `f64` exactly as the deployed schedule does.

use crate::core::Word;
use crate::wordlists::WordList;
use chrono::{Datelike, NaiveDate};
use rustc_hash::FxHasher;
use std::hash::Hasher;
use std::str::FromStr;
use thiserror::Error;

const SEED_SCALE: f64 = 346_542.127_831_982_76;
const SEED_PHASE: f64 = 12_376_293_876.187_698_76;

/// Errors raised by target selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("Cannot choose a target from an empty word list")]
    EmptyWordList,
    #[error("Date fields {year}/{month}/{day} do not form a seed")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// How the daily index is derived from the date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMethod {
    /// Sine-based formula matching the published schedule
    #[default]
    Legacy,
    /// Fixed-seed integer hash of the date string
    Hashed,
}

impl SelectionMethod {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Hashed => "hashed",
        }
    }
}

impl FromStr for SelectionMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" | "sine" => Ok(Self::Legacy),
            "hashed" | "hash" => Ok(Self::Hashed),
            other => Err(format!("Unknown selection method: {other}")),
        }
    }
}

/// Pick the target word for a day using the legacy formula
///
/// `month` is zero-based (January = 0). The three fields only need to be
/// computed consistently by every caller; the same triple always yields the
/// same word.
///
/// # Errors
///
/// Returns `SelectError::EmptyWordList` if `list` is empty, and
/// `SelectError::InvalidDate` for a negative year.
///
/// # Examples
/// ```
/// use nickle::daily::target_word_for_day;
/// use nickle::wordlists::WordList;
///
/// let list = WordList::parse("crane\nslate\nirate\n");
/// let first = target_word_for_day(2024, 2, 9, &list).unwrap();
/// let second = target_word_for_day(2024, 2, 9, &list).unwrap();
/// assert_eq!(first, second);
/// ```
pub fn target_word_for_day(
    year: i32,
    month: u32,
    day: u32,
    list: &WordList,
) -> Result<Word, SelectError> {
    select(SelectionMethod::Legacy, year, month, day, list)
}

/// Pick the target word for a day with an explicit method
///
/// # Errors
///
/// See [`target_word_for_day`].
pub fn select(
    method: SelectionMethod,
    year: i32,
    month: u32,
    day: u32,
    list: &WordList,
) -> Result<Word, SelectError> {
    if list.is_empty() {
        return Err(SelectError::EmptyWordList);
    }

    let index = match method {
        SelectionMethod::Legacy => {
            let seed = date_seed(year, month, day)?;
            legacy_index(seed, list.len())
        }
        SelectionMethod::Hashed => hashed_index(year, month, day, list.len()),
    };

    list.get(index).cloned().ok_or(SelectError::EmptyWordList)
}

/// Pick the target word for a calendar date
///
/// Converts the one-based chrono month to the zero-based field used by the
/// seed.
///
/// # Errors
///
/// See [`target_word_for_day`].
pub fn target_word_for_date(
    date: NaiveDate,
    list: &WordList,
    method: SelectionMethod,
) -> Result<Word, SelectError> {
    select(method, date.year(), date.month0(), date.day(), list)
}

/// Decimal concatenation of the date fields: (2024, 2, 9) -> 202429
fn date_seed(year: i32, month: u32, day: u32) -> Result<u64, SelectError> {
    format!("{year}{month}{day}")
        .parse()
        .map_err(|_| SelectError::InvalidDate { year, month, day })
}

fn legacy_index(seed: u64, len: usize) -> usize {
    let seed = seed as f64;
    let product = seed * SEED_SCALE * (seed + SEED_PHASE).sin();
    let frac = product - product.floor();

    // frac is in [0, 1); min() guards the float edge at exactly 1.0
    ((frac * len as f64).floor() as usize).min(len - 1)
}

fn hashed_index(year: i32, month: u32, day: u32, len: usize) -> usize {
    let mut hasher = FxHasher::default();
    hasher.write(format!("{year}-{month}-{day}").as_bytes());
    (hasher.finish() % len as u64) as usize
}
