//! Target schedule command
//!
//! Computes the target word for a run of consecutive days and reports how
//! often words repeat.

use crate::daily::{SelectionMethod, target_word_for_date};
use crate::wordlists::WordList;
use chrono::{Days, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Targets for consecutive days
pub struct Schedule {
    pub start: NaiveDate,
    pub method: SelectionMethod,
    /// One entry per day, in date order
    pub entries: Vec<(NaiveDate, String)>,
    pub distinct: usize,
    /// Words chosen more than once, most frequent first
    pub repeats: Vec<(String, usize)>,
}

/// Compute the targets for `days` days starting at `start`
///
/// Days are evaluated in parallel; a progress bar is drawn when
/// `show_progress` is set.
///
/// # Errors
///
/// Returns an error if the date range overflows the calendar or no target
/// can be chosen.
pub fn build_schedule(
    targets: &WordList,
    start: NaiveDate,
    days: u64,
    method: SelectionMethod,
    show_progress: bool,
) -> Result<Schedule, String> {
    let pb = if show_progress {
        let pb = ProgressBar::new(days);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let entries = (0..days)
        .into_par_iter()
        .map(|offset| {
            let date = start
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| format!("Date out of range: {start} + {offset} days"))?;
            let word = target_word_for_date(date, targets, method).map_err(|e| e.to_string())?;
            pb.inc(1);
            Ok((date, word.text().to_string()))
        })
        .collect::<Result<Vec<_>, String>>()?;

    pb.finish_and_clear();

    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for (_, word) in &entries {
        *counts.entry(word.as_str()).or_insert(0) += 1;
    }

    let distinct = counts.len();
    let mut repeats: Vec<(String, usize)> = counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    repeats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    tracing::debug!(days, distinct, repeats = repeats.len(), "schedule built");

    Ok(Schedule {
        start,
        method,
        entries,
        distinct,
        repeats,
    })
}
