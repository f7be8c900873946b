//! Daily target word selection
//!
//! Pure mapping from a calendar date to the day's target word.

mod selector;

pub use selector::{
    SelectError, SelectionMethod, select, target_word_for_date, target_word_for_day,
};
