//! Local persistence of the day's progress
//!
//! Host-side storage: the core never reads or writes files itself.

mod store;

pub use store::{SavedGame, StateStore, StoreError, is_same_local_day};
