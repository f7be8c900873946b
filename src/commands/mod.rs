//! Command implementations

pub mod check;
pub mod daily;
pub mod schedule;
pub mod simple;

pub use check::{CheckResult, check_guess};
pub use daily::DailyGame;
pub use schedule::{Schedule, build_schedule};
pub use simple::run_simple;
