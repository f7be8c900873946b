//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_game_over, print_schedule, print_target,
};
pub use formatters::share_text;
