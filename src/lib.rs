//! Nickle
//!
//! A daily five-letter word guessing game: one date-seeded target per day,
//! six guesses, and colour hints after every row.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nickle::core::{Feedback, Word};
//! use nickle::daily::target_word_for_day;
//! use nickle::game::GameSession;
//! use nickle::wordlists::WordLists;
//!
//! let lists = WordLists::embedded().unwrap();
//!
//! // Target for 9 March 2024 (month is zero-based)
//! let target = target_word_for_day(2024, 2, 9, lists.targets()).unwrap();
//!
//! // Score a single guess
//! let feedback = Feedback::classify(&Word::new("crane").unwrap(), &target);
//! println!("{}", feedback.to_emoji());
//!
//! // Or play a whole game
//! let mut game = GameSession::new(target, lists.guesses());
//! let outcome = game.submit_guess("crane").unwrap();
//! println!("{:?}", outcome.status);
//! ```

// Core domain types
pub mod core;

// Daily target selection
pub mod daily;

// Guess engine and session lifecycle
pub mod game;

// Word lists
pub mod wordlists;

// Saved progress
pub mod persistence;

// Runtime settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
