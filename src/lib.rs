//! Wordle Daily
//!
//! Engine for a daily five-letter word game: guess evaluation, keyboard
//! hints, hard mode, turn scheduling and statistics, plus the storage and
//! terminal plumbing the `wordle_daily` binary is built from.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::{Feedback, Mark, Word};
//!
//! let secret = Word::new("fuels").unwrap();
//! let guess = Word::new("clues").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &secret);
//! assert_eq!(feedback.mark(4), Mark::Correct);
//! println!("{feedback}");
//! ```

// Core domain types
pub mod core;

// Turn state, hints and hard mode
pub mod game;

// Turn scheduling
pub mod schedule;

// Player statistics
pub mod stats;

// Word lists and validation
pub mod wordlists;

// Stored record formats and key-value storage
pub mod persist;
pub mod storage;

// Configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
