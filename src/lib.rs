//! Honeycomb Words
//!
//! A seven-letter honeycomb word game: chain tiles into words, check them
//! against a fixed word list and collect points.
//!
//! # Quick Start
//!
//! ```rust
//! use honeycomb_words::engine::{Game, GameConfig, SubmitOutcome};
//! use honeycomb_words::wordlists::{default_board, default_dictionary};
//!
//! let mut game = Game::new(
//!     default_board().unwrap(),
//!     default_dictionary().unwrap(),
//!     GameConfig::default(),
//! );
//! game.start();
//!
//! for letter in "STAR".chars() {
//!     game.select_letter(letter);
//! }
//! let outcome = game.submit();
//! assert!(matches!(outcome, SubmitOutcome::Found { points: 40, .. }));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
