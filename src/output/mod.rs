//! Terminal output formatting
//!
//! Display utilities for the line-based modes and pretty-printing.

pub mod display;
pub mod formatters;
pub mod layout;

pub use display::{
    print_board, print_check_result, print_replay_result, print_status, print_word_listing,
};
