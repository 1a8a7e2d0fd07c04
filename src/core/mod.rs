//! Core domain types for the honeycomb game
//!
//! The letter board and the acceptable word set. Both are immutable once built.

mod board;
mod dictionary;

pub use board::{BOARD_SIZE, Board, BoardError};
pub use dictionary::{Dictionary, DictionaryError};
