//! Word lists for the honeycomb game
//!
//! Provides the embedded default puzzle compiled into the binary.

mod embedded;
pub mod loader;

use crate::core::{Board, BoardError, Dictionary, DictionaryError};

pub use embedded::{LETTERS, WORDS, WORDS_COUNT};

/// The default seven-letter board
///
/// # Errors
///
/// Returns an error if the embedded letters are not a valid board.
pub fn default_board() -> Result<Board, BoardError> {
    Board::new(&LETTERS.iter().collect::<String>())
}

/// The default acceptable word set
///
/// # Errors
///
/// Returns an error if the embedded word list is empty or malformed.
pub fn default_dictionary() -> Result<Dictionary, DictionaryError> {
    Dictionary::new(WORDS.iter().copied())
}
