//! Word check command
//!
//! Reports whether a word can be spelled on the board and whether the game accepts it.

use crate::core::{Board, Dictionary};
use crate::engine::GameConfig;

/// Result of checking a word
pub struct CheckResult {
    pub word: String,
    /// Tile positions spelling the word, if it fits on the board
    pub path: Option<Vec<usize>>,
    pub accepted: bool,
    pub points: u32,
}

impl CheckResult {
    /// Whether submitting this word would score
    #[must_use]
    pub const fn scores(&self) -> bool {
        self.accepted && self.path.is_some()
    }
}

/// Check a word against the board and dictionary
///
/// Input is normalized to uppercase before lookup.
///
/// # Errors
///
/// Returns an error if the word is empty or contains anything but ASCII letters.
pub fn check_word(
    word: &str,
    board: &Board,
    dictionary: &Dictionary,
    config: &GameConfig,
) -> Result<CheckResult, String> {
    let word = word.trim().to_ascii_uppercase();

    if word.is_empty() {
        return Err("Word must not be empty".to_string());
    }
    if !word.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(format!("Word '{word}' must contain only letters"));
    }

    let path = board.spell(&word);
    let accepted = dictionary.contains(&word) && word.len() >= config.min_word_len;
    let points = if accepted { config.points_for(&word) } else { 0 };

    Ok(CheckResult {
        word,
        path,
        accepted,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{default_board, default_dictionary};

    fn check(word: &str) -> Result<CheckResult, String> {
        let board = default_board().unwrap();
        let dict = default_dictionary().unwrap();
        check_word(word, &board, &dict, &GameConfig::default())
    }

    #[test]
    fn check_accepted_word() {
        let result = check("star").unwrap();
        assert_eq!(result.word, "STAR");
        assert_eq!(result.path, Some(vec![0, 1, 2, 3]));
        assert!(result.accepted);
        assert_eq!(result.points, 40);
        assert!(result.scores());
    }

    #[test]
    fn check_spellable_but_unknown() {
        let result = check("LAPSE").unwrap();
        assert!(result.path.is_some());
        assert!(!result.accepted);
        assert_eq!(result.points, 0);
        assert!(!result.scores());
    }

    #[test]
    fn check_off_board_word() {
        let result = check("STARS").unwrap();
        assert_eq!(result.path, None);
        assert!(!result.accepted);
    }

    #[test]
    fn check_rejects_malformed_input() {
        assert!(check("").is_err());
        assert!(check("   ").is_err());
        assert!(check("st4r").is_err());
    }
}
