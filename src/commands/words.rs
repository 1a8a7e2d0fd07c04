//! Word listing command
//!
//! Lists every acceptable word with its value and the best possible total score.

use crate::core::{Board, Dictionary};
use crate::engine::GameConfig;

/// A single dictionary entry as it plays on the board
pub struct WordEntry {
    pub word: String,
    pub points: u32,
    pub spellable: bool,
}

/// Listing of the whole dictionary
pub struct WordListing {
    pub entries: Vec<WordEntry>,
    pub spellable_count: usize,
    pub max_score: u32,
}

/// List all acceptable words for a board
///
/// Words that cannot be spelled on the board or are shorter than the minimum
/// are listed with zero points and do not count towards the maximum score.
#[must_use]
pub fn list_words(board: &Board, dictionary: &Dictionary, config: &GameConfig) -> WordListing {
    let entries: Vec<WordEntry> = dictionary
        .iter()
        .map(|word| {
            let spellable = board.spell(word).is_some() && word.len() >= config.min_word_len;
            WordEntry {
                word: word.to_string(),
                points: if spellable { config.points_for(word) } else { 0 },
                spellable,
            }
        })
        .collect();

    let spellable_count = entries.iter().filter(|e| e.spellable).count();
    let max_score = entries.iter().map(|e| e.points).sum();

    WordListing {
        entries,
        spellable_count,
        max_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{WORDS_COUNT, default_board, default_dictionary};

    #[test]
    fn default_puzzle_listing() {
        let board = default_board().unwrap();
        let dict = default_dictionary().unwrap();
        let listing = list_words(&board, &dict, &GameConfig::default());

        assert_eq!(listing.entries.len(), WORDS_COUNT);
        assert_eq!(listing.spellable_count, WORDS_COUNT);
        // Every default word has four letters
        assert_eq!(listing.max_score, 40 * u32::try_from(WORDS_COUNT).unwrap());
    }

    #[test]
    fn unspellable_words_score_nothing() {
        let board = Board::new("STAREPL").unwrap();
        let dict = Dictionary::new(["STAR", "ZEST", "AT"]).unwrap();
        let config = GameConfig {
            min_word_len: 3,
            ..GameConfig::default()
        };
        let listing = list_words(&board, &dict, &config);

        assert_eq!(listing.spellable_count, 1);
        assert_eq!(listing.max_score, 40);
        assert!(!listing.entries[1].spellable);
        assert_eq!(listing.entries[2].points, 0);
    }
}
