//! Honeycomb letter board
//!
//! Seven letters indexed 0-6: the center tile first, then the outer ring.

use std::fmt;
use thiserror::Error;

/// Number of tiles on a honeycomb board
pub const BOARD_SIZE: usize = 7;

/// A fixed honeycomb of seven uppercase letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    letters: [char; BOARD_SIZE],
}

/// Error type for invalid boards
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Board must have exactly 7 letters, got {0}")]
    InvalidLength(usize),
    #[error("Board letter '{0}' is not an ASCII letter")]
    InvalidLetter(char),
}

impl Board {
    /// Create a board from a string of letters
    ///
    /// Letters are normalized to uppercase. Whitespace and commas are ignored
    /// so both `"STAREPL"` and `"S,T,A,R,E,P,L"` are accepted.
    ///
    /// # Errors
    /// Returns `BoardError` if:
    /// - There are not exactly 7 letters
    /// - Any letter is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use honeycomb_words::core::Board;
    ///
    /// let board = Board::new("starepl").unwrap();
    /// assert_eq!(board.letter_at(0), Some('S'));
    ///
    /// assert!(Board::new("star").is_err());
    /// assert!(Board::new("stare9l").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, BoardError> {
        let letters: Vec<char> = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect();

        if let Some(&bad) = letters.iter().find(|c| !c.is_ascii_alphabetic()) {
            return Err(BoardError::InvalidLetter(bad));
        }

        let letters: [char; BOARD_SIZE] = letters
            .iter()
            .map(char::to_ascii_uppercase)
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|v: Vec<char>| BoardError::InvalidLength(v.len()))?;

        Ok(Self { letters })
    }

    /// Get the letters in position order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; BOARD_SIZE] {
        &self.letters
    }

    /// Get the letter at a position, or `None` if the position is off the board
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters.get(position).copied()
    }

    /// Check whether a position is on the board
    #[inline]
    #[must_use]
    pub const fn contains(&self, position: usize) -> bool {
        position < BOARD_SIZE
    }

    /// All positions showing the given letter (case-insensitive)
    pub fn positions_of(&self, letter: char) -> impl Iterator<Item = usize> + '_ {
        let letter = letter.to_ascii_uppercase();
        self.letters
            .iter()
            .enumerate()
            .filter(move |&(_, &l)| l == letter)
            .map(|(i, _)| i)
    }

    /// Concatenate the letters at the given positions, in order
    ///
    /// Positions off the board are skipped.
    #[must_use]
    pub fn word_from(&self, positions: &[usize]) -> String {
        positions
            .iter()
            .filter_map(|&p| self.letter_at(p))
            .collect()
    }

    /// Find a tile sequence that spells `word`, using each tile at most once
    ///
    /// Returns `None` if the word cannot be spelled on this board. Tiles
    /// sharing a letter are interchangeable, so taking the first unused one
    /// is always enough.
    ///
    /// # Examples
    /// ```
    /// use honeycomb_words::core::Board;
    ///
    /// let board = Board::new("STAREPL").unwrap();
    /// assert_eq!(board.spell("star"), Some(vec![0, 1, 2, 3]));
    /// assert_eq!(board.spell("STARS"), None);
    /// ```
    #[must_use]
    pub fn spell(&self, word: &str) -> Option<Vec<usize>> {
        let mut used = [false; BOARD_SIZE];
        let mut path = Vec::with_capacity(word.len());

        for ch in word.chars() {
            let position = self.positions_of(ch).find(|&p| !used[p])?;
            used[position] = true;
            path.push(position);
        }

        Some(path)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new("STAREPL").unwrap()
    }

    #[test]
    fn board_creation_uppercase_normalized() {
        let board = Board::new("stArEpL").unwrap();
        assert_eq!(board.letters(), &['S', 'T', 'A', 'R', 'E', 'P', 'L']);
    }

    #[test]
    fn board_creation_accepts_separators() {
        let board = Board::new("S,T,A,R,E,P,L").unwrap();
        assert_eq!(board, self::board());

        let spaced = Board::new("S T A R E P L").unwrap();
        assert_eq!(spaced, self::board());
    }

    #[test]
    fn board_creation_invalid_length() {
        assert_eq!(Board::new("STAR"), Err(BoardError::InvalidLength(4)));
        assert_eq!(Board::new("STAREPLX"), Err(BoardError::InvalidLength(8)));
        assert_eq!(Board::new(""), Err(BoardError::InvalidLength(0)));
    }

    #[test]
    fn board_creation_invalid_letter() {
        assert_eq!(Board::new("STARE9L"), Err(BoardError::InvalidLetter('9')));
        assert_eq!(Board::new("STARÉPL"), Err(BoardError::InvalidLetter('É')));
    }

    #[test]
    fn letter_at_bounds() {
        let board = board();
        assert_eq!(board.letter_at(0), Some('S'));
        assert_eq!(board.letter_at(6), Some('L'));
        assert_eq!(board.letter_at(7), None);
        assert!(board.contains(6));
        assert!(!board.contains(7));
    }

    #[test]
    fn positions_of_letter() {
        let board = board();
        assert_eq!(board.positions_of('a').collect::<Vec<_>>(), vec![2]);
        assert_eq!(board.positions_of('Z').count(), 0);

        let doubled = Board::new("EEARTSL").unwrap();
        assert_eq!(doubled.positions_of('E').collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn word_from_positions() {
        let board = board();
        assert_eq!(board.word_from(&[0, 1, 2, 3]), "STAR");
        assert_eq!(board.word_from(&[3, 2, 1, 0]), "RATS");
        assert_eq!(board.word_from(&[]), "");
    }

    #[test]
    fn spell_uses_each_tile_once() {
        let board = board();
        assert_eq!(board.spell("PLEA"), Some(vec![5, 6, 4, 2]));
        assert_eq!(board.spell("SASS"), None);
        assert_eq!(board.spell("ZEST"), None);
        assert_eq!(board.spell(""), Some(vec![]));
    }

    #[test]
    fn spell_with_duplicate_letters() {
        let board = Board::new("EEARTSL").unwrap();
        assert_eq!(board.spell("TEE"), Some(vec![4, 0, 1]));
        assert_eq!(board.spell("EEE"), None);
    }

    #[test]
    fn board_display() {
        assert_eq!(board().to_string(), "S T A R E P L");
    }
}
