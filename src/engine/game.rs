//! Selection and validation engine
//!
//! Owns the in-progress selection, the found words and the score for one
//! session. Every operation is synchronous and total: domain outcomes such as
//! an unknown word are reported through the status message, never as errors.

use super::config::{ExitPolicy, GameConfig};
use super::state::{Message, SessionState, Snapshot};
use crate::core::{Board, Dictionary};
use tracing::{debug, info, warn};

/// Effect of a tile click on the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Added(usize),
    Removed(usize),
    /// Already selected but not the last tile, or off the board
    Ignored,
}

/// Which branch a submit took
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fewer letters than the minimum; the selection is kept
    TooShort { length: usize },
    NotAWord(String),
    AlreadyFound(String),
    Found { word: String, points: u32 },
}

/// A honeycomb game session
pub struct Game {
    board: Board,
    dictionary: Dictionary,
    config: GameConfig,
    state: SessionState,
    selection: Vec<usize>,
    found_words: Vec<String>,
    score: u32,
    message: Message,
}

impl Game {
    /// Create a game in the not-started state
    ///
    /// # Examples
    /// ```
    /// use honeycomb_words::core::{Board, Dictionary};
    /// use honeycomb_words::engine::{Game, GameConfig};
    ///
    /// let board = Board::new("STAREPL").unwrap();
    /// let dict = Dictionary::new(["STAR", "ARTS"]).unwrap();
    /// let mut game = Game::new(board, dict, GameConfig::default());
    ///
    /// game.start();
    /// for position in [0, 1, 2, 3] {
    ///     game.select_or_deselect(position);
    /// }
    /// assert_eq!(game.current_word(), "STAR");
    ///
    /// game.submit();
    /// assert_eq!(game.score(), 40);
    /// assert!(game.selection().is_empty());
    /// ```
    #[must_use]
    pub fn new(board: Board, dictionary: Dictionary, config: GameConfig) -> Self {
        Self {
            board,
            dictionary,
            config,
            state: SessionState::NotStarted,
            selection: Vec::new(),
            found_words: Vec::new(),
            score: 0,
            message: Message::default(),
        }
    }

    /// Begin a session, clearing all progress
    pub fn start(&mut self) {
        self.state = SessionState::InProgress;
        self.reset();
        info!("session started");
    }

    /// Return to the not-started state
    ///
    /// Found words and score survive unless the exit policy says otherwise.
    pub fn exit(&mut self) {
        self.state = SessionState::NotStarted;
        if self.config.exit_policy == ExitPolicy::ResetProgress {
            self.reset();
        }
        info!(
            policy = %self.config.exit_policy,
            score = self.score,
            found = self.found_words.len(),
            "session exited"
        );
    }

    /// Clear the selection, found words, score and message
    pub fn reset(&mut self) {
        self.selection.clear();
        self.found_words.clear();
        self.score = 0;
        self.message = Message::default();
        debug!("progress reset");
    }

    /// Toggle a tile
    ///
    /// Clicking the most recent tile removes it. Clicking any other selected
    /// tile does nothing. Clicking an unselected tile appends it.
    pub fn select_or_deselect(&mut self, position: usize) -> SelectionChange {
        if !self.board.contains(position) {
            warn!(position, "tile position off the board");
            return SelectionChange::Ignored;
        }

        let change = if self.selection.last() == Some(&position) {
            self.selection.pop();
            SelectionChange::Removed(position)
        } else if self.selection.contains(&position) {
            SelectionChange::Ignored
        } else {
            self.selection.push(position);
            SelectionChange::Added(position)
        };

        debug!(?change, word = %self.current_word(), "selection changed");
        change
    }

    /// Remove the most recently selected tile, if any
    pub fn deselect_last(&mut self) -> SelectionChange {
        match self.selection.last() {
            Some(&position) => self.select_or_deselect(position),
            None => SelectionChange::Ignored,
        }
    }

    /// Toggle the tile showing `letter` (case-insensitive)
    ///
    /// If the most recent tile shows the letter it is removed, otherwise the
    /// first unselected tile with that letter is added.
    pub fn select_letter(&mut self, letter: char) -> SelectionChange {
        let last = self.selection.last().copied();
        let target = self
            .board
            .positions_of(letter)
            .find(|&p| Some(p) == last)
            .or_else(|| {
                self.board
                    .positions_of(letter)
                    .find(|p| !self.selection.contains(p))
            });

        match target {
            Some(position) => self.select_or_deselect(position),
            None => SelectionChange::Ignored,
        }
    }

    /// Validate the current word
    ///
    /// A word shorter than the minimum leaves the selection in place; every
    /// other outcome clears it.
    pub fn submit(&mut self) -> SubmitOutcome {
        let word = self.current_word();
        let length = word.chars().count();

        if length < self.config.min_word_len {
            self.message = Message::error(format!(
                "Select at least {} letters!",
                self.config.min_word_len
            ));
            info!(length, "submit rejected: too short");
            return SubmitOutcome::TooShort { length };
        }

        // Found words are always dictionary words
        let outcome = if self.is_found(&word) {
            self.message = Message::info("You already found this word!");
            SubmitOutcome::AlreadyFound(word)
        } else if self.dictionary.contains(&word) {
            let points = self.config.points_for(&word);
            self.score = self.score.saturating_add(points);
            self.message = Message::success(format!("Correct! You found \"{word}\"!"));
            self.found_words.push(word.clone());
            SubmitOutcome::Found { word, points }
        } else {
            self.message = Message::error(format!("\"{word}\" is not a valid word."));
            SubmitOutcome::NotAWord(word)
        };

        self.selection.clear();
        info!(?outcome, score = self.score, "word submitted");
        outcome
    }

    /// The word spelled by the current selection
    #[must_use]
    pub fn current_word(&self) -> String {
        self.board.word_from(&self.selection)
    }

    /// Whether a word has been found this session
    #[must_use]
    pub fn is_found(&self, word: &str) -> bool {
        self.found_words.iter().any(|w| w == word)
    }

    /// Whether a tile is part of the current selection
    #[must_use]
    pub fn is_selected(&self, position: usize) -> bool {
        self.selection.contains(&position)
    }

    /// Copy out the full observable state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            selection: self.selection.clone(),
            current_word: self.current_word(),
            found_words: self.found_words.clone(),
            score: self.score,
            message: self.message.clone(),
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Found words in discovery order
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn message(&self) -> &Message {
        &self.message
    }
}
