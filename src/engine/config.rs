//! Game rules configuration

use std::fmt;

/// What happens to found words and score when the player exits a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// Progress survives exit and is cleared by the next start
    #[default]
    KeepProgress,
    /// Exiting clears progress immediately
    ResetProgress,
}

impl ExitPolicy {
    /// Parse a policy name; anything but `reset` keeps progress
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "reset" | "reset-progress" => Self::ResetProgress,
            _ => Self::KeepProgress,
        }
    }
}

impl fmt::Display for ExitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeepProgress => write!(f, "keep"),
            Self::ResetProgress => write!(f, "reset"),
        }
    }
}

/// Rules for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Shortest word that is looked up at all
    pub min_word_len: usize,
    /// Points awarded per letter of a newly found word
    pub points_per_letter: u32,
    pub exit_policy: ExitPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_word_len: 2,
            points_per_letter: 10,
            exit_policy: ExitPolicy::KeepProgress,
        }
    }
}

impl GameConfig {
    /// Points a newly found word of this length is worth
    #[inline]
    #[must_use]
    pub fn points_for(&self, word: &str) -> u32 {
        u32::try_from(word.chars().count())
            .unwrap_or(u32::MAX)
            .saturating_mul(self.points_per_letter)
    }
}
