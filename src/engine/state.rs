//! Observable game state
//!
//! Presentation layers read a [`Snapshot`] after every operation and redraw from it.

use std::fmt;

/// Prompt shown at the start of every session and after a reset
pub const DEFAULT_PROMPT: &str = "Select letters to form words!";

/// Whether a session is currently being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NotStarted,
    InProgress,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not started"),
            Self::InProgress => write!(f, "in progress"),
        }
    }
}

/// Status line shown to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl Message {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: MessageStyle::Info,
        }
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: MessageStyle::Success,
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: MessageStyle::Error,
        }
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::info(DEFAULT_PROMPT)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Owned copy of everything a presentation layer may display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: SessionState,
    pub selection: Vec<usize>,
    pub current_word: String,
    pub found_words: Vec<String>,
    pub score: u32,
    pub message: Message,
}
