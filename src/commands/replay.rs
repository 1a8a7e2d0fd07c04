//! Replay command
//!
//! Runs a scripted sequence of player actions against a fresh game.

use crate::engine::{Game, Snapshot, SubmitOutcome};
use std::fmt;

/// A single player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Select(usize),
    Deselect,
    Submit,
    Reset,
    Exit,
}

impl Action {
    /// Parse one action: `start`, `select:N`, `deselect`, `submit`, `reset` or `exit`
    ///
    /// # Errors
    ///
    /// Returns an error for unknown actions or a non-numeric position.
    pub fn parse(text: &str) -> Result<Self, String> {
        let text = text.trim().to_ascii_lowercase();
        match text.split_once(':') {
            Some(("select", position)) => position
                .trim()
                .parse()
                .map(Self::Select)
                .map_err(|_| format!("Invalid position in '{text}'")),
            Some(_) => Err(format!("Unknown action '{text}'")),
            None => match text.as_str() {
                "start" => Ok(Self::Start),
                "deselect" | "undo" => Ok(Self::Deselect),
                "submit" | "check" => Ok(Self::Submit),
                "reset" => Ok(Self::Reset),
                "exit" => Ok(Self::Exit),
                _ => Err(format!("Unknown action '{text}'")),
            },
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Select(position) => write!(f, "select:{position}"),
            Self::Deselect => write!(f, "deselect"),
            Self::Submit => write!(f, "submit"),
            Self::Reset => write!(f, "reset"),
            Self::Exit => write!(f, "exit"),
        }
    }
}

/// Parse a comma-separated action script
///
/// # Errors
///
/// Returns an error naming the first action that fails to parse.
///
/// # Examples
/// ```
/// use honeycomb_words::commands::replay::{Action, parse_script};
///
/// let actions = parse_script("start, select:0, select:1, submit").unwrap();
/// assert_eq!(actions[1], Action::Select(0));
/// assert_eq!(actions.len(), 4);
/// ```
pub fn parse_script(script: &str) -> Result<Vec<Action>, String> {
    script
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(Action::parse)
        .collect()
}

/// One replayed action and what it produced
pub struct ReplayStep {
    pub action: Action,
    pub outcome: Option<SubmitOutcome>,
    pub word_after: String,
    pub score_after: u32,
}

/// Result of replaying a script
pub struct ReplayResult {
    pub steps: Vec<ReplayStep>,
    pub final_state: Snapshot,
}

/// Apply actions to a game in order
pub fn run_replay(game: &mut Game, actions: &[Action]) -> ReplayResult {
    let steps = actions
        .iter()
        .map(|&action| {
            let outcome = match action {
                Action::Start => {
                    game.start();
                    None
                }
                Action::Select(position) => {
                    game.select_or_deselect(position);
                    None
                }
                Action::Deselect => {
                    game.deselect_last();
                    None
                }
                Action::Submit => Some(game.submit()),
                Action::Reset => {
                    game.reset();
                    None
                }
                Action::Exit => {
                    game.exit();
                    None
                }
            };

            ReplayStep {
                action,
                outcome,
                word_after: game.current_word(),
                score_after: game.score(),
            }
        })
        .collect();

    ReplayResult {
        steps,
        final_state: game.snapshot(),
    }
}
