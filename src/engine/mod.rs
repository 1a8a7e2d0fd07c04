//! Game engine
//!
//! The selection/validation state machine and its rules.

mod config;
mod game;
mod state;

pub use config::{ExitPolicy, GameConfig};
pub use game::{Game, SelectionChange, SubmitOutcome};
pub use state::{DEFAULT_PROMPT, Message, MessageStyle, SessionState, Snapshot};
