//! Command implementations

pub mod check;
pub mod replay;
pub mod simple;
pub mod words;

pub use check::{CheckResult, check_word};
pub use replay::{Action, ReplayResult, parse_script, run_replay};
pub use simple::run_simple;
pub use words::{WordEntry, WordListing, list_words};
