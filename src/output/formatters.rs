//! Formatting utilities for terminal output

/// Placeholder shown while no tiles are selected
pub const EMPTY_WORD: &str = "___";

/// Format the word being assembled
#[must_use]
pub fn format_current_word(word: &str) -> &str {
    if word.is_empty() { EMPTY_WORD } else { word }
}

/// Format found words as a comma-separated list
#[must_use]
pub fn format_found_words(words: &[String]) -> String {
    if words.is_empty() {
        "You haven't found any words yet.".to_string()
    } else {
        words.join(", ")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar of score against the best possible score
#[must_use]
pub fn score_bar(score: u32, max_score: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(max_score), width)
}
