//! Display functions for game state and command results

use super::formatters::{format_current_word, format_found_words, score_bar};
use super::layout::{GRID_COLS, GRID_ROWS, default_order, position_at};
use crate::commands::replay::ReplayResult;
use crate::commands::{CheckResult, WordListing};
use crate::core::Board;
use crate::engine::{MessageStyle, Snapshot, SubmitOutcome};
use colored::Colorize;
use std::io::{self, Write};

/// Print the honeycomb with selected tiles highlighted
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn print_board<W: Write>(out: &mut W, board: &Board, selection: &[usize]) -> io::Result<()> {
    let order = default_order();
    writeln!(out)?;

    for row in 0..GRID_ROWS {
        write!(out, "        ")?;
        for col in 0..GRID_COLS {
            match position_at(&order, row, col) {
                Some(position) => {
                    let letter = board.letter_at(position).unwrap_or('?');
                    if selection.contains(&position) {
                        write!(out, "{}", format!("[{letter}]").bright_yellow().bold())?;
                    } else {
                        write!(out, "({letter})")?;
                    }
                }
                None => write!(out, "   ")?,
            }
            write!(out, "  ")?;
        }
        writeln!(out)?;
    }

    let legend: Vec<String> = board
        .letters()
        .iter()
        .enumerate()
        .map(|(i, letter)| format!("{}:{letter}", i + 1))
        .collect();
    writeln!(out, "\n  {}", legend.join("  ").bright_black())?;
    Ok(())
}

/// Print current word, score, message and found words
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn print_status<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Current Word: {}    Score: {}",
        format_current_word(&snapshot.current_word)
            .bright_white()
            .bold(),
        snapshot.score.to_string().bright_yellow().bold()
    )?;

    let text = snapshot.message.text.as_str();
    let message = match snapshot.message.style {
        MessageStyle::Info => text.normal(),
        MessageStyle::Success => text.green().bold(),
        MessageStyle::Error => text.red(),
    };
    writeln!(out, "{message}")?;
    writeln!(
        out,
        "Words Found: {}",
        format_found_words(&snapshot.found_words)
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    Ok(())
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Checking: {}", result.word.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    match &result.path {
        Some(path) => {
            let tiles: Vec<String> = path.iter().map(|p| (p + 1).to_string()).collect();
            println!("  On board:   {} (tiles {})", "yes".green(), tiles.join("-"));
        }
        None => println!("  On board:   {}", "no".red()),
    }

    if result.accepted {
        println!("  Accepted:   {}", "yes".green());
        println!("  Points:     {}", result.points.to_string().bright_yellow());
    } else {
        println!("  Accepted:   {}", "no".red());
    }

    println!();
    if result.scores() {
        println!("{}", format!("✅ {} scores!", result.word).green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} does not score", result.word).red().bold()
        );
    }
}

/// Print every acceptable word with its points
pub fn print_word_listing(listing: &WordListing) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ACCEPTABLE WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for entry in &listing.entries {
        if entry.spellable {
            println!(
                "   {} {:>4} pts",
                format!("{:<10}", entry.word).bright_white().bold(),
                entry.points
            );
        } else {
            println!(
                "   {} {}",
                format!("{:<10}", entry.word).bright_black(),
                "not on board".bright_black()
            );
        }
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Words:       {}", listing.entries.len());
    println!("   Playable:    {}", listing.spellable_count);
    println!(
        "   Max score:   {}",
        listing.max_score.to_string().bright_yellow().bold()
    );
}

/// Print a replayed session step by step
pub fn print_replay_result(result: &ReplayResult, max_score: u32) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Replay".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let outcome = match &step.outcome {
            Some(SubmitOutcome::Found { word, points }) => {
                format!("found {word} (+{points})").green().to_string()
            }
            Some(SubmitOutcome::AlreadyFound(word)) => {
                format!("{word} already found").yellow().to_string()
            }
            Some(SubmitOutcome::NotAWord(word)) => format!("{word} rejected").red().to_string(),
            Some(SubmitOutcome::TooShort { length }) => {
                format!("too short ({length})").red().to_string()
            }
            None => String::new(),
        };
        println!(
            "{:>3}. {:<12} {:<8} {:>5}  {}",
            i + 1,
            step.action.to_string(),
            format_current_word(&step.word_after),
            step.score_after,
            outcome
        );
    }

    let state = &result.final_state;
    println!("\nSession:  {}", state.state);
    println!(
        "Score:    [{}] {}/{}",
        score_bar(state.score, max_score, 20).green(),
        state.score,
        max_score
    );
    println!("Found:    {}", format_found_words(&state.found_words));
    println!("Message:  {}", state.message);
}
