//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI

use crate::engine::{Game, SessionState, SubmitOutcome};
use crate::output::display::{print_board, print_status};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(game: &mut Game) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(game, &mut stdin.lock(), &mut stdout.lock()).map_err(|e| e.to_string())
}

/// Run the game loop over arbitrary input and output streams
///
/// Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  Honeycomb Word Game                         ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Connect the hexagon cells to form words and earn points!")?;
    writeln!(out, "How many words can you discover?\n")?;

    loop {
        match game.state() {
            SessionState::NotStarted => {
                let Some(line) = prompt(input, out, "Press Enter to start ('quit' to exit)")?
                else {
                    break;
                };
                if is_quit(&line) {
                    break;
                }
                game.start();
                print_help(out)?;
            }
            SessionState::InProgress => {
                print_board(out, game.board(), game.selection())?;
                print_status(out, &game.snapshot())?;

                let Some(line) = prompt(input, out, "Letters, digit, or command")? else {
                    break;
                };
                if is_quit(&line) {
                    break;
                }
                handle_line(game, &line, out)?;
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn handle_line<W: Write>(game: &mut Game, line: &str, out: &mut W) -> io::Result<()> {
    match line.to_ascii_lowercase().as_str() {
        "" | "check" | "submit" => {
            if let SubmitOutcome::Found { word, points } = game.submit() {
                writeln!(
                    out,
                    "{}",
                    format!("✨ {word} +{points}").bright_green().bold()
                )?;
            }
        }
        "<" | "undo" => {
            game.deselect_last();
        }
        "reset" => game.reset(),
        "exit" => {
            game.exit();
            writeln!(out, "\nBack to the start screen.\n")?;
        }
        "start" => game.start(),
        "help" | "?" => print_help(out)?,
        other => {
            for ch in other.chars().filter(|c| !c.is_whitespace()) {
                if let Some(position) = ch.to_digit(10) {
                    // Tiles are numbered 1-7 for the player
                    if let Some(position) = (position as usize).checked_sub(1) {
                        game.select_or_deselect(position);
                    }
                } else {
                    game.select_letter(ch);
                }
            }
        }
    }
    Ok(())
}

fn is_quit(line: &str) -> bool {
    matches!(line.to_ascii_lowercase().as_str(), "quit" | ":q")
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nType letters (e.g. 'star') or tile numbers 1-7 to select tiles.")?;
    writeln!(out, "Typing the last selected tile again removes it.")?;
    writeln!(
        out,
        "Commands: Enter/'check' to submit, 'undo', 'reset', 'exit', 'quit'\n"
    )?;
    Ok(())
}

/// Read one trimmed line, or `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameConfig;
    use crate::wordlists::{default_board, default_dictionary};

    fn play(script: &str) -> (Game, String) {
        let mut game = Game::new(
            default_board().unwrap(),
            default_dictionary().unwrap(),
            GameConfig::default(),
        );
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        run_simple_with(&mut game, &mut input, &mut output).unwrap();
        (game, String::from_utf8(output).unwrap())
    }

    #[test]
    fn typing_a_word_and_submitting_scores() {
        let (game, output) = play("\nstar\n\nquit\n");
        assert_eq!(game.score(), 40);
        assert_eq!(game.found_words(), &["STAR".to_string()]);
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn digits_select_by_position() {
        let (game, _) = play("\n4321\ncheck\n");
        assert_eq!(game.found_words(), &["RATS".to_string()]);
    }

    #[test]
    fn undo_removes_last_tile() {
        let (game, _) = play("\nsta\nundo\n");
        assert_eq!(game.current_word(), "ST");
    }

    #[test]
    fn exit_returns_to_start_screen() {
        let (game, _) = play("\nstar\n\nexit\n");
        assert_eq!(game.state(), SessionState::NotStarted);
        assert_eq!(game.score(), 40);
    }

    #[test]
    fn quit_before_start() {
        let (game, output) = play("quit\n");
        assert_eq!(game.state(), SessionState::NotStarted);
        assert!(output.contains("Press Enter to start"));
    }
}
