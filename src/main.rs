//! Honeycomb Words - CLI
//!
//! Seven-letter honeycomb word game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use honeycomb_words::{
    commands::{check_word, list_words, parse_script, run_replay, run_simple},
    core::{Board, Dictionary},
    engine::{ExitPolicy, Game, GameConfig},
    output::{print_check_result, print_replay_result, print_word_listing},
    wordlists::{default_board, default_dictionary, loader::load_from_file},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "honeycomb_words",
    about = "Seven-letter honeycomb word game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board letters, center tile first (default: STAREPL)
    #[arg(short, long, global = true)]
    letters: Option<String>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    words: Option<String>,

    /// Exit behaviour: 'keep' (default) keeps score until the next start, 'reset' clears it
    #[arg(long, global = true, default_value = "keep", value_parser = ["keep", "reset"])]
    exit_policy: String,

    /// Shortest word that is checked against the list
    #[arg(long, global = true, default_value = "2")]
    min_length: usize,

    /// Points per letter of a newly found word
    #[arg(long, global = true, default_value = "10")]
    points: u32,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Check whether a word fits the board and scores
    Check {
        /// The word to check
        word: String,
    },

    /// List every acceptable word and the maximum score
    Words,

    /// Replay a comma-separated action script, e.g. "start,select:0,select:1,submit"
    Replay {
        /// Actions: start, select:N, deselect, submit, reset, exit
        script: String,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Load the board from the -l flag or the embedded default
fn load_board(letters: Option<&str>) -> Result<Board> {
    match letters {
        Some(text) => Board::new(text).with_context(|| format!("Invalid board '{text}'")),
        None => default_board().context("Embedded board is invalid"),
    }
}

/// Load the word list from the -w flag or the embedded default
fn load_dictionary(path: Option<&str>) -> Result<Dictionary> {
    match path {
        Some(path) => Ok(load_from_file(path)?),
        None => default_dictionary().context("Embedded word list is invalid"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let board = load_board(cli.letters.as_deref())?;
    let dictionary = load_dictionary(cli.words.as_deref())?;
    let config = GameConfig {
        min_word_len: cli.min_length,
        points_per_letter: cli.points,
        exit_policy: ExitPolicy::from_name(&cli.exit_policy),
    };
    tracing::debug!(%board, words = dictionary.len(), ?config, "puzzle loaded");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(Game::new(board, dictionary, config)),
        Commands::Simple => {
            let mut game = Game::new(board, dictionary, config);
            run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { word } => {
            let result =
                check_word(&word, &board, &dictionary, &config).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Words => {
            let listing = list_words(&board, &dictionary, &config);
            print_word_listing(&listing);
            Ok(())
        }
        Commands::Replay { script } => run_replay_command(&script, board, dictionary, config),
    }
}

fn run_replay_command(
    script: &str,
    board: Board,
    dictionary: Dictionary,
    config: GameConfig,
) -> Result<()> {
    let actions = parse_script(script).map_err(|e| anyhow::anyhow!(e))?;
    let max_score = list_words(&board, &dictionary, &config).max_score;

    let mut game = Game::new(board, dictionary, config);
    let result = run_replay(&mut game, &actions);
    print_replay_result(&result, max_score);
    Ok(())
}

fn run_play_command(game: Game) -> Result<()> {
    use honeycomb_words::interactive::{App, run_tui};

    let app = App::new(game);
    run_tui(app)
}
