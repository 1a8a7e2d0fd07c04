//! TUI application state and logic

use crate::commands::list_words;
use crate::core::BOARD_SIZE;
use crate::engine::{Game, SessionState, SubmitOutcome};
use crate::output::layout::default_order;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::seq::SliceRandom;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// Highlight after starting a session
pub const START_FLASH: Duration = Duration::from_millis(1500);
/// Highlight after a reset
pub const RESET_FLASH: Duration = Duration::from_millis(800);
/// Highlight after finding a word
pub const SUCCESS_FLASH: Duration = Duration::from_millis(500);

const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub game: Game,
    /// Best achievable score on this board
    pub max_score: u32,
    /// `order[slot]` is the board position drawn in layout slot `slot`
    pub order: [usize; BOARD_SIZE],
    pub flash_until: Option<Instant>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        let max_score = list_words(game.board(), game.dictionary(), game.config()).max_score;

        Self {
            game,
            max_score,
            order: default_order(),
            flash_until: None,
            should_quit: false,
        }
    }

    /// Whether tiles should currently render highlighted
    #[must_use]
    pub fn is_flashing(&self) -> bool {
        self.flash_until.is_some_and(|until| Instant::now() < until)
    }

    fn flash(&mut self, duration: Duration) {
        self.flash_until = Some(Instant::now() + duration);
    }

    pub fn start(&mut self) {
        self.game.start();
        self.flash(START_FLASH);
    }

    pub fn reset(&mut self) {
        self.game.reset();
        self.flash(RESET_FLASH);
    }

    pub fn submit(&mut self) {
        if let SubmitOutcome::Found { .. } = self.game.submit() {
            self.flash(SUCCESS_FLASH);
        }
    }

    /// Shuffle the outer ring's drawing order
    ///
    /// Only the display moves; board positions and the selection are unchanged.
    pub fn shuffle(&mut self) {
        self.order[1..].shuffle(&mut rand::rng());
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.game.state() {
            SessionState::NotStarted => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.start(),
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            SessionState::InProgress => match key.code {
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.reset();
                }
                KeyCode::F(5) => self.reset(),
                KeyCode::Esc => self.game.exit(),
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => {
                    self.game.deselect_last();
                }
                KeyCode::Char(' ') => self.shuffle(),
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.handle_char(c);
                }
                _ => {}
            },
        }
    }

    fn handle_char(&mut self, c: char) {
        if let Some(digit) = c.to_digit(10) {
            // Tiles are numbered 1-7 for the player
            if let Some(position) = (digit as usize).checked_sub(1) {
                self.game.select_or_deselect(position);
            }
        } else if self.game.board().positions_of(c).next().is_some() {
            self.game.select_letter(c);
        } else if c == 'q' {
            self.should_quit = true;
        }
    }

    /// Handle a left click at a terminal cell
    ///
    /// `frame` is the full terminal area; clicks outside any tile are ignored.
    pub fn handle_click(&mut self, frame: Rect, column: u16, row: u16) {
        if self.game.state() != SessionState::InProgress {
            return;
        }

        let board_area = super::rendering::board_area(frame);
        if let Some(position) = super::rendering::tile_at(board_area, &self.order, column, row) {
            self.game.select_or_deselect(position);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "tui exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so flash highlights expire without further input
        if !event::poll(TICK)? {
            continue;
        }

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let size = terminal.size()?;
                app.handle_click(Rect::new(0, 0, size.width, size.height), column, row);
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameConfig;
    use crate::interactive::rendering;
    use crate::wordlists::{default_board, default_dictionary};

    fn app() -> App {
        App::new(Game::new(
            default_board().unwrap(),
            default_dictionary().unwrap(),
            GameConfig::default(),
        ))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn enter_starts_with_flash() {
        let mut app = app();
        assert!(!app.is_flashing());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.state(), SessionState::InProgress);
        assert!(app.is_flashing());
    }

    #[test]
    fn typing_and_submitting_scores() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "star");
        assert_eq!(app.game.current_word(), "STAR");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.score(), 40);
        assert!(app.game.selection().is_empty());
    }

    #[test]
    fn digits_and_backspace() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "567");
        assert_eq!(app.game.current_word(), "EPL");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.game.current_word(), "EP");

        // Out of range digits do nothing
        type_word(&mut app, "09");
        assert_eq!(app.game.current_word(), "EP");
    }

    #[test]
    fn escape_exits_and_keeps_score() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "pale");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.game.state(), SessionState::NotStarted);
        assert_eq!(app.game.score(), 40);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_r_resets() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "seal");
        press(&mut app, KeyCode::Enter);

        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.game.score(), 0);
        assert!(app.game.found_words().is_empty());
    }

    #[test]
    fn q_quits_when_not_a_board_letter() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn shuffle_keeps_center_and_positions() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "ta");

        for _ in 0..10 {
            app.shuffle();
            assert_eq!(app.order[0], 0);
            let mut sorted = app.order;
            sorted.sort_unstable();
            assert_eq!(sorted, default_order());
        }
        assert_eq!(app.game.current_word(), "TA");
    }

    #[test]
    fn f5_resets_with_flash() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "tape");
        press(&mut app, KeyCode::Enter);
        app.flash_until = None;

        press(&mut app, KeyCode::F(5));
        assert_eq!(app.game.score(), 0);
        assert!(app.game.found_words().is_empty());
        assert!(app.is_flashing());
        assert!(app.flash_until.is_some_and(|until| until <= Instant::now() + RESET_FLASH));
    }

    #[test]
    fn found_word_flashes_and_rejection_does_not() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        app.flash_until = None;

        type_word(&mut app, "rats");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.score(), 40);
        assert!(app.is_flashing());
        assert!(app.flash_until.is_some_and(|until| until <= Instant::now() + SUCCESS_FLASH));

        app.flash_until = None;
        type_word(&mut app, "tsar");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.score(), 40);
        assert!(!app.is_flashing());

        // Too short and duplicate submits do not flash either
        type_word(&mut app, "s");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        type_word(&mut app, "rats");
        press(&mut app, KeyCode::Enter);
        assert!(!app.is_flashing());
    }

    #[test]
    fn space_only_reorders_tiles() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "pe");
        let before = app.game.snapshot();

        for _ in 0..10 {
            press(&mut app, KeyCode::Char(' '));
            assert_eq!(app.order[0], 0);
            let mut sorted = app.order;
            sorted.sort_unstable();
            assert_eq!(sorted, default_order());
        }
        assert_eq!(app.game.snapshot(), before);
    }

    #[test]
    fn modified_letters_do_not_select() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::ALT));
        assert!(app.game.selection().is_empty());
        assert!(!app.should_quit);

        app.handle_key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT));
        assert_eq!(app.game.current_word(), "S");
    }

    fn frame() -> Rect {
        Rect::new(0, 0, 80, 30)
    }

    /// Centre cell of the tile drawn for `position`
    fn tile_center(app: &App, position: usize) -> (u16, u16) {
        let rects = rendering::tile_rects(rendering::board_area(frame()), &app.order);
        let rect = rects[position];
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn click_before_start_is_ignored() {
        let mut app = app();
        let (column, row) = tile_center(&app, 0);
        app.handle_click(frame(), column, row);
        assert_eq!(app.game.state(), SessionState::NotStarted);
        assert!(app.game.selection().is_empty());
    }

    #[test]
    fn clicking_a_tile_toggles_it() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        for position in [3, 2] {
            let (column, row) = tile_center(&app, position);
            app.handle_click(frame(), column, row);
        }
        assert_eq!(app.game.selection(), &[3, 2]);
        assert_eq!(app.game.current_word(), "RA");

        let (column, row) = tile_center(&app, 2);
        app.handle_click(frame(), column, row);
        assert_eq!(app.game.selection(), &[3]);

        // Outside the honeycomb
        app.handle_click(frame(), 0, 0);
        assert_eq!(app.game.selection(), &[3]);
    }

    #[test]
    fn click_follows_shuffled_layout() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        app.order = [0, 6, 5, 4, 3, 2, 1];

        // Slot 1 (top) now shows position 6
        let (column, row) = tile_center(&app, 6);
        let expected = rendering::tile_rects(rendering::board_area(frame()), &default_order())[1];
        assert!(expected.contains(ratatui::layout::Position::new(column, row)));

        app.handle_click(frame(), column, row);
        assert_eq!(app.game.selection(), &[6]);
        assert_eq!(app.game.current_word(), "L");

        app.shuffle();
        let (column, row) = tile_center(&app, 4);
        app.handle_click(frame(), column, row);
        assert_eq!(app.game.selection(), &[6, 4]);
    }

    #[test]
    fn max_score_covers_default_words() {
        let app = app();
        assert_eq!(app.max_score, 800);
    }
}
