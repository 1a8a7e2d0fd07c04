//! TUI rendering with ratatui
//!
//! Start screen, honeycomb board and game status panels.

use super::app::App;
use crate::core::BOARD_SIZE;
use crate::engine::{MessageStyle, SessionState};
use crate::output::formatters::format_current_word;
use crate::output::layout::{GRID_COLS, GRID_ROWS, HEX_SLOTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
};
use std::rc::Rc;

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
/// Horizontal distance between tile columns
const COL_STEP: u16 = 8;
/// Vertical distance between grid rows; tiles in neighbouring columns are staggered by it
const ROW_STEP: u16 = 2;

const HONEY: Color = Color::Rgb(245, 158, 11);
const DARK_HONEY: Color = Color::Rgb(146, 64, 14);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    match app.game.state() {
        SessionState::NotStarted => render_start_screen(f, app, f.area()),
        SessionState::InProgress => render_game(f, app),
    }
}

fn game_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(5),  // Current word, score, message
            Constraint::Min(13),    // Honeycomb
            Constraint::Length(3),  // Progress
            Constraint::Length(5),  // Found words
            Constraint::Length(1),  // Help bar
        ])
        .split(area)
}

/// Area the honeycomb is drawn into for a given terminal area
#[must_use]
pub fn board_area(frame: Rect) -> Rect {
    game_chunks(frame)[2]
}

/// Screen rectangle of every board position, centered in `area`
///
/// Rectangles are clipped to `area`.
#[must_use]
pub fn tile_rects(area: Rect, order: &[usize; BOARD_SIZE]) -> [Rect; BOARD_SIZE] {
    let width = (GRID_COLS - 1) * COL_STEP + TILE_WIDTH;
    let height = (GRID_ROWS - 1) * ROW_STEP + TILE_HEIGHT;
    let left = area.x + area.width.saturating_sub(width) / 2;
    let top = area.y + area.height.saturating_sub(height) / 2;

    let mut rects = [Rect::default(); BOARD_SIZE];
    for (slot, &(row, col)) in HEX_SLOTS.iter().enumerate() {
        let rect = Rect::new(
            left + col * COL_STEP,
            top + row * ROW_STEP,
            TILE_WIDTH,
            TILE_HEIGHT,
        );
        rects[order[slot]] = rect.intersection(area);
    }
    rects
}

/// Board position under a terminal cell, if any
#[must_use]
pub fn tile_at(area: Rect, order: &[usize; BOARD_SIZE], column: u16, row: u16) -> Option<usize> {
    tile_rects(area, order)
        .iter()
        .position(|rect| rect.contains(Position::new(column, row)))
}

fn render_start_screen(f: &mut Frame, app: &App, area: Rect) {
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Honeycomb Word Game",
            Style::default().fg(HONEY).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Connect the hexagon cells to form words and earn points!"),
        Line::from("How many words can you discover?"),
        Line::from(""),
        Line::from(Span::styled(
            "[ Press Enter to start ]",
            Style::default()
                .fg(Color::Black)
                .bg(HONEY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if app.game.score() > 0 {
        content.push(Line::from(Span::styled(
            format!(
                "Last session: {} points, {} words",
                app.game.score(),
                app.game.found_words().len()
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }
    content.push(Line::from(Span::styled(
        "q: Quit",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(DARK_HONEY)),
        );
    f.render_widget(paragraph, area);
}

fn render_game(f: &mut Frame, app: &App) {
    let chunks = game_chunks(f.area());

    render_header(f, chunks[0]);
    render_status(f, app, chunks[1]);
    render_board(f, app, chunks[2]);
    render_progress(f, app, chunks[3]);
    render_found_words(f, app, chunks[4]);
    render_help(f, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐝 HONEYCOMB WORD GAME")
        .style(Style::default().fg(HONEY).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(HONEY)),
        );
    f.render_widget(header, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let word = app.game.current_word();
    let message = app.game.message();
    let message_style = match message.style {
        MessageStyle::Success => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        MessageStyle::Error => Style::default().fg(Color::Red),
        MessageStyle::Info => Style::default().fg(DARK_HONEY),
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Current Word: "),
            Span::styled(
                format_current_word(&word).to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    Score: "),
            Span::styled(
                app.game.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(message.text.clone(), message_style)),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let flashing = app.is_flashing();
    let rects = tile_rects(area, &app.order);

    for (position, rect) in rects.iter().enumerate() {
        if rect.width < TILE_WIDTH || rect.height < TILE_HEIGHT {
            continue;
        }

        let letter = app.game.board().letter_at(position).unwrap_or('?');
        let selected = app.game.is_selected(position);

        let (tile_style, border_style) = if selected {
            (
                Style::default()
                    .fg(Color::White)
                    .bg(HONEY)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(HONEY),
            )
        } else if flashing {
            (
                Style::default()
                    .fg(DARK_HONEY)
                    .bg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::LightYellow),
            )
        } else {
            (
                Style::default().fg(HONEY).add_modifier(Modifier::BOLD),
                Style::default().fg(DARK_HONEY),
            )
        };

        let tile = Paragraph::new(Span::styled(format!(" {letter} "), tile_style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(format!("{}", position + 1))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            );
        f.render_widget(tile, *rect);
    }
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let score = app.game.score();
    let percent = if app.max_score == 0 {
        0
    } else {
        (u64::from(score) * 100 / u64::from(app.max_score)).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(HONEY))
        .percent(percent)
        .label(format!(
            "{score}/{} points | {}/{} words",
            app.max_score,
            app.game.found_words().len(),
            app.game.dictionary().len()
        ));
    f.render_widget(gauge, area);
}

fn render_found_words(f: &mut Frame, app: &App, area: Rect) {
    let found = app.game.found_words();

    let content = if found.is_empty() {
        Line::from(Span::styled(
            "You haven't found any words yet.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(
            found
                .iter()
                .flat_map(|word| {
                    [
                        Span::styled(
                            format!(" {word} "),
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect::<Vec<_>>(),
        )
    };

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Words Found ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Letters/1-7/Click: Select | Backspace: Undo | Enter: Check | Space: Shuffle | Ctrl-R: Reset | Esc: Exit | q: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
