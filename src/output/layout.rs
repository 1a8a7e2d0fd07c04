//! Honeycomb tile layout
//!
//! Maps board positions onto a 5-row by 3-column grid: the center tile in the
//! middle and the outer ring around it.

use crate::core::BOARD_SIZE;

/// Grid rows used by the honeycomb
pub const GRID_ROWS: u16 = 5;
/// Grid columns used by the honeycomb
pub const GRID_COLS: u16 = 3;

/// `(row, column)` of each board position
///
/// Order: center, top, top-left, bottom-left, bottom, bottom-right, top-right.
pub const HEX_SLOTS: [(u16, u16); BOARD_SIZE] = [
    (2, 1),
    (0, 1),
    (1, 0),
    (3, 0),
    (4, 1),
    (3, 2),
    (1, 2),
];

/// Board position drawn at a grid cell, given a drawing order
///
/// `order[slot]` is the board position drawn in `HEX_SLOTS[slot]`.
#[must_use]
pub fn position_at(order: &[usize; BOARD_SIZE], row: u16, col: u16) -> Option<usize> {
    HEX_SLOTS
        .iter()
        .position(|&slot| slot == (row, col))
        .map(|slot| order[slot])
}

/// The identity drawing order
#[must_use]
pub fn default_order() -> [usize; BOARD_SIZE] {
    std::array::from_fn(|i| i)
}
