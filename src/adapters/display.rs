//! In-memory 2×16 character display.
//!
//! Same clipping rules as [`CharLcd`](crate::drivers::char_lcd::CharLcd):
//! text written past the last column is dropped, not wrapped, and
//! non-ASCII characters are shown as `?`. Used wherever the screen has to
//! be read back, such as host tests.

use crate::app::ports::DisplayPort;
use crate::control::screen::{COLUMNS, ROWS};

pub struct CharGrid {
    cells: [[u8; COLUMNS]; ROWS],
    cursor_row: usize,
    cursor_col: usize,
}

impl Default for CharGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl CharGrid {
    /// Blank grid, cursor at the origin.
    pub fn new() -> Self {
        Self {
            cells: [[b' '; COLUMNS]; ROWS],
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    /// Contents of `row`. Out-of-range rows read as empty.
    pub fn row(&self, row: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
            .unwrap_or("")
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }
}

impl DisplayPort for CharGrid {
    fn set_cursor(&mut self, row: u8, column: u8) {
        self.cursor_row = usize::from(row).min(ROWS - 1);
        self.cursor_col = usize::from(column).min(COLUMNS);
    }

    fn write_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.cursor_col >= COLUMNS {
                break;
            }
            self.cells[self.cursor_row][self.cursor_col] =
                if ch.is_ascii() { ch as u8 } else { b'?' };
            self.cursor_col += 1;
        }
    }
}
