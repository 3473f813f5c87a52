//! Text layout for the 2×16 character display.
//!
//! ```text
//!   col  0123456789012345
//!   row0 Sp:   7, Kn: 123
//!   row1 Fo:   0, To: 130
//! ```
//!
//! Counts occupy columns 4–6 and 13–15, right-aligned with spaces.

use core::fmt::Write;

use heapless::String;

use super::counter::{Catalog, ItemTally};
use super::mapping::ItemClass;

pub const COLUMNS: usize = 16;
pub const ROWS: usize = 2;

/// Width of a numeric field.
pub const FIELD_WIDTH: usize = 3;

/// Largest value a field can show; larger counts saturate here.
pub const FIELD_MAX: u32 = 999;

pub type Line = String<COLUMNS>;

/// Right-align `value` in a three-character field.
pub fn count_field(value: u32) -> String<FIELD_WIDTH> {
    let mut field = String::new();
    // Cannot overflow: at most three digits after saturation.
    let _ = write!(field, "{:>3}", value.min(FIELD_MAX));
    field
}

fn pair_line(left_tag: &str, left: u32, right_tag: &str, right: u32) -> Line {
    let mut line = Line::new();
    let _ = write!(
        line,
        "{}: {}, {}: {}",
        left_tag,
        count_field(left),
        right_tag,
        count_field(right)
    );
    line
}

/// Both rows of the summary screen.
pub fn summary_lines(catalog: Catalog, tally: &ItemTally) -> [Line; ROWS] {
    [
        pair_line(
            catalog.tag(ItemClass::Second),
            tally.count(ItemClass::Second),
            catalog.tag(ItemClass::First),
            tally.count(ItemClass::First),
        ),
        pair_line(
            catalog.tag(ItemClass::Third),
            tally.count(ItemClass::Third),
            "To",
            tally.total(),
        ),
    ]
}

/// Attention screen: the item name on row 0, row 1 blank. Both rows are
/// padded to the full width so stale text is overwritten.
pub fn attention_lines(catalog: Catalog, class: ItemClass) -> [Line; ROWS] {
    [padded(catalog.name(class)), padded("")]
}

fn padded(text: &str) -> Line {
    let mut line = Line::new();
    let _ = write!(line, "{:<16}", text);
    line
}
