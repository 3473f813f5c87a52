//! Per-class item tallies and the catalogue that names them.

use serde::{Deserialize, Serialize};

use super::mapping::ItemClass;

/// Running tallies. `total` always equals the sum of the per-class counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemTally {
    counts: [u32; 3],
    total: u32,
}

impl ItemTally {
    pub const fn new() -> Self {
        Self {
            counts: [0; 3],
            total: 0,
        }
    }

    /// Count one item of `class`. Returns the class's new count.
    ///
    /// Once `total` reaches `u32::MAX` further items are dropped, so the
    /// sum stays exact.
    pub fn record(&mut self, class: ItemClass) -> u32 {
        let slot = &mut self.counts[class.index()];
        if self.total < u32::MAX {
            *slot += 1;
            self.total += 1;
        }
        *slot
    }

    pub fn count(&self, class: ItemClass) -> u32 {
        self.counts[class.index()]
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}

/// Label set shown on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Catalog {
    Cutlery,
    Fruit,
}

impl Catalog {
    /// Full name for the attention screen.
    pub const fn name(self, class: ItemClass) -> &'static str {
        match (self, class) {
            (Self::Cutlery, ItemClass::First) => "Knife",
            (Self::Cutlery, ItemClass::Second) => "Spoon",
            (Self::Cutlery, ItemClass::Third) => "Fork",
            (Self::Fruit, ItemClass::First) => "Orange",
            (Self::Fruit, ItemClass::Second) => "Apple",
            (Self::Fruit, ItemClass::Third) => "Banana",
        }
    }

    /// Two-letter tag for the summary screen.
    pub const fn tag(self, class: ItemClass) -> &'static str {
        match (self, class) {
            (Self::Cutlery, ItemClass::First) => "Kn",
            (Self::Cutlery, ItemClass::Second) => "Sp",
            (Self::Cutlery, ItemClass::Third) => "Fo",
            (Self::Fruit, ItemClass::First) => "Or",
            (Self::Fruit, ItemClass::Second) => "Ap",
            (Self::Fruit, ItemClass::Third) => "Ba",
        }
    }
}
