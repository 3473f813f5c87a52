//! Outbound application events.
//!
//! The services emit these through the [`EventSink`](super::ports::EventSink)
//! port.

use crate::config::Variant;
use crate::control::input::InputCode;
use crate::control::mapping::{DutyTicks, ItemClass};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A service finished its startup actions.
    Started(Variant),

    /// A servo duty was written.
    DutyApplied { code: InputCode, duty: DutyTicks },

    /// An item was counted.
    ItemCounted {
        class: ItemClass,
        name: &'static str,
        count: u32,
        total: u32,
    },

    /// One loop iteration completed.
    Heartbeat { iteration: u64, lit: bool },
}
