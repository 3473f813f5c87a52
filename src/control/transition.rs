//! Transition detection between consecutive samples.
//!
//! The servo variants are position controllers: every sample, repeat or
//! not, re-applies its duty. The counter is edge-triggered: only a change
//! into a non-idle code is reported, so an item held in front of the
//! camera for several iterations is counted once.

use super::input::InputCode;

/// When a sample is reportable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    /// Every sample is reportable.
    Level,
    /// Only a change into a code other than `idle` is reportable.
    Edge { idle: InputCode },
}

/// Remembers the previous sample and classifies the current one.
#[derive(Debug, Clone)]
pub struct TransitionDetector {
    mode: TriggerMode,
    /// `None` until the first sample, so the first non-idle code counts.
    previous: Option<InputCode>,
}

impl TransitionDetector {
    pub const fn new(mode: TriggerMode) -> Self {
        Self {
            mode,
            previous: None,
        }
    }

    /// Classify `current` against the previous sample, then remember it.
    pub fn observe(&mut self, current: InputCode) -> bool {
        let reportable = match self.mode {
            TriggerMode::Level => true,
            TriggerMode::Edge { idle } => self.previous != Some(current) && current != idle,
        };
        self.previous = Some(current);
        reportable
    }

    pub fn previous(&self) -> Option<InputCode> {
        self.previous
    }
}
