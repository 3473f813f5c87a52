//! Heartbeat flag, flipped once per loop iteration.

#[derive(Debug, Clone, Default)]
pub struct ActivityFlag {
    lit: bool,
    toggles: u64,
}

impl ActivityFlag {
    /// Starts dark; the first toggle lights the LED.
    pub const fn new() -> Self {
        Self {
            lit: false,
            toggles: 0,
        }
    }

    /// Flip the flag and return the new level.
    pub fn toggle(&mut self) -> bool {
        self.lit = !self.lit;
        self.toggles += 1;
        self.lit
    }

    pub fn toggles(&self) -> u64 {
        self.toggles
    }
}
