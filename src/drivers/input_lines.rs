//! Digital input register assembled from individual GPIO lines.
//!
//! The classifier drives both logic levels, so the lines are configured
//! floating (no pull resistor) during bring-up. A failed read is logged
//! and reads as low.

use embedded_hal::digital::{Error as _, InputPin};
use log::warn;

use crate::app::ports::InputPort;

/// `N` input pins; pin `n` becomes bit `n` of the register.
pub struct InputLines<P, const N: usize> {
    pins: [P; N],
}

impl<P: InputPin, const N: usize> InputLines<P, N> {
    pub fn new(pins: [P; N]) -> Self {
        const { assert!(N >= 1 && N <= 8, "register is one byte wide") };
        Self { pins }
    }
}

impl<P: InputPin, const N: usize> InputPort for InputLines<P, N> {
    fn read_inputs(&mut self) -> u8 {
        let mut register = 0u8;
        for (line, pin) in self.pins.iter_mut().enumerate() {
            match pin.is_high() {
                Ok(true) => register |= 1 << line,
                Ok(false) => {}
                Err(e) => warn!("input line {} read failed ({:?}), reading low", line, e.kind()),
            }
        }
        register
    }
}
