//! Heartbeat LED and the optional input-mirror output.
//!
//! Write failures are logged and otherwise ignored: the indicators carry
//! no control information.

use embedded_hal::digital::{Error as _, OutputPin};
use log::warn;

use crate::app::ports::IndicatorPort;
use crate::control::input::InputCode;

pub struct IndicatorLeds<P> {
    activity: P,
    mirror: Option<P>,
}

impl<P: OutputPin> IndicatorLeds<P> {
    /// Heartbeat only. The LED is driven low until the first iteration.
    pub fn new(activity: P) -> Self {
        let mut leds = Self {
            activity,
            mirror: None,
        };
        drive(&mut leds.activity, false, "activity");
        leds
    }

    /// Heartbeat plus an output echoing input line 0.
    pub fn with_mirror(activity: P, mirror: P) -> Self {
        let mut leds = Self::new(activity);
        leds.mirror = Some(mirror);
        leds
    }
}

fn drive(pin: &mut impl OutputPin, high: bool, what: &str) {
    let result = if high { pin.set_high() } else { pin.set_low() };
    if let Err(e) = result {
        warn!("{} output write failed: {:?}", what, e.kind());
    }
}

impl<P: OutputPin> IndicatorPort for IndicatorLeds<P> {
    fn set_activity(&mut self, lit: bool) {
        drive(&mut self.activity, lit, "activity");
    }

    fn mirror_input(&mut self, code: InputCode) {
        if let Some(pin) = self.mirror.as_mut() {
            drive(pin, code.line(0), "mirror");
        }
    }
}
