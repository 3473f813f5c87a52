//! Servo PWM driver.
//!
//! Wraps any [`SetDutyCycle`] channel already running at the servo frame
//! rate (50 Hz). Duty targets arrive in timer ticks of [`PwmTiming`] and
//! are rescaled to the channel's own resolution, so the same tables work
//! on an 8-bit LEDC channel or a 16-bit timer.
//!
//! The hardware latches the compare value at the next period boundary;
//! a write never produces a truncated pulse.

use embedded_hal::pwm::{Error as _, SetDutyCycle};
use log::warn;

use crate::app::ports::ServoPort;
use crate::config::PwmTiming;
use crate::control::mapping::{DutyTicks, SafeRange};
use crate::error::Error;

pub struct ServoPwm<P> {
    channel: P,
    timing: PwmTiming,
    safe_range: SafeRange,
    current: Option<DutyTicks>,
}

impl<P: SetDutyCycle> ServoPwm<P> {
    pub fn new(channel: P, timing: PwmTiming, safe_range: SafeRange) -> Result<Self, Error> {
        if timing.period_ticks == 0 {
            return Err(Error::Config("PWM period must be non-zero"));
        }
        if channel.max_duty_cycle() == 0 {
            return Err(Error::Init("PWM channel has no duty resolution"));
        }
        Ok(Self {
            channel,
            timing,
            safe_range,
            current: None,
        })
    }

    /// Channel counts that `duty` maps to.
    pub fn channel_counts(&self, duty: DutyTicks) -> u16 {
        let max = u32::from(self.channel.max_duty_cycle());
        (u32::from(duty.ticks()) * max / u32::from(self.timing.period_ticks)) as u16
    }

    /// High time of the generated pulse, in microseconds, after rounding
    /// to the channel's resolution.
    pub fn high_time_us(&self) -> Option<u32> {
        let duty = self.current?;
        let max = u64::from(self.channel.max_duty_cycle());
        let counts = u64::from(self.channel_counts(duty));
        Some((counts * u64::from(self.timing.period_us()) / max) as u32)
    }

    /// Give the channel back.
    pub fn release(self) -> P {
        self.channel
    }
}

impl<P: SetDutyCycle> ServoPort for ServoPwm<P> {
    fn set_duty(&mut self, duty: DutyTicks) {
        debug_assert!(
            self.safe_range.contains(duty),
            "duty {} outside safe range",
            duty.ticks()
        );
        match self
            .channel
            .set_duty_cycle_fraction(duty.ticks(), self.timing.period_ticks)
        {
            Ok(()) => self.current = Some(duty),
            Err(e) => warn!("servo PWM write failed: {:?}", e.kind()),
        }
    }
}
