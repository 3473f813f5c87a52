//! System configuration parameters
//!
//! Every tunable of the three firmwares. Values are fixed when the
//! controller is built and never change while it runs.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::control::counter::Catalog;
use crate::control::input::InputCode;
use crate::control::mapping::{DutyTicks, SERVO_SAFE_RANGE, SafeRange, ServoProfile};
use crate::error::Error;

/// Which firmware a board runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    PushServo,
    DirectionalServo,
    ItemCounter,
}

impl Variant {
    pub const fn servo_profile(self) -> Option<ServoProfile> {
        match self {
            Self::PushServo => Some(ServoProfile::Push),
            Self::DirectionalServo => Some(ServoProfile::Directional),
            Self::ItemCounter => None,
        }
    }
}

/// Servo PWM timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PwmTiming {
    /// Ticks in one PWM period.
    pub period_ticks: u16,
    /// Length of one tick in microseconds.
    pub tick_us: u16,
}

impl PwmTiming {
    pub const fn period_us(&self) -> u32 {
        self.period_ticks as u32 * self.tick_us as u32
    }

    /// PWM frequency in Hz.
    pub const fn frequency_hz(&self) -> u32 {
        1_000_000 / self.period_us()
    }
}

impl Default for PwmTiming {
    /// 20 ms period at 8 µs per tick (50 Hz hobby-servo frame).
    fn default() -> Self {
        Self {
            period_ticks: 2500,
            tick_us: 8,
        }
    }
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    pub variant: Variant,

    // --- Servo ---
    pub pwm: PwmTiming,
    /// Duty values the servo may be commanded to.
    pub safe_range: SafeRange,

    // --- Counter ---
    pub catalog: Catalog,
    /// How long the attention screen stays up (milliseconds).
    pub attention_ms: u32,

    // --- Timing ---
    /// Delay between loop iterations (milliseconds).
    pub loop_delay_ms: u32,
}

impl SystemConfig {
    pub fn for_variant(variant: Variant) -> Self {
        let loop_delay_ms = match variant {
            Variant::PushServo | Variant::DirectionalServo => 200,
            Variant::ItemCounter => 500,
        };
        Self {
            variant,
            pwm: PwmTiming::default(),
            safe_range: SERVO_SAFE_RANGE,
            catalog: Catalog::Cutlery,
            attention_ms: 1000,
            loop_delay_ms,
        }
    }

    /// Log the active configuration as one JSON line.
    pub fn announce(&self) {
        match serde_json::to_string(self) {
            Ok(json) => info!("config: {}", json),
            Err(e) => warn!("config: {:?} (JSON encoding failed: {})", self, e),
        }
    }

    /// Reject combinations that would drive the servo outside its safe
    /// range or stall the loop.
    pub fn validate(&self) -> Result<(), Error> {
        if self.pwm.period_ticks == 0 || self.pwm.tick_us == 0 {
            return Err(Error::Config("PWM period must be non-zero"));
        }
        if self.safe_range.min > self.safe_range.max
            || self.safe_range.max.ticks() >= self.pwm.period_ticks
        {
            return Err(Error::Config("safe range must lie inside the PWM period"));
        }
        if self.loop_delay_ms == 0 {
            return Err(Error::Config("loop delay must be non-zero"));
        }
        if let Some(profile) = self.variant.servo_profile() {
            let in_range = |duty: DutyTicks| self.safe_range.contains(duty);
            if !in_range(profile.initial_duty())
                || !InputCode::ALL.iter().all(|&c| in_range(profile.duty_for(c)))
            {
                return Err(Error::Config("servo table leaves the safe range"));
            }
        }
        Ok(())
    }
}
