//! Action mapping: input code → servo duty, or input code → item class.
//!
//! Both tables are exhaustive `match`es over [`InputCode`], so adding or
//! removing a code is a compile error rather than a runtime fallthrough.
//! The servo tables are additionally checked against the mechanical safe
//! range at compile time (see the `const` block at the bottom).

use serde::{Deserialize, Serialize};

use super::input::{InputCode, InputWidth};

// ---------------------------------------------------------------------------
// Duty targets
// ---------------------------------------------------------------------------

/// Commanded servo pulse width, in PWM timer ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DutyTicks(pub u16);

impl DutyTicks {
    pub const fn ticks(self) -> u16 {
        self.0
    }

    /// Pulse width in microseconds for a timer running at `tick_us` per tick.
    pub const fn as_micros(self, tick_us: u16) -> u32 {
        self.0 as u32 * tick_us as u32
    }
}

/// Closed interval of duty values the servo can reach without hitting
/// its end stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeRange {
    pub min: DutyTicks,
    pub max: DutyTicks,
}

impl SafeRange {
    pub const fn contains(&self, duty: DutyTicks) -> bool {
        duty.0 >= self.min.0 && duty.0 <= self.max.0
    }
}

/// 500 µs ..= 2500 µs at 8 µs per tick.
pub const SERVO_SAFE_RANGE: SafeRange = SafeRange {
    min: DutyTicks(63),
    max: DutyTicks(312),
};

// ---------------------------------------------------------------------------
// Servo profiles
// ---------------------------------------------------------------------------

/// Which servo firmware is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServoProfile {
    /// One line: low → 0°, high → 180°.
    Push,
    /// Two lines select one of four positions.
    Directional,
}

impl ServoProfile {
    pub const fn input_width(self) -> InputWidth {
        match self {
            Self::Push => InputWidth::OneBit,
            Self::Directional => InputWidth::TwoBit,
        }
    }

    /// Position commanded at power-up, before the first sample.
    pub const fn initial_duty(self) -> DutyTicks {
        match self {
            Self::Push => DutyTicks(187),        // 1.5 ms, 90°
            Self::Directional => DutyTicks(125), // 1 ms, 0°
        }
    }

    pub const fn duty_for(self, code: InputCode) -> DutyTicks {
        match self {
            Self::Push => push_duty(code),
            Self::Directional => directional_duty(code),
        }
    }
}

/// Codes above `B01` cannot be sampled at one-bit width; they share the
/// high-line position.
const fn push_duty(code: InputCode) -> DutyTicks {
    match code {
        InputCode::B00 => DutyTicks(125),                                   // 1 ms, 0°
        InputCode::B01 | InputCode::B10 | InputCode::B11 => DutyTicks(250), // 2 ms, 180°
    }
}

/// `B00` and `B11` both land on 210 as deployed.
const fn directional_duty(code: InputCode) -> DutyTicks {
    match code {
        InputCode::B00 => DutyTicks(210),
        InputCode::B01 => DutyTicks(176), // 60°, apple
        InputCode::B10 => DutyTicks(260), // 180°, orange
        InputCode::B11 => DutyTicks(210), // 120°, banana
    }
}

const _: () = {
    let profiles = [ServoProfile::Push, ServoProfile::Directional];
    let mut p = 0;
    while p < profiles.len() {
        assert!(SERVO_SAFE_RANGE.contains(profiles[p].initial_duty()));
        let mut c = 0;
        while c < InputCode::ALL.len() {
            assert!(SERVO_SAFE_RANGE.contains(profiles[p].duty_for(InputCode::ALL[c])));
            c += 1;
        }
        p += 1;
    }
};

// ---------------------------------------------------------------------------
// Item classes
// ---------------------------------------------------------------------------

/// One of the three item classes the counter tracks. Which object each
/// class stands for is decided by the active catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemClass {
    /// Code `0b01`.
    First,
    /// Code `0b10`.
    Second,
    /// Code `0b11`.
    Third,
}

impl ItemClass {
    pub const ALL: [ItemClass; 3] = [Self::First, Self::Second, Self::Third];

    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }
}

/// `B00` means nothing is in front of the sensor.
pub const NO_DETECTION: InputCode = InputCode::B00;

/// Map a sampled code to the item it reports, if any.
pub const fn classify(code: InputCode) -> Option<ItemClass> {
    match code {
        InputCode::B00 => None,
        InputCode::B01 => Some(ItemClass::First),
        InputCode::B10 => Some(ItemClass::Second),
        InputCode::B11 => Some(ItemClass::Third),
    }
}
