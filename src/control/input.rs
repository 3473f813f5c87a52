//! Input codes and the register sampler.
//!
//! The upstream classifier drives one or two digital lines. Each loop
//! iteration the sampler reads the input register once and keeps only the
//! low `N` bits, where `N` depends on the variant:
//!
//! | Variant            | Width | Codes          |
//! |--------------------|-------|----------------|
//! | Push servo         | 1 bit | `0b0`, `0b1`   |
//! | Directional servo  | 2 bit | `0b00`..`0b11` |
//! | Item counter       | 2 bit | `0b00`..`0b11` |

/// A sampled input code. Closed over every value two bits can hold, so a
/// `match` on it is checked for totality by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum InputCode {
    B00,
    B01,
    B10,
    B11,
}

impl InputCode {
    /// Every code, in ascending bit order.
    pub const ALL: [InputCode; 4] = [Self::B00, Self::B01, Self::B10, Self::B11];

    /// Decode the low two bits of `raw`. Higher bits are ignored.
    pub const fn from_bits(raw: u8) -> Self {
        match raw & 0b11 {
            0b00 => Self::B00,
            0b01 => Self::B01,
            0b10 => Self::B10,
            _ => Self::B11,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Level of input line `line` (0 = LSB) within this code.
    pub const fn line(self, line: u8) -> bool {
        (self.bits() >> line) & 1 == 1
    }
}

/// Number of input lines a variant samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputWidth {
    OneBit,
    TwoBit,
}

impl InputWidth {
    pub const fn mask(self) -> u8 {
        match self {
            Self::OneBit => 0b01,
            Self::TwoBit => 0b11,
        }
    }
}

/// Extracts the variant's code from a raw input register value.
#[derive(Debug, Clone, Copy)]
pub struct InputSampler {
    width: InputWidth,
}

impl InputSampler {
    pub const fn new(width: InputWidth) -> Self {
        Self { width }
    }

    pub fn width(&self) -> InputWidth {
        self.width
    }

    /// Mask `register` to the configured width.
    pub const fn sample(&self, register: u8) -> InputCode {
        InputCode::from_bits(register & self.width.mask())
    }
}
