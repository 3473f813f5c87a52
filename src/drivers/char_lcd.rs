//! HD44780 16×2 character LCD on a 4-bit parallel bus.
//!
//! ```text
//!  RS ──┐
//!  EN ──┤  HD44780   (R/W tied low, write-only)
//!  D4..D7 ──┘
//! ```
//!
//! Every byte goes out as two nibbles, high first, each latched by an EN
//! pulse. Bring-up errors are returned; once the panel is running, write
//! failures are logged and the frame is dropped.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{info, warn};

use crate::app::ports::DisplayPort;
use crate::control::screen::{COLUMNS, ROWS};
use crate::error::Error;

// HD44780 instruction set (subset).
const CLEAR: u8 = 0x01;
const ENTRY_INCREMENT: u8 = 0x06;
const DISPLAY_ON: u8 = 0x0C;
const FUNCTION_4BIT_2LINE: u8 = 0x28;
const SET_DDRAM: u8 = 0x80;

/// DDRAM start address of each row.
const ROW_OFFSETS: [u8; ROWS] = [0x00, 0x40];

/// Wake-up nibble sent three times to force 8-bit mode, then `0x2` to
/// switch to 4-bit.
const WAKE: u8 = 0x3;
const FOUR_BIT: u8 = 0x2;

pub struct CharLcd<P, D> {
    rs: P,
    en: P,
    data: [P; 4],
    delay: D,
    column: usize,
}

impl<P: OutputPin, D: DelayNs> CharLcd<P, D> {
    /// Take the bus pins (`data` is D4..D7) and run the 4-bit init
    /// sequence. The panel is left cleared, cursor hidden, at the origin.
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Result<Self, Error> {
        let mut lcd = Self {
            rs,
            en,
            data,
            delay,
            column: 0,
        };
        lcd.init()?;
        info!("char_lcd: HD44780 ready ({}x{})", COLUMNS, ROWS);
        Ok(lcd)
    }

    fn init(&mut self) -> Result<(), Error> {
        self.delay.delay_ms(50);
        for _ in 0..3 {
            self.write_nibble(false, WAKE)?;
            self.delay.delay_ms(5);
        }
        self.write_nibble(false, FOUR_BIT)?;

        self.command(FUNCTION_4BIT_2LINE)?;
        self.command(DISPLAY_ON)?;
        self.command(ENTRY_INCREMENT)?;
        self.command(CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    fn command(&mut self, cmd: u8) -> Result<(), Error> {
        self.send(false, cmd)
    }

    fn send(&mut self, rs: bool, byte: u8) -> Result<(), Error> {
        self.write_nibble(rs, byte >> 4)?;
        self.write_nibble(rs, byte & 0x0F)
    }

    fn write_nibble(&mut self, rs: bool, nibble: u8) -> Result<(), Error> {
        level(&mut self.rs, rs)?;
        for (bit, pin) in self.data.iter_mut().enumerate() {
            level(pin, (nibble >> bit) & 1 == 1)?;
        }
        level(&mut self.en, true)?;
        self.delay.delay_us(1);
        level(&mut self.en, false)?;
        // Longest non-clear instruction takes 37 us.
        self.delay.delay_us(50);
        Ok(())
    }

    fn write_bytes(&mut self, text: &str) -> Result<(), Error> {
        for ch in text.chars() {
            if self.column >= COLUMNS {
                break;
            }
            self.send(true, if ch.is_ascii() { ch as u8 } else { b'?' })?;
            self.column += 1;
        }
        Ok(())
    }
}

fn level(pin: &mut impl OutputPin, high: bool) -> Result<(), Error> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| Error::Gpio)
}

impl<P: OutputPin, D: DelayNs> DisplayPort for CharLcd<P, D> {
    fn set_cursor(&mut self, row: u8, column: u8) {
        let row = usize::from(row).min(ROWS - 1);
        self.column = usize::from(column).min(COLUMNS);
        if self.column == COLUMNS {
            return;
        }
        let address = ROW_OFFSETS[row] + self.column as u8;
        if let Err(e) = self.command(SET_DDRAM | address) {
            warn!("char_lcd: set_cursor({}, {}) failed: {}", row, column, e);
        }
    }

    fn write_text(&mut self, text: &str) {
        if let Err(e) = self.write_bytes(text) {
            warn!("char_lcd: write failed: {}", e);
        }
    }
}
