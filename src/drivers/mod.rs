//! Peripheral drivers built on the `embedded-hal` 1.0 traits, plus the
//! ESP-IDF bring-up that hands them real pins.

pub mod char_lcd;
pub mod indicators;
pub mod input_lines;
pub mod servo_pwm;

#[cfg(target_os = "espidf")]
pub mod hw_init;
