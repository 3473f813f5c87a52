//! GPIO / peripheral pin assignments for the sorter boards.
//!
//! Single source of truth — the bring-up code in the binaries references
//! this module rather than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Classifier inputs (driven push-pull by the host, no pull resistors)
// ---------------------------------------------------------------------------

/// Input line 0 (LSB of the input code).
pub const INPUT_LINE0_GPIO: i32 = 4;
/// Input line 1 (MSB of the input code). Unused by the push servo.
pub const INPUT_LINE1_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Servo
// ---------------------------------------------------------------------------

/// LEDC PWM output to the servo signal wire.
pub const SERVO_PWM_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Character LCD (HD44780, 4-bit bus, R/W tied to GND; item counter only)
// ---------------------------------------------------------------------------

/// Register select: low = instruction, high = data.
pub const LCD_RS_GPIO: i32 = 9;
/// Enable strobe; data is latched on the falling edge.
pub const LCD_EN_GPIO: i32 = 10;
/// Data lines D4..D7.
pub const LCD_DATA_GPIOS: [i32; 4] = [11, 12, 13, 14];

// ---------------------------------------------------------------------------
// Indicators
// ---------------------------------------------------------------------------

/// Heartbeat LED, toggled once per loop iteration.
pub const ACTIVITY_LED_GPIO: i32 = 7;
/// Echo of the sampled input bit (push servo only).
pub const INPUT_MIRROR_GPIO: i32 = 8;
