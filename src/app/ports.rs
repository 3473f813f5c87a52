//! Port traits — the hexagonal boundary between control logic and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ServoService / CounterService
//! ```
//!
//! Driven adapters (input lines, PWM, LEDs, display, event sinks) implement
//! these traits. The services consume them via generics, so the control
//! core never touches hardware directly. Every port is infallible from the
//! caller's side: electrical failures are handled (and logged) inside the
//! adapter.
//!
//! The blocking delay primitive is [`embedded_hal::delay::DelayNs`]; it is
//! not redefined here.

use crate::control::input::InputCode;
use crate::control::mapping::DutyTicks;

// ───────────────────────────────────────────────────────────────
// Input port (hardware → core)
// ───────────────────────────────────────────────────────────────

/// Digital input register. Bit `n` carries the level of input line `n`.
pub trait InputPort {
    fn read_inputs(&mut self) -> u8;
}

// ───────────────────────────────────────────────────────────────
// Actuator ports (core → hardware)
// ───────────────────────────────────────────────────────────────

/// Servo PWM channel.
pub trait ServoPort {
    /// Latch a new pulse width. Takes effect at the next period boundary.
    fn set_duty(&mut self, duty: DutyTicks);
}

/// Plain digital indicator outputs.
pub trait IndicatorPort {
    /// Drive the heartbeat LED.
    fn set_activity(&mut self, lit: bool);

    /// Echo the sampled code on the mirror output, if the board has one.
    fn mirror_input(&mut self, _code: InputCode) {}
}

/// Character display (2 rows × 16 columns).
pub trait DisplayPort {
    /// Move the cursor. `row` and `column` are zero-based.
    fn set_cursor(&mut self, row: u8, column: u8);

    /// Write text at the cursor, advancing it.
    fn write_text(&mut self, text: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (core → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
