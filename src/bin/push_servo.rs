//! Push servo firmware — one input line swings the servo between 0° and
//! 180°.
//!
//! ```text
//!  GPIO4 ──▶ InputLines<1> ─┐
//!                           ├─▶ ServoService ──▶ ServoPwm (LEDC, 50 Hz)
//!  GPIO7/8 ◀── IndicatorLeds ┘        (heartbeat + input mirror)
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::peripherals::Peripherals;
use log::info;

use sortline::adapters::hardware::ServoHardware;
use sortline::adapters::log_sink::LogEventSink;
use sortline::app::service::ServoService;
use sortline::config::{SystemConfig, Variant};
use sortline::drivers::hw_init;
use sortline::drivers::indicators::IndicatorLeds;
use sortline::drivers::input_lines::InputLines;
use sortline::drivers::servo_pwm::ServoPwm;
use sortline::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Sortline push servo v{}", env!("CARGO_PKG_VERSION"));

    let config = SystemConfig::for_variant(Variant::PushServo);
    config.announce();

    // ── 2. Peripherals ────────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let pwm = hw_init::servo_channel(peripherals.ledc.timer0, peripherals.ledc.channel0, &config.pwm)?;
    let servo = ServoPwm::new(pwm, config.pwm, config.safe_range)?;
    let inputs = InputLines::new([hw_init::input_line(pins::INPUT_LINE0_GPIO)?]);
    let indicators = IndicatorLeds::with_mirror(
        hw_init::output_line(pins::ACTIVITY_LED_GPIO)?,
        hw_init::output_line(pins::INPUT_MIRROR_GPIO)?,
    );
    let mut hw = ServoHardware::new(inputs, servo, indicators);

    // ── 3. Control loop ───────────────────────────────────────
    let mut sink = LogEventSink::new();
    let mut app = ServoService::new(config)?;
    app.start(&mut hw, &mut sink);
    app.run(&mut hw, &mut FreeRtos, &mut sink)
}
