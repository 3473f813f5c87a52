//! Item counter firmware — counts classifier detections and shows the
//! running totals on a 2×16 character display.
//!
//! ```text
//!  GPIO4/5 ──▶ InputLines<2> ─┐
//!                             ├─▶ CounterService ──▶ CharLcd (GPIO9..14)
//!  GPIO7   ◀── IndicatorLeds ──┘        (heartbeat)
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::{Ets, FreeRtos};
use log::info;

use sortline::adapters::hardware::CounterHardware;
use sortline::adapters::log_sink::LogEventSink;
use sortline::app::service::CounterService;
use sortline::config::{SystemConfig, Variant};
use sortline::drivers::char_lcd::CharLcd;
use sortline::drivers::hw_init;
use sortline::drivers::indicators::IndicatorLeds;
use sortline::drivers::input_lines::InputLines;
use sortline::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Sortline item counter v{}", env!("CARGO_PKG_VERSION"));

    let config = SystemConfig::for_variant(Variant::ItemCounter);
    config.announce();

    // ── 2. Peripherals ────────────────────────────────────────
    let inputs = InputLines::new([
        hw_init::input_line(pins::INPUT_LINE0_GPIO)?,
        hw_init::input_line(pins::INPUT_LINE1_GPIO)?,
    ]);
    let indicators = IndicatorLeds::new(hw_init::output_line(pins::ACTIVITY_LED_GPIO)?);
    let mut hw = CounterHardware::new(inputs, indicators);
    let [d4, d5, d6, d7] = pins::LCD_DATA_GPIOS;
    let mut display = CharLcd::new(
        hw_init::output_line(pins::LCD_RS_GPIO)?,
        hw_init::output_line(pins::LCD_EN_GPIO)?,
        [
            hw_init::output_line(d4)?,
            hw_init::output_line(d5)?,
            hw_init::output_line(d6)?,
            hw_init::output_line(d7)?,
        ],
        Ets,
    )?;

    // ── 3. Control loop ───────────────────────────────────────
    let mut sink = LogEventSink::new();
    let mut app = CounterService::new(config)?;
    app.start(&mut display, &mut sink);
    app.run(&mut hw, &mut display, &mut FreeRtos, &mut sink)
}
