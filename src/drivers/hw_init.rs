//! One-shot peripheral bring-up on ESP-IDF.
//!
//! Hands out `embedded-hal` capable drivers for the GPIO numbers in
//! [`crate::pins`]. Called once from `main()` before the control loop.

use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, Input, Output, PinDriver, Pull};
use esp_idf_hal::ledc::config::TimerConfig;
use esp_idf_hal::ledc::{CHANNEL0, LedcDriver, LedcTimerDriver, Resolution, TIMER0};
use esp_idf_hal::units::FromValueType;
use esp_idf_svc::sys::EspError;
use log::info;

use crate::config::PwmTiming;
use crate::pins;

/// LEDC timer resolution. 14 bits at 50 Hz gives ~1.2 us steps.
const SERVO_RESOLUTION: Resolution = Resolution::Bits14;

pub type InputLine = PinDriver<'static, AnyIOPin, Input>;
pub type OutputLine = PinDriver<'static, AnyOutputPin, Output>;

/// Configure `gpio` as a floating input.
///
/// The classifier drives both levels, so an internal pull would only
/// fight it.
pub fn input_line(gpio: i32) -> Result<InputLine, EspError> {
    // SAFETY: every GPIO number in `pins` is claimed once, during bring-up.
    let pin = unsafe { AnyIOPin::new(gpio) };
    let mut driver = PinDriver::input(pin)?;
    driver.set_pull(Pull::Floating)?;
    info!("hw_init: GPIO{} input (floating)", gpio);
    Ok(driver)
}

/// Configure `gpio` as a push-pull output, initially low.
pub fn output_line(gpio: i32) -> Result<OutputLine, EspError> {
    // SAFETY: as above.
    let pin = unsafe { AnyOutputPin::new(gpio) };
    let mut driver = PinDriver::output(pin)?;
    driver.set_low()?;
    info!("hw_init: GPIO{} output", gpio);
    Ok(driver)
}

/// Start LEDC timer 0 at the servo frame rate and attach channel 0 to
/// the servo pin.
pub fn servo_channel(
    timer: TIMER0,
    channel: CHANNEL0,
    timing: &PwmTiming,
) -> Result<LedcDriver<'static>, EspError> {
    let config = TimerConfig::new()
        .frequency(timing.frequency_hz().Hz().into())
        .resolution(SERVO_RESOLUTION);
    let timer = LedcTimerDriver::new(timer, &config)?;
    // SAFETY: as above.
    let pin = unsafe { AnyOutputPin::new(pins::SERVO_PWM_GPIO) };
    let driver = LedcDriver::new(channel, timer, pin)?;
    info!(
        "hw_init: servo PWM on GPIO{} at {} Hz, max duty {}",
        pins::SERVO_PWM_GPIO,
        timing.frequency_hz(),
        driver.get_max_duty()
    );
    Ok(driver)
}
