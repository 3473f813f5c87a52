//! Application services — one control loop per firmware variant.
//!
//! [`ServoService`] and [`CounterService`] own all mutable loop state
//! (previous input, activity flag, tallies). Ports are injected at call
//! sites, so every iteration can be driven from a test with mock
//! adapters.
//!
//! ```text
//!  InputPort ──▶ ┌──────────────────────────┐ ──▶ ServoPort
//!                │  sample · detect · map    │ ──▶ DisplayPort
//!                │  toggle heartbeat · delay │ ──▶ IndicatorPort
//!                └──────────────────────────┘ ──▶ EventSink
//! ```
//!
//! One iteration, in order: sample → detect → act (if reportable) →
//! toggle heartbeat → fixed delay. The loop never exits.

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::config::{SystemConfig, Variant};
use crate::control::activity::ActivityFlag;
use crate::control::counter::ItemTally;
use crate::control::input::{InputCode, InputSampler, InputWidth};
use crate::control::mapping::{self, DutyTicks, ItemClass, ServoProfile};
use crate::control::screen::{self, Line};
use crate::control::transition::{TransitionDetector, TriggerMode};
use crate::error::Error;

use super::events::AppEvent;
use super::ports::{DisplayPort, EventSink, IndicatorPort, InputPort, ServoPort};

// ───────────────────────────────────────────────────────────────
// ServoService
// ───────────────────────────────────────────────────────────────

/// Continuous position controller for the push and directional servos.
pub struct ServoService {
    config: SystemConfig,
    profile: ServoProfile,
    sampler: InputSampler,
    detector: TransitionDetector,
    activity: ActivityFlag,
    duty: DutyTicks,
    iterations: u64,
}

impl ServoService {
    /// Build the service. Fails if `config` is inconsistent or describes
    /// a variant without a servo.
    pub fn new(config: SystemConfig) -> Result<Self, Error> {
        config.validate()?;
        let profile = config
            .variant
            .servo_profile()
            .ok_or(Error::Config("variant does not drive a servo"))?;
        Ok(Self {
            config,
            profile,
            sampler: InputSampler::new(profile.input_width()),
            detector: TransitionDetector::new(TriggerMode::Level),
            activity: ActivityFlag::new(),
            duty: profile.initial_duty(),
            iterations: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Command the power-up position before the first sample.
    pub fn start(&mut self, hw: &mut impl ServoPort, sink: &mut impl EventSink) {
        hw.set_duty(self.duty);
        sink.emit(&AppEvent::Started(self.config.variant));
        info!(
            "ServoService started ({:?}, initial duty {} ticks)",
            self.profile,
            self.duty.ticks()
        );
    }

    // ── Per-iteration orchestration ───────────────────────────

    /// Run one iteration without the trailing delay. Returns the sampled
    /// code.
    pub fn tick(
        &mut self,
        hw: &mut (impl InputPort + ServoPort + IndicatorPort),
        sink: &mut impl EventSink,
    ) -> InputCode {
        self.iterations += 1;

        let code = self.sampler.sample(hw.read_inputs());
        if self.detector.observe(code) {
            let duty = self.profile.duty_for(code);
            hw.set_duty(duty);
            if duty != self.duty {
                info!(
                    "servo: input 0b{:02b} -> {} ticks ({} us)",
                    code.bits(),
                    duty.ticks(),
                    duty.as_micros(self.config.pwm.tick_us)
                );
            }
            self.duty = duty;
            sink.emit(&AppEvent::DutyApplied { code, duty });
        }
        if self.sampler.width() == InputWidth::OneBit {
            hw.mirror_input(code);
        }

        heartbeat(&mut self.activity, self.iterations, hw, sink);
        code
    }

    /// One full iteration including the settling delay.
    pub fn iterate(
        &mut self,
        hw: &mut (impl InputPort + ServoPort + IndicatorPort),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) {
        self.tick(hw, sink);
        delay.delay_ms(self.config.loop_delay_ms);
    }

    /// Run forever.
    pub fn run(
        &mut self,
        hw: &mut (impl InputPort + ServoPort + IndicatorPort),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> ! {
        info!(
            "Entering servo loop ({} ms period)",
            self.config.loop_delay_ms
        );
        loop {
            self.iterate(hw, delay, sink);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Duty most recently written to the servo.
    pub fn duty(&self) -> DutyTicks {
        self.duty
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn activity(&self) -> &ActivityFlag {
        &self.activity
    }
}

// ───────────────────────────────────────────────────────────────
// CounterService
// ───────────────────────────────────────────────────────────────

/// Edge-triggered item counter with a 2×16 summary display.
pub struct CounterService {
    config: SystemConfig,
    sampler: InputSampler,
    detector: TransitionDetector,
    tally: ItemTally,
    activity: ActivityFlag,
    iterations: u64,
}

impl CounterService {
    pub fn new(config: SystemConfig) -> Result<Self, Error> {
        config.validate()?;
        if config.variant != Variant::ItemCounter {
            return Err(Error::Config("variant does not count items"));
        }
        Ok(Self {
            config,
            sampler: InputSampler::new(InputWidth::TwoBit),
            detector: TransitionDetector::new(TriggerMode::Edge {
                idle: mapping::NO_DETECTION,
            }),
            tally: ItemTally::new(),
            activity: ActivityFlag::new(),
            iterations: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Paint the zeroed summary screen.
    pub fn start(&mut self, display: &mut impl DisplayPort, sink: &mut impl EventSink) {
        paint(display, &screen::summary_lines(self.config.catalog, &self.tally));
        sink.emit(&AppEvent::Started(self.config.variant));
        info!("CounterService started ({:?} catalogue)", self.config.catalog);
    }

    // ── Per-iteration orchestration ───────────────────────────

    /// Run one iteration without the trailing delay. Returns the class
    /// counted in this iteration, if any.
    ///
    /// A counted item blocks for the attention-screen duration before the
    /// summary is redrawn.
    pub fn tick(
        &mut self,
        hw: &mut (impl InputPort + IndicatorPort),
        display: &mut impl DisplayPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> Option<ItemClass> {
        self.iterations += 1;

        let code = self.sampler.sample(hw.read_inputs());
        let counted = if self.detector.observe(code) {
            mapping::classify(code)
        } else {
            None
        };

        if let Some(class) = counted {
            let count = self.tally.record(class);
            let name = self.config.catalog.name(class);
            info!(
                "counter: {} #{} (total {})",
                name,
                count,
                self.tally.total()
            );
            sink.emit(&AppEvent::ItemCounted {
                class,
                name,
                count,
                total: self.tally.total(),
            });

            paint(display, &screen::attention_lines(self.config.catalog, class));
            delay.delay_ms(self.config.attention_ms);
            paint(display, &screen::summary_lines(self.config.catalog, &self.tally));
        }

        heartbeat(&mut self.activity, self.iterations, hw, sink);
        counted
    }

    /// One full iteration including the settling delay.
    pub fn iterate(
        &mut self,
        hw: &mut (impl InputPort + IndicatorPort),
        display: &mut impl DisplayPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) {
        self.tick(hw, display, delay, sink);
        delay.delay_ms(self.config.loop_delay_ms);
    }

    /// Run forever.
    pub fn run(
        &mut self,
        hw: &mut (impl InputPort + IndicatorPort),
        display: &mut impl DisplayPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> ! {
        info!(
            "Entering counter loop ({} ms period)",
            self.config.loop_delay_ms
        );
        loop {
            self.iterate(hw, display, delay, sink);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn tally(&self) -> &ItemTally {
        &self.tally
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn activity(&self) -> &ActivityFlag {
        &self.activity
    }
}

// ── Internal ──────────────────────────────────────────────────

fn heartbeat(
    activity: &mut ActivityFlag,
    iteration: u64,
    hw: &mut impl IndicatorPort,
    sink: &mut impl EventSink,
) {
    let lit = activity.toggle();
    hw.set_activity(lit);
    debug!("heartbeat #{} lit={}", iteration, lit);
    sink.emit(&AppEvent::Heartbeat { iteration, lit });
}

fn paint(display: &mut impl DisplayPort, lines: &[Line; screen::ROWS]) {
    for (row, line) in lines.iter().enumerate() {
        display.set_cursor(row as u8, 0);
        display.write_text(line);
    }
}
