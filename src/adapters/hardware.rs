//! Hardware adapters — bundle drivers behind the port traits each
//! service needs.
//!
//! The services take a single `hw` argument implementing several ports;
//! bundling avoids a double mutable borrow while keeping the port
//! boundary explicit. Drivers are generic, so the same bundles wrap real
//! `esp-idf-hal` drivers or test doubles.

use crate::app::ports::{IndicatorPort, InputPort, ServoPort};
use crate::control::input::InputCode;
use crate::control::mapping::DutyTicks;

/// Inputs, servo and indicators for the servo firmwares.
pub struct ServoHardware<I, S, L> {
    pub inputs: I,
    pub servo: S,
    pub indicators: L,
}

impl<I, S, L> ServoHardware<I, S, L> {
    pub fn new(inputs: I, servo: S, indicators: L) -> Self {
        Self {
            inputs,
            servo,
            indicators,
        }
    }
}

impl<I: InputPort, S, L> InputPort for ServoHardware<I, S, L> {
    fn read_inputs(&mut self) -> u8 {
        self.inputs.read_inputs()
    }
}

impl<I, S: ServoPort, L> ServoPort for ServoHardware<I, S, L> {
    fn set_duty(&mut self, duty: DutyTicks) {
        self.servo.set_duty(duty);
    }
}

impl<I, S, L: IndicatorPort> IndicatorPort for ServoHardware<I, S, L> {
    fn set_activity(&mut self, lit: bool) {
        self.indicators.set_activity(lit);
    }

    fn mirror_input(&mut self, code: InputCode) {
        self.indicators.mirror_input(code);
    }
}

/// Inputs and heartbeat for the counter firmware. The display is passed
/// separately because it is a collaborator, not board I/O.
pub struct CounterHardware<I, L> {
    pub inputs: I,
    pub indicators: L,
}

impl<I, L> CounterHardware<I, L> {
    pub fn new(inputs: I, indicators: L) -> Self {
        Self { inputs, indicators }
    }
}

impl<I: InputPort, L> InputPort for CounterHardware<I, L> {
    fn read_inputs(&mut self) -> u8 {
        self.inputs.read_inputs()
    }
}

impl<I, L: IndicatorPort> IndicatorPort for CounterHardware<I, L> {
    fn set_activity(&mut self, lit: bool) {
        self.indicators.set_activity(lit);
    }

    fn mirror_input(&mut self, code: InputCode) {
        self.indicators.mirror_input(code);
    }
}
