//! Mock adapters for integration tests.
//!
//! Records every port call so tests can assert on the full history
//! without touching real GPIO/PWM registers.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use sortline::adapters::display::CharGrid;
use sortline::app::events::AppEvent;
use sortline::app::ports::{DisplayPort, EventSink, IndicatorPort, InputPort, ServoPort};
use sortline::control::input::InputCode;
use sortline::control::mapping::DutyTicks;

// ── MockHardware ──────────────────────────────────────────────

/// Plays back a scripted input register; the last value repeats once
/// the script runs out.
pub struct MockHardware {
    script: VecDeque<u8>,
    last_input: u8,
    pub duties: Vec<DutyTicks>,
    pub activity: Vec<bool>,
    pub mirrored: Vec<InputCode>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::scripted(&[])
    }

    pub fn scripted(inputs: &[u8]) -> Self {
        Self {
            script: inputs.iter().copied().collect(),
            last_input: 0,
            duties: Vec::new(),
            activity: Vec::new(),
            mirrored: Vec::new(),
        }
    }

    pub fn last_duty(&self) -> Option<DutyTicks> {
        self.duties.last().copied()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPort for MockHardware {
    fn read_inputs(&mut self) -> u8 {
        if let Some(next) = self.script.pop_front() {
            self.last_input = next;
        }
        self.last_input
    }
}

impl ServoPort for MockHardware {
    fn set_duty(&mut self, duty: DutyTicks) {
        self.duties.push(duty);
    }
}

impl IndicatorPort for MockHardware {
    fn set_activity(&mut self, lit: bool) {
        self.activity.push(lit);
    }

    fn mirror_input(&mut self, code: InputCode) {
        self.mirrored.push(code);
    }
}

// ── Timeline (display + delay in call order) ──────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Cursor(u8, u8),
    Text(String),
    DelayMs(u32),
}

/// Shared record of display writes and delays, in the order they happen.
#[derive(Clone, Default)]
pub struct Timeline(Rc<RefCell<Vec<Op>>>);

#[allow(dead_code)]
impl Timeline {
    pub fn ops(&self) -> Vec<Op> {
        self.0.borrow().clone()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.0
            .borrow()
            .iter()
            .filter_map(|op| match op {
                Op::DelayMs(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|op| match op {
                Op::Text(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// Display that records calls and also renders into a [`CharGrid`].
pub struct MockDisplay {
    pub timeline: Timeline,
    pub grid: CharGrid,
}

impl MockDisplay {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            grid: CharGrid::new(),
        }
    }
}

impl DisplayPort for MockDisplay {
    fn set_cursor(&mut self, row: u8, column: u8) {
        self.timeline.0.borrow_mut().push(Op::Cursor(row, column));
        self.grid.set_cursor(row, column);
    }

    fn write_text(&mut self, text: &str) {
        self.timeline.0.borrow_mut().push(Op::Text(text.to_string()));
        self.grid.write_text(text);
    }
}

pub struct MockDelay {
    pub timeline: Timeline,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.timeline.0.borrow_mut().push(Op::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.timeline.0.borrow_mut().push(Op::DelayMs(ms));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count_where(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
