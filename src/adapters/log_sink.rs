//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (UART / USB-CDC in production).

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(variant) => {
                info!("START | variant={:?}", variant);
            }
            AppEvent::DutyApplied { code, duty } => {
                debug!("SERVO | input=0b{:02b} duty={}", code.bits(), duty.ticks());
            }
            AppEvent::ItemCounted {
                name, count, total, ..
            } => {
                info!("COUNT | {} #{} | total={}", name, count, total);
            }
            AppEvent::Heartbeat { iteration, lit } => {
                debug!("BEAT  | #{} led={}", iteration, if *lit { "on" } else { "off" });
            }
        }
    }
}
