//! Application core — loop orchestration, zero direct I/O.
//!
//! The services in [`service`] run one iteration of a variant's control
//! loop. All interaction with hardware happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod events;
pub mod ports;
pub mod service;
