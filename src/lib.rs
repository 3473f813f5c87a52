//! Sortline firmware library.
//!
//! Exposes the pure-logic modules for integration testing and the
//! drivers the binaries wire to real pins. ESP-IDF-specific code is
//! guarded by `#[cfg(target_os = "espidf")]` within each module.
//!
//! | Binary              | Service                            |
//! |---------------------|------------------------------------|
//! | `push_servo`        | [`app::service::ServoService`]     |
//! | `directional_servo` | [`app::service::ServoService`]     |
//! | `item_counter`      | [`app::service::CounterService`]   |

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod pins;
