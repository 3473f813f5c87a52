//! Error types for bring-up and configuration.
//!
//! The control loop itself is total and never returns an error; these
//! variants only surface while the board is being configured.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is inconsistent.
    Config(&'static str),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// A GPIO write failed during bring-up.
    Gpio,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Gpio => write!(f, "GPIO access failed"),
        }
    }
}

impl std::error::Error for Error {}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
