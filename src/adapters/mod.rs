//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements                           | Connects to          |
//! |-------------|--------------------------------------|----------------------|
//! | `hardware`  | InputPort, ServoPort, IndicatorPort  | drivers (GPIO, PWM)  |
//! | `display`   | DisplayPort                          | 2×16 character grid  |
//! | `log_sink`  | EventSink                            | Serial log output    |

pub mod display;
pub mod hardware;
pub mod log_sink;
