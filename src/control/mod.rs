//! Pure control logic: no I/O, no timing.
//!
//! ```text
//!  InputSampler ─▶ TransitionDetector ─▶ mapping ─▶ (duty | ItemTally + screen)
//!                                                      ActivityFlag (every pass)
//! ```

pub mod activity;
pub mod counter;
pub mod input;
pub mod mapping;
pub mod screen;
pub mod transition;
