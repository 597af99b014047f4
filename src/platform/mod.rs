//! Platform abstraction layer
//!
//! Capabilities the host injects into the round driver:
//! - Input events (per-tick snapshots and menu actions)
//! - Time/ticks (frame pacing)

pub mod input;
pub mod time;

pub use input::{DemoPilot, InputSource, ScriptedInput};
pub use time::{FixedRatePacer, Pacer, Unpaced};
