//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timing (injected tick deltas)
//! - Browser bindings for the host page (wasm32 only)

pub mod time;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use time::{FixedFrameClock, FrameClock, TimestampFrameClock};
#[cfg(not(target_arch = "wasm32"))]
pub use time::SystemFrameClock;
