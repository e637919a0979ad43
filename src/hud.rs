//! Elapsed-time readout
//!
//! Shows the live time while rolling, then holds the last finished time until
//! a new preview clears it.

use crate::sim::RunPhase;

#[derive(Debug, Clone, Default)]
pub struct TimeReadout {
    shown: f32,
}

impl TimeReadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current clock state, get the value to display
    pub fn update(&mut self, phase: RunPhase, elapsed: f32) -> f32 {
        self.shown = match phase {
            RunPhase::Running | RunPhase::Finished => elapsed,
            RunPhase::Idle | RunPhase::Preview => 0.0,
        };
        self.shown
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.shown
    }

    /// Two-decimal label, e.g. "1.07"
    pub fn format(&self) -> String {
        format!("{:.2}", self.shown)
    }
}
