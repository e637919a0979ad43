//! Frame clocks: where tick deltas come from
//!
//! The simulator never owns a loop. A driver (requestAnimationFrame on the
//! web, a plain loop natively, a fixed step in tests) hands it one delta per
//! frame through this trait.

/// Source of per-frame deltas in seconds
pub trait FrameClock {
    fn next_delta(&mut self) -> f32;
}

/// Constant step, for tests and headless runs
#[derive(Debug, Clone, Copy)]
pub struct FixedFrameClock {
    step: f32,
}

impl FixedFrameClock {
    pub fn new(step: f32) -> Self {
        Self { step }
    }
}

impl FrameClock for FixedFrameClock {
    fn next_delta(&mut self) -> f32 {
        self.step
    }
}

/// Deltas from a stream of absolute timestamps in milliseconds
/// (the argument requestAnimationFrame passes to its callback)
#[derive(Debug, Clone, Default)]
pub struct TimestampFrameClock {
    last_ms: Option<f64>,
    pending_ms: f64,
}

impl TimestampFrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the timestamp of the frame about to run
    pub fn stamp(&mut self, now_ms: f64) {
        self.pending_ms = now_ms;
    }
}

impl FrameClock for TimestampFrameClock {
    fn next_delta(&mut self) -> f32 {
        let now = self.pending_ms;
        let delta = match self.last_ms {
            Some(last) => ((now - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now);
        delta
    }
}

/// Wall-clock deltas (native only)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct SystemFrameClock {
    last: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SystemFrameClock {
    fn default() -> Self {
        Self {
            last: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl FrameClock for SystemFrameClock {
    fn next_delta(&mut self) -> f32 {
        let now = std::time::Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedFrameClock::new(0.02);
        assert_eq!(clock.next_delta(), 0.02);
        assert_eq!(clock.next_delta(), 0.02);
    }

    #[test]
    fn test_timestamp_clock() {
        let mut clock = TimestampFrameClock::new();
        clock.stamp(1000.0);
        assert_eq!(clock.next_delta(), 0.0);
        clock.stamp(1016.0);
        assert!((clock.next_delta() - 0.016).abs() < 1e-6);
        // A timestamp going backwards yields a negative delta, which the
        // simulation clock ignores
        clock.stamp(1000.0);
        assert!(clock.next_delta() < 0.0);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_system_clock_non_negative() {
        let mut clock = SystemFrameClock::default();
        assert!(clock.next_delta() >= 0.0);
    }
}
