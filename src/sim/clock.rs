//! Run lifecycle: Idle → Preview → Running → Finished
//!
//! A `SimulationRun` is a small `Copy` snapshot. Every transition builds a new
//! snapshot and `SimulationClock::replace` swaps it in; nothing is patched in
//! place.

use serde::Serialize;

use super::params::SimulationParameters;
use crate::consts::MAX_FRAME_DELTA;

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunPhase {
    /// No parameters submitted yet
    Idle,
    /// Body parked at the top of the ramp
    Preview,
    /// Body rolling, elapsed time accumulating
    Running,
    /// Body stopped at the bottom, elapsed == travel time
    Finished,
}

impl RunPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunPhase::Idle => "idle",
            RunPhase::Preview => "preview",
            RunPhase::Running => "running",
            RunPhase::Finished => "finished",
        }
    }
}

/// One previewed or active run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationRun {
    parameters: SimulationParameters,
    elapsed: f32,
    phase: RunPhase,
}

impl SimulationRun {
    /// Fresh preview at the top of the ramp
    pub fn preview(parameters: SimulationParameters) -> Self {
        Self {
            parameters,
            elapsed: 0.0,
            phase: RunPhase::Preview,
        }
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    /// Seconds since the run started
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Same parameters, rolling from rest
    pub fn started(&self) -> Self {
        Self {
            parameters: self.parameters,
            elapsed: 0.0,
            phase: RunPhase::Running,
        }
    }

    /// Advance a running snapshot by `delta` seconds
    ///
    /// Non-running snapshots and zero/negative/non-finite deltas come back
    /// unchanged. Arrival clamps elapsed time to the analytic travel time.
    pub fn advanced(&self, delta: f32, max_delta: f32) -> Self {
        if self.phase != RunPhase::Running || !delta.is_finite() || delta <= 0.0 {
            return *self;
        }

        let elapsed = self.elapsed + delta.min(max_delta);
        let traveled = crate::distance_from_rest(self.parameters.acceleration(), elapsed);

        if traveled >= self.parameters.ramp_length() {
            Self {
                parameters: self.parameters,
                elapsed: self.parameters.travel_time(),
                phase: RunPhase::Finished,
            }
        } else {
            Self {
                parameters: self.parameters,
                elapsed,
                phase: RunPhase::Running,
            }
        }
    }
}

/// Owner of the current run
#[derive(Debug, Clone)]
pub struct SimulationClock {
    run: Option<SimulationRun>,
    max_delta: f32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DELTA)
    }
}

impl SimulationClock {
    /// Clock accepting at most `max_delta` seconds per tick
    ///
    /// A zero, negative or non-finite limit would stall every run, so it falls
    /// back to `MAX_FRAME_DELTA`.
    pub fn new(max_delta: f32) -> Self {
        let max_delta = if max_delta.is_finite() && max_delta > 0.0 {
            max_delta
        } else {
            log::warn!(
                "Invalid max frame delta {}, using {}",
                max_delta,
                MAX_FRAME_DELTA
            );
            MAX_FRAME_DELTA
        };
        Self {
            run: None,
            max_delta,
        }
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }

    /// Single mutation point for the run
    fn replace(&mut self, next: SimulationRun) {
        let prev = self.phase();
        if prev != next.phase {
            log::info!("Run phase {} -> {}", prev.as_str(), next.phase.as_str());
        }
        self.run = Some(next);
    }

    /// Discard whatever is in flight and preview new parameters
    pub fn submit(&mut self, parameters: SimulationParameters) {
        self.replace(SimulationRun::preview(parameters));
    }

    /// Start (or restart) rolling; returns false when there is nothing to run
    pub fn start(&mut self) -> bool {
        match self.run {
            Some(run) => {
                self.replace(run.started());
                true
            }
            None => {
                log::warn!("Start ignored: no parameters submitted");
                false
            }
        }
    }

    /// Advance by one frame delta and report `(phase, elapsed)`
    pub fn tick(&mut self, delta: f32) -> (RunPhase, f32) {
        if let Some(run) = self.run {
            let next = run.advanced(delta, self.max_delta);
            if next != run {
                self.replace(next);
            }
        }
        (self.phase(), self.elapsed())
    }

    pub fn run(&self) -> Option<&SimulationRun> {
        self.run.as_ref()
    }

    pub fn phase(&self) -> RunPhase {
        self.run.map_or(RunPhase::Idle, |r| r.phase)
    }

    pub fn elapsed(&self) -> f32 {
        self.run.map_or(0.0, |r| r.elapsed)
    }

    /// Analytic travel time of the current parameters (0 when idle)
    pub fn travel_time(&self) -> f32 {
        self.run.map_or(0.0, |r| r.parameters.travel_time())
    }
}
