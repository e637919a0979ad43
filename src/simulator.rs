//! Command facade and per-frame pipeline
//!
//! Per tick, in order: clock advance, placement, camera framing (only when
//! geometry, preset or viewport changed), output. Parameter submission does
//! the physics up front, so it always lands before the next clock advance.

use serde::Serialize;

use crate::camera::{CameraPose, CameraPreset, frame_camera};
use crate::error::SimResult;
use crate::hud::TimeReadout;
use crate::platform::FrameClock;
use crate::renderer::{BodyDescriptor, FrameUniforms, Projection, RampDescriptor};
use crate::settings::Settings;
use crate::sim::{
    BodyPose, RampPlacement, RunPhase, SimulationClock, SimulationInput, SimulationParameters,
    compute_pose, scene_bounds,
};

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameOutput {
    pub ramp: RampDescriptor,
    pub body: BodyDescriptor,
    pub pose: BodyPose,
    pub camera: CameraPose,
    pub phase: RunPhase,
    pub elapsed: f32,
    pub travel_time: f32,
}

/// Simulator instance holding all state
pub struct Simulator {
    settings: Settings,
    clock: SimulationClock,
    ramp: Option<RampPlacement>,
    preset: CameraPreset,
    viewport: (u32, u32),
    camera: Option<CameraPose>,
    camera_dirty: bool,
    readout: TimeReadout,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Simulator {
    pub fn new(settings: Settings) -> Self {
        Self {
            clock: SimulationClock::new(settings.max_frame_delta),
            preset: settings.camera_preset,
            settings,
            ramp: None,
            viewport: (1, 1),
            camera: None,
            camera_dirty: true,
            readout: TimeReadout::new(),
        }
    }

    /// Build a simulator and preview the configured initial scenario
    pub fn with_initial(settings: Settings) -> SimResult<Self> {
        let initial = settings.initial;
        let mut sim = Self::new(settings);
        sim.submit_input(&initial)?;
        Ok(sim)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ===== Commands =====

    /// Replace the run with a fresh preview of `params`
    pub fn submit_parameters(&mut self, params: SimulationParameters) {
        log::debug!(
            "Parameters: {} r={} θ={:.3} L={} → a={:.4}, t={:.4}",
            params.shape().as_str(),
            params.radius(),
            params.incline_angle(),
            params.ramp_length(),
            params.acceleration(),
            params.travel_time()
        );
        self.ramp = Some(RampPlacement::for_parameters(&params));
        self.clock.submit(params);
        self.camera_dirty = true;
    }

    /// Validate control-surface values and submit them
    ///
    /// Invalid input leaves the current run untouched.
    pub fn submit_input(&mut self, input: &SimulationInput) -> SimResult<()> {
        match input.to_parameters() {
            Ok(params) => {
                self.submit_parameters(params);
                Ok(())
            }
            Err(e) => {
                log::warn!("Rejected parameters: {}", e);
                Err(e)
            }
        }
    }

    /// Start rolling; false when nothing has been submitted yet
    pub fn start_run(&mut self) -> bool {
        self.clock.start()
    }

    /// Switch to the next camera preset and reframe
    pub fn cycle_preset(&mut self) -> CameraPreset {
        self.preset = self.preset.next();
        self.camera_dirty = true;
        self.refresh_camera();
        log::info!("Camera preset: {}", self.preset.as_str());
        self.preset
    }

    pub fn on_viewport_resize(&mut self, width: u32, height: u32) {
        self.viewport = (width.max(1), height.max(1));
        self.camera_dirty = true;
        self.refresh_camera();
    }

    /// Run one frame of the pipeline
    ///
    /// Returns `None` while idle (no scene to draw).
    pub fn tick(&mut self, delta: f32) -> Option<FrameOutput> {
        let (phase, elapsed) = self.clock.tick(delta);
        self.readout.update(phase, elapsed);

        let run = *self.clock.run()?;
        let ramp = self.ramp?;
        let pose = compute_pose(run.parameters(), run.elapsed(), &ramp);

        self.refresh_camera();
        let camera = self.camera?;

        Some(FrameOutput {
            ramp: RampDescriptor::from_placement(&ramp),
            body: BodyDescriptor::from_parameters(run.parameters()),
            pose,
            camera,
            phase: run.phase(),
            elapsed: run.elapsed(),
            travel_time: run.parameters().travel_time(),
        })
    }

    /// Pull one delta from an injected frame clock and tick
    pub fn advance(&mut self, frames: &mut impl FrameClock) -> Option<FrameOutput> {
        let delta = frames.next_delta();
        self.tick(delta)
    }

    // ===== Queries =====

    pub fn current_phase(&self) -> RunPhase {
        self.clock.phase()
    }

    pub fn current_elapsed_time(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn current_travel_time(&self) -> f32 {
        self.clock.travel_time()
    }

    pub fn current_preset(&self) -> CameraPreset {
        self.preset
    }

    pub fn camera(&self) -> Option<CameraPose> {
        self.camera
    }

    /// Time to show in the elapsed-time display
    pub fn time_readout(&self) -> &TimeReadout {
        &self.readout
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.viewport.0 as f32 / self.viewport.1 as f32
    }

    pub fn projection(&self) -> Projection {
        Projection {
            fov_y: self.settings.fov_y(),
            aspect: self.aspect(),
            near: self.settings.near,
            far: self.settings.far,
        }
    }

    /// Pack a frame for GPU upload with the current projection
    pub fn uniforms(&self, frame: &FrameOutput) -> FrameUniforms {
        FrameUniforms::from_frame(frame, &self.projection())
    }

    // ===== Internals =====

    /// Reframe from the start-of-run pose if anything invalidated the camera
    fn refresh_camera(&mut self) {
        if !self.camera_dirty {
            return;
        }
        let (Some(run), Some(ramp)) = (self.clock.run(), self.ramp) else {
            return;
        };

        let params = *run.parameters();
        let start_pose = compute_pose(&params, 0.0, &ramp);
        let bounds = scene_bounds(
            &ramp,
            params.shape(),
            params.radius(),
            &start_pose,
            &self.settings.bounds_options(),
        );

        self.camera = Some(frame_camera(
            &bounds,
            self.settings.fov_y(),
            self.aspect(),
            self.preset,
            &self.settings.framing,
        ));
        self.camera_dirty = false;
    }
}
