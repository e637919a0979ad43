//! Rolling Incline - a body rolling without slipping down a ramp
//!
//! Core modules:
//! - `sim`: Closed-form physics, run lifecycle, placement on the ramp
//! - `camera`: Camera presets and fit-to-bounds framing
//! - `simulator`: Command facade driving the per-frame pipeline
//! - `renderer`: Descriptors and GPU uniforms handed to the host renderer
//! - `platform`: Frame clocks and browser bindings
//! - `settings`: Persisted configuration

pub mod camera;
pub mod error;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod simulator;

pub use camera::{CameraPose, CameraPreset, FramingConfig, frame_camera};
pub use error::{SettingsError, SimError, SimResult};
pub use settings::Settings;
pub use simulator::{FrameOutput, Simulator};

/// Physical and scene constants
pub mod consts {
    /// Gravitational acceleration (m/s²)
    pub const GRAVITY: f32 = 9.81;

    /// Ramp plane width (across the direction of travel)
    pub const RAMP_WIDTH: f32 = 3.0;
    /// Length of the axes helper drawn on the ramp
    pub const RAMP_AXES_LENGTH: f32 = 3.0;

    /// Cylinder length as a multiple of its radius
    pub const CYLINDER_LENGTH_FACTOR: f32 = 1.2;
    /// Decorative bore of the hollow cylinder mesh, as a multiple of its radius
    pub const HOLLOW_BORE_FACTOR: f32 = 0.6;

    /// Frame margin around the scene bounds
    pub const CAMERA_PADDING: f32 = 1.35;
    /// Divides the fitted distance to zoom tighter
    pub const CAMERA_ZOOM: f32 = 1.3;
    /// Uniform scale applied to ramp + body by the host scene
    pub const CONTENT_SCALE: f32 = 1.3;
    /// Default vertical field of view (degrees)
    pub const FOV_DEGREES: f32 = 50.0;

    /// Largest frame delta accepted by one tick (seconds)
    pub const MAX_FRAME_DELTA: f32 = 0.25;
}

/// Distance traveled from rest under constant acceleration
#[inline]
pub fn distance_from_rest(acceleration: f32, t: f32) -> f32 {
    0.5 * acceleration * t * t
}
