//! GPU uniform block for one frame
//!
//! Layout is std140-compatible (every row 16 bytes) so a WebGPU or WebGL2
//! host can upload `as_bytes()` straight into a uniform buffer.

use bytemuck::{Pod, Zeroable};

use crate::simulator::FrameOutput;
use crate::sim::RunPhase;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4], // offset 0
    pub body_model: [[f32; 4]; 4], // offset 64
    pub ramp_model: [[f32; 4]; 4], // offset 128
    pub camera_pos: [f32; 3],     // offset 192
    pub elapsed: f32,             // offset 204
    pub ramp_normal: [f32; 3],    // offset 208
    pub phase: u32,               // offset 220
    pub radius: f32,              // offset 224
    pub travel_time: f32,         // offset 228
    pub distance: f32,            // offset 232
    _pad: u32,                    // pad to 240 bytes
}

/// Projection settings for `FrameUniforms::from_frame`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

pub fn phase_code(phase: RunPhase) -> u32 {
    match phase {
        RunPhase::Idle => 0,
        RunPhase::Preview => 1,
        RunPhase::Running => 2,
        RunPhase::Finished => 3,
    }
}

impl FrameUniforms {
    pub fn from_frame(frame: &FrameOutput, projection: &Projection) -> Self {
        let view = frame.camera.view_matrix();
        let proj = frame.camera.projection_matrix(
            projection.fov_y,
            projection.aspect,
            projection.near,
            projection.far,
        );
        let ramp_model = glam::Mat4::from_rotation_translation(
            frame.ramp.rotation,
            frame.ramp.translation,
        );

        Self {
            view_proj: (proj * view).to_cols_array_2d(),
            body_model: frame.pose.transform().to_cols_array_2d(),
            ramp_model: ramp_model.to_cols_array_2d(),
            camera_pos: frame.camera.position.to_array(),
            elapsed: frame.elapsed,
            ramp_normal: frame.ramp.normal.to_array(),
            phase: phase_code(frame.phase),
            radius: frame.body.radius,
            travel_time: frame.travel_time,
            distance: frame.pose.distance,
            _pad: 0,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
