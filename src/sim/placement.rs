//! Placing the body on the ramp
//!
//! The ramp is a plane in its local XZ plane (local up = +Y, length along Z).
//! Its placement tilts it about the world X axis by −θ and lifts it so the
//! lower edge rests on y = 0; local +Z is then the top of the ramp.
//!
//! The body's 1-D travel `s` maps to the local surface point (0, 0, L/2 − s),
//! which is carried to world space and pushed out along the surface normal by
//! the body radius. Spin follows from rolling without slipping: −s/r about X.

use glam::{Mat4, Quat, Vec3};
use serde::Serialize;

use super::params::SimulationParameters;

/// World placement of the incline
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RampPlacement {
    pub length: f32,
    pub angle: f32,
    pub rotation: Quat,
    pub translation: Vec3,
}

impl RampPlacement {
    pub fn new(length: f32, angle: f32) -> Self {
        Self {
            length,
            angle,
            rotation: Quat::from_rotation_x(-angle),
            translation: Vec3::new(0.0, 0.5 * length * angle.sin(), 0.0),
        }
    }

    pub fn for_parameters(params: &SimulationParameters) -> Self {
        Self::new(params.ramp_length(), params.incline_angle())
    }

    /// Local → world transform
    #[inline]
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    #[inline]
    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.rotation * local + self.translation
    }

    /// Outward surface normal (local up carried by the ramp rotation)
    #[inline]
    pub fn normal(&self) -> Vec3 {
        (self.rotation * Vec3::Y).normalize()
    }

    /// Unit vector pointing down the slope
    #[inline]
    pub fn downhill(&self) -> Vec3 {
        (self.rotation * Vec3::NEG_Z).normalize()
    }

    /// World point on the surface centerline at travel `s` from the top
    #[inline]
    pub fn surface_point(&self, s: f32) -> Vec3 {
        self.local_to_world(Vec3::new(0.0, 0.0, 0.5 * self.length - s))
    }
}

/// Body pose for one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPose {
    /// Center of the body in world space
    pub position: Vec3,
    /// Spin about the rolling (X) axis, radians
    pub spin: f32,
    /// Distance traveled along the ramp
    pub distance: f32,
}

impl BodyPose {
    #[inline]
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_x(self.spin)
    }

    /// Model matrix for the body mesh
    #[inline]
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position)
    }
}

/// Pose of the body `elapsed` seconds after release
///
/// Computed from scratch on every call, so equal inputs give equal outputs
/// and no angular error accumulates.
pub fn compute_pose(params: &SimulationParameters, elapsed: f32, ramp: &RampPlacement) -> BodyPose {
    let s = params.distance_at(elapsed);
    let radius = params.radius();
    let position = ramp.surface_point(s) + ramp.normal() * radius;

    BodyPose {
        position,
        spin: -(s / radius),
        distance: s,
    }
}
