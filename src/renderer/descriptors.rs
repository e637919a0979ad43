//! Geometry descriptors for the host renderer
//!
//! The host builds meshes from these; nothing here touches the GPU.

use glam::{Quat, Vec3};
use serde::Serialize;

use crate::consts::{CYLINDER_LENGTH_FACTOR, HOLLOW_BORE_FACTOR, RAMP_WIDTH};
use crate::sim::{RampPlacement, ShapeKind, SimulationParameters};

/// "Build a ramp of length L tilted by θ"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RampDescriptor {
    pub length: f32,
    pub width: f32,
    /// Incline angle in radians
    pub angle: f32,
    pub rotation: Quat,
    pub translation: Vec3,
    pub normal: Vec3,
}

impl RampDescriptor {
    pub fn from_placement(ramp: &RampPlacement) -> Self {
        Self {
            length: ramp.length,
            width: RAMP_WIDTH,
            angle: ramp.angle,
            rotation: ramp.rotation,
            translation: ramp.translation,
            normal: ramp.normal(),
        }
    }
}

/// "Build a rolling body of this shape and radius"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyDescriptor {
    pub shape: ShapeKind,
    pub radius: f32,
    /// Cylinder length along X (0 for spheres)
    pub cylinder_length: f32,
    /// Radius of the visible bore (hollow cylinders only, 0 otherwise)
    pub bore_radius: f32,
}

impl BodyDescriptor {
    pub fn from_parameters(params: &SimulationParameters) -> Self {
        let shape = params.shape();
        let radius = params.radius();
        Self {
            shape,
            radius,
            cylinder_length: if shape.is_sphere() {
                0.0
            } else {
                CYLINDER_LENGTH_FACTOR * radius
            },
            bore_radius: if shape == ShapeKind::HollowCylinder {
                HOLLOW_BORE_FACTOR * radius
            } else {
                0.0
            },
        }
    }
}
