//! Axis-aligned bounds of the visible scene (ramp + body)

use glam::Vec3;
use serde::Serialize;

use super::placement::{BodyPose, RampPlacement};
use super::shape::ShapeKind;
use crate::consts::{CYLINDER_LENGTH_FACTOR, RAMP_AXES_LENGTH, RAMP_WIDTH};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self::new(center - half, center + half)
    }

    /// Smallest box holding all points (None for an empty iterator)
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Uniform scale about the world origin
    pub fn scaled(&self, factor: f32) -> Aabb {
        Aabb::new(self.min * factor, self.max * factor)
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// What goes into the scene box besides ramp and body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsOptions {
    /// Include the axes helper attached to the ramp
    pub ramp_axes: bool,
    /// Scale of the content group holding ramp and body
    pub content_scale: f32,
}

impl Default for BoundsOptions {
    fn default() -> Self {
        Self {
            ramp_axes: true,
            content_scale: crate::consts::CONTENT_SCALE,
        }
    }
}

/// Half extents of the body's box
///
/// Cylinders lie along X and spin about X, so their cross-section box is the
/// same for every spin angle.
pub fn body_half_extents(shape: ShapeKind, radius: f32) -> Vec3 {
    if shape.is_sphere() {
        Vec3::splat(radius)
    } else {
        Vec3::new(0.5 * CYLINDER_LENGTH_FACTOR * radius, radius, radius)
    }
}

/// Bounds of ramp + body in world space
pub fn scene_bounds(
    ramp: &RampPlacement,
    shape: ShapeKind,
    radius: f32,
    pose: &BodyPose,
    options: &BoundsOptions,
) -> Aabb {
    let half_w = 0.5 * RAMP_WIDTH;
    let half_l = 0.5 * ramp.length;
    let corners = [
        Vec3::new(-half_w, 0.0, -half_l),
        Vec3::new(half_w, 0.0, -half_l),
        Vec3::new(-half_w, 0.0, half_l),
        Vec3::new(half_w, 0.0, half_l),
    ];

    let mut local: Vec<Vec3> = corners.to_vec();
    if options.ramp_axes {
        local.push(Vec3::ZERO);
        local.push(Vec3::X * RAMP_AXES_LENGTH);
        local.push(Vec3::Y * RAMP_AXES_LENGTH);
        local.push(Vec3::Z * RAMP_AXES_LENGTH);
    }

    let ramp_box = Aabb::from_points(local.into_iter().map(|p| ramp.local_to_world(p)))
        .unwrap_or_else(|| Aabb::new(ramp.translation, ramp.translation));

    let half = body_half_extents(shape, radius);
    let body_box = Aabb::new(pose.position - half, pose.position + half);

    ramp_box.union(&body_box).scaled(options.content_scale)
}
