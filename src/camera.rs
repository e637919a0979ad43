//! Camera presets and fit-to-bounds framing
//!
//! The camera sits on a ray from the scene center along the preset direction,
//! far enough back that the padded bounds fit both the vertical and the
//! horizontal field of view.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::{CAMERA_PADDING, CAMERA_ZOOM};
use crate::sim::Aabb;

/// Named view directions, relative to the scene center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum CameraPreset {
    #[default]
    Angled,
    SideHigh,
    Side,
}

impl CameraPreset {
    /// Order used by `next`
    pub const CYCLE: [CameraPreset; 3] = [
        CameraPreset::Angled,
        CameraPreset::SideHigh,
        CameraPreset::Side,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CameraPreset::Angled => "angled",
            CameraPreset::SideHigh => "sideHigh",
            CameraPreset::Side => "side",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "angled" => Some(CameraPreset::Angled),
            "sidehigh" | "side_high" | "high-side" => Some(CameraPreset::SideHigh),
            "side" => Some(CameraPreset::Side),
            _ => None,
        }
    }

    /// Un-normalized direction from the scene center toward the camera
    pub fn direction(&self) -> Vec3 {
        match self {
            CameraPreset::Angled => Vec3::new(-0.8, 0.45, 1.0),
            CameraPreset::SideHigh => Vec3::new(-1.15, 0.55, 0.35),
            CameraPreset::Side => Vec3::new(-0.25, 0.3, 1.0),
        }
    }

    /// Next preset in the cycle, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::CYCLE.iter().position(|p| p == self).unwrap_or(0);
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }
}

/// Framing tunables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FramingConfig {
    /// Multiplier on every extent (> 1 leaves a margin)
    pub padding: f32,
    /// Divides the fitted distance (> 1 zooms in)
    pub zoom: f32,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            padding: CAMERA_PADDING,
            zoom: CAMERA_ZOOM,
        }
    }
}

/// Where the camera is and what it looks at
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    #[inline]
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Right-handed view matrix, world up = +Y
    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    #[inline]
    pub fn projection_matrix(&self, fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(fov_y, aspect.max(1e-6), near, far)
    }
}

/// Camera distance that fits the padded bounds
pub fn fit_distance(size: Vec3, fov_y: f32, aspect: f32, framing: &FramingConfig) -> f32 {
    let padded = size * framing.padding;
    let tan_half = (fov_y * 0.5).tan();

    let height_distance = padded.y / (2.0 * tan_half);
    let width_distance = padded.x / (2.0 * tan_half * aspect);

    (height_distance.max(width_distance) + padded.z * 0.5) / framing.zoom
}

/// Place the camera for `preset` so that `bounds` stays fully visible
pub fn frame_camera(
    bounds: &Aabb,
    fov_y: f32,
    aspect: f32,
    preset: CameraPreset,
    framing: &FramingConfig,
) -> CameraPose {
    let center = bounds.center();
    let distance = fit_distance(bounds.size(), fov_y, aspect, framing);
    let offset = preset.direction().normalize() * distance;

    log::debug!(
        "Framing {} camera at distance {:.3} (aspect {:.3})",
        preset.as_str(),
        distance,
        aspect
    );

    CameraPose {
        position: center + offset,
        target: center,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0))
    }

    #[test]
    fn test_cycle_wraps() {
        let mut preset = CameraPreset::Angled;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(preset);
            preset = preset.next();
        }
        assert_eq!(
            seen,
            vec![
                CameraPreset::Angled,
                CameraPreset::SideHigh,
                CameraPreset::Side,
                CameraPreset::Angled
            ]
        );
    }

    #[test]
    fn test_labels() {
        for preset in CameraPreset::CYCLE {
            assert_eq!(CameraPreset::from_label(preset.as_str()), Some(preset));
        }
        assert_eq!(CameraPreset::from_label("high-side"), Some(CameraPreset::SideHigh));
        assert_eq!(CameraPreset::from_label("top"), None);
    }

    #[test]
    fn test_cube_framing_distance() {
        // padded 2.7; 2.7 / (2·tan 25°) = 2.89507; + 1.35 = 4.24507; / 1.3
        let pose = frame_camera(
            &unit_box(),
            50.0_f32.to_radians(),
            1.0,
            CameraPreset::Angled,
            &FramingConfig::default(),
        );
        assert!((pose.distance() - 3.26544).abs() < 1e-3);
        assert_eq!(pose.target, Vec3::ZERO);
    }

    #[test]
    fn test_framing_is_deterministic() {
        let fov = 50.0_f32.to_radians();
        let framing = FramingConfig::default();
        let a = frame_camera(&unit_box(), fov, 1.0, CameraPreset::Side, &framing);
        let b = frame_camera(&unit_box(), fov, 1.0, CameraPreset::Side, &framing);
        assert_eq!(a.position.to_array(), b.position.to_array());
    }

    #[test]
    fn test_position_along_preset_direction() {
        let bounds = Aabb::from_center_size(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(1.0));
        let pose = frame_camera(
            &bounds,
            1.0,
            1.5,
            CameraPreset::SideHigh,
            &FramingConfig::default(),
        );
        let dir = (pose.position - pose.target).normalize();
        assert!((dir - CameraPreset::SideHigh.direction().normalize()).length() < 1e-5);
        assert_eq!(pose.target, bounds.center());
    }

    #[test]
    fn test_narrow_viewport_pushes_camera_back() {
        let wide_box = Aabb::from_center_size(Vec3::ZERO, Vec3::new(6.0, 1.0, 1.0));
        let fov = 50.0_f32.to_radians();
        let framing = FramingConfig::default();
        let wide = fit_distance(wide_box.size(), fov, 2.0, &framing);
        let narrow = fit_distance(wide_box.size(), fov, 0.5, &framing);
        assert!(narrow > wide);
    }

    #[test]
    fn test_view_matrix_maps_target_ahead() {
        let pose = CameraPose {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
        };
        let p = pose.view_matrix().transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-5);
    }
}
