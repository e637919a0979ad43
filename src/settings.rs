//! Viewer settings and initial scenario
//!
//! Persisted in LocalStorage on the web, read from a JSON file natively.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::camera::{CameraPreset, FramingConfig};
use crate::consts::{CONTENT_SCALE, FOV_DEGREES, MAX_FRAME_DELTA};
use crate::error::SettingsError;
use crate::sim::{BoundsOptions, SimulationInput};

/// Viewer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Starting camera preset
    pub camera_preset: CameraPreset,
    /// Vertical field of view (degrees)
    pub fov_degrees: f32,
    pub framing: FramingConfig,
    /// Uniform scale of the ramp + body group
    pub content_scale: f32,
    /// Draw (and frame) the axes helper on the ramp
    pub show_ramp_axes: bool,
    /// Largest frame delta a single tick accepts (seconds)
    pub max_frame_delta: f32,
    /// Near/far clip planes
    pub near: f32,
    pub far: f32,

    /// Scenario submitted on startup
    pub initial: SimulationInput,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            camera_preset: CameraPreset::Angled,
            fov_degrees: FOV_DEGREES,
            framing: FramingConfig::default(),
            content_scale: CONTENT_SCALE,
            show_ramp_axes: true,
            max_frame_delta: MAX_FRAME_DELTA,
            near: 0.1,
            far: 200.0,
            initial: SimulationInput::default(),
        }
    }
}

impl Settings {
    /// Vertical field of view in radians
    #[inline]
    pub fn fov_y(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    pub fn bounds_options(&self) -> BoundsOptions {
        BoundsOptions {
            ramp_axes: self.show_ramp_axes,
            content_scale: self.content_scale,
        }
    }

    /// Reject values that would break camera framing or stall the clock
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(field: &'static str, value: f32, reason: &'static str) -> SettingsError {
            SettingsError::Invalid {
                field,
                value,
                reason,
            }
        }

        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(invalid("fov_degrees", self.fov_degrees, "must be in (0, 180)"));
        }
        let positive = [
            ("framing.padding", self.framing.padding),
            ("framing.zoom", self.framing.zoom),
            ("content_scale", self.content_scale),
            ("max_frame_delta", self.max_frame_delta),
            ("near", self.near),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, value, "must be finite and positive"));
            }
        }
        if !(self.far.is_finite() && self.far > self.near) {
            return Err(invalid("far", self.far, "must be finite and beyond near"));
        }
        Ok(())
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "rolling_incline_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("Settings saved"),
                    Err(e) => log::warn!("Failed to save settings: {:?}", e),
                }
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ShapeKind;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.camera_preset, CameraPreset::Angled);
        assert_eq!(s.framing.padding, 1.35);
        assert!((s.fov_y() - 50.0_f32.to_radians()).abs() < 1e-7);
        assert!(s.initial.to_parameters().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(
            r#"{"camera_preset":"side","initial":{"shape":"hollowSphere","thickness":0.05}}"#,
        )
        .unwrap();
        assert_eq!(s.camera_preset, CameraPreset::Side);
        assert_eq!(s.initial.shape, ShapeKind::HollowSphere);
        assert_eq!(s.initial.thickness, 0.05);
        assert_eq!(s.fov_degrees, FOV_DEGREES);
        assert_eq!(s.max_frame_delta, MAX_FRAME_DELTA);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut s = Settings::default();
        s.show_ramp_axes = false;
        s.content_scale = 1.0;
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    fn rejected_field(json: &str) -> &'static str {
        match Settings::from_json(json) {
            Err(SettingsError::Invalid { field, .. }) => field,
            other => panic!("expected invalid setting for {json}, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_fov_rejected() {
        assert_eq!(rejected_field(r#"{"fov_degrees":0.0}"#), "fov_degrees");
        assert_eq!(rejected_field(r#"{"fov_degrees":180.0}"#), "fov_degrees");
        assert_eq!(rejected_field(r#"{"fov_degrees":-30.0}"#), "fov_degrees");

        let mut s = Settings::default();
        s.fov_degrees = f32::NAN;
        assert!(matches!(
            s.validate(),
            Err(SettingsError::Invalid {
                field: "fov_degrees",
                ..
            })
        ));
    }

    #[test]
    fn test_non_positive_framing_rejected() {
        assert_eq!(
            rejected_field(r#"{"framing":{"padding":1.35,"zoom":0.0}}"#),
            "framing.zoom"
        );
        assert_eq!(
            rejected_field(r#"{"framing":{"padding":0.0,"zoom":1.3}}"#),
            "framing.padding"
        );
        assert_eq!(rejected_field(r#"{"content_scale":0.0}"#), "content_scale");
        assert_eq!(rejected_field(r#"{"content_scale":-1.0}"#), "content_scale");
    }

    #[test]
    fn test_bad_frame_delta_rejected() {
        assert_eq!(rejected_field(r#"{"max_frame_delta":0.0}"#), "max_frame_delta");
        assert_eq!(rejected_field(r#"{"max_frame_delta":-0.1}"#), "max_frame_delta");
    }

    #[test]
    fn test_clip_planes_rejected() {
        assert_eq!(rejected_field(r#"{"near":0.0}"#), "near");
        assert_eq!(rejected_field(r#"{"near":-0.1}"#), "near");
        assert_eq!(rejected_field(r#"{"near":5.0,"far":5.0}"#), "far");
        assert_eq!(rejected_field(r#"{"near":5.0,"far":1.0}"#), "far");
    }

    #[test]
    fn test_invalid_file_rejected() {
        let path = std::env::temp_dir().join(format!(
            "rolling_incline_invalid_settings_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"framing":{"padding":1.35,"zoom":0.0}}"#).unwrap();
        let result = Settings::load_from_path(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(SettingsError::Invalid {
                field: "framing.zoom",
                ..
            })
        ));
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Json(_))
        ));
        assert!(matches!(
            Settings::load_from_path("/definitely/not/here.json"),
            Err(SettingsError::Io(_))
        ));
    }
}
