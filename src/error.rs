//! Error types for the simulation core and settings loading

/// Recoverable failures of the physics core.
///
/// Both variants leave the caller's previous state untouched: parameters are
/// validated before anything is replaced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },
    #[error("acceleration must be positive, got {0}")]
    NonPositiveAcceleration(f32),
}

pub type SimResult<T> = Result<T, SimError>;

/// Settings loading errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid setting {field} = {value}: {reason}")]
    Invalid {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = SimError::InvalidParameter {
            name: "radius",
            value: -1.0,
            reason: "must be positive",
        };
        assert_eq!(err.to_string(), "invalid radius = -1: must be positive");
    }

    #[test]
    fn test_settings_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: SettingsError = json_err.into();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn test_invalid_setting_message() {
        let err = SettingsError::Invalid {
            field: "near",
            value: 0.0,
            reason: "must be positive",
        };
        assert_eq!(err.to_string(), "invalid setting near = 0: must be positive");
    }
}
