//! Closed-form rolling kinematics
//!
//! For rolling without slipping the acceleration along the incline is
//! a = g·sin(θ) / (1 + I/(m·r²)), constant for the whole run, so the travel
//! time over a length L from rest is t = sqrt(2L/a).

use crate::consts::GRAVITY;
use crate::error::{SimError, SimResult};

/// Acceleration along the incline
///
/// The caller guarantees `mass * radius²` is positive. A result that is not a
/// finite positive number (flat ramp, adversarial inertia) is reported as
/// `NonPositiveAcceleration`.
pub fn acceleration(angle_rad: f32, inertia: f32, mass: f32, radius: f32) -> SimResult<f32> {
    let a = GRAVITY * angle_rad.sin() / (1.0 + inertia / (mass * radius * radius));
    if a.is_finite() && a > 0.0 {
        Ok(a)
    } else {
        Err(SimError::NonPositiveAcceleration(a))
    }
}

/// Time to cover `length` from rest
pub fn travel_time(length: f32, acceleration: f32) -> SimResult<f32> {
    if !(acceleration.is_finite() && acceleration > 0.0) {
        return Err(SimError::NonPositiveAcceleration(acceleration));
    }
    Ok((2.0 * length / acceleration).sqrt())
}
