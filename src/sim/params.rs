//! Validated simulation parameters
//!
//! `SimulationInput` is what the control surface produces (degrees, diameter).
//! `SimulationParameters` is the validated, immutable value the core works
//! with; its derived physics is computed once at construction.

use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use super::inertia::inertia_coefficient;
use super::kinematics::{acceleration, travel_time};
use super::shape::ShapeKind;
use crate::error::{SimError, SimResult};

/// Raw values from the control surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationInput {
    pub shape: ShapeKind,
    /// Incline angle in degrees
    pub angle_deg: f32,
    /// Distance traveled along the ramp surface
    pub length: f32,
    /// Outer diameter of the body
    pub diameter: f32,
    /// Wall thickness (hollow shapes only)
    pub thickness: f32,
    pub mass: f32,
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            shape: ShapeKind::SolidSphere,
            angle_deg: 30.0,
            length: 2.0,
            diameter: 1.0,
            thickness: 0.1,
            mass: 1.0,
        }
    }
}

impl SimulationInput {
    /// Validate and convert into parameters
    pub fn to_parameters(&self) -> SimResult<SimulationParameters> {
        SimulationParameters::new(
            self.shape,
            self.diameter / 2.0,
            self.thickness,
            self.mass,
            self.angle_deg.to_radians(),
            self.length,
        )
    }
}

impl TryFrom<SimulationInput> for SimulationParameters {
    type Error = SimError;

    fn try_from(input: SimulationInput) -> SimResult<Self> {
        input.to_parameters()
    }
}

/// Immutable parameter set with its derived physics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationParameters {
    shape: ShapeKind,
    radius: f32,
    thickness: f32,
    mass: f32,
    incline_angle: f32,
    ramp_length: f32,
    inertia: f32,
    acceleration: f32,
    travel_time: f32,
}

fn require(name: &'static str, value: f32, ok: bool, reason: &'static str) -> SimResult<()> {
    if value.is_finite() && ok {
        Ok(())
    } else {
        Err(SimError::InvalidParameter {
            name,
            value,
            reason,
        })
    }
}

impl SimulationParameters {
    /// Validate the numeric domain and derive inertia, acceleration and
    /// travel time.
    pub fn new(
        shape: ShapeKind,
        radius: f32,
        thickness: f32,
        mass: f32,
        incline_angle: f32,
        ramp_length: f32,
    ) -> SimResult<Self> {
        require("radius", radius, radius > 0.0, "must be positive")?;
        require("thickness", thickness, thickness >= 0.0, "must not be negative")?;
        require("mass", mass, mass > 0.0, "must be positive")?;
        require(
            "incline angle",
            incline_angle,
            incline_angle > 0.0 && incline_angle < FRAC_PI_2,
            "must lie strictly between 0 and π/2",
        )?;
        require("ramp length", ramp_length, ramp_length > 0.0, "must be positive")?;

        let inertia = inertia_coefficient(shape, mass, radius, thickness);
        let acceleration = acceleration(incline_angle, inertia, mass, radius)?;
        let travel_time = travel_time(ramp_length, acceleration)?;

        Ok(Self {
            shape,
            radius,
            thickness,
            mass,
            incline_angle,
            ramp_length,
            inertia,
            acceleration,
            travel_time,
        })
    }

    #[inline]
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Incline angle in radians
    #[inline]
    pub fn incline_angle(&self) -> f32 {
        self.incline_angle
    }

    #[inline]
    pub fn ramp_length(&self) -> f32 {
        self.ramp_length
    }

    /// Moment of inertia coefficient
    #[inline]
    pub fn inertia(&self) -> f32 {
        self.inertia
    }

    /// Acceleration along the incline (always > 0)
    #[inline]
    pub fn acceleration(&self) -> f32 {
        self.acceleration
    }

    /// Analytic time to traverse the whole ramp from rest
    #[inline]
    pub fn travel_time(&self) -> f32 {
        self.travel_time
    }

    /// Distance traveled at `t`, clamped to the ramp
    ///
    /// At or past the travel time this is exactly the ramp length, so a
    /// finished run never stops a rounding error short of the end.
    pub fn distance_at(&self, t: f32) -> f32 {
        if t >= self.travel_time {
            return self.ramp_length;
        }
        let t = t.max(0.0);
        crate::distance_from_rest(self.acceleration, t).min(self.ramp_length)
    }
}
