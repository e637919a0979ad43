//! Rolling-body kinematics core
//!
//! Everything here is pure or owns plain values:
//! - No rendering or platform dependencies
//! - Closed-form motion only, no integration
//! - Same inputs, same outputs

pub mod bounds;
pub mod clock;
pub mod inertia;
pub mod kinematics;
pub mod params;
pub mod placement;
pub mod shape;

pub use bounds::{Aabb, BoundsOptions, body_half_extents, scene_bounds};
pub use clock::{RunPhase, SimulationClock, SimulationRun};
pub use inertia::{inertia_coefficient, inertia_coefficient_for_label, inner_radius};
pub use kinematics::{acceleration, travel_time};
pub use params::{SimulationInput, SimulationParameters};
pub use placement::{BodyPose, RampPlacement, compute_pose};
pub use shape::ShapeKind;
