//! Moment of inertia about the rolling axis
//!
//! Thick-walled hollow bodies use the difference of two solids:
//! - sphere: I = (2/5)·m·(r⁵ − rᵢ⁵)/(r³ − rᵢ³)
//! - cylinder: I = (1/2)·m·(r⁴ − rᵢ⁴)/(r² − rᵢ²)
//!
//! When the denominator is exactly zero (a wall of zero thickness, rᵢ = r) it
//! is replaced by 1. This keeps the function total on degenerate input; it is
//! NOT the thin-shell limit (which would be (2/3)·m·r² for a sphere and m·r²
//! for a cylinder).

use super::shape::ShapeKind;

/// Inner radius of a hollow wall, never negative
#[inline]
pub fn inner_radius(radius: f32, thickness: f32) -> f32 {
    (radius - thickness).max(0.0)
}

/// Substitute 1 for an exactly-zero denominator
#[inline]
fn guarded(denominator: f32) -> f32 {
    if denominator == 0.0 {
        log::debug!("zero-thickness wall: substituting 1 for inertia denominator");
        1.0
    } else {
        denominator
    }
}

/// Moment of inertia coefficient `I` for a shape
pub fn inertia_coefficient(shape: ShapeKind, mass: f32, radius: f32, thickness: f32) -> f32 {
    let r_in = inner_radius(radius, thickness);

    match shape {
        ShapeKind::SolidSphere => 0.4 * mass * radius * radius,
        ShapeKind::SolidCylinder => 0.5 * mass * radius * radius,
        ShapeKind::HollowSphere => {
            let numerator = radius.powi(5) - r_in.powi(5);
            let denominator = guarded(radius.powi(3) - r_in.powi(3));
            0.4 * mass * numerator / denominator
        }
        ShapeKind::HollowCylinder => {
            let numerator = radius.powi(4) - r_in.powi(4);
            let denominator = guarded(radius.powi(2) - r_in.powi(2));
            0.5 * mass * numerator / denominator
        }
    }
}

/// Inertia coefficient for a raw control-surface label
///
/// An unrecognized label is treated as a point mass (coefficient 0).
pub fn inertia_coefficient_for_label(label: &str, mass: f32, radius: f32, thickness: f32) -> f32 {
    match ShapeKind::from_label(label) {
        Some(shape) => inertia_coefficient(shape, mass, radius, thickness),
        None => {
            log::warn!("Unknown shape '{}', treating as point mass", label);
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_solid_shapes() {
        assert!(approx(inertia_coefficient(ShapeKind::SolidSphere, 1.0, 0.5, 0.0), 0.1));
        assert!(approx(inertia_coefficient(ShapeKind::SolidCylinder, 1.0, 0.5, 0.0), 0.125));
    }

    #[test]
    fn test_solid_shapes_ignore_thickness() {
        let a = inertia_coefficient(ShapeKind::SolidSphere, 2.0, 0.7, 0.0);
        let b = inertia_coefficient(ShapeKind::SolidSphere, 2.0, 0.7, 0.3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_hollow_sphere_full_thickness_matches_solid() {
        // Inner radius collapses to 0: (r⁵ / r³) = r²
        let hollow = inertia_coefficient(ShapeKind::HollowSphere, 2.0, 1.0, 1.0);
        assert!(approx(hollow, 0.8));
        let solid = inertia_coefficient(ShapeKind::SolidSphere, 2.0, 1.0, 0.0);
        assert!(approx(hollow, solid));
    }

    #[test]
    fn test_hollow_thickness_beyond_radius_clamps_inner() {
        let a = inertia_coefficient(ShapeKind::HollowCylinder, 1.0, 0.5, 0.5);
        let b = inertia_coefficient(ShapeKind::HollowCylinder, 1.0, 0.5, 2.0);
        assert_eq!(a, b);
        assert!(approx(a, 0.125));
    }

    #[test]
    fn test_zero_wall_uses_guard() {
        // r_in == r: numerator and denominator are both 0, guard divides by 1
        let sphere = inertia_coefficient(ShapeKind::HollowSphere, 2.0, 1.0, 0.0);
        let cylinder = inertia_coefficient(ShapeKind::HollowCylinder, 2.0, 1.0, 0.0);
        assert_eq!(sphere, 0.0);
        assert_eq!(cylinder, 0.0);
        assert!(sphere.is_finite() && cylinder.is_finite());
    }

    #[test]
    fn test_hollow_cylinder_closed_form() {
        // (r⁴ − rᵢ⁴)/(r² − rᵢ²) = r² + rᵢ²
        let i = inertia_coefficient(ShapeKind::HollowCylinder, 3.0, 1.0, 0.5);
        assert!(approx(i, 0.5 * 3.0 * (1.0 + 0.25)));
    }

    #[test]
    fn test_thin_hollow_sphere_has_more_inertia_than_solid() {
        let thin = inertia_coefficient(ShapeKind::HollowSphere, 1.0, 1.0, 0.1);
        let solid = inertia_coefficient(ShapeKind::SolidSphere, 1.0, 1.0, 0.0);
        assert!(thin > solid);
    }

    #[test]
    fn test_unknown_label_is_point_mass() {
        assert_eq!(inertia_coefficient_for_label("cube", 5.0, 1.0, 0.1), 0.0);
        assert!(approx(inertia_coefficient_for_label("solidSphere", 1.0, 0.5, 0.0), 0.1));
    }
}
