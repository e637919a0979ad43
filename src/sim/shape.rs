//! Rolling body shapes

use serde::{Deserialize, Serialize};

/// Shape of the rolling body
///
/// Hollow variants use the wall thickness carried by the parameters; solid
/// variants ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    #[default]
    SolidSphere,
    HollowSphere,
    SolidCylinder,
    HollowCylinder,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::SolidSphere,
        ShapeKind::HollowSphere,
        ShapeKind::SolidCylinder,
        ShapeKind::HollowCylinder,
    ];

    /// Control-surface label
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::SolidSphere => "solidSphere",
            ShapeKind::HollowSphere => "hollowSphere",
            ShapeKind::SolidCylinder => "solidCylinder",
            ShapeKind::HollowCylinder => "hollowCylinder",
        }
    }

    /// Parse a control-surface label (case-insensitive)
    pub fn from_label(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "solidsphere" | "solid_sphere" => Some(ShapeKind::SolidSphere),
            "hollowsphere" | "hollow_sphere" => Some(ShapeKind::HollowSphere),
            "solidcylinder" | "solid_cylinder" => Some(ShapeKind::SolidCylinder),
            "hollowcylinder" | "hollow_cylinder" => Some(ShapeKind::HollowCylinder),
            _ => None,
        }
    }

    #[inline]
    pub fn is_hollow(&self) -> bool {
        matches!(self, ShapeKind::HollowSphere | ShapeKind::HollowCylinder)
    }

    #[inline]
    pub fn is_sphere(&self) -> bool {
        matches!(self, ShapeKind::SolidSphere | ShapeKind::HollowSphere)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip_all_shapes() {
        for shape in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_label(shape.as_str()), Some(shape));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(ShapeKind::from_label("cube"), None);
        assert_eq!(ShapeKind::from_label(""), None);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&ShapeKind::HollowCylinder).unwrap();
        assert_eq!(json, "\"hollowCylinder\"");
        let back: ShapeKind = serde_json::from_str("\"solidSphere\"").unwrap();
        assert_eq!(back, ShapeKind::SolidSphere);
    }

    #[test]
    fn test_shape_classification() {
        assert!(ShapeKind::HollowSphere.is_hollow());
        assert!(!ShapeKind::SolidCylinder.is_hollow());
        assert!(ShapeKind::HollowSphere.is_sphere());
        assert!(!ShapeKind::HollowCylinder.is_sphere());
    }
}
