// rangefinder_core/src/types.rs

use crate::error::GeometryError;
use nalgebra::{Isometry2, Point2, Vector2};
use serde::{Deserialize, Serialize};

// --- Core Type Aliases ---
/// A planar point in world (or local) coordinates, in meters.
pub type Point2D = Point2<f64>;

/// Tolerance used by every intersection and tie-break test in the crate.
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// A planar pose: position plus heading, yaw in radians measured CCW from +x.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    pub yaw: f64,
}

impl Pose2D {
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self { x, y, yaw }
    }

    /// Builds a pose from a heading given in degrees.
    pub fn from_degrees(x: f64, y: f64, yaw_deg: f64) -> Self {
        Self::new(x, y, yaw_deg.to_radians())
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// The rigid transform taking pose-local coordinates into the parent frame.
    pub fn to_isometry(&self) -> Isometry2<f64> {
        Isometry2::new(Vector2::new(self.x, self.y), self.yaw)
    }

    pub(crate) fn validate(&self, what: &'static str) -> Result<(), GeometryError> {
        if self.x.is_finite() && self.y.is_finite() && self.yaw.is_finite() {
            Ok(())
        } else {
            Err(GeometryError::NonFinite(what))
        }
    }
}

/// Unit direction vector for a heading in radians.
pub fn heading_vector(heading: f64) -> Vector2<f64> {
    Vector2::new(heading.cos(), heading.sin())
}

pub(crate) fn ensure_finite_point(p: &Point2D, what: &'static str) -> Result<(), GeometryError> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite(what))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn pose_from_degrees_converts_yaw() {
        let pose = Pose2D::from_degrees(1.0, 2.0, 90.0);
        assert_abs_diff_eq!(pose.yaw, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn pose_isometry_rotates_then_translates() {
        let pose = Pose2D::new(3.0, -1.0, FRAC_PI_2);
        let p = pose.to_isometry() * Point2D::new(1.0, 0.0);
        assert_abs_diff_eq!(p.x, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn non_finite_pose_is_rejected() {
        let pose = Pose2D::new(f64::NAN, 0.0, 0.0);
        assert_eq!(
            pose.validate("pose"),
            Err(GeometryError::NonFinite("pose"))
        );
    }
}
