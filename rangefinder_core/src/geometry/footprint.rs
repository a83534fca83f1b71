// rangefinder_core/src/geometry/footprint.rs

use crate::error::GeometryError;
use crate::geometry::curve::{sample_line, validate_spacing, CurveSample};
use crate::types::{Point2D, Pose2D};
use serde::{Deserialize, Serialize};

/// Where the local origin of a rectangular footprint sits.
///
/// In both frames the body extends along local +y and its width along local x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintFrame {
    /// Origin at the midpoint of the rear edge, e.g. a vehicle's rear axle.
    #[default]
    RearAnchored,
    /// Origin at the centroid.
    CentroidAnchored,
}

impl FootprintFrame {
    /// Local corners in edge order: front-left, front-right, rear-right, rear-left.
    fn corners(self, width: f64, length: f64) -> [Point2D; 4] {
        let half_w = width / 2.0;
        let (rear, front) = match self {
            FootprintFrame::RearAnchored => (0.0, length),
            FootprintFrame::CentroidAnchored => (-length / 2.0, length / 2.0),
        };
        [
            Point2D::new(-half_w, front),
            Point2D::new(half_w, front),
            Point2D::new(half_w, rear),
            Point2D::new(-half_w, rear),
        ]
    }
}

fn ensure_positive(name: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidDimension { name, value })
    }
}

/// Checks that a rectangle of `width` x `length` can be placed at `pose`.
pub(crate) fn validate_rectangle(pose: &Pose2D, width: f64, length: f64) -> Result<(), GeometryError> {
    pose.validate("footprint pose")?;
    ensure_positive("width", width)?;
    ensure_positive("length", length)
}

/// Samples the closed outline of a `width` x `length` rectangle placed at `pose`.
///
/// Edges are emitted front, right, rear, left, each without its last point, so
/// the result walks the outline once with no repeated corners. Local points are
/// rotated by `pose.yaw` and then translated by `(pose.x, pose.y)`.
pub fn rectangle_footprint(
    pose: &Pose2D,
    width: f64,
    length: f64,
    ds: f64,
    frame: FootprintFrame,
) -> Result<CurveSample, GeometryError> {
    validate_rectangle(pose, width, length)?;
    validate_spacing(ds)?;

    let [front_left, front_right, rear_right, rear_left] = frame.corners(width, length);
    let edges = [
        (front_left, front_right),
        (front_right, rear_right),
        (rear_right, rear_left),
        (rear_left, front_left),
    ];

    let to_world = pose.to_isometry();
    let mut outline = CurveSample::default();
    for (start, end) in edges {
        let edge = sample_line(start, end, ds, true)?;
        outline.extend_from(edge.into_iter().map(|p| to_world * p).collect());
    }
    Ok(outline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn rear_anchored_outline_starts_at_front_left() {
        let s = rectangle_footprint(&Pose2D::default(), 2.0, 4.0, 1.0, FootprintFrame::RearAnchored)
            .unwrap();
        // 2 + 4 + 2 + 4 spans, one point per span.
        assert_eq!(s.len(), 12);
        assert_eq!(s.first(), Some(&Point2D::new(-1.0, 4.0)));
        // Right edge begins at the front-right corner.
        assert_eq!(s.points()[2], Point2D::new(1.0, 4.0));
        // Rear edge begins at the rear-right corner.
        assert_eq!(s.points()[6], Point2D::new(1.0, 0.0));
        // Left edge begins at the rear-left corner.
        assert_eq!(s.points()[8], Point2D::new(-1.0, 0.0));
    }

    #[test]
    fn centroid_anchored_outline_is_symmetric() {
        let s = rectangle_footprint(
            &Pose2D::default(),
            2.5,
            10.0,
            0.5,
            FootprintFrame::CentroidAnchored,
        )
        .unwrap();
        let (sum_x, sum_y) = s.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        assert_abs_diff_eq!(sum_x / s.len() as f64, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sum_y / s.len() as f64, 0.0, epsilon = 1e-9);
        for p in s.iter() {
            assert!(p.x.abs() <= 1.25 + 1e-12);
            assert!(p.y.abs() <= 5.0 + 1e-12);
        }
    }

    #[test]
    fn outline_has_no_repeated_points() {
        let s = rectangle_footprint(&Pose2D::default(), 2.5, 10.0, 0.5, FootprintFrame::RearAnchored)
            .unwrap();
        for (i, a) in s.iter().enumerate() {
            for b in s.points().iter().skip(i + 1) {
                assert!(nalgebra::distance(a, b) > 1e-9);
            }
        }
    }

    #[test]
    fn quarter_turn_points_the_body_along_minus_x() {
        let pose = Pose2D::new(10.0, 5.0, std::f64::consts::FRAC_PI_2);
        let s = rectangle_footprint(&pose, 2.0, 4.0, 1.0, FootprintFrame::RearAnchored).unwrap();
        // Local front-left (-1, 4) rotated by +90 degrees is (-4, -1).
        let first = s.first().copied().unwrap();
        assert_abs_diff_eq!(first.x, 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(first.y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        let pose = Pose2D::default();
        assert_eq!(
            rectangle_footprint(&pose, 0.0, 4.0, 1.0, FootprintFrame::RearAnchored),
            Err(GeometryError::InvalidDimension { name: "width", value: 0.0 })
        );
        assert_eq!(
            rectangle_footprint(&pose, 2.0, -4.0, 1.0, FootprintFrame::CentroidAnchored),
            Err(GeometryError::InvalidDimension { name: "length", value: -4.0 })
        );
        assert!(matches!(
            rectangle_footprint(&Pose2D::new(0.0, f64::NAN, 0.0), 2.0, 4.0, 1.0, FootprintFrame::RearAnchored),
            Err(GeometryError::NonFinite(_))
        ));
    }

    fn arb_frame() -> impl Strategy<Value = FootprintFrame> {
        prop_oneof![
            Just(FootprintFrame::RearAnchored),
            Just(FootprintFrame::CentroidAnchored)
        ]
    }

    proptest! {
        #[test]
        fn posed_footprint_matches_manual_transform(
            x in -100.0f64..100.0,
            y in -100.0f64..100.0,
            yaw in -std::f64::consts::PI..std::f64::consts::PI,
            width in 0.5f64..5.0,
            length in 0.5f64..12.0,
            ds in 0.1f64..1.0,
            frame in arb_frame(),
        ) {
            let local = rectangle_footprint(&Pose2D::default(), width, length, ds, frame).unwrap();
            let posed = rectangle_footprint(&Pose2D::new(x, y, yaw), width, length, ds, frame).unwrap();
            prop_assert_eq!(local.len(), posed.len());

            let (s, c) = yaw.sin_cos();
            for (p, q) in local.iter().zip(posed.iter()) {
                let mx = c * p.x - s * p.y + x;
                let my = s * p.x + c * p.y + y;
                prop_assert!((mx - q.x).abs() < 1e-9);
                prop_assert!((my - q.y).abs() < 1e-9);
            }
        }
    }
}
