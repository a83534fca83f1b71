use crate::types::{heading_vector, Point2D, Pose2D};

// =========================================================================
// == Perception-Specific Data Structures ==
// =========================================================================

/// A single range measurement along one beam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeReading {
    /// World-frame heading of the beam, in radians.
    pub heading: f64,
    /// Measured distance in meters, always within `[0, max_range]`.
    pub distance: f64,
    /// The max range of the beam that produced this reading.
    pub max_range: f64,
}

impl RangeReading {
    /// True when the beam stopped on an obstacle before its max range.
    pub fn is_hit(&self) -> bool {
        self.distance < self.max_range
    }
}

/// One full sweep of a ranging sensor, taken at `pose`.
///
/// This is the message planners consume: they look at the distances and,
/// for collision checks, at the world-frame hit points.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeScan {
    /// The sensor pose the scan was taken from.
    pub pose: Pose2D,
    /// Readings ordered by increasing bearing.
    pub readings: Vec<RangeReading>,
}

impl RangeScan {
    /// The shortest reading of the sweep, if there is any reading at all.
    pub fn min_reading(&self) -> Option<&RangeReading> {
        self.readings
            .iter()
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    /// World-frame points where beams hit something.
    pub fn hit_points(&self) -> Vec<Point2D> {
        let origin = self.pose.position();
        self.readings
            .iter()
            .filter(|r| r.is_hit())
            .map(|r| origin + heading_vector(r.heading) * r.distance)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn reading(heading: f64, distance: f64) -> RangeReading {
        RangeReading {
            heading,
            distance,
            max_range: 10.0,
        }
    }

    #[test]
    fn min_reading_picks_the_closest_beam() {
        let scan = RangeScan {
            pose: Pose2D::default(),
            readings: vec![reading(0.0, 7.0), reading(0.1, 3.5), reading(0.2, 10.0)],
        };
        assert_eq!(scan.min_reading().map(|r| r.distance), Some(3.5));
    }

    #[test]
    fn empty_scan_has_no_min() {
        let scan = RangeScan {
            pose: Pose2D::default(),
            readings: Vec::new(),
        };
        assert!(scan.min_reading().is_none());
        assert!(scan.hit_points().is_empty());
    }

    #[test]
    fn hit_points_skip_max_range_readings() {
        let scan = RangeScan {
            pose: Pose2D::new(1.0, 1.0, 0.0),
            readings: vec![reading(FRAC_PI_2, 2.0), reading(0.0, 10.0)],
        };
        let points = scan.hit_points();
        assert_eq!(points.len(), 1);
        assert_abs_diff_eq!(points[0].x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(points[0].y, 3.0, epsilon = 1e-12);
    }
}
