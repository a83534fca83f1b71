// rangefinder_core/src/ranging.rs

//! The beam ranging engine: nearest-hit distance along a bounded ray.

use crate::error::GeometryError;
use crate::geometry::Segment2;
use crate::obstacles::Obstacle;
use crate::types::{ensure_finite_point, Point2D, Pose2D};
use tracing::trace;

/// One range measurement direction: a segment of `max_range` from `origin`
/// along `heading` (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beam {
    origin: Point2D,
    heading: f64,
    max_range: f64,
}

impl Beam {
    pub fn new(origin: Point2D, heading: f64, max_range: f64) -> Result<Self, GeometryError> {
        ensure_finite_point(&origin, "beam origin")?;
        if !heading.is_finite() {
            return Err(GeometryError::NonFinite("beam heading"));
        }
        if !(max_range.is_finite() && max_range > 0.0) {
            return Err(GeometryError::InvalidRange(max_range));
        }
        Ok(Self {
            origin,
            heading,
            max_range,
        })
    }

    /// Same as [`Beam::new`] with the heading given in degrees.
    pub fn from_degrees(origin: Point2D, heading_deg: f64, max_range: f64) -> Result<Self, GeometryError> {
        Self::new(origin, heading_deg.to_radians(), max_range)
    }

    /// A beam leaving `pose` along its yaw.
    pub fn from_pose(pose: &Pose2D, max_range: f64) -> Result<Self, GeometryError> {
        Self::new(pose.position(), pose.yaw, max_range)
    }

    pub fn origin(&self) -> Point2D {
        self.origin
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn max_range(&self) -> f64 {
        self.max_range
    }

    pub fn end(&self) -> Point2D {
        self.segment().end
    }

    pub fn segment(&self) -> Segment2 {
        Segment2::from_heading(self.origin, self.heading, self.max_range)
    }

    /// The point this beam reports for a measured `distance`.
    pub fn point_at_distance(&self, distance: f64) -> Point2D {
        Segment2::from_heading(self.origin, self.heading, distance).end
    }
}

/// Distance from the beam origin to the nearest point of `obstacle` on the
/// beam, or `beam.max_range()` when the beam misses it.
///
/// A beam starting inside a disk measures 0. A beam running along a wall
/// measures the Euclidean distance to the closest overlapping point.
pub fn cast(beam: &Beam, obstacle: &Obstacle) -> f64 {
    let origin = beam.origin();
    obstacle
        .intersect(&beam.segment())
        .nearest_distance(&origin)
        .map_or(beam.max_range(), |d| d.min(beam.max_range()))
}

/// Nearest hit over a whole scene. An empty scene reads `beam.max_range()`.
pub fn cast_multi<'a, I>(beam: &Beam, obstacles: I) -> f64
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    obstacles
        .into_iter()
        .enumerate()
        .fold(beam.max_range(), |nearest, (idx, obstacle)| {
            let distance = cast(beam, obstacle);
            if distance < beam.max_range() {
                trace!(obstacle = idx, distance, "beam hit");
            }
            nearest.min(distance)
        })
}
