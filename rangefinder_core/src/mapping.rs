use crate::error::GeometryError;
use crate::geometry::curve::CurveSample;
use crate::geometry::footprint::{rectangle_footprint, validate_rectangle, FootprintFrame};
use crate::obstacles::Obstacle;
use crate::ranging::{cast_multi, Beam};
use crate::types::Pose2D;
use serde::Serialize;
use tracing::debug;

// --- Map Data Structures ---

/// A rectangular body that shows up in the map as sampled outline points only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FootprintSpec {
    pose: Pose2D,
    width: f64,
    length: f64,
    frame: FootprintFrame,
}

impl FootprintSpec {
    /// Fails unless the pose is finite and both dimensions are positive.
    pub fn new(
        pose: Pose2D,
        width: f64,
        length: f64,
        frame: FootprintFrame,
    ) -> Result<Self, GeometryError> {
        validate_rectangle(&pose, width, length)?;
        Ok(Self {
            pose,
            width,
            length,
            frame,
        })
    }

    pub fn pose(&self) -> Pose2D {
        self.pose
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn frame(&self) -> FootprintFrame {
        self.frame
    }

    pub fn outline(&self, ds: f64) -> Result<CurveSample, GeometryError> {
        rectangle_footprint(&self.pose, self.width, self.length, ds, self.frame)
    }
}

/// An immutable scene: the obstacles beams are ranged against, plus extra
/// footprints that only contribute to the planner's point map.
///
/// Order of insertion is kept for point output but never changes a reading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObstacleMap {
    obstacles: Vec<Obstacle>,
    footprints: Vec<FootprintSpec>,
}

impl ObstacleMap {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self {
            obstacles,
            footprints: Vec::new(),
        }
    }

    pub fn with_footprint(mut self, footprint: FootprintSpec) -> Self {
        self.footprints.push(footprint);
        self
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn footprints(&self) -> &[FootprintSpec] {
        &self.footprints
    }

    /// Nearest-hit distance for `beam` over every obstacle of the map.
    pub fn cast(&self, beam: &Beam) -> f64 {
        cast_multi(beam, &self.obstacles)
    }

    /// All outlines sampled at spacing `ds`: obstacles first, then footprints,
    /// each in insertion order.
    pub fn point_cloud(&self, ds: f64) -> Result<CurveSample, GeometryError> {
        let mut cloud = CurveSample::default();
        for obstacle in &self.obstacles {
            cloud.extend_from(obstacle.outline(ds)?);
        }
        for footprint in &self.footprints {
            cloud.extend_from(footprint.outline(ds)?);
        }
        debug!(
            obstacles = self.obstacles.len(),
            footprints = self.footprints.len(),
            points = cloud.len(),
            ds,
            "built obstacle point map"
        );
        Ok(cloud)
    }
}

impl FromIterator<Obstacle> for ObstacleMap {
    fn from_iter<I: IntoIterator<Item = Obstacle>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacles::{make_disk, make_wall};
    use crate::types::Point2D;
    use approx::assert_abs_diff_eq;

    fn sample_map() -> ObstacleMap {
        ObstacleMap::new(vec![
            make_wall(Point2D::new(30.0, -10.0), 90.0, 20.0).unwrap(),
            make_disk(Point2D::new(15.0, 0.0), 2.0).unwrap(),
        ])
    }

    #[test]
    fn map_cast_reads_the_nearest_obstacle() {
        let beam = Beam::from_degrees(Point2D::new(0.0, 0.0), 0.0, 20.0).unwrap();
        assert_abs_diff_eq!(sample_map().cast(&beam), 13.0, epsilon = 1e-9);
    }

    #[test]
    fn footprints_do_not_block_beams() {
        let footprint = FootprintSpec::new(
            Pose2D::new(5.0, 0.0, 0.0),
            2.0,
            4.0,
            FootprintFrame::CentroidAnchored,
        )
        .unwrap();
        let map = ObstacleMap::default().with_footprint(footprint);
        let beam = Beam::from_degrees(Point2D::new(0.0, 0.0), 0.0, 20.0).unwrap();
        assert_eq!(map.cast(&beam), 20.0);
        assert_eq!(map.footprints().len(), 1);
    }

    #[test]
    fn point_cloud_concatenates_outlines_in_order() {
        let footprint =
            FootprintSpec::new(Pose2D::default(), 2.0, 4.0, FootprintFrame::RearAnchored).unwrap();
        let map = sample_map().with_footprint(footprint);
        let ds = 1.0;

        let wall_points = map.obstacles()[0].outline(ds).unwrap();
        let disk_points = map.obstacles()[1].outline(ds).unwrap();
        let footprint_points = footprint.outline(ds).unwrap();
        let cloud = map.point_cloud(ds).unwrap();

        assert_eq!(
            cloud.len(),
            wall_points.len() + disk_points.len() + footprint_points.len()
        );
        assert_eq!(cloud.first(), wall_points.first());
        assert_eq!(cloud.last(), footprint_points.last());
    }

    #[test]
    fn malformed_footprints_are_rejected_up_front() {
        let frame = FootprintFrame::RearAnchored;
        assert_eq!(
            FootprintSpec::new(Pose2D::default(), -2.0, 4.0, frame),
            Err(GeometryError::InvalidDimension {
                name: "width",
                value: -2.0
            })
        );
        assert_eq!(
            FootprintSpec::new(Pose2D::default(), 2.0, 0.0, frame),
            Err(GeometryError::InvalidDimension {
                name: "length",
                value: 0.0
            })
        );
        assert!(matches!(
            FootprintSpec::new(Pose2D::new(f64::NAN, 0.0, 0.0), 2.0, 4.0, frame),
            Err(GeometryError::NonFinite(_))
        ));
    }

    #[test]
    fn point_cloud_rejects_bad_spacing() {
        assert_eq!(
            sample_map().point_cloud(0.0),
            Err(GeometryError::InvalidSpacing(0.0))
        );
    }
}
