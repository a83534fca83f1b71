// rangefinder_core/src/models/perception/single_beam.rs

use crate::error::GeometryError;
use crate::models::perception::RangingSensorModel;
use crate::ranging::Beam;
use crate::types::Pose2D;

/// A one-beam range finder looking straight along the sensor yaw.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleBeamModel {
    pub max_range: f64,
}

impl SingleBeamModel {
    pub fn new(max_range: f64) -> Result<Self, GeometryError> {
        if !(max_range.is_finite() && max_range > 0.0) {
            return Err(GeometryError::InvalidRange(max_range));
        }
        Ok(Self { max_range })
    }
}

impl RangingSensorModel for SingleBeamModel {
    fn generate_beams(&self, pose: &Pose2D) -> Result<Vec<Beam>, GeometryError> {
        Ok(vec![Beam::from_pose(pose, self.max_range)?])
    }

    fn max_range(&self) -> f64 {
        self.max_range
    }
}
