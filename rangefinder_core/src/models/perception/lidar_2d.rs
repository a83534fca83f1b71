// rangefinder_core/src/models/perception/lidar_2d.rs

use crate::error::GeometryError;
use crate::models::perception::RangingSensorModel;
use crate::ranging::Beam;
use crate::types::Pose2D;

/// A single-plane 2D LiDAR: `beam_count` beams spread evenly over a field of
/// view centred on the sensor's yaw.
#[derive(Debug, Clone, PartialEq)]
pub struct Lidar2DModel {
    max_range: f64,
    /// Full horizontal field of view, in radians.
    fov: f64,
    beam_count: u32,
}

impl Lidar2DModel {
    pub fn new(max_range: f64, fov: f64, beam_count: u32) -> Result<Self, GeometryError> {
        let model = Self {
            max_range,
            fov,
            beam_count,
        };
        model.validate()?;
        Ok(model)
    }

    /// Same as [`Lidar2DModel::new`] with the field of view in degrees.
    pub fn from_degrees(max_range: f64, fov_deg: f64, beam_count: u32) -> Result<Self, GeometryError> {
        Self::new(max_range, fov_deg.to_radians(), beam_count)
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn beam_count(&self) -> u32 {
        self.beam_count
    }

    fn validate(&self) -> Result<(), GeometryError> {
        if !(self.max_range.is_finite() && self.max_range > 0.0) {
            return Err(GeometryError::InvalidRange(self.max_range));
        }
        if !(self.fov.is_finite() && self.fov >= 0.0) {
            return Err(GeometryError::InvalidDimension {
                name: "fov",
                value: self.fov,
            });
        }
        if self.beam_count == 0 {
            return Err(GeometryError::InvalidBeamCount(self.beam_count));
        }
        Ok(())
    }

    /// Bearing offsets from the sensor yaw, from -fov/2 to +fov/2.
    pub fn bearings(&self) -> Vec<f64> {
        match self.beam_count {
            0 => return Vec::new(),
            1 => return vec![0.0],
            _ => {}
        }
        let start_angle = -self.fov / 2.0;
        let angle_increment = self.fov / (self.beam_count - 1) as f64;
        (0..self.beam_count)
            .map(|i| start_angle + i as f64 * angle_increment)
            .collect()
    }
}

impl RangingSensorModel for Lidar2DModel {
    fn generate_beams(&self, pose: &Pose2D) -> Result<Vec<Beam>, GeometryError> {
        self.validate()?;
        let origin = pose.position();
        self.bearings()
            .into_iter()
            .map(|offset| Beam::new(origin, pose.yaw + offset, self.max_range))
            .collect()
    }

    fn max_range(&self) -> f64 {
        self.max_range
    }
}
