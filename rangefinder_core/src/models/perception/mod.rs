// rangefinder_core/src/models/perception/mod.rs

pub mod lidar_2d;
pub mod single_beam;

use crate::error::GeometryError;
use crate::messages::{RangeReading, RangeScan};
use crate::obstacles::Obstacle;
use crate::ranging::{cast_multi, Beam};
use crate::types::Pose2D;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// The contract for any sensor model that measures range by casting beams
/// into a scene of obstacles.
///
/// The model defines its own scan pattern (`generate_beams`); the provided
/// `scan` runs the ranging engine over that pattern. Models hold no state
/// between scans, so one model can serve many threads.
pub trait RangingSensorModel: Send + Sync + DynClone + Debug {
    /// World-frame beams for a sensor sitting at `pose`, ordered by
    /// increasing bearing. Fails only if `pose` is not finite.
    fn generate_beams(&self, pose: &Pose2D) -> Result<Vec<Beam>, GeometryError>;

    /// Returns the maximum effective range of the sensor in meters.
    fn max_range(&self) -> f64;

    /// Casts every beam of the pattern against `obstacles`.
    fn scan(&self, pose: &Pose2D, obstacles: &[Obstacle]) -> Result<RangeScan, GeometryError> {
        let readings = self
            .generate_beams(pose)?
            .iter()
            .map(|beam| RangeReading {
                heading: beam.heading(),
                distance: cast_multi(beam, obstacles),
                max_range: beam.max_range(),
            })
            .collect();

        Ok(RangeScan {
            pose: *pose,
            readings,
        })
    }
}

// Make the trait object cloneable.
dyn_clone::clone_trait_object!(RangingSensorModel);
