// rangefinder_sim/src/simulation/config/structs.rs

//! Plain serde mirrors of the scenario TOML. Angles are degrees here and are
//! converted to radians when the core types are built.

use rangefinder_core::prelude::*;
use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "unnamed".to_string()
}

/// The top-level scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Where the sensor sits.
    #[serde(default)]
    pub pose: PoseConfig,
    pub sensor: SensorConfig,
    #[serde(default)]
    pub obstacles: Vec<ObstacleConfig>,
    /// Bodies that only appear in the point map.
    #[serde(default)]
    pub footprints: Vec<FootprintConfig>,
    /// Sample spacing for the obstacle point map; no map is built when unset.
    #[serde(default)]
    pub map_ds: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PoseConfig {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub yaw_deg: f64,
}

impl PoseConfig {
    pub fn to_pose(&self) -> Pose2D {
        Pose2D::from_degrees(self.x, self.y, self.yaw_deg)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SensorConfig {
    SingleBeam {
        max_range: f64,
    },
    #[serde(rename = "lidar_2d")]
    Lidar2D {
        max_range: f64,
        fov_deg: f64,
        beam_count: u32,
    },
}

impl SensorConfig {
    pub fn build(&self) -> Result<Box<dyn RangingSensorModel>, GeometryError> {
        let model: Box<dyn RangingSensorModel> = match self {
            SensorConfig::SingleBeam { max_range } => Box::new(SingleBeamModel::new(*max_range)?),
            SensorConfig::Lidar2D {
                max_range,
                fov_deg,
                beam_count,
            } => Box::new(Lidar2DModel::from_degrees(*max_range, *fov_deg, *beam_count)?),
        };
        Ok(model)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObstacleConfig {
    /// A wall starting at `(x, y)` running `length` meters along `heading_deg`.
    Wall {
        x: f64,
        y: f64,
        heading_deg: f64,
        length: f64,
    },
    Disk {
        x: f64,
        y: f64,
        radius: f64,
    },
}

impl ObstacleConfig {
    pub fn build(&self) -> Result<Obstacle, GeometryError> {
        match *self {
            ObstacleConfig::Wall {
                x,
                y,
                heading_deg,
                length,
            } => make_wall(Point2D::new(x, y), heading_deg, length),
            ObstacleConfig::Disk { x, y, radius } => make_disk(Point2D::new(x, y), radius),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootprintConfig {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub yaw_deg: f64,
    pub width: f64,
    pub length: f64,
    #[serde(default)]
    pub frame: FootprintFrame,
}

impl FootprintConfig {
    pub fn to_spec(&self) -> Result<FootprintSpec, GeometryError> {
        FootprintSpec::new(
            Pose2D::from_degrees(self.x, self.y, self.yaw_deg),
            self.width,
            self.length,
            self.frame,
        )
    }
}

impl ScenarioConfig {
    pub fn pose(&self) -> Pose2D {
        self.pose.to_pose()
    }

    pub fn build_sensor(&self) -> Result<Box<dyn RangingSensorModel>, GeometryError> {
        self.sensor.build()
    }

    /// Builds the obstacle map, failing on the first malformed entry.
    pub fn build_map(&self) -> Result<ObstacleMap, GeometryError> {
        let obstacles = self
            .obstacles
            .iter()
            .map(ObstacleConfig::build)
            .collect::<Result<Vec<_>, _>>()?;
        self.footprints
            .iter()
            .try_fold(ObstacleMap::new(obstacles), |map, fp| {
                Ok(map.with_footprint(fp.to_spec()?))
            })
    }
}
