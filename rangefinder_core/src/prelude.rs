// rangefinder_core/src/prelude.rs

// --- Core Abstractions (The main contracts of the library) ---
pub use crate::error::GeometryError;
pub use crate::models::perception::RangingSensorModel;

// --- Core Data Structures (The "nouns" of the library) ---
pub use crate::geometry::curve::CurveSample;
pub use crate::geometry::footprint::FootprintFrame;
pub use crate::geometry::{Intersection, Segment2};
pub use crate::mapping::{FootprintSpec, ObstacleMap};
pub use crate::messages::{RangeReading, RangeScan};
pub use crate::obstacles::{Disk, Obstacle, Wall};
pub use crate::ranging::Beam;
pub use crate::types::{Point2D, Pose2D};

// --- Generators and the ranging engine ---
pub use crate::geometry::curve::{sample_circle, sample_line};
pub use crate::geometry::footprint::rectangle_footprint;
pub use crate::obstacles::{make_disk, make_wall};
pub use crate::ranging::{cast, cast_multi};

// --- Concrete Model Implementations (Export common ones for convenience) ---
pub use crate::models::perception::lidar_2d::Lidar2DModel;
pub use crate::models::perception::single_beam::SingleBeamModel;
