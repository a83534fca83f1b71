// rangefinder_sim/src/simulation/runner.rs

use crate::simulation::config::{ScenarioConfig, ScenarioError};
use rangefinder_core::prelude::*;
use tracing::{debug, info, info_span, warn};

/// Everything one scenario run produced.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub scan: RangeScan,
    /// Sampled obstacle outlines, when a map spacing was requested.
    pub map_points: Option<CurveSample>,
}

/// Builds the scene and sensor from `config`, takes one scan, and optionally
/// samples the obstacle point map. `map_ds` overrides the file's `map_ds`.
pub fn run_scenario(
    config: &ScenarioConfig,
    map_ds: Option<f64>,
) -> Result<ScenarioReport, ScenarioError> {
    let _span = info_span!("scenario", name = %config.name).entered();

    let map = config.build_map()?;
    let sensor = config.build_sensor()?;
    let pose = config.pose();

    let scan = sensor.scan(&pose, map.obstacles())?;
    for reading in &scan.readings {
        debug!(
            heading_deg = reading.heading.to_degrees(),
            distance = reading.distance,
            hit = reading.is_hit(),
            "range reading"
        );
    }

    match scan.min_reading() {
        Some(nearest) if nearest.is_hit() => info!(
            heading_deg = nearest.heading.to_degrees(),
            distance = nearest.distance,
            "nearest obstacle"
        ),
        Some(_) => info!(max_range = sensor.max_range(), "no obstacle within range"),
        None => warn!("sensor produced no beams"),
    }

    let map_points = map_ds
        .or(config.map_ds)
        .map(|ds| map.point_cloud(ds))
        .transpose()?;

    Ok(ScenarioReport { scan, map_points })
}
