// rangefinder_sim/src/simulation/config/mod.rs

//! This module handles loading and validating scenario configuration from
//! disk. Files are TOML; `RANGEFINDER_`-prefixed environment variables are
//! merged on top (`__` separates nested keys, e.g. `RANGEFINDER_SENSOR__MAX_RANGE`).

pub mod structs;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use rangefinder_core::error::GeometryError;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub use structs::{FootprintConfig, ObstacleConfig, PoseConfig, ScenarioConfig, SensorConfig};

const ENV_PREFIX: &str = "RANGEFINDER_";

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] figment::Error),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl ScenarioConfig {
    /// Parses a scenario from an in-memory TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, ScenarioError> {
        Ok(Figment::new().merge(Toml::string(toml)).extract()?)
    }
}

/// Loads the scenario file at `path`, applying environment overrides.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, ScenarioError> {
    if !path.is_file() {
        return Err(ScenarioError::NotFound(path.to_path_buf()));
    }
    info!("Loading scenario from: {}", path.display());

    let config: ScenarioConfig = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()?;

    info!(
        name = %config.name,
        obstacles = config.obstacles.len(),
        footprints = config.footprints.len(),
        "scenario loaded"
    );
    Ok(config)
}
