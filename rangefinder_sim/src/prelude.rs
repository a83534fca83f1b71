// rangefinder_sim/src/prelude.rs

// Re-export the entire rangefinder_core prelude so you can easily access
// pure types like `Beam`, `Obstacle`, `RangeScan`, etc.
pub use rangefinder_core::prelude::*;

// Re-export common scenario-specific types for easy access.
pub use crate::cli::{Cli, LogFormat};
pub use crate::simulation::config::structs::*;
pub use crate::simulation::config::{load_scenario, ScenarioError};
pub use crate::simulation::runner::{run_scenario, ScenarioReport};
