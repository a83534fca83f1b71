// rangefinder_sim/src/simulation/mod.rs

pub mod config;
pub mod logging;
pub mod runner;
