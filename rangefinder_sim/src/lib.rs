// rangefinder_sim/src/lib.rs

// This prelude is for convenience for other files WITHIN the rangefinder_sim crate.
pub mod prelude;

// This module contains all the scenario-specific logic.
pub mod cli;
pub mod simulation;
