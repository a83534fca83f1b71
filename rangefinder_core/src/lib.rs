// rangefinder_core/src/lib.rs

//! Geometry generation and single-beam range finding against planar obstacles.
//!
//! The crate is pure: no I/O, no shared mutable state. Beams and obstacles are
//! validated when they are built, so ranging itself cannot fail.

pub mod error;
pub mod geometry;
pub mod mapping;
pub mod messages;
pub mod models;
pub mod obstacles;
pub mod prelude;
pub mod ranging;
pub mod types;
