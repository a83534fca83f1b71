// rangefinder_core/src/error.rs

use thiserror::Error;

/// Everything that can go wrong while building geometry or beams.
///
/// All variants describe malformed input (the "invalid geometry" class): they
/// are raised synchronously at construction time and never retried. Degenerate
/// but well-formed input, such as a zero-length wall, is not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid geometry: sample spacing must be positive and finite, got {0}")]
    InvalidSpacing(f64),

    #[error("invalid geometry: beam max range must be positive and finite, got {0}")]
    InvalidRange(f64),

    #[error("invalid geometry: radius must be non-negative and finite, got {0}")]
    InvalidRadius(f64),

    #[error("invalid geometry: length must be non-negative and finite, got {0}")]
    InvalidLength(f64),

    #[error("invalid geometry: {name} must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("invalid geometry: {0} has a non-finite coordinate")]
    NonFinite(&'static str),

    #[error("invalid geometry: a sweep needs at least one beam, got {0}")]
    InvalidBeamCount(u32),
}

impl GeometryError {
    /// Every variant is an input contract violation; kept as a method so callers
    /// can branch on the error class without matching each variant.
    pub fn is_invalid_geometry(&self) -> bool {
        true
    }
}
