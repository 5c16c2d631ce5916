//! Error types for geodesic-morph

use thiserror::Error;

/// Errors that can occur during reconstruction and derived operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] geodesic_core::Error),

    /// Marker and mask differ in dimensionality or per-axis extent
    #[error("shape mismatch: marker {marker:?} vs mask {mask:?}")]
    ShapeMismatch { marker: Vec<usize>, mask: Vec<usize> },

    /// Marker lies on the wrong side of the mask at some element
    #[error("marker {marker} violates mask {mask} at {coords:?}")]
    PreconditionViolation {
        coords: Vec<usize>,
        marker: String,
        mask: String,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
