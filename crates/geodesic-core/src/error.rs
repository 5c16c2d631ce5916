//! Error types for geodesic-core
//!
//! Provides a unified error type for grid construction and access.
//! Each variant captures enough context for diagnostics without exposing
//! internal layout details.

use thiserror::Error;

/// geodesic-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Zero dimensionality or a zero-length axis
    #[error("invalid grid dimensions: {0:?}")]
    InvalidDimension(Vec<usize>),

    /// Raw data does not cover the shape exactly
    #[error("data length {actual} does not match shape {dims:?} ({expected} elements)")]
    DataLengthMismatch {
        dims: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    /// Coordinate outside the grid
    #[error("coordinates {coords:?} out of bounds for shape {dims:?}")]
    IndexOutOfBounds {
        coords: Vec<usize>,
        dims: Vec<usize>,
    },

    /// Two grids that must agree in shape do not
    #[error("shape mismatch: {expected:?} vs {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for geodesic-core operations
pub type Result<T> = std::result::Result<T, Error>;
