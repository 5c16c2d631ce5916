//! Error types for the test framework

use thiserror::Error;

/// A failed check recorded by a regression test
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Grids differ in shape
    #[error("grid comparison failed at index {index}: dims {expected:?} vs {actual:?}")]
    DimensionMismatch {
        index: usize,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Grids differ at some element
    #[error("grid comparison failed at index {index}: {expected} vs {actual} at {coords:?}")]
    GridMismatch {
        index: usize,
        coords: Vec<usize>,
        expected: String,
        actual: String,
    },

    /// A boolean property did not hold
    #[error("check failed at index {index}: {what}")]
    CheckFailed { index: usize, what: String },

    /// Summary error returned by [`crate::RegParams::into_result`]
    #[error("{test_name}_reg: {count} failure(s)")]
    Failed { test_name: String, count: usize },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
