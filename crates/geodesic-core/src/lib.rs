//! geodesic-core - Basic data structures for grayscale reconstruction
//!
//! This crate provides the N-dimensional grid that every other crate in the
//! workspace operates on:
//!
//! - [`Grid`] - Row-major N-dimensional scalar image
//! - [`Shape`] - Per-axis extents, strides, and coordinate stepping
//! - [`Pixel`] - Trait bounding the scalar value types a grid can hold
//! - [`Error`] / [`Result`] - Error type shared by grid operations

pub mod error;
pub mod grid;
pub mod pixel;
pub mod shape;

pub use error::{Error, Result};
pub use grid::Grid;
pub use pixel::Pixel;
pub use shape::Shape;
