//! Geodesic - Grayscale morphological reconstruction for Rust
//!
//! # Overview
//!
//! Reconstruction propagates the values of a marker grid through a mask
//! grid until no element can change. It is the building block for:
//!
//! - Hole filling and peak grinding
//! - H-maxima / h-minima and regional extrema
//! - Opening and closing by reconstruction
//!
//! Grids of any dimensionality and any ordered scalar type are supported.
//!
//! # Example
//!
//! ```
//! use geodesic::Grid;
//! use geodesic::morph::{Connectivity, reconstruct_by_dilation};
//!
//! let mask = Grid::<u8>::from_rows(&[&[3, 3, 0], &[0, 3, 4]]).unwrap();
//! let mut marker = Grid::<u8>::new(&[2, 3]).unwrap();
//! marker.set(&[0, 0], 3).unwrap();
//!
//! let out = reconstruct_by_dilation(&marker, &mask, Connectivity::Face).unwrap();
//! assert_eq!(out.data(), &[3, 3, 0, 0, 3, 3]);
//! ```

// Re-export core types
pub use geodesic_core::*;

// Re-export the reconstruction crate as a module
pub use geodesic_morph as morph;
