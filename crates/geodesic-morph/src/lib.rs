//! geodesic-morph - Grayscale morphological reconstruction
//!
//! This crate provides geodesic operations on N-dimensional grids:
//!
//! - Reconstruction by dilation and by erosion (hybrid raster-scan plus
//!   FIFO propagation algorithm)
//! - Face (2N neighbors) and full (3^N - 1 neighbors) connectivity
//! - Hole filling and peak grinding
//! - H-maxima / h-minima and regional extrema
//! - Opening and closing by reconstruction with a flat box

pub mod connectivity;
mod error;
pub mod extrema;
pub mod fillhole;
pub mod flat;
pub mod opening;
mod propagate;
pub mod queue;
pub mod reconstruct;

pub use error::{MorphError, MorphResult};

// Re-export neighborhood types
pub use connectivity::{
    Connectivity, Neighborhood, Offset, ScanDirection, neighbor_offsets, partition,
};
pub use queue::{DrainStats, PropagationQueue};

// Re-export the reconstruction driver
pub use reconstruct::{
    ReconstructionOptions, ReconstructionStats, ReconstructionType, reconstruct,
    reconstruct_by_dilation, reconstruct_by_erosion, reconstruct_in_place, validate_marker,
};

// Re-export derived operators
pub use extrema::{h_maxima, h_minima, regional_maxima, regional_minima};
pub use fillhole::{fill_holes, grind_peaks, hole_map};
pub use flat::{dilate_box, erode_box};
pub use opening::{closing_by_reconstruction, opening_by_reconstruction};
