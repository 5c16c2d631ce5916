//! geodesic-test - Regression test framework for geodesic reconstruction
//!
//! This crate provides a small regression harness in the style of
//! leptonica's regutils: each check increments an index, failures are
//! recorded instead of panicking, and [`RegParams::cleanup`] reports the
//! outcome.
//!
//! # Usage
//!
//! ```
//! use geodesic_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(4.0, 2.0 + 2.0, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to dump compared grids to stderr

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use geodesic_core::Grid;
use rand::Rng;

/// Build a grid of uniformly random values in `0..=levels`
///
/// Few levels give large plateaus, which exercise the equal-value paths of
/// the propagation.
pub fn random_grid<R: Rng + ?Sized>(
    rng: &mut R,
    dims: &[usize],
    levels: u8,
) -> geodesic_core::Result<Grid<u8>> {
    let len = dims.iter().product();
    let data = (0..len).map(|_| rng.random_range(0..=levels)).collect();
    Grid::from_data(dims, data)
}

/// Build a random marker no greater than `mask`
pub fn random_marker_below<R: Rng + ?Sized>(rng: &mut R, mask: &Grid<u8>) -> Grid<u8> {
    let mut marker = mask.clone();
    for v in marker.data_mut() {
        *v = rng.random_range(0..=*v);
    }
    marker
}
