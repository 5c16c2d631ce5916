//! H-extrema and regional extrema
//!
//! - [`h_maxima`] suppresses every regional maximum whose dynamic (height
//!   above the surrounding saddle) is at most `h`.
//! - [`h_minima`] does the same for regional minima.
//! - [`regional_maxima`] / [`regional_minima`] mark the plateaus from which
//!   no neighbor is higher (resp. lower).
//!
//! Regional extrema compare values only, so they are exact for every pixel
//! type. A flat grid is a single plateau with no outside neighbor and is
//! reported as both a regional maximum and a regional minimum.

use crate::connectivity::{Connectivity, neighbor_offsets};
use crate::error::{MorphError, MorphResult};
use crate::reconstruct::{ReconstructionOptions, ReconstructionType, reconstruct_in_place};
use geodesic_core::{Grid, Pixel};

fn check_height<T: Pixel>(h: T) -> MorphResult<()> {
    // Rejects NaN as well as negative heights
    if !(h >= T::ZERO) {
        return Err(MorphError::InvalidParameters(format!(
            "height must be non-negative, got {h:?}"
        )));
    }
    Ok(())
}

fn shifted_reconstruction<T: Pixel>(
    grid: &Grid<T>,
    h: T,
    kind: ReconstructionType,
    connectivity: Connectivity,
) -> MorphResult<Grid<T>> {
    let mut marker = match kind {
        ReconstructionType::Dilation => grid.map(|v| v.saturating_sub(h)),
        ReconstructionType::Erosion => grid.map(|v| v.saturating_add(h)),
    };
    let options = ReconstructionOptions::new(kind)
        .with_connectivity(connectivity)
        .with_precondition_check(false);
    reconstruct_in_place(&mut marker, grid, &options)?;
    Ok(marker)
}

/// H-maxima transform: reconstruction by dilation of `grid - h` under `grid`
///
/// # Errors
///
/// Returns [`MorphError::InvalidParameters`] if `h` is negative or NaN.
pub fn h_maxima<T: Pixel>(
    grid: &Grid<T>,
    h: T,
    connectivity: Connectivity,
) -> MorphResult<Grid<T>> {
    check_height(h)?;
    shifted_reconstruction(grid, h, ReconstructionType::Dilation, connectivity)
}

/// H-minima transform: reconstruction by erosion of `grid + h` above `grid`
///
/// # Errors
///
/// Returns [`MorphError::InvalidParameters`] if `h` is negative or NaN.
pub fn h_minima<T: Pixel>(
    grid: &Grid<T>,
    h: T,
    connectivity: Connectivity,
) -> MorphResult<Grid<T>> {
    check_height(h)?;
    shifted_reconstruction(grid, h, ReconstructionType::Erosion, connectivity)
}

/// Binary map (1/0) of regional extrema for the order `kind` runs under
///
/// The marker keeps `grid` at every element with a strictly better
/// neighbor (higher for maxima) and the combine identity elsewhere.
/// Reconstruction spreads those values over every plateau that is not an
/// extremum, so the extrema are exactly the elements left below `grid`.
fn regional_extrema<T: Pixel>(
    grid: &Grid<T>,
    kind: ReconstructionType,
    connectivity: Connectivity,
) -> MorphResult<Grid<u8>> {
    if grid.min_value() == grid.max_value() {
        return Ok(grid.map(|_| 1u8));
    }

    let shape = grid.shape();
    let offsets = neighbor_offsets(shape.ndim(), connectivity);
    let values = grid.data();
    let fill = kind.identity();
    let mut coords = vec![0usize; shape.ndim()];
    let seeds = (0..shape.len())
        .map(|p| {
            shape.coords_of(p, &mut coords);
            let escapes = offsets.iter().any(|o| {
                shape
                    .neighbor_index(&coords, &o.delta)
                    .is_some_and(|q| kind.precedes(values[p], values[q]))
            });
            if escapes { values[p] } else { fill }
        })
        .collect();

    let mut marker = Grid::from_data(grid.dims(), seeds)?;
    let options = ReconstructionOptions::new(kind)
        .with_connectivity(connectivity)
        .with_precondition_check(false);
    reconstruct_in_place(&mut marker, grid, &options)?;
    Ok(grid.zip_map(&marker, |g, r| u8::from(g != r))?)
}

/// Binary map (1/0) of regional maxima
pub fn regional_maxima<T: Pixel>(
    grid: &Grid<T>,
    connectivity: Connectivity,
) -> MorphResult<Grid<u8>> {
    regional_extrema(grid, ReconstructionType::Dilation, connectivity)
}

/// Binary map (1/0) of regional minima
///
/// # Examples
///
/// ```
/// use geodesic_core::Grid;
/// use geodesic_morph::{Connectivity, regional_minima};
///
/// let grid = Grid::<u8>::from_data(&[7], vec![0, 3, 5, 2, 2, 4, 6]).unwrap();
/// let minima = regional_minima(&grid, Connectivity::Face).unwrap();
/// assert_eq!(minima.data(), &[1, 0, 0, 1, 1, 0, 0]);
/// ```
pub fn regional_minima<T: Pixel>(
    grid: &Grid<T>,
    connectivity: Connectivity,
) -> MorphResult<Grid<u8>> {
    regional_extrema(grid, ReconstructionType::Erosion, connectivity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_peaks() -> Grid<u8> {
        Grid::<u8>::from_data(&[9], vec![0, 4, 0, 0, 9, 8, 9, 0, 0]).unwrap()
    }

    #[test]
    fn test_h_maxima_removes_shallow_peaks() {
        let out = h_maxima(&two_peaks(), 5, Connectivity::Face).unwrap();
        // The 4-peak disappears; the twin 9-peaks merge into one plateau at 4
        assert_eq!(out.data(), &[0, 0, 0, 0, 4, 4, 4, 0, 0]);
    }

    #[test]
    fn test_h_maxima_zero_is_identity() {
        let grid = two_peaks();
        assert_eq!(h_maxima(&grid, 0, Connectivity::Face).unwrap(), grid);
    }

    #[test]
    fn test_h_minima_fills_shallow_pits() {
        let grid = Grid::<i32>::from_data(&[5], vec![10, 7, 10, 2, 10]).unwrap();
        let out = h_minima(&grid, 4, Connectivity::Face).unwrap();
        assert_eq!(out.data(), &[10, 10, 10, 6, 10]);
    }

    #[test]
    fn test_negative_height_rejected() {
        let grid = Grid::<i32>::new(&[3]).unwrap();
        assert!(h_maxima(&grid, -1, Connectivity::Face).is_err());
        let fgrid = Grid::<f64>::new(&[3]).unwrap();
        assert!(h_minima(&fgrid, f64::NAN, Connectivity::Face).is_err());
    }

    #[test]
    fn test_regional_maxima_plateaus() {
        let maxima = regional_maxima(&two_peaks(), Connectivity::Face).unwrap();
        assert_eq!(maxima.data(), &[0, 1, 0, 0, 1, 0, 1, 0, 0]);
    }

    #[test]
    fn test_regional_minima_sub_unit_float() {
        let grid = Grid::<f64>::from_data(&[3], vec![1.0, 0.25, 1.0]).unwrap();
        let minima = regional_minima(&grid, Connectivity::Face).unwrap();
        assert_eq!(minima.data(), &[0, 1, 0]);
    }

    #[test]
    fn test_flat_grid_is_both_extrema_at_any_level() {
        for level in [0u8, 5, 255] {
            let grid = Grid::<u8>::new_with_value(&[3, 3], level).unwrap();
            let maxima = regional_maxima(&grid, Connectivity::Face).unwrap();
            let minima = regional_minima(&grid, Connectivity::Face).unwrap();
            assert_eq!(maxima.count_value(1), 9, "maxima at level {level}");
            assert_eq!(minima.count_value(1), 9, "minima at level {level}");
        }
    }
}
