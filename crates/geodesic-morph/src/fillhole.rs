//! Grayscale hole filling and peak grinding
//!
//! A hole is a regional minimum that does not touch the grid boundary.
//! [`fill_holes`] raises every hole to the lowest level at which it would
//! spill over toward the boundary, leaving everything else unchanged.
//! [`grind_peaks`] is the dual for regional maxima.
//!
//! Both build a marker that equals the input on the boundary and the
//! extreme value inside, then reconstruct it against the input.
//!
//! # Reference
//!
//! P. Soille, "Morphological Image Analysis", 2nd ed., Springer 2003,
//! section 6.3.7 (fillhole).

use crate::connectivity::Connectivity;
use crate::error::MorphResult;
use crate::reconstruct::{ReconstructionOptions, ReconstructionType, reconstruct_in_place};
use geodesic_core::{Grid, Pixel};

/// Marker equal to `grid` on the boundary and `fill` in the interior
fn boundary_marker<T: Pixel>(grid: &Grid<T>, fill: T) -> Grid<T> {
    let mut marker = grid.map(|_| fill);
    let shape = grid.shape();
    marker.update_boundary(|coords, _| grid.get_linear(shape.index_of_unchecked(coords)));
    marker
}

fn reconstruct_from_boundary<T: Pixel>(
    grid: &Grid<T>,
    connectivity: Connectivity,
    kind: ReconstructionType,
) -> MorphResult<Grid<T>> {
    let mut marker = boundary_marker(grid, kind.identity());
    // Valid by construction
    let options = ReconstructionOptions::new(kind)
        .with_connectivity(connectivity)
        .with_precondition_check(false);
    reconstruct_in_place(&mut marker, grid, &options)?;
    Ok(marker)
}

/// Fill regional minima that are not connected to the grid boundary
///
/// # Examples
///
/// ```
/// use geodesic_core::Grid;
/// use geodesic_morph::{Connectivity, fill_holes};
///
/// let pit = Grid::<u8>::from_rows(&[
///     &[5, 5, 5],
///     &[5, 1, 5],
///     &[5, 5, 5],
/// ]).unwrap();
/// let filled = fill_holes(&pit, Connectivity::Face).unwrap();
/// assert_eq!(filled.get(&[1, 1]), Some(5));
/// ```
pub fn fill_holes<T: Pixel>(grid: &Grid<T>, connectivity: Connectivity) -> MorphResult<Grid<T>> {
    reconstruct_from_boundary(grid, connectivity, ReconstructionType::Erosion)
}

/// Remove regional maxima that are not connected to the grid boundary
pub fn grind_peaks<T: Pixel>(grid: &Grid<T>, connectivity: Connectivity) -> MorphResult<Grid<T>> {
    reconstruct_from_boundary(grid, connectivity, ReconstructionType::Dilation)
}

/// Binary map (1/0) of the elements raised by [`fill_holes`]
///
/// Marks the interior minima that do not reach the boundary.
pub fn hole_map<T: Pixel>(grid: &Grid<T>, connectivity: Connectivity) -> MorphResult<Grid<u8>> {
    let filled = fill_holes(grid, connectivity)?;
    Ok(filled.zip_map(grid, |f, g| u8::from(f > g))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_marker() {
        let grid = Grid::<u8>::from_fn(&[3, 4], |c| (c[0] * 4 + c[1]) as u8).unwrap();
        let marker = boundary_marker(&grid, 99);
        assert_eq!(marker.get(&[1, 1]), Some(99));
        assert_eq!(marker.get(&[1, 2]), Some(99));
        assert_eq!(marker.get(&[0, 3]), Some(3));
        assert_eq!(marker.get(&[2, 1]), Some(9));
    }

    #[test]
    fn test_fill_holes_spill_level() {
        // The basin spills at 3 through the gap in its rim
        let grid = Grid::<u8>::from_rows(&[
            &[9, 9, 9, 9, 9],
            &[9, 1, 2, 3, 3],
            &[9, 9, 9, 9, 9],
        ])
        .unwrap();
        let filled = fill_holes(&grid, Connectivity::Face).unwrap();
        assert_eq!(filled.get(&[1, 1]), Some(3));
        assert_eq!(filled.get(&[1, 2]), Some(3));
        assert_eq!(filled.get(&[1, 4]), Some(3));
        assert_eq!(filled.get(&[0, 0]), Some(9));
    }

    #[test]
    fn test_grind_peaks_flattens_interior_peak() {
        let grid = Grid::<i16>::from_rows(&[&[0, 0, 0, 0], &[0, 7, 6, 0], &[0, 0, 0, 0]]).unwrap();
        let ground = grind_peaks(&grid, Connectivity::Full).unwrap();
        assert!(ground.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_single_row_is_all_boundary() {
        let grid = Grid::<u8>::from_data(&[1, 5], vec![4, 1, 0, 1, 4]).unwrap();
        assert_eq!(fill_holes(&grid, Connectivity::Full).unwrap(), grid);
        assert_eq!(hole_map(&grid, Connectivity::Full).unwrap().count_value(1), 0);
    }
}
