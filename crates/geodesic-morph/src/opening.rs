//! Opening and closing by reconstruction
//!
//! A flat box erosion removes every bright structure narrower than the box.
//! Reconstructing the eroded grid by dilation under the original then
//! restores the surviving structures exactly, without the shape distortion
//! a plain opening introduces. Closing by reconstruction is the dual for
//! dark structures.

use crate::connectivity::Connectivity;
use crate::error::MorphResult;
use crate::flat::{dilate_box, erode_box};
use crate::reconstruct::{ReconstructionOptions, reconstruct_in_place};
use geodesic_core::{Grid, Pixel};

/// Erode with a box of half-width `radius`, then reconstruct by dilation
///
/// # Examples
///
/// ```
/// use geodesic_core::Grid;
/// use geodesic_morph::{Connectivity, opening_by_reconstruction};
///
/// // A one-wide spike next to a three-wide block
/// let grid = Grid::<u8>::from_data(&[8], vec![0, 7, 0, 0, 5, 5, 5, 0]).unwrap();
/// let opened = opening_by_reconstruction(&grid, 1, Connectivity::Face).unwrap();
/// assert_eq!(opened.data(), &[0, 0, 0, 0, 5, 5, 5, 0]);
/// ```
pub fn opening_by_reconstruction<T: Pixel>(
    grid: &Grid<T>,
    radius: usize,
    connectivity: Connectivity,
) -> MorphResult<Grid<T>> {
    let mut marker = erode_box(grid, radius)?;
    let options = ReconstructionOptions::dilation()
        .with_connectivity(connectivity)
        .with_precondition_check(false);
    reconstruct_in_place(&mut marker, grid, &options)?;
    Ok(marker)
}

/// Dilate with a box of half-width `radius`, then reconstruct by erosion
pub fn closing_by_reconstruction<T: Pixel>(
    grid: &Grid<T>,
    radius: usize,
    connectivity: Connectivity,
) -> MorphResult<Grid<T>> {
    let mut marker = dilate_box(grid, radius)?;
    let options = ReconstructionOptions::erosion()
        .with_connectivity(connectivity)
        .with_precondition_check(false);
    reconstruct_in_place(&mut marker, grid, &options)?;
    Ok(marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_keeps_wide_structure_shape() {
        // An L-shaped block survives intact; the lone bright pixel does not
        let grid = Grid::<u8>::from_rows(&[
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 8, 8, 8, 0, 0, 0],
            &[0, 8, 8, 8, 0, 9, 0],
            &[0, 8, 8, 8, 8, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
        ])
        .unwrap();
        let opened = opening_by_reconstruction(&grid, 1, Connectivity::Face).unwrap();
        assert_eq!(opened.get(&[3, 4]), Some(8));
        assert_eq!(opened.get(&[2, 5]), Some(0));
        assert_eq!(opened.count_value(8), 10);
    }

    #[test]
    fn test_closing_fills_narrow_gap() {
        let grid = Grid::<i32>::from_data(&[7], vec![6, 6, 6, 1, 6, 6, 6]).unwrap();
        let closed = closing_by_reconstruction(&grid, 1, Connectivity::Face).unwrap();
        assert!(closed.data().iter().all(|&v| v == 6));
    }

    #[test]
    fn test_zero_radius_is_identity() {
        let grid = Grid::<u16>::from_fn(&[4, 3], |c| (c[0] * 7 + c[1] * 3) as u16 % 5).unwrap();
        let opened = opening_by_reconstruction(&grid, 0, Connectivity::Full).unwrap();
        let closed = closing_by_reconstruction(&grid, 0, Connectivity::Full).unwrap();
        assert_eq!(opened, grid);
        assert_eq!(closed, grid);
    }
}
