//! Flat box erosion and dilation
//!
//! Erosion and dilation of an N-dimensional grid by a flat hyper-rectangular
//! structuring element of half-width `radius` along every axis. The box is
//! separable, so each axis is filtered in turn with a 1-D min or max window.
//! Window positions outside the grid are ignored.
//!
//! Each 1-D pass uses the van Herk / Gil-Werman running extrema, which cost
//! three comparisons per element whatever the radius.

use crate::error::{MorphError, MorphResult};
use crate::reconstruct::ReconstructionType;
use geodesic_core::{Grid, Pixel};

/// Erode `grid` with a box of half-width `radius` (side `2 * radius + 1`)
///
/// Each output element is the minimum over the box centered on it.
pub fn erode_box<T: Pixel>(grid: &Grid<T>, radius: usize) -> MorphResult<Grid<T>> {
    box_filter(grid, radius, ReconstructionType::Erosion)
}

/// Dilate `grid` with a box of half-width `radius` (side `2 * radius + 1`)
///
/// Each output element is the maximum over the box centered on it.
pub fn dilate_box<T: Pixel>(grid: &Grid<T>, radius: usize) -> MorphResult<Grid<T>> {
    box_filter(grid, radius, ReconstructionType::Dilation)
}

/// Block-wise running extrema of `line` for blocks of `width` elements
///
/// `prefix[i]` combines from the start of i's block up to i, `suffix[i]`
/// from i to the end of its block (or of the line).
fn running_extrema<T: Pixel>(
    line: &[T],
    width: usize,
    kind: ReconstructionType,
    prefix: &mut Vec<T>,
    suffix: &mut Vec<T>,
) {
    prefix.clear();
    prefix.extend_from_slice(line);
    suffix.clear();
    suffix.extend_from_slice(line);

    for i in 1..line.len() {
        if i % width != 0 {
            prefix[i] = kind.combine(prefix[i - 1], line[i]);
        }
    }
    for i in (0..line.len().saturating_sub(1)).rev() {
        if (i + 1) % width != 0 {
            suffix[i] = kind.combine(suffix[i + 1], line[i]);
        }
    }
}

fn box_filter<T: Pixel>(
    grid: &Grid<T>,
    radius: usize,
    kind: ReconstructionType,
) -> MorphResult<Grid<T>> {
    if radius > isize::MAX as usize / 2 {
        return Err(MorphError::InvalidParameters(format!(
            "box radius {radius} too large"
        )));
    }

    let mut current = grid.clone();
    if radius == 0 {
        return Ok(current);
    }

    let shape = grid.shape().clone();
    let identity = kind.identity::<T>();
    let mut padded = Vec::new();
    let mut prefix = Vec::new();
    let mut suffix = Vec::new();
    for axis in 0..shape.ndim() {
        let extent = shape.dims()[axis];
        if extent == 1 {
            continue;
        }
        let stride = shape.strides()[axis];
        // A window wider than the line sees the whole line
        let r = radius.min(extent - 1);
        let width = 2 * r + 1;
        let data = current.data_mut();

        for start in (0..shape.len()).filter(|i| (i / stride) % extent == 0) {
            padded.clear();
            padded.resize(r, identity);
            padded.extend((0..extent).map(|k| data[start + k * stride]));
            padded.resize(extent + 2 * r, identity);

            running_extrema(&padded, width, kind, &mut prefix, &mut suffix);
            for k in 0..extent {
                data[start + k * stride] = kind.combine(suffix[k], prefix[k + width - 1]);
            }
        }
    }
    Ok(current)
}
