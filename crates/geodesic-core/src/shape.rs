//! Grid shape and coordinate arithmetic
//!
//! A [`Shape`] holds the per-axis extents of an N-dimensional grid and the
//! matching row-major strides. Axis 0 varies slowest and the last axis
//! fastest, so increasing linear index is the same as increasing
//! lexicographic coordinate order. All raster scans in this workspace rely
//! on that equivalence.

use crate::error::{Error, Result};

/// Per-axis extents and strides of an N-dimensional grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
    strides: Vec<usize>,
    len: usize,
}

impl Shape {
    /// Create a shape from per-axis extents
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `dims` is empty, any extent is
    /// zero, or the element count overflows `usize`.
    pub fn new(dims: &[usize]) -> Result<Self> {
        if dims.is_empty() || dims.contains(&0) {
            return Err(Error::InvalidDimension(dims.to_vec()));
        }

        let mut strides = vec![0usize; dims.len()];
        let mut len = 1usize;
        for axis in (0..dims.len()).rev() {
            strides[axis] = len;
            len = len
                .checked_mul(dims[axis])
                .ok_or_else(|| Error::InvalidDimension(dims.to_vec()))?;
        }

        Ok(Self {
            dims: dims.to_vec(),
            strides,
            len,
        })
    }

    /// Per-axis extents
    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Row-major strides (in elements)
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of axes
    #[inline]
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a valid shape has at least one element
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check whether `coords` lies inside the shape
    pub fn contains(&self, coords: &[usize]) -> bool {
        coords.len() == self.dims.len() && coords.iter().zip(&self.dims).all(|(&c, &d)| c < d)
    }

    /// Linear index of `coords`, or `None` if out of bounds
    pub fn index_of(&self, coords: &[usize]) -> Option<usize> {
        if !self.contains(coords) {
            return None;
        }
        Some(self.index_of_unchecked(coords))
    }

    /// Linear index of `coords` without bounds checking
    #[inline]
    pub fn index_of_unchecked(&self, coords: &[usize]) -> usize {
        coords.iter().zip(&self.strides).map(|(&c, &s)| c * s).sum()
    }

    /// Write the coordinates of linear `index` into `coords`
    ///
    /// `coords` must have length [`ndim`](Self::ndim).
    pub fn coords_of(&self, index: usize, coords: &mut [usize]) {
        let mut rest = index;
        for (c, &s) in coords.iter_mut().zip(&self.strides) {
            *c = rest / s;
            rest %= s;
        }
    }

    /// Linear index delta produced by a coordinate offset
    pub fn linear_delta(&self, offset: &[isize]) -> isize {
        offset
            .iter()
            .zip(&self.strides)
            .map(|(&o, &s)| o * s as isize)
            .sum()
    }

    /// Check whether `coords + offset` stays inside the shape
    #[inline]
    pub fn offset_in_bounds(&self, coords: &[usize], offset: &[isize]) -> bool {
        coords
            .iter()
            .zip(offset)
            .zip(&self.dims)
            .all(|((&c, &o), &d)| {
                let n = c as isize + o;
                n >= 0 && (n as usize) < d
            })
    }

    /// Neighbor of `coords` at `offset` as a linear index, bounds checked
    pub fn neighbor_index(&self, coords: &[usize], offset: &[isize]) -> Option<usize> {
        if coords.len() != self.dims.len() || offset.len() != self.dims.len() {
            return None;
        }
        if !self.offset_in_bounds(coords, offset) {
            return None;
        }
        let base = self.index_of_unchecked(coords) as isize;
        Some((base + self.linear_delta(offset)) as usize)
    }

    /// Check whether `coords` touches any face of the grid
    pub fn is_boundary(&self, coords: &[usize]) -> bool {
        coords
            .iter()
            .zip(&self.dims)
            .any(|(&c, &d)| c == 0 || c + 1 == d)
    }

    /// Advance `coords` to the next position in lexicographic order
    ///
    /// Returns `false` (leaving `coords` wrapped to all zeros) after the
    /// last position.
    pub fn step_forward(&self, coords: &mut [usize]) -> bool {
        for axis in (0..self.dims.len()).rev() {
            coords[axis] += 1;
            if coords[axis] < self.dims[axis] {
                return true;
            }
            coords[axis] = 0;
        }
        false
    }

    /// Move `coords` to the previous position in lexicographic order
    ///
    /// Returns `false` (leaving `coords` wrapped to the last position) after
    /// the first position.
    pub fn step_backward(&self, coords: &mut [usize]) -> bool {
        for axis in (0..self.dims.len()).rev() {
            if coords[axis] > 0 {
                coords[axis] -= 1;
                return true;
            }
            coords[axis] = self.dims[axis] - 1;
        }
        false
    }

    /// Coordinates of the last element in lexicographic order
    pub fn last_coords(&self) -> Vec<usize> {
        self.dims.iter().map(|&d| d - 1).collect()
    }
}
