//! Grid - N-dimensional scalar image
//!
//! `Grid<T>` is an N-dimensional array of [`Pixel`] values with a fixed
//! [`Shape`]. Values are mutable, the shape is not.
//!
//! # Examples
//!
//! ```
//! use geodesic_core::Grid;
//!
//! // Create a 4x5 grid of bytes
//! let mut grid = Grid::<u8>::new(&[4, 5]).unwrap();
//!
//! grid.set(&[1, 2], 7).unwrap();
//! assert_eq!(grid.get(&[1, 2]), Some(7));
//! assert_eq!(grid.get(&[4, 0]), None);
//! ```

use crate::error::{Error, Result};
use crate::pixel::Pixel;
use crate::shape::Shape;

/// N-dimensional scalar image
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding: axis 0 is the
/// slowest, the last axis the fastest. The linear index of a coordinate is
/// the dot product with [`Shape::strides`].
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: Pixel> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: Pixel> Grid<T> {
    /// Create a new grid with every value set to `T::ZERO`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `dims` is empty or contains a
    /// zero extent.
    pub fn new(dims: &[usize]) -> Result<Self> {
        Self::new_with_value(dims, T::ZERO)
    }

    /// Create a new grid with every value set to `value`
    pub fn new_with_value(dims: &[usize], value: T) -> Result<Self> {
        let shape = Shape::new(dims)?;
        let data = vec![value; shape.len()];
        Ok(Self { shape, data })
    }

    /// Create a grid from raw row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if `dims` is invalid or the data length does not
    /// match the element count.
    pub fn from_data(dims: &[usize], data: Vec<T>) -> Result<Self> {
        let shape = Shape::new(dims)?;
        if data.len() != shape.len() {
            return Err(Error::DataLengthMismatch {
                dims: dims.to_vec(),
                expected: shape.len(),
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Create a grid by evaluating `f` at every coordinate
    ///
    /// ```
    /// use geodesic_core::Grid;
    ///
    /// let ramp = Grid::<u16>::from_fn(&[2, 3], |c| (c[0] * 10 + c[1]) as u16).unwrap();
    /// assert_eq!(ramp.get(&[1, 2]), Some(12));
    /// ```
    pub fn from_fn(dims: &[usize], mut f: impl FnMut(&[usize]) -> T) -> Result<Self> {
        let shape = Shape::new(dims)?;
        let mut data = Vec::with_capacity(shape.len());
        let mut coords = vec![0usize; shape.ndim()];
        loop {
            data.push(f(&coords));
            if !shape.step_forward(&mut coords) {
                break;
            }
        }
        Ok(Self { shape, data })
    }

    /// Create a 2-D grid from a slice of equal-length rows
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, a row is empty, or rows differ
    /// in length.
    pub fn from_rows(rows: &[&[T]]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if let Some(bad) = rows.iter().find(|r| r.len() != width) {
            return Err(Error::InvalidParameter(format!(
                "row length {} differs from first row length {}",
                bad.len(),
                width
            )));
        }
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self::from_data(&[height, width], data)
    }

    /// Grid shape
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Per-axis extents
    #[inline]
    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    /// Number of axes
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: grids have at least one element
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check whether two grids have identical shapes
    pub fn same_shape<U: Pixel>(&self, other: &Grid<U>) -> bool {
        self.shape == other.shape
    }

    /// Raw row-major data
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable raw row-major data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Value at `coords`, or `None` if out of bounds
    pub fn get(&self, coords: &[usize]) -> Option<T> {
        self.shape.index_of(coords).map(|i| self.data[i])
    }

    /// Set the value at `coords`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `coords` lies outside the grid.
    pub fn set(&mut self, coords: &[usize], value: T) -> Result<()> {
        let index = self
            .shape
            .index_of(coords)
            .ok_or_else(|| Error::IndexOutOfBounds {
                coords: coords.to_vec(),
                dims: self.dims().to_vec(),
            })?;
        self.data[index] = value;
        Ok(())
    }

    /// Value at linear `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn get_linear(&self, index: usize) -> T {
        self.data[index]
    }

    /// Set the value at linear `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn set_linear(&mut self, index: usize, value: T) {
        self.data[index] = value;
    }

    /// Value of the neighbor of `coords` at `offset`, bounds checked
    pub fn get_neighbor(&self, coords: &[usize], offset: &[isize]) -> Option<T> {
        self.shape
            .neighbor_index(coords, offset)
            .map(|i| self.data[i])
    }

    /// Smallest value in the grid
    pub fn min_value(&self) -> T {
        self.data
            .iter()
            .copied()
            .fold(self.data[0], |acc, v| acc.min_of(v))
    }

    /// Largest value in the grid
    pub fn max_value(&self) -> T {
        self.data
            .iter()
            .copied()
            .fold(self.data[0], |acc, v| acc.max_of(v))
    }

    /// Apply `f` to every value, producing a grid of the same shape
    pub fn map<U: Pixel>(&self, f: impl Fn(T) -> U) -> Grid<U> {
        Grid {
            shape: self.shape.clone(),
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Combine two same-shaped grids value by value
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the shapes differ.
    pub fn zip_map<U: Pixel, V: Pixel>(
        &self,
        other: &Grid<U>,
        f: impl Fn(T, U) -> V,
    ) -> Result<Grid<V>> {
        if !self.same_shape(other) {
            return Err(Error::ShapeMismatch {
                expected: self.dims().to_vec(),
                actual: other.dims().to_vec(),
            });
        }
        Ok(Grid {
            shape: self.shape.clone(),
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    /// Overwrite every boundary value with the result of `f(coords, value)`
    ///
    /// Boundary elements are those touching any face of the grid.
    pub fn update_boundary(&mut self, mut f: impl FnMut(&[usize], T) -> T) {
        let mut coords = vec![0usize; self.ndim()];
        let mut index = 0;
        loop {
            if self.shape.is_boundary(&coords) {
                self.data[index] = f(&coords, self.data[index]);
            }
            index += 1;
            if !self.shape.step_forward(&mut coords) {
                break;
            }
        }
    }

    /// Number of elements equal to `value`
    pub fn count_value(&self, value: T) -> usize {
        self.data.iter().filter(|&&v| v == value).count()
    }
}
