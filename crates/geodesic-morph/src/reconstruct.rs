//! Grayscale morphological reconstruction
//!
//! Reconstruction by dilation raises a marker grid toward a mask grid,
//! spreading each value through every connected path whose mask lets it
//! pass, until no element can change. Reconstruction by erosion is the dual:
//! it lowers the marker toward the mask.
//!
//! Both are the same algorithm, parameterized by a [`ReconstructionType`]:
//!
//! 1. Validate shapes (and optionally the marker/mask ordering)
//! 2. Forward raster sweep over causal neighbors
//! 3. Backward raster sweep over anti-causal neighbors, seeding a queue
//! 4. Drain the queue over the full neighborhood to the fixed point
//!
//! # Reference
//!
//! P. Soille, "Morphological Image Analysis", 2nd ed., Springer 2003,
//! chapter 6 (geodesic transformations).

use crate::connectivity::{Connectivity, Neighborhood};
use crate::error::{MorphError, MorphResult};
use crate::propagate::{backward_sweep, forward_sweep};
use crate::queue::{PropagationQueue, drain};
use geodesic_core::{Grid, Pixel};

/// Direction of a reconstruction
///
/// Selects the order relation the whole algorithm runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReconstructionType {
    /// Marker is raised toward the mask (marker <= mask)
    #[default]
    Dilation,
    /// Marker is lowered toward the mask (marker >= mask)
    Erosion,
}

impl ReconstructionType {
    /// Combine two values: max for dilation, min for erosion
    #[inline]
    pub fn combine<T: Pixel>(self, a: T, b: T) -> T {
        match self {
            Self::Dilation => a.max_of(b),
            Self::Erosion => a.min_of(b),
        }
    }

    /// Limit `value` by `mask`: min for dilation, max for erosion
    #[inline]
    pub fn clamp<T: Pixel>(self, value: T, mask: T) -> T {
        match self {
            Self::Dilation => value.min_of(mask),
            Self::Erosion => value.max_of(mask),
        }
    }

    /// True if `a` is strictly behind `b` in propagation order
    ///
    /// `a < b` for dilation, `a > b` for erosion.
    #[inline]
    pub fn precedes<T: Pixel>(self, a: T, b: T) -> bool {
        match self {
            Self::Dilation => a < b,
            Self::Erosion => a > b,
        }
    }

    /// True if `marker` lies on the allowed side of `mask`
    #[inline]
    pub fn respects<T: Pixel>(self, marker: T, mask: T) -> bool {
        match self {
            Self::Dilation => marker <= mask,
            Self::Erosion => marker >= mask,
        }
    }

    /// Neutral element of [`combine`](Self::combine)
    ///
    /// Stands for "no value" in markers and for positions outside the grid.
    pub fn identity<T: Pixel>(self) -> T {
        match self {
            Self::Dilation => T::MIN_VALUE,
            Self::Erosion => T::MAX_VALUE,
        }
    }
}

/// Options for reconstruction
#[derive(Debug, Clone)]
pub struct ReconstructionOptions {
    /// Dilation or erosion
    pub reconstruction_type: ReconstructionType,
    /// Neighbor connectivity
    pub connectivity: Connectivity,
    /// Verify marker/mask ordering before mutating anything
    pub check_precondition: bool,
}

impl Default for ReconstructionOptions {
    fn default() -> Self {
        Self {
            reconstruction_type: ReconstructionType::Dilation,
            connectivity: Connectivity::Face,
            check_precondition: true,
        }
    }
}

impl ReconstructionOptions {
    /// Create new options for the given direction
    pub fn new(reconstruction_type: ReconstructionType) -> Self {
        Self {
            reconstruction_type,
            ..Self::default()
        }
    }

    /// Options for reconstruction by dilation
    pub fn dilation() -> Self {
        Self::new(ReconstructionType::Dilation)
    }

    /// Options for reconstruction by erosion
    pub fn erosion() -> Self {
        Self::new(ReconstructionType::Erosion)
    }

    /// Set the connectivity
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Use full (true) or face (false) connectivity
    pub fn with_fully_connected(mut self, fully_connected: bool) -> Self {
        self.connectivity = Connectivity::from_fully_connected(fully_connected);
        self
    }

    /// Enable or disable the marker/mask ordering check
    pub fn with_precondition_check(mut self, check: bool) -> Self {
        self.check_precondition = check;
        self
    }
}

/// Work counters from one reconstruction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconstructionStats {
    /// Elements changed by the forward sweep
    pub forward_updates: usize,
    /// Elements changed by the backward sweep
    pub backward_updates: usize,
    /// Elements queued by the backward sweep
    pub seeds: usize,
    /// Elements dequeued while draining
    pub pops: usize,
    /// Elements changed while draining
    pub queue_updates: usize,
}

impl ReconstructionStats {
    /// Total number of value changes
    pub fn total_updates(&self) -> usize {
        self.forward_updates + self.backward_updates + self.queue_updates
    }
}

/// Check that `marker` and `mask` can be reconstructed together
///
/// # Errors
///
/// - [`MorphError::ShapeMismatch`] if the shapes differ
/// - [`MorphError::PreconditionViolation`] at the first element where the
///   marker is above the mask (dilation) or below it (erosion)
pub fn validate_marker<T: Pixel>(
    marker: &Grid<T>,
    mask: &Grid<T>,
    reconstruction_type: ReconstructionType,
) -> MorphResult<()> {
    check_shapes(marker, mask)?;
    let violation = marker
        .data()
        .iter()
        .zip(mask.data())
        .position(|(&m, &k)| !reconstruction_type.respects(m, k));

    if let Some(index) = violation {
        let mut coords = vec![0usize; marker.ndim()];
        marker.shape().coords_of(index, &mut coords);
        return Err(MorphError::PreconditionViolation {
            coords,
            marker: format!("{:?}", marker.get_linear(index)),
            mask: format!("{:?}", mask.get_linear(index)),
        });
    }
    Ok(())
}

fn check_shapes<T: Pixel>(marker: &Grid<T>, mask: &Grid<T>) -> MorphResult<()> {
    if !marker.same_shape(mask) {
        return Err(MorphError::ShapeMismatch {
            marker: marker.dims().to_vec(),
            mask: mask.dims().to_vec(),
        });
    }
    Ok(())
}

/// Reconstruct `marker` under `mask` in place
///
/// On success `marker` holds the reconstruction. On error nothing has been
/// modified.
///
/// With `check_precondition` disabled, a marker on the wrong side of the
/// mask is not detected and the result at such elements is unspecified
/// (though the call still terminates).
///
/// # Errors
///
/// See [`validate_marker`].
pub fn reconstruct_in_place<T: Pixel>(
    marker: &mut Grid<T>,
    mask: &Grid<T>,
    options: &ReconstructionOptions,
) -> MorphResult<ReconstructionStats> {
    let kind = options.reconstruction_type;
    if options.check_precondition {
        validate_marker(marker, mask, kind)?;
    } else {
        check_shapes(marker, mask)?;
    }

    let shape = marker.shape().clone();
    let nbhd = Neighborhood::new(&shape, options.connectivity);
    tracing::debug!(
        "reconstruction by {:?}: dims {:?}, {:?} connectivity ({} neighbors)",
        kind,
        shape.dims(),
        options.connectivity,
        nbhd.full.len()
    );

    let mask = mask.data();
    let data = marker.data_mut();
    let mut queue = PropagationQueue::new(shape.len());
    let mut stats = ReconstructionStats {
        forward_updates: forward_sweep(data, mask, &shape, &nbhd.causal, kind),
        ..Default::default()
    };
    stats.backward_updates =
        backward_sweep(data, mask, &shape, &nbhd.anticausal, kind, &mut queue);
    stats.seeds = queue.len();
    tracing::trace!(
        "sweeps done: {} forward updates, {} backward updates, {} seeds",
        stats.forward_updates,
        stats.backward_updates,
        stats.seeds
    );

    let drained = drain(data, mask, &shape, &nbhd.full, kind, &mut queue);
    stats.pops = drained.pops;
    stats.queue_updates = drained.updates;
    tracing::debug!(
        "reconstruction converged: {} pops, {} queue updates, {} total updates",
        stats.pops,
        stats.queue_updates,
        stats.total_updates()
    );

    Ok(stats)
}

/// Reconstruct a copy of `marker` under `mask`
///
/// # Errors
///
/// See [`validate_marker`].
pub fn reconstruct<T: Pixel>(
    marker: &Grid<T>,
    mask: &Grid<T>,
    options: &ReconstructionOptions,
) -> MorphResult<Grid<T>> {
    let mut output = marker.clone();
    reconstruct_in_place(&mut output, mask, options)?;
    Ok(output)
}

/// Reconstruction by dilation of `marker` under `mask`
///
/// Requires `marker <= mask` everywhere.
///
/// # Examples
///
/// ```
/// use geodesic_core::Grid;
/// use geodesic_morph::{Connectivity, reconstruct_by_dilation};
///
/// let mask = Grid::<u8>::from_data(&[5], vec![4, 4, 0, 6, 6]).unwrap();
/// let marker = Grid::<u8>::from_data(&[5], vec![4, 0, 0, 0, 0]).unwrap();
///
/// let out = reconstruct_by_dilation(&marker, &mask, Connectivity::Face).unwrap();
/// assert_eq!(out.data(), &[4, 4, 0, 0, 0]);
/// ```
pub fn reconstruct_by_dilation<T: Pixel>(
    marker: &Grid<T>,
    mask: &Grid<T>,
    connectivity: Connectivity,
) -> MorphResult<Grid<T>> {
    let options = ReconstructionOptions::dilation().with_connectivity(connectivity);
    reconstruct(marker, mask, &options)
}

/// Reconstruction by erosion of `marker` above `mask`
///
/// Requires `marker >= mask` everywhere.
pub fn reconstruct_by_erosion<T: Pixel>(
    marker: &Grid<T>,
    mask: &Grid<T>,
    connectivity: Connectivity,
) -> MorphResult<Grid<T>> {
    let options = ReconstructionOptions::erosion().with_connectivity(connectivity);
    reconstruct(marker, mask, &options)
}
