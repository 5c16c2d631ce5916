//! Neighbor connectivity
//!
//! Enumerates the neighbor offsets of an element in an N-dimensional grid
//! and splits them into the halves a raster scan has already visited
//! (causal) and not yet visited (anti-causal).
//!
//! - **Face** connectivity: the 2·N neighbors sharing a face
//!   (4-way in 2-D, 6-way in 3-D)
//! - **Full** connectivity: all 3^N − 1 neighbors sharing a face, edge or
//!   vertex (8-way in 2-D, 26-way in 3-D)

use geodesic_core::Shape;

/// Which neighboring elements count as adjacent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Axis-aligned neighbors only
    #[default]
    Face,
    /// Face, edge and vertex neighbors
    Full,
}

impl Connectivity {
    /// Build from a "fully connected" flag
    pub fn from_fully_connected(fully_connected: bool) -> Self {
        if fully_connected { Self::Full } else { Self::Face }
    }

    /// Number of neighbors in `ndim` dimensions
    pub fn neighbor_count(self, ndim: usize) -> usize {
        match self {
            Self::Face => 2 * ndim,
            Self::Full => 3usize.pow(ndim as u32) - 1,
        }
    }
}

/// Raster scan direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Increasing linear index (lexicographic order)
    Forward,
    /// Decreasing linear index (anti-raster order)
    Backward,
}

/// A neighbor offset with its linear index delta
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offset {
    /// Per-axis displacement, each component in {-1, 0, 1}
    pub delta: Vec<isize>,
    /// Displacement in linear index for the grid's strides
    pub linear: isize,
}

impl Offset {
    /// Offset with no linear delta attached yet
    pub fn new(delta: Vec<isize>) -> Self {
        Self { delta, linear: 0 }
    }

    /// True if a forward raster scan visits the neighbor before the center
    ///
    /// That is the case when the first non-zero component is negative.
    pub fn precedes_in_raster_order(&self) -> bool {
        self.delta.iter().find(|&&d| d != 0).is_some_and(|&d| d < 0)
    }
}

/// Enumerate neighbor offsets in lexicographic order
///
/// The zero offset is never included. The result depends only on the
/// arguments.
pub fn neighbor_offsets(ndim: usize, connectivity: Connectivity) -> Vec<Offset> {
    let mut offsets = Vec::with_capacity(connectivity.neighbor_count(ndim));
    if ndim == 0 {
        return offsets;
    }

    let mut delta = vec![-1isize; ndim];
    loop {
        let nonzero = delta.iter().filter(|&&d| d != 0).count();
        let keep = match connectivity {
            Connectivity::Face => nonzero == 1,
            Connectivity::Full => nonzero > 0,
        };
        if keep {
            offsets.push(Offset::new(delta.clone()));
        }

        // Odometer increment over {-1, 0, 1}^ndim
        let mut axis = ndim;
        loop {
            if axis == 0 {
                return offsets;
            }
            axis -= 1;
            if delta[axis] < 1 {
                delta[axis] += 1;
                break;
            }
            delta[axis] = -1;
        }
    }
}

/// Split offsets into (causal, anti-causal) halves for a scan direction
///
/// Causal offsets point at neighbors the scan has already visited when it
/// reaches the center element.
pub fn partition(offsets: &[Offset], direction: ScanDirection) -> (Vec<Offset>, Vec<Offset>) {
    let (before, after): (Vec<Offset>, Vec<Offset>) = offsets
        .iter()
        .cloned()
        .partition(|o| o.precedes_in_raster_order());
    match direction {
        ScanDirection::Forward => (before, after),
        ScanDirection::Backward => (after, before),
    }
}

/// Neighbor offsets precomputed for one grid shape
#[derive(Debug, Clone)]
pub struct Neighborhood {
    /// Every neighbor
    pub full: Vec<Offset>,
    /// Neighbors visited before the center in a forward scan
    pub causal: Vec<Offset>,
    /// Neighbors visited before the center in a backward scan
    pub anticausal: Vec<Offset>,
}

impl Neighborhood {
    /// Build the offset sets for `shape`, with linear deltas filled in
    pub fn new(shape: &Shape, connectivity: Connectivity) -> Self {
        let mut full = neighbor_offsets(shape.ndim(), connectivity);
        for offset in &mut full {
            offset.linear = shape.linear_delta(&offset.delta);
        }
        let (causal, anticausal) = partition(&full, ScanDirection::Forward);
        Self {
            full,
            causal,
            anticausal,
        }
    }
}
