//! Boundary-element queue and fixed-point propagation
//!
//! After the two sweeps, the queue holds every element that may still
//! improve a neighbor. Draining it propagates values along the full
//! neighborhood until no element can change, which is the global fixed
//! point of the reconstruction.
//!
//! # Reference
//!
//! L. Vincent, "Morphological Grayscale Reconstruction in Image Analysis:
//! Applications and Efficient Algorithms", IEEE Trans. Image Processing 2(2),
//! 1993 (hybrid algorithm).

use crate::connectivity::Offset;
use crate::reconstruct::ReconstructionType;
use geodesic_core::{Pixel, Shape};
use std::collections::VecDeque;

/// FIFO of linear indices with an is-queued flag per element
///
/// An index is never present twice at the same time; pushing an index that
/// is already waiting is a no-op.
#[derive(Debug, Clone)]
pub struct PropagationQueue {
    fifo: VecDeque<usize>,
    queued: Vec<bool>,
}

impl PropagationQueue {
    /// Create an empty queue for a grid of `len` elements
    pub fn new(len: usize) -> Self {
        Self {
            fifo: VecDeque::new(),
            queued: vec![false; len],
        }
    }

    /// Enqueue `index` unless it is already waiting
    ///
    /// Returns `true` if the index was added.
    pub fn push(&mut self, index: usize) -> bool {
        if self.queued[index] {
            return false;
        }
        self.queued[index] = true;
        self.fifo.push_back(index);
        true
    }

    /// Dequeue the oldest index
    pub fn pop(&mut self) -> Option<usize> {
        let index = self.fifo.pop_front()?;
        self.queued[index] = false;
        Some(index)
    }

    /// Check whether `index` is waiting in the queue
    pub fn is_queued(&self, index: usize) -> bool {
        self.queued[index]
    }

    /// Number of waiting indices
    pub fn len(&self) -> usize {
        self.fifo.len()
    }

    /// True if no index is waiting
    pub fn is_empty(&self) -> bool {
        self.fifo.is_empty()
    }
}

/// Counters collected while draining the queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainStats {
    /// Elements dequeued
    pub pops: usize,
    /// Neighbor values changed
    pub updates: usize,
}

/// Drain `queue` to exhaustion, propagating over the `full` neighborhood
///
/// For each dequeued element p and each neighbor q that is strictly worse
/// than p (below p for dilation) and not yet equal to its mask value, q
/// becomes `clamp(marker[p], mask[q])` and is queued.
pub(crate) fn drain<T: Pixel>(
    marker: &mut [T],
    mask: &[T],
    shape: &Shape,
    full: &[Offset],
    kind: ReconstructionType,
    queue: &mut PropagationQueue,
) -> DrainStats {
    let mut stats = DrainStats::default();
    let mut coords = vec![0usize; shape.ndim()];

    while let Some(p) = queue.pop() {
        stats.pops += 1;
        shape.coords_of(p, &mut coords);
        let interior = !shape.is_boundary(&coords);
        let value = marker[p];

        for offset in full {
            if !interior && !shape.offset_in_bounds(&coords, &offset.delta) {
                continue;
            }
            let q = (p as isize + offset.linear) as usize;
            if kind.precedes(marker[q], value) && marker[q] != mask[q] {
                marker[q] = kind.clamp(value, mask[q]);
                stats.updates += 1;
                queue.push(q);
            }
        }
    }

    stats
}
