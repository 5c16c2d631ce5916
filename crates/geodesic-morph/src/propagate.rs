//! Raster and anti-raster propagation sweeps
//!
//! The two sweeps push marker values as far as single-pass local
//! propagation allows. Each element takes the combination of its own value
//! and its causal neighbors' values, clamped by the mask. The backward
//! sweep also seeds the propagation queue with every element that can still
//! improve an anti-causal neighbor.

use crate::connectivity::Offset;
use crate::queue::PropagationQueue;
use crate::reconstruct::ReconstructionType;
use geodesic_core::{Pixel, Shape};

#[inline]
fn neighbor(p: usize, offset: &Offset) -> usize {
    (p as isize + offset.linear) as usize
}

/// Combine the value at `p` with its in-bounds `causal` neighbors
#[inline]
fn causal_value<T: Pixel>(
    marker: &[T],
    shape: &Shape,
    coords: &[usize],
    p: usize,
    causal: &[Offset],
    kind: ReconstructionType,
) -> T {
    let interior = !shape.is_boundary(coords);
    causal
        .iter()
        .filter(|o| interior || shape.offset_in_bounds(coords, &o.delta))
        .fold(marker[p], |acc, o| kind.combine(acc, marker[neighbor(p, o)]))
}

/// Sweep in increasing linear order, returning the number of updated elements
pub(crate) fn forward_sweep<T: Pixel>(
    marker: &mut [T],
    mask: &[T],
    shape: &Shape,
    causal: &[Offset],
    kind: ReconstructionType,
) -> usize {
    let mut updated = 0;
    let mut coords = vec![0usize; shape.ndim()];
    let mut p = 0;
    loop {
        let value = kind.clamp(causal_value(marker, shape, &coords, p, causal, kind), mask[p]);
        if value != marker[p] {
            marker[p] = value;
            updated += 1;
        }

        p += 1;
        if !shape.step_forward(&mut coords) {
            break;
        }
    }
    updated
}

/// Sweep in decreasing linear order and seed `queue`
///
/// `anticausal` holds the neighbors a backward scan visits before the center,
/// so their values are final for this sweep when the center is reached. The
/// center is queued when one of them is strictly below it (dilation) and
/// strictly below its own mask value, since that neighbor can still be
/// raised. Returns the number of updated elements.
pub(crate) fn backward_sweep<T: Pixel>(
    marker: &mut [T],
    mask: &[T],
    shape: &Shape,
    anticausal: &[Offset],
    kind: ReconstructionType,
    queue: &mut PropagationQueue,
) -> usize {
    let mut updated = 0;
    let mut coords = shape.last_coords();
    let mut p = shape.len() - 1;
    loop {
        let value = kind.clamp(
            causal_value(marker, shape, &coords, p, anticausal, kind),
            mask[p],
        );
        if value != marker[p] {
            marker[p] = value;
            updated += 1;
        }

        let interior = !shape.is_boundary(&coords);
        let seeds = anticausal
            .iter()
            .filter(|o| interior || shape.offset_in_bounds(&coords, &o.delta))
            .map(|o| neighbor(p, o))
            .any(|q| kind.precedes(marker[q], value) && kind.precedes(marker[q], mask[q]));
        if seeds {
            queue.push(p);
        }

        if p == 0 {
            break;
        }
        p -= 1;
        shape.step_backward(&mut coords);
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::{Connectivity, Neighborhood};

    #[test]
    fn test_forward_sweep_1d_reaches_right_end() {
        let shape = Shape::new(&[6]).unwrap();
        let nbhd = Neighborhood::new(&shape, Connectivity::Face);
        let mut marker = vec![9u8, 0, 0, 0, 0, 0];
        let mask = vec![9u8, 9, 9, 4, 9, 9];

        let updated = forward_sweep(
            &mut marker,
            &mask,
            &shape,
            &nbhd.causal,
            ReconstructionType::Dilation,
        );
        assert_eq!(updated, 5);
        assert_eq!(marker, vec![9, 9, 9, 4, 4, 4]);
    }

    #[test]
    fn test_backward_sweep_propagates_left() {
        let shape = Shape::new(&[5]).unwrap();
        let nbhd = Neighborhood::new(&shape, Connectivity::Face);
        let mut marker = vec![0u8, 0, 0, 0, 7];
        let mask = vec![7u8, 7, 7, 7, 7];
        let mut queue = PropagationQueue::new(shape.len());

        let updated = backward_sweep(
            &mut marker,
            &mask,
            &shape,
            &nbhd.anticausal,
            ReconstructionType::Dilation,
            &mut queue,
        );
        assert_eq!(updated, 4);
        assert_eq!(marker, vec![7, 7, 7, 7, 7]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_backward_sweep_seeds_unfinished_neighbor() {
        // Index 1 is visited first and cannot see index 0's value
        let shape = Shape::new(&[2]).unwrap();
        let nbhd = Neighborhood::new(&shape, Connectivity::Face);
        let mut marker = vec![7u8, 0];
        let mask = vec![9u8, 9];
        let mut queue = PropagationQueue::new(shape.len());

        backward_sweep(
            &mut marker,
            &mask,
            &shape,
            &nbhd.anticausal,
            ReconstructionType::Dilation,
            &mut queue,
        );
        assert_eq!(marker, vec![7, 0]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some(0));
    }

    #[test]
    fn test_sweeps_erosion_lower_toward_mask() {
        let shape = Shape::new(&[4]).unwrap();
        let nbhd = Neighborhood::new(&shape, Connectivity::Face);
        let mut marker = vec![5i16, 5, 5, 1];
        let mask = vec![0i16, 2, 0, 0];
        let mut queue = PropagationQueue::new(shape.len());

        forward_sweep(
            &mut marker,
            &mask,
            &shape,
            &nbhd.causal,
            ReconstructionType::Erosion,
        );
        assert_eq!(marker, vec![5, 5, 5, 1]);
        backward_sweep(
            &mut marker,
            &mask,
            &shape,
            &nbhd.anticausal,
            ReconstructionType::Erosion,
            &mut queue,
        );
        assert_eq!(marker, vec![2, 2, 1, 1]);
        assert!(queue.is_empty());
    }
}
