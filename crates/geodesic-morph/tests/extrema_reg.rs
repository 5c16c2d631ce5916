//! H-extrema and regional extrema regression test

use geodesic_core::Grid;
use geodesic_morph::{
    Connectivity, MorphError, h_maxima, h_minima, regional_maxima, regional_minima,
};
use geodesic_test::{RegParams, random_grid};
use rand::SeedableRng;
use rand::rngs::StdRng;

// ==========================================================================
// Test 1: Peaks of known dynamic
// ==========================================================================

#[test]
fn extrema_reg_known_peaks() {
    let mut rp = RegParams::new("extrema_peaks");

    // Peaks of height 3 at (1,1) and 7 at (3,4) over a flat background
    let mut grid = Grid::<u16>::new_with_value(&[5, 6], 10).unwrap();
    grid.set(&[1, 1], 13).unwrap();
    grid.set(&[3, 4], 17).unwrap();
    grid.set(&[3, 3], 12).unwrap();

    let maxima = regional_maxima(&grid, Connectivity::Full).unwrap();
    rp.compare_values(2.0, maxima.count_value(1) as f64, 0.0);
    rp.compare_values(1.0, maxima.get(&[1, 1]).unwrap() as f64, 0.0);
    rp.compare_values(1.0, maxima.get(&[3, 4]).unwrap() as f64, 0.0);

    let suppressed = h_maxima(&grid, 4, Connectivity::Full).unwrap();
    rp.compare_values(10.0, suppressed.get(&[1, 1]).unwrap() as f64, 0.0);
    rp.compare_values(13.0, suppressed.get(&[3, 4]).unwrap() as f64, 0.0);
    rp.compare_values(12.0, suppressed.get(&[3, 3]).unwrap() as f64, 0.0);

    // Only the taller peak is still a regional maximum
    let remaining = regional_maxima(&suppressed, Connectivity::Full).unwrap();
    rp.compare_values(1.0, remaining.count_value(1) as f64, 0.0);

    let err = h_maxima(&grid.map(|v| v as i32), -2, Connectivity::Face).unwrap_err();
    rp.check(
        matches!(err, MorphError::InvalidParameters(_)),
        "negative height rejected",
    );

    assert!(rp.cleanup(), "extrema_reg peak tests failed");
}

// ==========================================================================
// Test 2: Floating-point grids
// ==========================================================================

#[test]
fn extrema_reg_float() {
    let mut rp = RegParams::new("extrema_float");

    let grid = Grid::<f32>::from_data(&[6], vec![0.0, 2.5, 0.5, 0.5, 6.0, 0.0]).unwrap();
    let out = h_maxima(&grid, 1.0, Connectivity::Face).unwrap();
    rp.compare_values(1.5, out.get(&[1]).unwrap() as f64, 1e-6);
    rp.compare_values(5.0, out.get(&[4]).unwrap() as f64, 1e-6);
    rp.compare_values(0.5, out.get(&[2]).unwrap() as f64, 1e-6);

    let minima = regional_minima(&grid, Connectivity::Face).unwrap();
    rp.compare_grids(
        &Grid::<u8>::from_data(&[6], vec![1, 0, 1, 1, 0, 1]).unwrap(),
        &minima,
    );

    // Dynamics well below 1.0
    let shallow = Grid::<f64>::from_data(&[3], vec![1.0, 0.25, 1.0]).unwrap();
    let minima = regional_minima(&shallow, Connectivity::Face).unwrap();
    rp.compare_grids(&Grid::<u8>::from_data(&[3], vec![0, 1, 0]).unwrap(), &minima);

    let ripples = Grid::<f32>::from_data(&[6], vec![0.0, 0.5, 0.4, 0.9, 0.2, 0.2]).unwrap();
    let maxima = regional_maxima(&ripples, Connectivity::Face).unwrap();
    rp.compare_grids(
        &Grid::<u8>::from_data(&[6], vec![0, 1, 0, 1, 0, 0]).unwrap(),
        &maxima,
    );
    let minima = regional_minima(&ripples, Connectivity::Face).unwrap();
    rp.compare_grids(
        &Grid::<u8>::from_data(&[6], vec![1, 0, 1, 0, 1, 1]).unwrap(),
        &minima,
    );

    assert!(rp.cleanup(), "extrema_reg float tests failed");
}

// ==========================================================================
// Test 3: Regional extrema depend only on the value order
// ==========================================================================

#[test]
fn extrema_reg_order_only() {
    let mut rp = RegParams::new("extrema_order");
    let mut rng = StdRng::seed_from_u64(29);

    let shapes: [&[usize]; 2] = [&[11, 13], &[5, 6, 4]];
    for dims in shapes {
        for connectivity in [Connectivity::Face, Connectivity::Full] {
            let grid = random_grid(&mut rng, dims, 9).unwrap();
            // Same order, steps of a hundredth
            let scaled = grid.map(|v| f64::from(v) * 0.01);

            let expected = regional_maxima(&grid, connectivity).unwrap();
            rp.compare_grids(&expected, &regional_maxima(&scaled, connectivity).unwrap());
            let expected = regional_minima(&grid, connectivity).unwrap();
            rp.compare_grids(&expected, &regional_minima(&scaled, connectivity).unwrap());
        }
    }

    // A flat grid is one plateau, whatever its level
    for level in [0u8, 5, u8::MAX] {
        let flat = Grid::<u8>::new_with_value(&[3, 3], level).unwrap();
        let maxima = regional_maxima(&flat, Connectivity::Full).unwrap();
        let minima = regional_minima(&flat, Connectivity::Full).unwrap();
        rp.compare_values(9.0, maxima.count_value(1) as f64, 0.0);
        rp.compare_values(9.0, minima.count_value(1) as f64, 0.0);
    }

    assert!(rp.cleanup(), "extrema_reg order tests failed");
}

// ==========================================================================
// Test 4: Properties on random grids
// ==========================================================================

#[test]
fn extrema_reg_properties() {
    let mut rp = RegParams::new("extrema_properties");
    let mut rng = StdRng::seed_from_u64(3);

    let shapes: [&[usize]; 2] = [&[14, 10], &[5, 7, 6]];
    for dims in shapes {
        for connectivity in [Connectivity::Face, Connectivity::Full] {
            let grid = random_grid(&mut rng, dims, 30).unwrap();
            let h = 5;

            let hmax = h_maxima(&grid, h, connectivity).unwrap();
            let bracketed = hmax
                .data()
                .iter()
                .zip(grid.data())
                .all(|(&o, &g)| o <= g && o >= g.saturating_sub(h));
            rp.check(bracketed, "f - h <= hmax(f) <= f");

            let hmin = h_minima(&grid, h, connectivity).unwrap();
            let dual = h_maxima(&grid.map(|v| u8::MAX - v), h, connectivity).unwrap();
            rp.compare_grids(&hmin, &dual.map(|v| u8::MAX - v));

            rp.compare_grids(&grid, &h_maxima(&grid, 0, connectivity).unwrap());

            // Maxima of f are the minima of its negation
            let maxima = regional_maxima(&grid, connectivity).unwrap();
            let inv_minima = regional_minima(&grid.map(|v| u8::MAX - v), connectivity).unwrap();
            rp.compare_grids(&maxima, &inv_minima);
        }
    }

    assert!(rp.cleanup(), "extrema_reg property tests failed");
}
