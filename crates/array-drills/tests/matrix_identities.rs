//! Integration tests for the transpose and identity checks.

use array_drills::config::DrillConfig;
use array_drills::matrix::{
    allclose, check_identity_product, check_transpose_of_sum, identity_product_holds,
    transpose_of_sum_holds, ATOL, RTOL,
};
use array_drills::random::{random_matrix, rng_from_seed};
use ndarray::{array, Array2};

// ---------------------------------------------------------------------------
// (A + B)^T == A^T + B^T
// ---------------------------------------------------------------------------

#[test]
fn transpose_of_sum_holds_for_random_square_matrices() {
    let mut rng = rng_from_seed(1);
    for n in 1..10 {
        let a = random_matrix(n, n, &mut rng);
        let b = random_matrix(n, n, &mut rng);
        assert!(transpose_of_sum_holds(&a, &b).unwrap(), "n = {}", n);
    }
}

#[test]
fn transpose_of_sum_holds_for_rectangular_views() {
    let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let b = array![[0.5, -1.0, 2.0], [8.0, 0.0, -6.0]];
    assert!(transpose_of_sum_holds(&a.view(), &b.view()).unwrap());
}

#[test]
fn seeded_transpose_check_passes() {
    for seed in 0..20 {
        let config = DrillConfig {
            quiet: true,
            ..DrillConfig::with_seed(seed)
        };
        assert!(check_transpose_of_sum(&config));
    }
}

// ---------------------------------------------------------------------------
// A * I == A
// ---------------------------------------------------------------------------

#[test]
fn identity_product_is_exact() {
    let mut rng = rng_from_seed(99);
    for n in 1..12 {
        let a = random_matrix(n, n, &mut rng);
        assert!(identity_product_holds(&a), "n = {}", n);
    }
}

#[test]
fn identity_product_on_signed_values() {
    let a = array![[-1.0, 0.0], [1e300, -1e-300]];
    assert!(identity_product_holds(&a));
}

#[test]
fn seeded_identity_check_respects_size() {
    let config = DrillConfig {
        size: Some(7),
        quiet: true,
        ..DrillConfig::default()
    };
    assert!(check_identity_product(&config));
}

// ---------------------------------------------------------------------------
// allclose
// ---------------------------------------------------------------------------

#[test]
fn allclose_uses_relative_tolerance() {
    let a = Array2::from_elem((1, 1), 1.0);
    let b = Array2::from_elem((1, 1), 1.0 + 5e-6);
    assert!(allclose(&a, &b, RTOL, ATOL));
    assert!(!allclose(&a, &b, 0.0, ATOL));
}
