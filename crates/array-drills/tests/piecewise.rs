//! Integration tests for the piecewise elementwise transform.

use array_drills::piecewise::{piecewise_transform, piecewise_transform_inplace, piecewise_value};
use ndarray::{array, Array1, Array2};

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-12, "expected {}, got {}", b, a);
}

#[test]
fn one_value_from_each_range() {
    let out = piecewise_transform(&array![2.0, 0.5, -2.0]);
    assert_close(out[0], 2f64.ln() + 1.0);
    assert_close(out[1], 0.5f64.sqrt());
    assert_close(out[2], -4.0);
}

#[test]
fn middle_range_keeps_sign() {
    let out = piecewise_transform(&array![-0.25, 0.0, 0.25]);
    assert_eq!(out, array![-0.5, 0.0, 0.5]);
}

#[test]
fn range_edges_are_continuous_from_the_inside() {
    // x = 1 belongs to the middle range, x = -1 to the lower one.
    assert_eq!(piecewise_value(1.0), 1.0);
    assert_eq!(piecewise_value(-1.0), -1.0);
    assert!((piecewise_value(1.0 + 1e-12) - 1.0).abs() < 1e-9);
}

#[test]
fn logarithm_only_sees_values_above_one() {
    let a: Array1<f64> = Array1::linspace(-5.0, 5.0, 101);
    let out = piecewise_transform(&a);
    assert!(out.iter().all(|v| v.is_finite()));
}

#[test]
fn shape_is_preserved_for_matrices() {
    let a = Array2::from_shape_vec((2, 3), vec![4.0, -4.0, 0.04, -0.04, 1.0, -1.0]).unwrap();
    let out = piecewise_transform(&a);
    assert_eq!(out.dim(), (2, 3));
    assert_close(out[[0, 0]], 4f64.ln() + 1.0);
    assert_close(out[[0, 1]], -16.0);
    assert_close(out[[0, 2]], 0.2);
    assert_close(out[[1, 0]], -0.2);
}

#[test]
fn transform_of_a_view_leaves_the_source_alone() {
    let a = array![[3.0, -3.0], [0.09, -0.09]];
    let before = a.clone();
    let _ = piecewise_transform(&a.t());
    assert_eq!(a, before);
}

#[test]
fn inplace_matches_copying_version() {
    let mut a = array![10.0, 1.0, 0.3, -0.3, -1.0, -10.0];
    let expected = piecewise_transform(&a);
    piecewise_transform_inplace(&mut a);
    assert_eq!(a, expected);
}
