//! Seeded generators for drill inputs.
//!
//! All values are uniform on `[0, 1)`. Every generator takes an explicit
//! seed so that runs are reproducible.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest matrix order picked when the caller leaves the size open.
pub const MAX_RANDOM_ORDER: usize = 9;

/// Length of the sequence the peak finder generates when none is given.
pub const DEFAULT_SEQUENCE_LEN: usize = 100;

pub fn rng_from_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Resolve an optional matrix order, drawing one in `1..=MAX_RANDOM_ORDER`
/// when absent. A requested order of zero is treated as absent.
pub fn resolve_order<R: Rng>(n: Option<usize>, rng: &mut R) -> usize {
    match n {
        Some(n) if n > 0 => n,
        _ => rng.gen_range(1..=MAX_RANDOM_ORDER),
    }
}

pub fn random_vector<R: Rng>(len: usize, rng: &mut R) -> Array1<f64> {
    Array1::from_shape_fn(len, |_| rng.gen::<f64>())
}

pub fn random_matrix<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |_| rng.gen::<f64>())
}

/// `n` random points with `dim` coordinates each, one point per row.
pub fn random_points<R: Rng>(n: usize, dim: usize, rng: &mut R) -> Array2<f64> {
    random_matrix(n, dim, rng)
}

/// The sequence the peak finder scans when no input is supplied.
pub fn seeded_sequence(seed: u64) -> Array1<f64> {
    let mut rng = rng_from_seed(seed);
    random_vector(DEFAULT_SEQUENCE_LEN, &mut rng)
}
