//! Matrix identities checked on concrete or randomly generated matrices.

use ndarray::{Array2, ArrayBase, Data, Dimension, Zip};

use crate::config::DrillConfig;
use crate::error::DrillError;
use crate::random::{random_matrix, resolve_order, rng_from_seed};

/// Default relative tolerance for [`allclose`].
pub const RTOL: f64 = 1e-5;
/// Default absolute tolerance for [`allclose`].
pub const ATOL: f64 = 1e-8;

/// Elementwise `|a - b| <= atol + rtol * |b|`.
///
/// Arrays of different shape are never close. NaN is never close to anything.
pub fn allclose<S1, S2, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>, rtol: f64, atol: f64) -> bool
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    if a.shape() != b.shape() {
        return false;
    }
    Zip::from(a)
        .and(b)
        .all(|&x, &y| (x - y).abs() <= atol + rtol * y.abs())
}

/// Check `(A + B)^T == A^T + B^T` within the default tolerances.
pub fn transpose_of_sum_holds<S1, S2>(a: &ArrayBase<S1, ndarray::Ix2>, b: &ArrayBase<S2, ndarray::Ix2>) -> Result<bool, DrillError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if a.shape() != b.shape() {
        return Err(DrillError::invalid_shape(
            format!("a matrix of shape {:?}", a.shape()),
            b.shape(),
        ));
    }
    let sum_t = (a + b).reversed_axes();
    let t_sum = &a.t() + &b.t();
    Ok(allclose(&sum_t, &t_sum, RTOL, ATOL))
}

/// Check that `A · I == A` exactly, with `I` the identity of order `ncols(A)`.
pub fn identity_product_holds<S>(a: &ArrayBase<S, ndarray::Ix2>) -> bool
where
    S: Data<Elem = f64>,
{
    let eye = Array2::<f64>::eye(a.ncols());
    a.dot(&eye) == *a
}

/// Draw two random square matrices and verify the transpose-of-sum identity.
pub fn check_transpose_of_sum(config: &DrillConfig) -> bool {
    let mut rng = rng_from_seed(config.seed);
    let n = resolve_order(config.size, &mut rng);
    let mat_a = random_matrix(n, n, &mut rng);
    let mat_b = random_matrix(n, n, &mut rng);

    if !config.quiet {
        log::debug!("Matrix A:\n{}", mat_a);
        log::debug!("Matrix B:\n{}", mat_b);
        log::debug!("Matrix (A + B).T:\n{}", (&mat_a + &mat_b).t());
        log::debug!("Matrix A.T + B.T:\n{}", &mat_a.t() + &mat_b.t());
    }

    // Shapes are equal by construction.
    let holds = transpose_of_sum_holds(&mat_a, &mat_b).unwrap_or(false);
    log::info!("(A + B)^T == A^T + B^T for n = {}: {}", n, holds);
    holds
}

/// Draw a random square matrix and verify that multiplying by the identity
/// leaves it unchanged.
pub fn check_identity_product(config: &DrillConfig) -> bool {
    let mut rng = rng_from_seed(config.seed);
    let n = resolve_order(config.size, &mut rng);
    let mat_a = random_matrix(n, n, &mut rng);

    if !config.quiet {
        log::debug!("Matrix A:\n{}", mat_a);
        log::debug!("Identity Matrix:\n{}", Array2::<f64>::eye(n));
        log::debug!("Matrix B (A * I):\n{}", mat_a.dot(&Array2::<f64>::eye(n)));
    }

    let holds = identity_product_holds(&mat_a);
    log::info!("A * I == A for n = {}: {}", n, holds);
    holds
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn allclose_respects_tolerances() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![1.0, 2.0 + 1e-9, 3.0];
        assert!(allclose(&a, &b, RTOL, ATOL));
        let c = array![1.0, 2.1, 3.0];
        assert!(!allclose(&a, &c, RTOL, ATOL));
    }

    #[test]
    fn allclose_rejects_nan_and_shape_mismatch() {
        let a = array![[1.0, f64::NAN]];
        assert!(!allclose(&a, &a, RTOL, ATOL));
        let b = array![[1.0], [2.0]];
        let c = array![[1.0, 2.0]];
        assert!(!allclose(&b, &c, RTOL, ATOL));
    }

    #[test]
    fn transpose_rejects_mismatched_shapes() {
        let a = Array2::<f64>::zeros((2, 3));
        let b = Array2::<f64>::zeros((3, 2));
        assert!(matches!(
            transpose_of_sum_holds(&a, &b),
            Err(DrillError::InvalidInputShape { .. })
        ));
    }

    #[test]
    fn identity_product_handles_rectangular_input() {
        let a = array![[1.5, -2.0, 0.25], [4.0, 5.0, -6.5]];
        assert!(identity_product_holds(&a));
    }
}
