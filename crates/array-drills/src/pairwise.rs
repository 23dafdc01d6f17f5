//! Pairwise Euclidean distance matrices.
//!
//! The formulations below all compute `D[i, j] = ||p_i - p_j||` for a point
//! set stored one point per row. They differ only in how much intermediate
//! storage they materialise, which is what the benchmarks compare.
//!
//! The grid and broadcast variants work on planar points (two columns); the
//! others accept any dimensionality.

use ndarray::{s, Array2, ArrayBase, ArrayView2, Axis, Data, Ix2};
use rayon::prelude::*;

use crate::config::PairwiseMethod;
use crate::error::DrillError;
use crate::matrix::{allclose, ATOL, RTOL};

/// Distance matrix using the default formulation.
pub fn pairwise_distances<S>(points: &ArrayBase<S, Ix2>) -> Result<Array2<f64>, DrillError>
where
    S: Data<Elem = f64>,
{
    pairwise_distances_with(points, PairwiseMethod::default())
}

/// Distance matrix using the requested formulation.
pub fn pairwise_distances_with<S>(points: &ArrayBase<S, Ix2>, method: PairwiseMethod) -> Result<Array2<f64>, DrillError>
where
    S: Data<Elem = f64>,
{
    if method.planar_only() && points.ncols() != 2 {
        return Err(DrillError::invalid_shape(
            format!("(n, 2) points for the {} method", method),
            points.shape(),
        ));
    }
    let points = points.view();
    let out = match method {
        PairwiseMethod::SparseGrid => sparse_grid(points),
        PairwiseMethod::Broadcast => broadcast(points),
        PairwiseMethod::Norm => row_norms(points),
        PairwiseMethod::DenseGrid => dense_grid(points),
        PairwiseMethod::SumSquares => sum_squares(points),
        PairwiseMethod::Einsum => einsum(points),
        PairwiseMethod::Parallel => parallel(points),
    };
    Ok(out)
}

/// `(n, 1)` column against `(1, n)` row, the way a sparse meshgrid broadcasts.
fn sparse_grid(points: ArrayView2<'_, f64>) -> Array2<f64> {
    let x = points.column(0);
    let y = points.column(1);
    let dx = &x.insert_axis(Axis(0)) - &x.insert_axis(Axis(1));
    let dy = &y.insert_axis(Axis(1)) - &y.insert_axis(Axis(0));
    (dx.mapv(|v| v * v) + dy.mapv(|v| v * v)).mapv(f64::sqrt)
}

fn broadcast(points: ArrayView2<'_, f64>) -> Array2<f64> {
    let x = points.slice(s![.., 0..1]);
    let y = points.slice(s![.., 1..2]);
    let dx = &x - &x.t();
    let dy = &y - &y.t();
    (&dx * &dx + &dy * &dy).mapv(f64::sqrt)
}

fn row_norms(points: ArrayView2<'_, f64>) -> Array2<f64> {
    let n = points.nrows();
    let mut out = Array2::zeros((n, n));
    for (i, p) in points.outer_iter().enumerate() {
        let diff = &points - &p;
        let norms = diff.map_axis(Axis(1), |r| r.dot(&r).sqrt());
        out.row_mut(i).assign(&norms);
    }
    out
}

fn dense_grid(points: ArrayView2<'_, f64>) -> Array2<f64> {
    let n = points.nrows();
    let gx = Array2::from_shape_fn((n, n), |(_, j)| points[[j, 0]]);
    let gy = Array2::from_shape_fn((n, n), |(i, _)| points[[i, 1]]);
    let dx = &gx - &gx.t();
    let dy = &gy - &gy.t();
    (&dx * &dx + &dy * &dy).mapv(f64::sqrt)
}

/// `(n, n, d)` tensor of coordinate differences.
fn difference_tensor(points: ArrayView2<'_, f64>) -> ndarray::Array3<f64> {
    &points.insert_axis(Axis(1)) - &points.insert_axis(Axis(0))
}

fn sum_squares(points: ArrayView2<'_, f64>) -> Array2<f64> {
    difference_tensor(points)
        .mapv(|v| v * v)
        .sum_axis(Axis(2))
        .mapv(f64::sqrt)
}

fn einsum(points: ArrayView2<'_, f64>) -> Array2<f64> {
    let diff = difference_tensor(points);
    let n = points.nrows();
    Array2::from_shape_fn((n, n), |(i, j)| {
        let d = diff.slice(s![i, j, ..]);
        d.dot(&d).sqrt()
    })
}

fn parallel(points: ArrayView2<'_, f64>) -> Array2<f64> {
    let n = points.nrows();
    let rows: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let p = points.row(i);
            points
                .outer_iter()
                .map(|q| {
                    let d = &p - &q;
                    d.dot(&d).sqrt()
                })
                .collect::<Vec<f64>>()
        })
        .collect();
    Array2::from_shape_fn((n, n), |(i, j)| rows[i][j])
}

/// Outcome of checking one formulation against the default one.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodAgreement {
    pub method: PairwiseMethod,
    pub max_abs_diff: f64,
    pub agrees: bool,
}

/// Run every formulation applicable to `points` and compare each with the
/// default. Planar-only methods are skipped for non-planar input.
pub fn compare_methods<S>(points: &ArrayBase<S, Ix2>) -> Result<Vec<MethodAgreement>, DrillError>
where
    S: Data<Elem = f64>,
{
    let reference = if points.ncols() == 2 {
        pairwise_distances(points)?
    } else {
        pairwise_distances_with(points, PairwiseMethod::Norm)?
    };

    let mut results = Vec::new();
    for method in PairwiseMethod::ALL {
        if method.planar_only() && points.ncols() != 2 {
            log::debug!("Skipping {} for {}-dimensional points", method, points.ncols());
            continue;
        }
        let d = pairwise_distances_with(points, method)?;
        let max_abs_diff = (&d - &reference)
            .iter()
            .fold(0.0f64, |acc, v| acc.max(v.abs()));
        let agrees = allclose(&d, &reference, RTOL, ATOL);
        log::debug!("{}: max |diff| = {:e}, agrees = {}", method, max_abs_diff, agrees);
        results.push(MethodAgreement {
            method,
            max_abs_diff,
            agrees,
        });
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn unit_triangle() {
        let pts = array![[0.0, 0.0], [3.0, 0.0], [0.0, 4.0]];
        let d = pairwise_distances(&pts).unwrap();
        assert_eq!(d[[0, 1]], 3.0);
        assert_eq!(d[[0, 2]], 4.0);
        assert_eq!(d[[1, 2]], 5.0);
        assert_eq!(d[[2, 1]], 5.0);
        assert!(d.diag().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn planar_methods_reject_3d_points() {
        let pts = Array2::<f64>::zeros((4, 3));
        for method in PairwiseMethod::ALL {
            let res = pairwise_distances_with(&pts, method);
            assert_eq!(res.is_err(), method.planar_only(), "{}", method);
        }
    }

    #[test]
    fn parallel_rows_land_in_place() {
        let pts = array![[0.0, 0.0, 0.0], [1.0, 2.0, 2.0], [0.0, 0.0, 5.0]];
        let d = pairwise_distances_with(&pts, PairwiseMethod::Parallel).unwrap();
        assert_eq!(d.dim(), (3, 3));
        assert_eq!(d.row(0).to_vec(), vec![0.0, 3.0, 5.0]);
        assert_eq!(d.column(0).to_vec(), vec![0.0, 3.0, 5.0]);
        assert_eq!(d[[1, 2]], 14.0f64.sqrt());
        assert_eq!(d[[2, 1]], d[[1, 2]]);
        let reference = pairwise_distances_with(&pts, PairwiseMethod::Norm).unwrap();
        assert!(allclose(&d, &reference, RTOL, ATOL));
    }

    #[test]
    fn empty_point_set() {
        let pts = Array2::<f64>::zeros((0, 2));
        for method in PairwiseMethod::ALL {
            assert_eq!(pairwise_distances_with(&pts, method).unwrap().dim(), (0, 0));
        }
    }
}
