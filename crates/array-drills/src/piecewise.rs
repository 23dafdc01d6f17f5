use ndarray::{Array, ArrayBase, Data, DataMut, Dimension};

/// `sign(x)` with `sign(0) = 0` for both signed zeros.
///
/// `f64::signum` maps `-0.0` to `-1.0`, which is not what the transform wants.
fn sign(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x.signum()
    }
}

/// Apply the three-way rule to a single value.
///
/// | range          | result                |
/// |----------------|-----------------------|
/// | `x > 1`        | `ln(x) + 1`           |
/// | `-1 < x <= 1`  | `sign(x) * sqrt(|x|)` |
/// | `x <= -1`      | `-(x^2)`              |
///
/// NaN satisfies none of the conditions and is passed through.
pub fn piecewise_value(x: f64) -> f64 {
    if x > 1.0 {
        x.ln() + 1.0
    } else if x > -1.0 {
        sign(x) * x.abs().sqrt()
    } else if x <= -1.0 {
        -(x * x)
    } else {
        f64::NAN
    }
}

/// Transform every element of `a`, returning a new array of the same shape.
pub fn piecewise_transform<S, D>(a: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    a.mapv(piecewise_value)
}

/// In-place variant of [`piecewise_transform`].
pub fn piecewise_transform_inplace<S, D>(a: &mut ArrayBase<S, D>)
where
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    a.mapv_inplace(piecewise_value);
}
