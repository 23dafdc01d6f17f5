//! Non-decreasing sequence checks.
//!
//! Three formulations of the same question are kept side by side so they can
//! be benchmarked against each other. They agree on all finite input.

use ndarray::{s, Array1, ArrayBase, ArrayView1, Data, Ix1, Zip};

use crate::config::DrillConfig;
use crate::random::{random_vector, rng_from_seed};

/// Length of the random sequence checked when no input is supplied.
pub const DEFAULT_RANDOM_LEN: usize = 100_000;

/// True when every element is `>=` its predecessor.
///
/// Compares the shifted slices `a[1..]` and `a[..-1]` pairwise and stops at
/// the first decrease. Empty and single-element sequences are monotonic.
pub fn is_monotonic<S>(a: &ArrayBase<S, Ix1>) -> bool
where
    S: Data<Elem = f64>,
{
    if a.len() < 2 {
        return true;
    }
    Zip::from(a.slice(s![1..]))
        .and(a.slice(s![..-1]))
        .all(|&next, &prev| next >= prev)
}

/// First differences `a[i + 1] - a[i]`.
pub fn diff<S>(a: &ArrayBase<S, Ix1>) -> Array1<f64>
where
    S: Data<Elem = f64>,
{
    if a.len() < 2 {
        return Array1::zeros(0);
    }
    &a.slice(s![1..]) - &a.slice(s![..-1])
}

/// Materialise the differences, then require all of them to be `>= 0`.
pub fn is_monotonic_diff<S>(a: &ArrayBase<S, Ix1>) -> bool
where
    S: Data<Elem = f64>,
{
    diff(a).iter().all(|&d| d >= 0.0)
}

/// Materialise the differences and look for any `< 0`.
///
/// Unlike the other two, a NaN difference does not count as a decrease here.
pub fn is_monotonic_no_decrease<S>(a: &ArrayBase<S, Ix1>) -> bool
where
    S: Data<Elem = f64>,
{
    !diff(a).iter().any(|&d| d < 0.0)
}

/// Check `input`, or a seeded random sequence when `input` is `None`.
///
/// The generated sequence has `config.size` elements (default
/// [`DEFAULT_RANDOM_LEN`]) drawn with `config.seed`.
pub fn run_monotonic(input: Option<ArrayView1<'_, f64>>, config: &DrillConfig) -> bool {
    let generated: Array1<f64>;
    let values = match input {
        Some(view) => view.reborrow(),
        None => {
            let len = config.size.unwrap_or(DEFAULT_RANDOM_LEN);
            log::debug!("No input supplied, generating {} values with seed {}", len, config.seed);
            generated = random_vector(len, &mut rng_from_seed(config.seed));
            generated.view()
        }
    };
    let monotonic = is_monotonic(&values);
    log::info!("Sequence of {} values is non-decreasing: {}", values.len(), monotonic);
    monotonic
}
