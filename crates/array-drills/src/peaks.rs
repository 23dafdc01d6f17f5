use ndarray::{Array1, ArrayBase, ArrayViewD, Data, Dimension, Ix1};

use crate::config::DrillConfig;
use crate::error::DrillError;
use crate::random::seeded_sequence;
use crate::report;

/// Find the strict local maxima of a one-dimensional sequence.
///
/// Returns the indices `i` with `a[i] > a[i - 1]` and `a[i] > a[i + 1]`, in
/// increasing order. The first and last positions are never reported, and a
/// plateau of equal values yields no peak at any of its positions.
///
/// # Arguments
///
/// * `array` - The sequence to scan. A zero-dimensional array is treated as a
///   sequence of length one.
///
/// # Returns
///
/// The peak indices, or `DrillError::InvalidInputShape` when `array` has more
/// than one axis.
pub fn find_peaks<S, D>(array: &ArrayBase<S, D>) -> Result<Vec<usize>, DrillError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    match array.ndim() {
        0 => return Ok(Vec::new()),
        1 => {}
        _ => return Err(DrillError::invalid_shape("1-dimensional", array.shape())),
    }
    let seq = array
        .view()
        .into_dimensionality::<Ix1>()
        .map_err(|_| DrillError::invalid_shape("1-dimensional", array.shape()))?;

    if seq.len() < 3 {
        return Ok(Vec::new());
    }

    let peaks = seq
        .windows(3)
        .into_iter()
        .enumerate()
        .filter(|(_, w)| w[1] > w[0] && w[1] > w[2])
        .map(|(i, _)| i + 1)
        .collect();
    Ok(peaks)
}

/// A scanned sequence together with its peaks.
#[derive(Clone, Debug, PartialEq)]
pub struct PeakResult {
    pub values: Array1<f64>,
    pub peaks: Vec<usize>,
}

impl PeakResult {
    pub fn peak_values(&self) -> Vec<f64> {
        self.peaks.iter().map(|&i| self.values[i]).collect()
    }
}

/// Run the peak finder on `input`, or on a seeded random sequence of 100
/// values when `input` is `None`.
///
/// When `config.plot_path` is set the sequence and its peaks are written as an
/// HTML plot. A plot that cannot be produced is logged and skipped; the peaks
/// are returned regardless.
pub fn run_peak_finder(input: Option<ArrayViewD<'_, f64>>, config: &DrillConfig) -> Result<PeakResult, DrillError> {
    let values: Array1<f64> = match input {
        Some(view) if view.ndim() > 1 => {
            return Err(DrillError::invalid_shape("1-dimensional", view.shape()));
        }
        // at least 1-D: a scalar becomes a single-element sequence
        Some(view) => view.iter().copied().collect(),
        None => {
            log::debug!("No input supplied, generating sequence with seed {}", config.seed);
            seeded_sequence(config.seed)
        }
    };
    let peaks = find_peaks(&values)?;
    let result = PeakResult { values, peaks };

    log::info!("Found {} peaks in {} values", result.peaks.len(), result.values.len());
    if let Some(path) = &config.plot_path {
        match report::plots::write_peak_plot(&result.values, &result.peaks, path) {
            Ok(()) => log::info!("Peak plot written to {}", path.display()),
            Err(e) => log::warn!("{}", e),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr0, array};

    #[test]
    fn boundary_maxima_are_ignored() {
        let a = array![9.0, 1.0, 2.0, 1.0, 9.0];
        assert_eq!(find_peaks(&a).unwrap(), vec![2]);
    }

    #[test]
    fn short_sequences_have_no_peaks() {
        assert!(find_peaks(&array![1.0, 2.0]).unwrap().is_empty());
        assert!(find_peaks(&Array1::<f64>::zeros(0)).unwrap().is_empty());
    }

    #[test]
    fn scalar_is_promoted() {
        assert!(find_peaks(&arr0(3.0)).unwrap().is_empty());
    }

    #[test]
    fn nan_is_never_a_peak() {
        let a = array![0.0, f64::NAN, 0.0, 2.0, f64::NAN];
        assert_eq!(find_peaks(&a).unwrap(), Vec::<usize>::new());
    }
}
