use std::path::Path;

use ndarray::Array1;

use crate::error::DrillError;

#[cfg(feature = "plot")]
use plotly::common::{Marker, Mode};
#[cfg(feature = "plot")]
use plotly::common::MarkerSymbol;
#[cfg(feature = "plot")]
use plotly::layout::{Axis, Layout};
#[cfg(feature = "plot")]
use plotly::{Plot, Scatter};

/// Plot a sequence as a line with black `x` markers at the peak indices.
#[cfg(feature = "plot")]
pub fn plot_peaks(values: &Array1<f64>, peaks: &[usize]) -> Plot {
    let x: Vec<usize> = (0..values.len()).collect();
    let y: Vec<f64> = values.to_vec();

    let peak_x: Vec<usize> = peaks.to_vec();
    let peak_y: Vec<f64> = peaks.iter().map(|&i| values[i]).collect();

    let trace_values = Scatter::new(x, y)
        .mode(Mode::Lines)
        .name("Values");

    let trace_peaks = Scatter::new(peak_x, peak_y)
        .mode(Mode::Markers)
        .name("Peaks")
        .marker(Marker::new().symbol(MarkerSymbol::X).color("black"));

    let layout = Layout::new()
        .title("Peak Finding Algorithm")
        .x_axis(Axis::new().title("Index"))
        .y_axis(Axis::new().title("Value"));

    let mut plot = Plot::new();
    plot.add_trace(trace_values);
    plot.add_trace(trace_peaks);
    plot.set_layout(layout);

    plot
}

/// Render the peak plot to a standalone HTML file.
#[cfg(feature = "plot")]
pub fn write_peak_plot(values: &Array1<f64>, peaks: &[usize], path: &Path) -> Result<(), DrillError> {
    let html = plot_peaks(values, peaks).to_html();
    std::fs::write(path, html)
        .map_err(|e| DrillError::Plot(format!("could not write {}: {}", path.display(), e)))
}

#[cfg(not(feature = "plot"))]
pub fn write_peak_plot(_values: &Array1<f64>, _peaks: &[usize], _path: &Path) -> Result<(), DrillError> {
    Err(DrillError::Plot(
        "built without the `plot` feature".to_string(),
    ))
}
