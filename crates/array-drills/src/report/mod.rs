//! Plotting helpers for the drills.
//!
//! Plots are built with Plotly when the `plot` feature is enabled. Without
//! it only `write_peak_plot` remains, and it reports that plotting is
//! unavailable so callers can treat the diagnostic as best-effort.
pub mod plots;
