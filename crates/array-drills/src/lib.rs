//! array-drills: small numeric-array routines built on `ndarray`.
//!
//! The crate collects independent, stateless helpers: transpose and identity
//! checks, a copy-vs-view report, monotonicity tests, a naive peak finder, a
//! piecewise elementwise transform and several equivalent pairwise-distance
//! formulations. Every routine borrows its input and returns a fresh value.
//!
//! Plotting of the peak finder diagnostic lives behind the `plot` feature so
//! the numeric core builds without Plotly.
pub mod config;
pub mod error;
pub mod matrix;
pub mod monotonic;
pub mod pairwise;
pub mod peaks;
pub mod piecewise;
pub mod random;
pub mod report;
pub mod views;

pub use config::{DrillConfig, PairwiseMethod};
pub use error::DrillError;
pub use peaks::find_peaks;
pub use piecewise::piecewise_transform;
