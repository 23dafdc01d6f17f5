use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Seed used when a caller asks for generated input without naming one.
pub const DEFAULT_SEED: u64 = 1234;

/// Shared settings for the drills that generate their own input.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DrillConfig {
    pub seed: u64,
    /// Matrix order or point count. `None` lets the drill pick one.
    pub size: Option<usize>,
    /// Suppress debug dumps of generated matrices.
    pub quiet: bool,
    pub pairwise_method: PairwiseMethod,
    /// Where the peak finder writes its diagnostic plot, if anywhere.
    pub plot_path: Option<PathBuf>,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            size: None,
            quiet: false,
            pairwise_method: PairwiseMethod::default(),
            plot_path: None,
        }
    }
}

impl DrillConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

/// Equivalent formulations of the pairwise distance matrix.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PairwiseMethod {
    /// Broadcast a column of coordinates against a row of coordinates.
    #[default]
    SparseGrid,
    /// Explicit `(n, 1)` columns minus their transposes.
    Broadcast,
    /// Norm of `p[i] - points` for every row.
    Norm,
    /// Fully materialised `n x n` coordinate grids.
    DenseGrid,
    /// `(n, n, d)` difference tensor summed over the last axis.
    SumSquares,
    /// `(n, n, d)` difference tensor contracted with itself.
    Einsum,
    /// Row-parallel loop on the rayon pool.
    Parallel,
}

impl PairwiseMethod {
    pub const ALL: [PairwiseMethod; 7] = [
        PairwiseMethod::SparseGrid,
        PairwiseMethod::Broadcast,
        PairwiseMethod::Norm,
        PairwiseMethod::DenseGrid,
        PairwiseMethod::SumSquares,
        PairwiseMethod::Einsum,
        PairwiseMethod::Parallel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PairwiseMethod::SparseGrid => "sparse-grid",
            PairwiseMethod::Broadcast => "broadcast",
            PairwiseMethod::Norm => "norm",
            PairwiseMethod::DenseGrid => "dense-grid",
            PairwiseMethod::SumSquares => "sum-squares",
            PairwiseMethod::Einsum => "einsum",
            PairwiseMethod::Parallel => "parallel",
        }
    }

    /// Whether the formulation only handles points in the plane.
    pub fn planar_only(&self) -> bool {
        matches!(
            self,
            PairwiseMethod::SparseGrid | PairwiseMethod::Broadcast | PairwiseMethod::DenseGrid
        )
    }
}

impl fmt::Display for PairwiseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for PairwiseMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        PairwiseMethod::ALL
            .iter()
            .copied()
            .find(|m| m.name() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown pairwise method: {}. Expected one of: {}",
                    s,
                    PairwiseMethod::ALL
                        .iter()
                        .map(|m| m.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_method_names_case_insensitively() {
        assert_eq!("Sparse_Grid".parse::<PairwiseMethod>(), Ok(PairwiseMethod::SparseGrid));
        assert_eq!("einsum".parse::<PairwiseMethod>(), Ok(PairwiseMethod::Einsum));
        assert!("manhattan".parse::<PairwiseMethod>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for method in PairwiseMethod::ALL {
            assert_eq!(method.to_string().parse::<PairwiseMethod>(), Ok(method));
        }
    }
}
