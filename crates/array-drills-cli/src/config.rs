use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;

use array_drills::config::{DrillConfig, PairwiseMethod};

/// Load a drill configuration from a JSON file.
pub fn load_drill_config<P: AsRef<Path>>(path: P) -> Result<DrillConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DrillConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Start from the config file (if any) and apply command-line overrides.
///
/// Only arguments that exist on the given subcommand are consulted.
pub fn resolve_config(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<DrillConfig> {
    let mut config = match config_path {
        Some(path) => {
            log::info!("Using config: {}", path.display());
            load_drill_config(path)?
        }
        None => DrillConfig::default(),
    };

    if let Some(seed) = optional_arg::<u64>(matches, "seed") {
        config.seed = seed;
    }
    if let Some(n) = optional_arg::<usize>(matches, "n") {
        config.size = Some(n);
    }
    if let Some(method) = optional_arg::<String>(matches, "method") {
        config.pairwise_method = PairwiseMethod::from_str(&method).map_err(anyhow::Error::msg)?;
    }
    if let Some(plot) = optional_arg::<PathBuf>(matches, "plot") {
        config.plot_path = Some(plot);
    }
    if has_flag(matches, "quiet") {
        config.quiet = true;
    }

    log::debug!("Resolved config: {:?}", config);
    Ok(config)
}

fn optional_arg<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Option<T> {
    matches.try_get_one::<T>(id).ok().flatten().cloned()
}

fn has_flag(matches: &ArgMatches, id: &str) -> bool {
    matches.try_get_one::<bool>(id).ok().flatten().copied().unwrap_or(false)
}
