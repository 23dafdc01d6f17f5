use std::path::PathBuf;

use array_drills::config::DrillConfig;
use array_drills::pairwise::compare_methods;
use array_drills::peaks::run_peak_finder;
use array_drills::random::{random_points, rng_from_seed};
use array_drills::views::arange_report;

fn main() {
    env_logger::init();

    // Peaks of the default seeded sequence, with the diagnostic plot
    let config = DrillConfig {
        plot_path: Some(PathBuf::from("peaks.html")),
        ..DrillConfig::default()
    };
    let result = run_peak_finder(None, &config).expect("a generated sequence is 1-dimensional");
    println!("Peaks at {:?}", result.peaks);

    let report = arange_report().expect("12 elements fill a 4x3 grid");
    for entry in &report.entries {
        println!("{} shares memory with A: {}", entry.name, entry.shares_memory);
    }

    let mut rng = rng_from_seed(config.seed);
    let points = random_points(200, 2, &mut rng);
    for r in compare_methods(&points).expect("points are planar") {
        println!("{:>12}: agrees = {}, max |diff| = {:e}", r.method, r.agrees, r.max_abs_diff);
    }
}
