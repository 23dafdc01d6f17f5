use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use array_drills::matrix::{check_identity_product, check_transpose_of_sum};
use array_drills::monotonic::run_monotonic;
use array_drills::pairwise::{compare_methods, pairwise_distances_with};
use array_drills::peaks::run_peak_finder;
use array_drills::piecewise::piecewise_transform;
use array_drills::random::{random_points, rng_from_seed};
use array_drills::views::arange_report;
use array_drills_cli::config::resolve_config;
use array_drills_cli::util::{format_values, parse_values};

const DEFAULT_POINTS: usize = 100;

fn values_arg(required: bool) -> Arg {
    Arg::new("values")
        .long("values")
        .required(required)
        .help("Comma separated input sequence, e.g. 0,3,1,5,1,0")
        .allow_hyphen_values(true)
}

fn seed_arg() -> Arg {
    Arg::new("seed")
        .short('s')
        .long("seed")
        .help("Seed for randomly generated input. Overrides the config file.")
        .value_parser(clap::value_parser!(u64))
}

fn size_arg(help: &'static str) -> Arg {
    Arg::new("n")
        .short('n')
        .long("n")
        .help(help)
        .value_parser(clap::value_parser!(usize))
}

fn quiet_arg() -> Arg {
    Arg::new("quiet")
        .short('q')
        .long("quiet")
        .help("Do not log the generated matrices")
        .action(ArgAction::SetTrue)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DRILLS_LOG", "error,array_drills=info,drills=info"))
        .init();

    let matches = Command::new("drills")
        .version(clap::crate_version!())
        .about("Numeric array drills: peaks, piecewise transforms, pairwise distances and friends")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .global(true)
                .help("Path to a JSON drill configuration")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("peaks")
                .about("Find strict interior local maxima of a sequence")
                .arg(values_arg(false))
                .arg(seed_arg())
                .arg(
                    Arg::new("plot")
                        .short('p')
                        .long("plot")
                        .help("Write an HTML plot of the sequence and its peaks")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("piecewise")
                .about("Apply the three-range piecewise transform elementwise")
                .arg(values_arg(true)),
        )
        .subcommand(
            Command::new("monotonic")
                .about("Check whether a sequence is non-decreasing")
                .arg(values_arg(false))
                .arg(size_arg("Length of the random sequence checked when --values is omitted (default 100000)"))
                .arg(seed_arg()),
        )
        .subcommand(
            Command::new("transpose")
                .about("Verify (A + B)^T == A^T + B^T on random square matrices")
                .arg(size_arg("Matrix order; random in 1..=9 when omitted"))
                .arg(seed_arg())
                .arg(quiet_arg()),
        )
        .subcommand(
            Command::new("identity")
                .about("Verify A * I == A on a random square matrix")
                .arg(size_arg("Matrix order; random in 1..=9 when omitted"))
                .arg(seed_arg())
                .arg(quiet_arg()),
        )
        .subcommand(Command::new("views").about("Report which reshaped arrays share memory with their source"))
        .subcommand(
            Command::new("pairwise")
                .about("Pairwise distances of random planar points")
                .arg(size_arg("Number of points (default 100)"))
                .arg(seed_arg())
                .arg(
                    Arg::new("method")
                        .short('m')
                        .long("method")
                        .help("Formulation: sparse-grid, broadcast, norm, dense-grid, sum-squares, einsum or parallel"),
                )
                .arg(
                    Arg::new("compare")
                        .long("compare")
                        .help("Run every formulation and report whether they agree")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        // --config is global, so it is visible on the subcommand matches
        Some((name, sub_m)) => run_subcommand(name, sub_m, sub_m.get_one::<PathBuf>("config")),
        None => unreachable!(),
    }
}

fn run_subcommand(name: &str, matches: &ArgMatches, config_path: Option<&PathBuf>) -> Result<()> {
    let config = resolve_config(config_path, matches)?;

    match name {
        "peaks" => {
            let values = matches
                .get_one::<String>("values")
                .map(|v| parse_values(v))
                .transpose()?;
            let input = values.as_ref().map(|v| v.view().into_dyn());
            let result = run_peak_finder(input, &config)?;
            println!("{:?}", result.peaks);
        }
        "piecewise" => {
            let values = parse_values(required(matches, "values")?)?;
            let out = piecewise_transform(&values);
            println!("{}", format_values(&out.to_vec()));
        }
        "monotonic" => {
            let values = matches
                .get_one::<String>("values")
                .map(|v| parse_values(v))
                .transpose()?;
            println!("{}", run_monotonic(values.as_ref().map(|v| v.view()), &config));
        }
        "transpose" => println!("{}", check_transpose_of_sum(&config)),
        "identity" => println!("{}", check_identity_product(&config)),
        "views" => {
            let report = arange_report()?;
            for entry in &report.entries {
                println!("{} shares memory with A: {}", entry.name, entry.shares_memory);
            }
            if report.all_views_share_memory() {
                println!("All operations are copy-free.");
            } else {
                println!("Some operations are not copy-free.");
            }
        }
        "pairwise" => {
            let mut rng = rng_from_seed(config.seed);
            let n = config.size.unwrap_or(DEFAULT_POINTS);
            let points = random_points(n, 2, &mut rng);
            if matches.get_flag("compare") {
                for r in compare_methods(&points)? {
                    println!("{:>12}: agrees = {}, max |diff| = {:e}", r.method, r.agrees, r.max_abs_diff);
                }
            } else {
                let d = pairwise_distances_with(&points, config.pairwise_method)?;
                log::info!("Computed {}x{} distances with {}", n, n, config.pairwise_method);
                println!("{:.4}", d);
            }
        }
        other => anyhow::bail!("Unknown subcommand: {}", other),
    }
    Ok(())
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("Missing required argument --{}", id))
}
