//! Helpers behind the `drills` binary: config loading, value parsing and
//! overriding config fields from command-line matches.
pub mod config;
pub mod util;
