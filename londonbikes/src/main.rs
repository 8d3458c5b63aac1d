//! # londonbikes
//!
//! Query London's bike-share docking stations from the command line.
//!
//! ## Overview
//!
//! londonbikes is built on top of londonbikeslib. It fetches the station
//! registry from the TfL BikePoint API (or a saved copy of it) and prints
//! the answer as an aligned table.
//!
//! ## Usage
//!
//! ```bash
//! # Stations whose name matches a term (case-insensitive pattern)
//! londonbikes search "hyde park"
//!
//! # Stations within 500 m of a coordinate
//! londonbikes search 51.5027 -0.1527 500
//!
//! # Position and live bike/dock counts of one station
//! londonbikes id BikePoints_1
//!
//! # Answer from a saved BikePoint response instead of the network
//! londonbikes --input bikepoints.json search soho
//!
//! # JSON instead of a table
//! londonbikes --output json id BikePoints_1
//!
//! # Terms may start with a hyphen
//! londonbikes search -Park
//! ```
//!
//! Options go before the command. Everything after `search` or `id` is
//! taken as that command's arguments, so `londonbikes search -v` searches
//! for `-v`.
//!
//! ## Environment
//!
//! - `BIKEPOINT_URL`: endpoint override (default `https://api.tfl.gov.uk/BikePoint`)
//! - `TFL_APP_ID`, `TFL_APP_KEY`: optional TfL API credentials
//! - `RUST_LOG`: log filter for stderr diagnostics
//!
//! ## Exit codes
//!
//! 0 success, 1 usage or upstream failure, 10 missing search term,
//! 11 invalid search, 12 missing id, 13 id not found.

mod render;

use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use londonbikeslib::{
    run, BikePointClient, LondonBikesError, Query, SnapshotFile, SourceConfig, StationSource,
};
use tracing_subscriber::EnvFilter;

use crate::render::{render, OutputFormat};

const USAGE: &str = "londonbikes search <search_string>
       londonbikes search <latitude> <longitude> <radius_in_metres>
       londonbikes id <bike_point_id>";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("londonbikes")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Search London bike-share docking stations by name, by distance, or by id")
        .override_usage(USAGE)
        .after_help("Options go before the command: londonbikes --output json id BikePoints_1")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("PATH")
                .help("Read stations from a saved BikePoint JSON response instead of the API"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(value_parser!(OutputFormat))
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log requests and match counts to stderr"),
        )
        .subcommand(
            Command::new("search")
                .about("Search stations by name, or by distance from a coordinate")
                .arg(
                    Arg::new("args")
                        .num_args(0..)
                        .allow_hyphen_values(true)
                        .trailing_var_arg(true)
                        .value_name("TERM | LATITUDE LONGITUDE RADIUS")
                        .help("A name pattern, or a latitude, longitude and radius in metres"),
                ),
        )
        .subcommand(
            Command::new("id")
                .about("Show one station with its live bike and dock counts")
                .arg(
                    Arg::new("args")
                        .num_args(0..)
                        .allow_hyphen_values(true)
                        .trailing_var_arg(true)
                        .value_name("BIKE_POINT_ID")
                        .help("Station id, e.g. BikePoints_1"),
                ),
        )
}

/// Collect the raw positional arguments of a subcommand
fn positional(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("args")
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

/// Install the stderr log subscriber
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}

/// Pick the station source: a snapshot file when `--input` is given
fn build_source(matches: &ArgMatches) -> anyhow::Result<Box<dyn StationSource>> {
    match matches.get_one::<String>("input") {
        Some(path) => Ok(Box::new(SnapshotFile::new(path))),
        None => Ok(Box::new(BikePointClient::new(SourceConfig::from_env())?)),
    }
}

/// Validate, fetch, query and render; returns what goes to stdout
fn execute(query_args: (&str, &ArgMatches), matches: &ArgMatches) -> anyhow::Result<String> {
    let (command, sub) = query_args;
    let args = positional(sub);
    let query = match command {
        "search" => Query::search_from_args(&args)?,
        "id" => Query::id_from_args(&args)?,
        other => anyhow::bail!("unknown command: {other}"),
    };

    let source = build_source(matches)?;
    let table = run(&query, source.as_ref())?;

    let format = matches
        .get_one::<OutputFormat>("output")
        .copied()
        .unwrap_or_default();
    Ok(render(&table, format, console::colors_enabled())?)
}

/// Exit code for a failed run
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<LondonBikesError>()
        .map(LondonBikesError::exit_code)
        .unwrap_or(1)
}

fn main() -> ExitCode {
    let mut cmd = build_command();
    let matches = match cmd.try_get_matches_from_mut(std::env::args_os()) {
        Ok(matches) => matches,
        Err(e) => {
            // --help and --version land here too, with exit code 0
            let _ = e.print();
            return if e.exit_code() == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    if let Err(e) = init_logging(matches.get_flag("verbose")) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let Some(subcommand) = matches.subcommand() else {
        eprintln!("{}", cmd.render_usage());
        return ExitCode::FAILURE;
    };

    match execute(subcommand, &matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "query failed");
            eprintln!("Error: {e}");
            if matches!(
                e.downcast_ref::<LondonBikesError>(),
                Some(LondonBikesError::UnexpectedArguments(_))
            ) {
                eprintln!("{}", cmd.render_usage());
            }
            ExitCode::from(exit_code(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        build_command()
            .try_get_matches_from(std::iter::once("londonbikes").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_search_accepts_negative_longitude() {
        let matches = parse(&["search", "51.5027", "-0.1527", "100"]);
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "search");
        assert_eq!(positional(sub), vec!["51.5027", "-0.1527", "100"]);
    }

    #[test]
    fn test_options_before_subcommand() {
        let matches = parse(&["--output", "json", "-v", "id", "BikePoints_1"]);
        assert_eq!(
            matches.get_one::<OutputFormat>("output"),
            Some(&OutputFormat::Json)
        );
        assert!(matches.get_flag("verbose"));
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(positional(sub), vec!["BikePoints_1"]);
    }

    #[test]
    fn test_options_after_subcommand_are_arguments() {
        let matches = parse(&["id", "BikePoints_1", "--output", "json"]);
        assert_eq!(
            matches.get_one::<OutputFormat>("output"),
            Some(&OutputFormat::Table)
        );
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(positional(sub), vec!["BikePoints_1", "--output", "json"]);
    }

    #[test]
    fn test_search_term_starting_with_hyphen() {
        let matches = parse(&["search", "-Park"]);
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(positional(sub), vec!["-Park"]);
    }

    #[test]
    fn test_search_term_that_looks_like_a_flag() {
        let matches = parse(&["search", "-v"]);
        assert!(!matches.get_flag("verbose"));
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(positional(sub), vec!["-v"]);
    }

    #[test]
    fn test_empty_search_parses() {
        let matches = parse(&["search"]);
        let (_, sub) = matches.subcommand().unwrap();
        assert!(positional(sub).is_empty());
    }

    #[test]
    fn test_exit_code_mapping() {
        let err = anyhow::Error::new(LondonBikesError::MissingId);
        assert_eq!(exit_code(&err), 12);
        let err = anyhow::anyhow!("anything else");
        assert_eq!(exit_code(&err), 1);
    }
}
