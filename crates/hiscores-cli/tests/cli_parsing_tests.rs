//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without executing the commands (which would hit the live leaderboard).

#[path = "../src/cli.rs"]
#[allow(dead_code)]
mod cli;

use clap::Parser;
use cli::{Args, Command, GranularityArg, OutputFormat};
use hiscores_core::{ExportFormat, Granularity};
use std::path::PathBuf;

#[test]
fn test_parse_fetch_defaults() {
    let args = Args::try_parse_from(["hiscores", "fetch", "Zezima"]).unwrap();
    assert_eq!(args.config, PathBuf::from("hiscores.toml"));
    match args.command {
        Command::Fetch {
            players,
            format,
            output,
            warn_secs,
            timeout,
            retries,
        } => {
            assert_eq!(players, vec!["Zezima".to_string()]);
            assert_eq!(format, OutputFormat::Json);
            assert!(output.is_none());
            assert!(warn_secs.is_none());
            assert!(timeout.is_none());
            assert_eq!(retries, 0);
        }
        _ => panic!("Expected Fetch command"),
    }
}

#[test]
fn test_parse_fetch_multiple_players_with_options() {
    let args = Args::try_parse_from([
        "hiscores",
        "fetch",
        "Zezima",
        "Iron Hyger",
        "--format",
        "tsv",
        "--warn-secs",
        "5",
        "--timeout",
        "12.5",
        "--retries",
        "2",
        "-o",
        "out.jsonl",
    ])
    .unwrap();
    match args.command {
        Command::Fetch {
            players,
            format,
            output,
            warn_secs,
            timeout,
            retries,
        } => {
            assert_eq!(players, vec!["Zezima".to_string(), "Iron Hyger".to_string()]);
            assert_eq!(ExportFormat::from(format), ExportFormat::Tsv);
            assert_eq!(output, Some(PathBuf::from("out.jsonl")));
            assert_eq!(warn_secs, Some(5));
            assert_eq!(timeout, Some(12.5));
            assert_eq!(retries, 2);
        }
        _ => panic!("Expected Fetch command"),
    }
}

#[test]
fn test_parse_fetch_requires_player() {
    assert!(Args::try_parse_from(["hiscores", "fetch"]).is_err());
}

#[test]
fn test_parse_global_config_after_subcommand() {
    let args =
        Args::try_parse_from(["hiscores", "endpoint", "Zezima", "--config", "alt.toml"]).unwrap();
    assert_eq!(args.config, PathBuf::from("alt.toml"));
    assert!(matches!(args.command, Command::Endpoint { ref player } if player == "Zezima"));
}

#[test]
fn test_parse_parse_command() {
    let args = Args::try_parse_from([
        "hiscores",
        "parse",
        "payload.txt",
        "--player",
        "Zezima",
        "-f",
        "console",
    ])
    .unwrap();
    match args.command {
        Command::Parse {
            file,
            player,
            format,
        } => {
            assert_eq!(file, PathBuf::from("payload.txt"));
            assert_eq!(player, "Zezima");
            assert_eq!(format, OutputFormat::Console);
        }
        _ => panic!("Expected Parse command"),
    }
}

#[test]
fn test_parse_parse_requires_player() {
    assert!(Args::try_parse_from(["hiscores", "parse", "payload.txt"]).is_err());
}

#[test]
fn test_parse_query_params() {
    let args = Args::try_parse_from([
        "hiscores",
        "query-params",
        "Zezima",
        "--start",
        "2021-06-01",
        "--end",
        "2021-06-02",
        "--granularity",
        "aggregated",
    ])
    .unwrap();
    match args.command {
        Command::QueryParams {
            player,
            start,
            end,
            granularity,
        } => {
            assert_eq!(player, "Zezima");
            assert_eq!(start, "2021-06-01");
            assert_eq!(end, "2021-06-02");
            assert_eq!(Granularity::from(granularity), Granularity::Aggregated);
        }
        _ => panic!("Expected QueryParams command"),
    }
}

#[test]
fn test_parse_invalid_format() {
    assert!(Args::try_parse_from(["hiscores", "fetch", "Zezima", "--format", "xml"]).is_err());
}

#[test]
fn test_granularity_default() {
    let args = Args::try_parse_from([
        "hiscores",
        "query-params",
        "Zezima",
        "--start",
        "2021-06-01",
        "--end",
        "2021-06-01",
    ])
    .unwrap();
    assert!(matches!(
        args.command,
        Command::QueryParams {
            granularity: GranularityArg::Granular,
            ..
        }
    ));
}
