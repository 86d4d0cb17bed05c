//! CLI argument definitions for hiscores.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use hiscores_core::{ExportFormat, Granularity};

#[derive(Parser)]
#[command(name = "hiscores")]
#[command(about = "OSRS Hiscores fetcher", version)]
pub struct Args {
    /// Path to config file (TOML)
    #[arg(short, long, global = true, env = "HISCORES_CONFIG", default_value = "hiscores.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch and parse stats for one or more players
    Fetch {
        /// Player names
        #[arg(required = true, num_args = 1..)]
        players: Vec<String>,
        /// Output format for stdout
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
        /// Append JSON lines to this file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Warn when a response takes longer than this many seconds
        #[arg(long, env = "HISCORES_WARN_SECS")]
        warn_secs: Option<u64>,
        /// Request timeout in seconds
        #[arg(long, env = "HISCORES_TIMEOUT")]
        timeout: Option<f64>,
        /// Extra attempts when the service is unavailable
        #[arg(long, default_value = "0")]
        retries: u32,
    },
    /// Show which leaderboard endpoint a player name maps to
    Endpoint {
        /// Player name
        player: String,
    },
    /// Parse a saved Hiscores payload
    Parse {
        /// File containing the raw response body
        file: PathBuf,
        /// Player name to attach
        #[arg(long)]
        player: String,
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Print query parameters for the stats query API
    QueryParams {
        /// Player name
        player: String,
        /// Window start (`YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`)
        #[arg(long)]
        start: String,
        /// Window end (`YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`)
        #[arg(long)]
        end: String,
        #[arg(long, value_enum, default_value = "granular")]
        granularity: GranularityArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Tsv,
    Console,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ExportFormat::Json,
            OutputFormat::Tsv => ExportFormat::Tsv,
            OutputFormat::Console => ExportFormat::Console,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GranularityArg {
    Granular,
    Aggregated,
}

impl From<GranularityArg> for Granularity {
    fn from(arg: GranularityArg) -> Self {
        match arg {
            GranularityArg::Granular => Granularity::Granular,
            GranularityArg::Aggregated => Granularity::Aggregated,
        }
    }
}
