mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hiscores=info,hiscores_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Fetch {
            players,
            format,
            output,
            warn_secs,
            timeout,
            retries,
        } => {
            let options = commands::fetch::FetchOptions {
                format: format.into(),
                output,
                warn_secs,
                timeout,
                retries,
            };
            commands::fetch::run(&args.config, &players, &options)
        }
        Command::Endpoint { player } => commands::endpoint::run(&args.config, &player),
        Command::Parse {
            file,
            player,
            format,
        } => commands::parse::run(&file, &player, format.into()),
        Command::QueryParams {
            player,
            start,
            end,
            granularity,
        } => commands::query::run(&player, &start, &end, granularity.into()),
    }
}
