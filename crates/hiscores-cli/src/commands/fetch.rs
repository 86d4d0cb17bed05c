//! Fetch command: run the full pipeline for each player.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use hiscores_core::{
    Error, ExponentialBackoff, ExportFormat, HiscoresClient, JsonLinesSink, NoRetry,
    ParsedStats, RetryStrategy, StatsSink, render,
};
use tracing::{error, info, warn};

use super::load_config;

pub struct FetchOptions {
    pub format: ExportFormat,
    pub output: Option<PathBuf>,
    pub warn_secs: Option<u64>,
    pub timeout: Option<f64>,
    pub retries: u32,
}

pub fn run(config_path: &Path, players: &[String], options: &FetchOptions) -> Result<()> {
    let mut config = load_config(config_path);
    if let Some(secs) = options.warn_secs {
        config = config.with_warn_secs(secs);
    }
    if let Some(secs) = options.timeout {
        config = config.with_timeout_secs(secs);
    }
    config.validate().context("Invalid --timeout")?;

    let client = HiscoresClient::new(config).context("Failed to create HTTP client")?;

    let mut sink = match &options.output {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open output file {:?}", path))?;
            Some(JsonLinesSink::new(file))
        }
        None => None,
    };

    let mut failed = Vec::new();
    for player in players {
        let player = player.trim();
        if player.is_empty() {
            warn!("Skipping empty player name");
            continue;
        }

        let result = if options.retries == 0 {
            fetch_one(&client, player, &NoRetry::new())
        } else {
            fetch_one(
                &client,
                player,
                &ExponentialBackoff::with_max_attempts(options.retries + 1),
            )
        };

        match result {
            Ok(stats) => match sink.as_mut() {
                Some(sink) => sink
                    .accept(&stats)
                    .with_context(|| format!("Failed to write stats for {}", player))?,
                None => println!("{}", render(&stats, options.format)?),
            },
            Err(e) => {
                error!("Failed to fetch {}: {}", player, e);
                failed.push(player.to_string());
            }
        }
    }

    if let Some(sink) = &sink {
        info!("Wrote {} snapshot(s)", sink.written());
    }

    if !failed.is_empty() {
        bail!("Failed to fetch {} player(s): {}", failed.len(), failed.join(", "));
    }
    Ok(())
}

fn fetch_one<S: RetryStrategy>(
    client: &HiscoresClient,
    player: &str,
    strategy: &S,
) -> hiscores_core::Result<ParsedStats> {
    strategy.execute_when(Error::is_retryable, |attempt| {
        if attempt > 0 {
            warn!("Retrying {} (attempt {})", player, attempt + 1);
        }
        client.fetch_stats(player)
    })
}
