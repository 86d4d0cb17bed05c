//! Parse command: label a saved Hiscores payload without touching the network.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hiscores_core::enrich::format_timestamp;
use hiscores_core::{Clock, ExportFormat, ParsedStats, SystemClock, render, sanitize_hiscores_stats};

pub fn run(file: &Path, player: &str, format: ExportFormat) -> Result<()> {
    let text = fs::read_to_string(file).with_context(|| format!("Failed to read {:?}", file))?;
    let stats = sanitize_hiscores_stats(&text)
        .with_context(|| format!("Failed to parse {:?}", file))?;

    let parsed = ParsedStats::new(
        stats,
        player.to_string(),
        format_timestamp(SystemClock.now()),
    );
    println!("{}", render(&parsed, format)?);
    Ok(())
}
