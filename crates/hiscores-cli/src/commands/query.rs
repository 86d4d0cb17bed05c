//! Query-params command: build parameters for the stats query API.

use anyhow::{Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime};
use hiscores_core::query::DATE_FORMAT;
use hiscores_core::{Granularity, QueryWindow, TIMESTAMP_FORMAT};
use serde_json::{Map, Value};

pub fn run(player: &str, start: &str, end: &str, granularity: Granularity) -> Result<()> {
    let window = QueryWindow::new(
        player,
        parse_time(start)?,
        parse_time(end)?,
        granularity,
    );
    if window.start > window.end {
        return Err(anyhow!("--start must not be after --end"));
    }

    let params: Map<String, Value> = window
        .params()
        .into_iter()
        .map(|(key, value)| (key.to_string(), Value::String(value)))
        .collect();
    println!("{}", serde_json::to_string_pretty(&params)?);
    Ok(())
}

/// Accept either a full timestamp or a bare date (midnight).
pub fn parse_time(input: &str) -> Result<NaiveDateTime> {
    if let Ok(at) = NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT) {
        return Ok(at);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| anyhow!("Invalid time '{}': expected YYYY-MM-DD[ HH:MM:SS]", input))
}
