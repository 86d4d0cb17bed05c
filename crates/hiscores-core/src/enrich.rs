//! Attach request metadata (player name, capture time) to parsed stats.

use chrono::{Local, NaiveDateTime};
use url::Url;

use crate::error::{Error, Result};
use crate::network::HiscoresResponse;
use crate::parse::sanitize_hiscores_stats;
use crate::stats::ParsedStats;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of capture timestamps.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Recover the player name from the echoed request URL.
///
/// The query string must be exactly `player=<name>`. A `+` in the name
/// decodes to a space.
pub fn player_from_request_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|_| Error::InvalidRequestEcho(url.to_string()))?;
    let query = parsed.query().unwrap_or_default();

    let mut pairs = query.split('&');
    let (Some(pair), None) = (pairs.next(), pairs.next()) else {
        return Err(Error::InvalidRequestEcho(query.to_string()));
    };

    match pair.split('=').collect::<Vec<_>>().as_slice() {
        ["player", value] => Ok(value.replace('+', " ")),
        _ => Err(Error::InvalidRequestEcho(query.to_string())),
    }
}

/// Parse a successful response body and label it with player and capture time.
pub fn process_hiscores_response<C: Clock>(
    response: &HiscoresResponse,
    clock: &C,
) -> Result<ParsedStats> {
    let stats = sanitize_hiscores_stats(&response.body)?;
    let player = player_from_request_url(&response.url)?;
    let timestamp = format_timestamp(clock.now());
    Ok(ParsedStats::new(stats, player, timestamp))
}
