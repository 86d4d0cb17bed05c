//! # hiscores-core
//!
//! Retrieval and parsing of Old School RuneScape Hiscores lite data.
//!
//! This crate provides:
//! - Endpoint selection for regular and ironman leaderboards
//! - A single-attempt blocking fetcher with outage detection
//! - Schema-checked parsing of the line-oriented CSV payload
//! - Labelling of parsed stats with player name and capture time
//!
//! The pipeline runs strictly in that order via [`HiscoresClient::fetch_stats`].

pub mod catalog;
pub mod config;
pub mod endpoint;
pub mod enrich;
pub mod error;
pub mod export;
pub mod network;
pub mod parse;
pub mod query;
pub mod retry;
pub mod sink;
pub mod stats;

#[cfg(test)]
mod test_support;

pub use catalog::{ACTIVITIES, ACTIVITY_SCHEMA, SKILL_SCHEMA, SKILLS, Schema};
pub use config::{Endpoints, HiscoresConfig};
pub use endpoint::{AccountType, select_endpoint};
pub use enrich::{
    Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT, player_from_request_url,
    process_hiscores_response,
};
pub use error::{Error, Result};
pub use export::{ExportFormat, format_stats_console, render};
pub use network::{
    HiscoresClient, HiscoresResponse, HiscoresTransport, ReqwestTransport, check_response,
};
pub use parse::{parse_line, sanitize_hiscores_stats};
pub use query::{Granularity, QueryWindow};
pub use retry::{ExponentialBackoff, FixedDelay, NoRetry, RetryStrategy};
pub use sink::{JsonLinesSink, MemorySink, StatsSink};
pub use stats::{HiscoresStats, ParsedStats, StatLine};
