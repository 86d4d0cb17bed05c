//! Parameters for the downstream stats query API.
//!
//! The aggregation service answers `player`, `startTime`, `endTime` queries.
//! Full timestamps select raw snapshots; bare dates select daily aggregates.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::enrich::TIMESTAMP_FORMAT;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, IntoStaticStr,
)]
pub enum Granularity {
    #[default]
    #[strum(serialize = "granular")]
    Granular,
    #[strum(serialize = "aggregated")]
    Aggregated,
}

impl Granularity {
    pub fn format(&self) -> &'static str {
        match self {
            Self::Granular => TIMESTAMP_FORMAT,
            Self::Aggregated => DATE_FORMAT,
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWindow {
    pub player: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub granularity: Granularity,
}

impl QueryWindow {
    pub fn new(
        player: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        granularity: Granularity,
    ) -> Self {
        Self {
            player: player.into(),
            start,
            end,
            granularity,
        }
    }

    /// Query parameters in request order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let format = self.granularity.format();
        vec![
            ("player", self.player.clone()),
            ("startTime", self.start.format(format).to_string()),
            ("endTime", self.end.format(format).to_string()),
        ]
    }
}
