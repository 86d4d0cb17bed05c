use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Schema field name to value for a single skill or activity.
pub type StatLine = BTreeMap<String, i64>;

/// Parsed body of a Hiscores response, before request metadata is attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiscoresStats {
    pub skills: BTreeMap<String, StatLine>,
    pub activities: BTreeMap<String, StatLine>,
}

/// A player's full stat snapshot as handed to the aggregation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedStats {
    pub skills: BTreeMap<String, StatLine>,
    pub activities: BTreeMap<String, StatLine>,
    pub player: String,
    /// Capture time, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
}

impl ParsedStats {
    pub fn new(stats: HiscoresStats, player: String, timestamp: String) -> Self {
        Self {
            skills: stats.skills,
            activities: stats.activities,
            player,
            timestamp,
        }
    }

    pub fn skill(&self, name: &str) -> Option<&StatLine> {
        self.skills.get(name)
    }

    pub fn activity(&self, name: &str) -> Option<&StatLine> {
        self.activities.get(name)
    }

    /// Total level and experience from the `overall` line, if ranked.
    pub fn overall(&self) -> Option<(i64, i64)> {
        let line = self.skill("overall")?;
        Some((*line.get("level")?, *line.get("experience")?))
    }
}
