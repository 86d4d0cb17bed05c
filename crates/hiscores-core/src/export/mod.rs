//! Export formats for parsed stats.

mod console;

pub use console::format_stats_console;

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::catalog::{ACTIVITIES, SKILLS};
use crate::error::Result;
use crate::stats::{ParsedStats, StatLine};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, IntoStaticStr,
)]
pub enum ExportFormat {
    #[default]
    #[strum(serialize = "json")]
    Json,
    #[strum(serialize = "tsv")]
    Tsv,
    #[strum(serialize = "console")]
    Console,
}

pub fn format_tsv_header() -> String {
    [
        "player",
        "timestamp",
        "category",
        "name",
        "rank",
        "level",
        "value",
    ]
    .join("\t")
}

fn field(line: &StatLine, name: &str) -> String {
    line.get(name)
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// One row per skill and activity, in catalog order.
///
/// `value` is experience for skills and score for activities. Activities have
/// no level, so that column is `-`.
pub fn format_tsv_rows(stats: &ParsedStats) -> Vec<String> {
    let skills = SKILLS.iter().filter_map(|name| {
        stats.skill(name).map(|line| {
            [
                stats.player.clone(),
                stats.timestamp.clone(),
                "skill".to_string(),
                name.to_string(),
                field(line, "rank"),
                field(line, "level"),
                field(line, "experience"),
            ]
            .join("\t")
        })
    });

    let activities = ACTIVITIES.iter().filter_map(|name| {
        stats.activity(name).map(|line| {
            [
                stats.player.clone(),
                stats.timestamp.clone(),
                "activity".to_string(),
                name.to_string(),
                field(line, "rank"),
                "-".to_string(),
                field(line, "score"),
            ]
            .join("\t")
        })
    });

    skills.chain(activities).collect()
}

pub fn format_json(stats: &ParsedStats) -> Result<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}

/// Render stats in the requested format.
pub fn render(stats: &ParsedStats, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => format_json(stats),
        ExportFormat::Tsv => {
            let mut out = vec![format_tsv_header()];
            out.extend(format_tsv_rows(stats));
            Ok(out.join("\n"))
        }
        ExportFormat::Console => Ok(format_stats_console(stats)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::HiscoresStats;

    fn line(pairs: &[(&str, i64)]) -> StatLine {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn sample() -> ParsedStats {
        let mut stats = HiscoresStats::default();
        stats.skills.insert(
            "attack".into(),
            line(&[("rank", 5), ("level", 99), ("experience", 13_034_431)]),
        );
        stats.skills.insert(
            "overall".into(),
            line(&[("rank", 10), ("level", 1500), ("experience", 50_000_000)]),
        );
        stats
            .activities
            .insert("zulrah".into(), line(&[("rank", 300), ("score", 1200)]));
        ParsedStats::new(stats, "Zezima".into(), "2021-01-01 00:00:00".into())
    }

    #[test]
    fn test_format_tsv_header() {
        let header = format_tsv_header();
        assert!(header.starts_with("player\t"));
        assert_eq!(header.split('\t').count(), 7);
    }

    #[test]
    fn test_tsv_rows_follow_catalog_order() {
        let rows = format_tsv_rows(&sample());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("\toverall\t"));
        assert!(rows[1].contains("\tattack\t"));
        assert_eq!(
            rows[2],
            "Zezima\t2021-01-01 00:00:00\tactivity\tzulrah\t300\t-\t1200"
        );
    }

    #[test]
    fn test_render_json_roundtrips() {
        let json = render(&sample(), ExportFormat::Json).unwrap();
        let back: ParsedStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_render_tsv_includes_header() {
        let tsv = render(&sample(), ExportFormat::Tsv).unwrap();
        assert_eq!(tsv.lines().count(), 4);
        assert_eq!(tsv.lines().next().unwrap(), format_tsv_header());
    }
}
