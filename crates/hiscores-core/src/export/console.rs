//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::catalog::{ACTIVITIES, SKILLS};
use crate::stats::ParsedStats;

const MAX_LEVEL: i64 = 99;

/// Format stats as a boxed multi-line summary.
///
/// Unranked activities (rank `-1`) are left out to keep the boss list short.
pub fn format_stats_console(stats: &ParsedStats) -> String {
    let mut output = String::new();

    let title = format!("  {} @ {}", stats.player.bold(), stats.timestamp);
    let border_width = (stats.player.len() + stats.timestamp.len() + 6).max(50);
    let border: String = "━".repeat(border_width);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "{}", title);
    if let Some((level, experience)) = stats.overall() {
        let _ = writeln!(output, "  Total level {} ({} xp)", level.bold(), experience);
    }
    let _ = writeln!(output, "{}", border_dim);

    for name in SKILLS {
        let Some(line) = stats.skill(name) else {
            continue;
        };
        let level = line.get("level").copied().unwrap_or(-1);
        let experience = line.get("experience").copied().unwrap_or(-1);
        let _ = writeln!(
            output,
            "  {:<14} {:>5} {:>13}",
            name,
            format_colored_level(name, level),
            experience
        );
    }

    let ranked: Vec<_> = ACTIVITIES
        .iter()
        .filter_map(|name| stats.activity(name).map(|line| (name, line)))
        .filter(|(_, line)| line.get("rank").is_some_and(|rank| *rank >= 0))
        .collect();

    if !ranked.is_empty() {
        let _ = writeln!(output, "{}", border_dim);
        for (name, line) in ranked {
            let score = line.get("score").copied().unwrap_or(-1);
            let _ = writeln!(output, "  {:<32} {:>8}", name, score.cyan());
        }
    }

    let _ = write!(output, "{}", border_dim);
    output
}

fn format_colored_level(name: &str, level: i64) -> String {
    if name == "overall" {
        return level.bold().to_string();
    }
    match level {
        l if l >= MAX_LEVEL => l.yellow().to_string(),
        l if l < 0 => "-".dimmed().to_string(),
        l => l.to_string(),
    }
}
