//! Parsing of the Hiscores lite plain-text payload.
//!
//! The payload is one CSV line per catalog entry, in catalog order:
//!
//! ```text
//! 1,2277,4600000000      <- overall: rank,level,experience
//! 12,99,200000000        <- attack
//! ...
//! -1,-1                  <- league_points: rank,score
//! ```

use std::collections::BTreeMap;

use tracing::warn;

use crate::catalog::{self, ACTIVITIES, ACTIVITY_SCHEMA, SKILL_SCHEMA, SKILLS, Schema};
use crate::error::{Error, Result};
use crate::stats::{HiscoresStats, StatLine};

/// Parse one CSV line against a schema.
///
/// The field count must match exactly; every field must be an integer.
pub fn parse_line(line: &str, schema: &Schema) -> Result<StatLine> {
    let line = line.trim_end_matches('\r');
    let values: Vec<&str> = line.split(',').collect();
    if values.len() != schema.fields.len() {
        return Err(Error::SchemaMismatch {
            schema: schema.to_string(),
            line: line.to_string(),
        });
    }

    schema
        .fields
        .iter()
        .zip(values)
        .map(|(field, raw)| {
            raw.trim()
                .parse::<i64>()
                .map(|value| (field.to_string(), value))
                .map_err(|_| Error::InvalidInteger {
                    field: field.to_string(),
                    line: line.to_string(),
                })
        })
        .collect()
}

fn parse_section(
    labels: &[&str],
    lines: &[&str],
    schema: &Schema,
) -> Result<BTreeMap<String, StatLine>> {
    labels
        .iter()
        .zip(lines)
        .map(|(label, line)| -> Result<(String, StatLine)> {
            Ok((label.to_string(), parse_line(line, schema)?))
        })
        .collect()
}

/// Turn a raw response body into labelled skills and activities.
///
/// A line count that differs from the catalog only logs a warning; the lines
/// that are present are still labelled in order. Any line that does not fit
/// its schema aborts the whole parse.
pub fn sanitize_hiscores_stats(text: &str) -> Result<HiscoresStats> {
    let lines: Vec<&str> = text.trim().split('\n').collect();

    let expected = catalog::expected_line_count();
    if lines.len() != expected {
        warn!(
            expected,
            actual = lines.len(),
            "Hiscores response contains an unexpected number of lines; \
             the set of skills or activities returned upstream may have changed"
        );
    }

    let split = SKILLS.len().min(lines.len());
    let (skill_lines, activity_lines) = lines.split_at(split);

    let skills = parse_section(SKILLS, skill_lines, &SKILL_SCHEMA)
        .map_err(|e| Error::MalformedSkillData(Box::new(e)))?;
    let activities = parse_section(ACTIVITIES, activity_lines, &ACTIVITY_SCHEMA)
        .map_err(|e| Error::MalformedActivityData(Box::new(e)))?;

    Ok(HiscoresStats { skills, activities })
}
