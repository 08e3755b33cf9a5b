// Date utility functions

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone};

/// Accepted formats for the target-date config value. The long form matches
/// the deployed literal ("January 25, 2026 00:00:00"); the ISO-like forms are
/// what people actually type into config files.
const TARGET_DATE_FORMATS: &[&str] = &[
    "%B %d, %Y %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a local-time target instant from its config string.
///
/// The value is interpreted in the system's local time zone. Nonexistent
/// local times (spring-forward gaps) are rejected; ambiguous ones resolve to
/// the earlier instant.
pub fn parse_target_instant(value: &str) -> Result<DateTime<Local>> {
    let trimmed = value.trim();
    let naive = TARGET_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            anyhow!(
                "unrecognized date format (expected e.g. \"January 25, 2026 00:00:00\" \
                 or \"2026-01-25T00:00:00\")"
            )
        })?;

    match Local.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(earlier, _later) => Ok(earlier),
        LocalResult::None => Err(anyhow!(
            "{trimmed} does not exist in the local time zone (DST gap)"
        )),
    }
}
