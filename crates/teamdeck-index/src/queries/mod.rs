pub mod activity;
pub mod agents;
pub mod history;
pub mod shifts;
pub mod swaps;
pub mod tasks;
pub mod workload;

use chrono::{DateTime, NaiveDate, Utc};
use teamdeck_types::{parse_date, parse_timestamp};

/// Lenient timestamp column: blank is absent, garbage is absent with a warning
pub(crate) fn timestamp_column(raw: Option<String>, column: &str) -> Option<DateTime<Utc>> {
    let raw = non_empty(raw)?;
    match parse_timestamp(&raw) {
        Ok(ts) => Some(ts),
        Err(err) => {
            tracing::warn!(column, value = %raw, "ignoring timestamp: {}", err);
            None
        }
    }
}

pub(crate) fn date_column(raw: &str, column: &str) -> Option<NaiveDate> {
    match parse_date(raw) {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::warn!(column, value = %raw, "skipping row: {}", err);
            None
        }
    }
}

pub(crate) fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty())
}

/// SQLite counts are signed
pub(crate) fn count(raw: i64) -> u64 {
    raw.max(0) as u64
}
