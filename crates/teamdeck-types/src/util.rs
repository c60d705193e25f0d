use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::{Error, Result};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a timestamp column.
///
/// Accepts RFC 3339 as well as SQLite's `CURRENT_TIMESTAMP` layout
/// (`YYYY-MM-DD HH:MM:SS`, implicitly UTC) and bare dates (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        && let Some(naive) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(naive.and_utc());
    }

    Err(Error::InvalidTimestamp(raw.to_string()))
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| Error::InvalidTimestamp(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_sqlite_timestamp() {
        let ts = parse_timestamp("2026-02-04 09:30:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2026, 2, 4, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let ts = parse_timestamp("2026-02-04T16:30:00+07:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2026, 2, 4, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_bare_date() {
        let ts = parse_timestamp("2026-02-04").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2026, 2, 4, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_garbage_is_an_error() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(Error::InvalidTimestamp(_))
        ));
    }
}
