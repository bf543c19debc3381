//! Time utilities: parsing punch timestamps, formatting durations.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Parse `--at`:
/// - `YYYY-MM-DD HH:MM[:SS]` (or with `T`)
/// - `HH:MM[:SS]` → on `default_day`
pub fn parse_timestamp(s: &str, default_day: NaiveDate) -> AppResult<NaiveDateTime> {
    let s = s.trim();

    if let Some(t) = parse_time(s) {
        return Ok(default_day.and_time(t));
    }

    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    Err(AppError::InvalidTime(s.to_string()))
}

/// Punch time: explicit `--at` or the local wall clock, truncated to seconds.
pub fn timestamp_or_now(at: Option<&String>) -> AppResult<NaiveDateTime> {
    let now = Local::now().naive_local();
    match at {
        Some(raw) => parse_timestamp(raw, now.date()),
        None => Ok(now.with_nanosecond(0).unwrap_or(now)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_time_lands_on_default_day() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let ts = parse_timestamp("08:00", day).unwrap();
        assert_eq!(ts.to_string(), "2025-03-10 08:00:00");
    }

    #[test]
    fn full_timestamp_overrides_default_day() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let ts = parse_timestamp("2025-01-02 17:30:15", day).unwrap();
        assert_eq!(ts.to_string(), "2025-01-02 17:30:15");
        assert!(parse_timestamp("25:00", day).is_err());
    }
}
