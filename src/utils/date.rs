use crate::errors::{AppError, AppResult};
use crate::models::date_range::DateRange;
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `--date` helper: explicit day or today.
pub fn date_or_today(s: Option<&String>) -> AppResult<NaiveDate> {
    match s {
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
        None => Ok(today()),
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// Expand one period token into its first and last day.
///
/// Supports `YYYY`, `YYYY-MM` and `YYYY-MM-DD`.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            let d2 = last_day_of_month(d1.year(), d1.month()).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        10 => {
            let d = parse_date(p).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

/// Parse a `--period` value into an inclusive range.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - start:end with both sides in one of the formats above
///
/// An inverted range is an `InvalidQuery`.
pub fn parse_period(p: &str) -> AppResult<DateRange> {
    let p = p.trim();

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());

        if start.len() != end.len() {
            return Err(AppError::InvalidQuery(format!(
                "start and end of '{p}' must have the same format"
            )));
        }

        let (from, _) = period_bounds(start)?;
        let (_, to) = period_bounds(end)?;
        return DateRange::new(from, to);
    }

    let (from, to) = period_bounds(p)?;
    DateRange::new(from, to)
}

/// `--period` helper: explicit period or the current month.
pub fn period_or_current_month(p: Option<&String>) -> AppResult<DateRange> {
    match p {
        Some(raw) => parse_period(raw),
        None => {
            let t = today();
            parse_period(&format!("{:04}-{:02}", t.year(), t.month()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn month_period_covers_whole_month() {
        let r = parse_period("2024-02").unwrap();
        assert_eq!(r.from, d("2024-02-01"));
        assert_eq!(r.to, d("2024-02-29"));

        let r = parse_period("2025-12").unwrap();
        assert_eq!(r.to, d("2025-12-31"));
    }

    #[test]
    fn ranges_expand_both_ends() {
        let r = parse_period("2024-09:2025-09").unwrap();
        assert_eq!(r.from, d("2024-09-01"));
        assert_eq!(r.to, d("2025-09-30"));

        let r = parse_period("2025-03-10").unwrap();
        assert_eq!(r.from, r.to);
    }

    #[test]
    fn inverted_range_is_invalid_query() {
        assert!(matches!(
            parse_period("2025-03-10:2025-03-01"),
            Err(AppError::InvalidQuery(_))
        ));
        assert!(matches!(
            parse_period("2025:2025-03"),
            Err(AppError::InvalidQuery(_))
        ));
    }

    #[test]
    fn garbage_is_invalid_date() {
        assert!(matches!(parse_period("yesterday"), Err(AppError::InvalidDate(_))));
        assert!(matches!(parse_period("2025-13"), Err(AppError::InvalidDate(_))));
    }
}
