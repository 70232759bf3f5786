//! Whole-day date helpers: parsing and month arithmetic.

use chrono::{Datelike, Months, NaiveDate, NaiveTime};

use crate::error::{SportCalError, SportCalResult};

/// Column labels for a Monday-first week.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Parse `YYYY-MM-DD`.
pub fn parse_iso_date(s: &str) -> SportCalResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| SportCalError::InvalidDate(s.to_string()))
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> SportCalResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| SportCalError::InvalidDate(s.to_string()))
}

/// Validate a wall-clock `HH:MM` string and return it normalized.
pub fn parse_time(s: &str) -> SportCalResult<String> {
    let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| SportCalError::InvalidTime(s.to_string()))?;
    Ok(time.format("%H:%M").to_string())
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn month_end(date: NaiveDate) -> NaiveDate {
    let start = month_start(date);
    start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Move `date` by `delta` whole months, clamping the day to the target
/// month's length (Jan 31 + 1 month = Feb 28/29).
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_iso_date("2025-10-15").unwrap(), d(2025, 10, 15));
        assert!(parse_iso_date("2025-02-30").is_err());
        assert!(parse_iso_date("15/10/2025").is_err());
    }

    #[test]
    fn parses_months() {
        assert_eq!(parse_month("2025-11").unwrap(), d(2025, 11, 1));
        assert!(parse_month("2025-13").is_err());
    }

    #[test]
    fn normalizes_times() {
        assert_eq!(parse_time(" 09:05 ").unwrap(), "09:05");
        assert_eq!(parse_time("18:30").unwrap(), "18:30");
        assert!(parse_time("25:00").is_err());
    }

    #[test]
    fn month_bounds() {
        assert_eq!(month_start(d(2025, 10, 15)), d(2025, 10, 1));
        assert_eq!(month_end(d(2025, 10, 15)), d(2025, 10, 31));
        assert_eq!(month_end(d(2024, 2, 10)), d(2024, 2, 29));
        assert_eq!(month_end(d(2025, 12, 3)), d(2025, 12, 31));
    }

    #[test]
    fn shifting_months_clamps_day() {
        assert_eq!(shift_month(d(2025, 1, 31), 1), d(2025, 2, 28));
        assert_eq!(shift_month(d(2025, 10, 1), -1), d(2025, 9, 1));
        assert_eq!(shift_month(d(2025, 12, 15), 1), d(2026, 1, 15));
        assert_eq!(shift_month(d(2025, 3, 15), 0), d(2025, 3, 15));
    }
}
