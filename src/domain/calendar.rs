//! Calendar helpers for cancellation dates.

use chrono::{Datelike, Duration, NaiveDate};

/// Advances `date` by one calendar month, keeping the day of month.
///
/// A day that does not exist in the next month overflows into the month
/// after it instead of being clamped: Jan 31 becomes Mar 3 (Mar 2 in a
/// leap year). Works on calendar dates only, so local time zone and
/// daylight-saving shifts never change the result. Returns `None` past the
/// end of the supported calendar.
pub fn add_one_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year().checked_add(1)?, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    first_of_month.checked_add_signed(Duration::days(i64::from(date.day0())))
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_one_month_regular_day() {
        assert_eq!(add_one_month(date(2024, 2, 10)), Some(date(2024, 3, 10)));
        assert_eq!(add_one_month(date(2024, 1, 28)), Some(date(2024, 2, 28)));
    }

    #[test]
    fn test_add_one_month_overflows_short_month() {
        assert_eq!(add_one_month(date(2023, 1, 31)), Some(date(2023, 3, 3)));
        assert_eq!(add_one_month(date(2024, 1, 31)), Some(date(2024, 3, 2)));
        assert_eq!(add_one_month(date(2024, 1, 30)), Some(date(2024, 3, 1)));
        assert_eq!(add_one_month(date(2024, 1, 29)), Some(date(2024, 2, 29)));
        assert_eq!(add_one_month(date(2024, 3, 31)), Some(date(2024, 5, 1)));
    }

    #[test]
    fn test_add_one_month_year_rollover() {
        assert_eq!(add_one_month(date(2024, 12, 31)), Some(date(2025, 1, 31)));
        assert_eq!(add_one_month(date(2024, 12, 1)), Some(date(2025, 1, 1)));
    }

    #[test]
    fn test_add_one_month_end_of_calendar() {
        assert_eq!(add_one_month(NaiveDate::MAX), None);
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 3, 10)), 69);
        assert_eq!(days_between(date(2024, 1, 1), date(2025, 1, 1)), 366);
        assert_eq!(days_between(date(2024, 3, 10), date(2024, 3, 1)), -9);
    }
}
