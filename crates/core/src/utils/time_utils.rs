use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Default timezone for reporting windows ("today", "this month", "this year").
pub const DEFAULT_REPORTING_TZ: Tz = chrono_tz::UTC;

/// Converts a UTC instant to the calendar date observed in `tz`.
pub fn reporting_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// The UTC instant at which `date` begins in `tz`.
///
/// When a DST transition skips local midnight, the day starts at the first
/// valid local time after the gap.
pub fn start_of_local_day(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(midnight + Duration::hours(1)))
                .earliest()
        })
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}

/// Start of the calendar day containing `now`.
pub fn start_of_day(now: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    start_of_local_day(reporting_date_from_utc(now, tz), tz)
}

/// Start of the calendar month containing `now`.
pub fn start_of_month(now: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    let today = reporting_date_from_utc(now, tz);
    start_of_local_day(today.with_day(1).unwrap_or(today), tz)
}

/// Start of the calendar year containing `now`.
pub fn start_of_year(now: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    let today = reporting_date_from_utc(now, tz);
    let first_day = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
    start_of_local_day(first_day, tz)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_window_starts_in_utc() {
        let now = utc("2024-03-15T14:30:00Z");
        assert_eq!(start_of_day(now, DEFAULT_REPORTING_TZ), utc("2024-03-15T00:00:00Z"));
        assert_eq!(start_of_month(now, DEFAULT_REPORTING_TZ), utc("2024-03-01T00:00:00Z"));
        assert_eq!(start_of_year(now, DEFAULT_REPORTING_TZ), utc("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_window_starts_follow_reporting_timezone() {
        // 02:00 UTC on March 1st is still February 29th in New York.
        let now = utc("2024-03-01T02:00:00Z");
        let tz = chrono_tz::America::New_York;
        assert_eq!(start_of_day(now, tz), utc("2024-02-29T05:00:00Z"));
        assert_eq!(start_of_month(now, tz), utc("2024-02-01T05:00:00Z"));
        assert_eq!(start_of_year(now, tz), utc("2024-01-01T05:00:00Z"));
    }

    #[test]
    fn test_start_of_day_when_midnight_is_skipped() {
        // Santiago skipped 00:00 local on 2023-09-03.
        let tz = chrono_tz::America::Santiago;
        let date = NaiveDate::from_ymd_opt(2023, 9, 3).unwrap();
        assert_eq!(start_of_local_day(date, tz), utc("2023-09-03T04:00:00Z"));
    }
}
