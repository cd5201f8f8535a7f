// Date utility functions
// Shared helpers for the layout engine and the views

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime, Timelike};

/// Check whether a timestamp falls on the given calendar day.
pub fn is_on_day(ts: DateTime<Local>, day: NaiveDate) -> bool {
    ts.date_naive() == day
}

/// Hour-of-day as a decimal with minute precision (09:30 -> 9.5).
pub fn hour_decimal(time: NaiveTime) -> f32 {
    time.hour() as f32 + time.minute() as f32 / 60.0
}

/// Parse an "HH:MM" string into a time of day.
pub fn parse_hhmm(raw: &str) -> Option<NaiveTime> {
    let (hours, minutes) = raw.trim().split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

/// Calculate the start of the week containing the given date.
///
/// `week_starts_on` follows the usual convention: 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, week_starts_on: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - week_starts_on as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// The seven days of the week containing `date`.
pub fn week_days(date: NaiveDate, week_starts_on: u8) -> Vec<NaiveDate> {
    let start = week_start(date, week_starts_on);
    (0..7).map(|i| start + Duration::days(i)).collect()
}
