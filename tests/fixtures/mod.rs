// Test fixtures - reusable test data
// Event constructors shared across the integration test files

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use daygrid::models::event::Event;

/// The reference day used throughout the integration tests: Saturday,
/// April 5, 2025.
pub fn base_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 5).unwrap()
}

pub fn at(day: NaiveDate, hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .from_local_datetime(&day.and_hms_opt(hour, minute, 0).unwrap())
        .single()
        .unwrap()
}

/// Timed event on `base_day`.
pub fn timed(title: &str, start: (u32, u32), end: (u32, u32)) -> Event {
    let day = base_day();
    Event::new(title, at(day, start.0, start.1), at(day, end.0, end.1)).unwrap()
}

/// All-day event on `base_day`.
#[allow(dead_code)]
pub fn all_day(title: &str) -> Event {
    let day = base_day();
    let mut event = Event::new(title, at(day, 0, 0), at(day, 23, 59)).unwrap();
    event.all_day = true;
    event
}

/// Event spanning from `start_day`+`start` to `end_day`+`end`.
#[allow(dead_code)]
pub fn spanning(
    title: &str,
    start_day: NaiveDate,
    start: (u32, u32),
    end_day: NaiveDate,
    end: (u32, u32),
) -> Event {
    Event::new(
        title,
        at(start_day, start.0, start.1),
        at(end_day, end.0, end.1),
    )
    .unwrap()
}
