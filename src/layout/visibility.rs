//! Partitions the events of a day into all-day, visible, and hidden sets.

use chrono::NaiveDate;

use super::window::TimeWindow;
use crate::models::event::Event;
use crate::utils::date::{hour_decimal, is_on_day};

/// Result of filtering one day's events against the visible window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayEvents {
    pub all_day: Vec<Event>,
    pub visible: Vec<Event>,
    pub hidden: Vec<Event>,
}

impl DayEvents {
    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }
}

/// Does the event touch `day` at all? Spanning events count on every day
/// between their start and end dates.
pub fn touches_day(event: &Event, day: NaiveDate) -> bool {
    is_on_day(event.start, day)
        || is_on_day(event.end, day)
        || (event.start.date_naive() <= day && day <= event.end.date_naive())
}

/// Whether a timed event intersects the visible window.
///
/// The end hour is inclusive of its full hour: an event ending exactly at
/// `end_hour:00` stays visible, while an event ending exactly at
/// `start_hour:00` is hidden. Multi-day events are judged by their raw
/// start/end times of day, matching the per-day clipping the projector
/// applies later.
pub fn is_event_visible(event: &Event, window: TimeWindow) -> bool {
    if event.all_day {
        return true;
    }

    let event_start = hour_decimal(event.start.time());
    let event_end = hour_decimal(event.end.time());

    event_end > window.start_hour() as f32 && event_start < window.upper_bound()
}

/// Partition all events relevant to `day` into `{all_day, visible, hidden}`.
///
/// Every event touching the day lands in exactly one of the three sets;
/// events not touching the day are absent from all of them.
pub fn partition_for_day(events: &[Event], day: NaiveDate, window: TimeWindow) -> DayEvents {
    let mut result = DayEvents::default();

    for event in events.iter().filter(|e| touches_day(e, day)) {
        if event.all_day {
            result.all_day.push(event.clone());
        } else if is_event_visible(event, window) {
            result.visible.push(event.clone());
        } else {
            result.hidden.push(event.clone());
        }
    }

    result
}

/// User-facing warning for events excluded by the current window.
pub fn hidden_warning(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some(
            "Warning: 1 event is outside the selected time range and is not visible.".to_string(),
        ),
        n => Some(format!(
            "Warning: {} events are outside the selected time range and are not visible.",
            n
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use test_case::test_case;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 5).unwrap()
    }

    fn timed(title: &str, start: (u32, u32), end: (u32, u32)) -> Event {
        let start = Local
            .with_ymd_and_hms(2025, 4, 5, start.0, start.1, 0)
            .unwrap();
        let end = Local.with_ymd_and_hms(2025, 4, 5, end.0, end.1, 0).unwrap();
        Event::new(title, start, end).unwrap()
    }

    fn all_day(title: &str) -> Event {
        let start = Local.with_ymd_and_hms(2025, 4, 5, 0, 0, 0).unwrap();
        let end = Local.with_ymd_and_hms(2025, 4, 5, 23, 59, 0).unwrap();
        let mut event = Event::new(title, start, end).unwrap();
        event.all_day = true;
        event
    }

    #[test]
    fn test_partition_is_exhaustive_and_exclusive() {
        let events = vec![
            timed("Morning run", (6, 0), (7, 0)),
            timed("Standup", (9, 0), (9, 15)),
            all_day("Holiday"),
        ];
        let window = TimeWindow::new(8, 18).unwrap();

        let partition = partition_for_day(&events, day(), window);
        assert_eq!(partition.all_day.len(), 1);
        assert_eq!(partition.visible.len(), 1);
        assert_eq!(partition.hidden.len(), 1);
        assert_eq!(
            partition.all_day.len() + partition.visible.len() + partition.hidden.len(),
            events.len()
        );
    }

    #[test]
    fn test_irrelevant_day_yields_nothing() {
        let events = vec![timed("Standup", (9, 0), (9, 15))];
        let other_day = NaiveDate::from_ymd_opt(2025, 4, 9).unwrap();

        let partition = partition_for_day(&events, other_day, TimeWindow::full_day());
        assert_eq!(partition, DayEvents::default());
    }

    #[test]
    fn test_spanning_event_included_on_middle_day() {
        let start = Local.with_ymd_and_hms(2025, 4, 4, 18, 0, 0).unwrap();
        let end = Local.with_ymd_and_hms(2025, 4, 6, 9, 0, 0).unwrap();
        let event = Event::new("Conference", start, end).unwrap();

        assert!(touches_day(&event, day()));
        assert!(touches_day(
            &event,
            NaiveDate::from_ymd_opt(2025, 4, 4).unwrap()
        ));
        assert!(touches_day(
            &event,
            NaiveDate::from_ymd_opt(2025, 4, 6).unwrap()
        ));
        assert!(!touches_day(
            &event,
            NaiveDate::from_ymd_opt(2025, 4, 7).unwrap()
        ));
    }

    // Boundary policy: the end hour is inclusive of its full hour, the
    // window start is a hard lower edge.
    #[test_case((9, 0), (10, 0), 10, 23, false; "ends exactly at window start is hidden")]
    #[test_case((17, 0), (18, 0), 8, 18, true; "ends exactly at window end is visible")]
    #[test_case((18, 0), (19, 0), 8, 18, true; "starts at end hour is visible")]
    #[test_case((19, 0), (20, 0), 8, 18, false; "starts after end hour is hidden")]
    #[test_case((9, 30), (11, 0), 10, 23, true; "straddles window start is visible")]
    fn test_visibility_boundaries(
        start: (u32, u32),
        end: (u32, u32),
        from: u8,
        to: u8,
        expected: bool,
    ) {
        let event = timed("Boundary", start, end);
        let window = TimeWindow::new(from, to).unwrap();
        assert_eq!(is_event_visible(&event, window), expected);
    }

    #[test]
    fn test_all_day_ignores_window() {
        let event = all_day("Holiday");
        assert!(is_event_visible(&event, TimeWindow::new(8, 9).unwrap()));
    }

    #[test]
    fn test_widening_never_hides_more() {
        let events = vec![
            timed("A", (6, 0), (7, 0)),
            timed("B", (9, 0), (10, 0)),
            timed("C", (20, 0), (21, 0)),
        ];
        let narrow = partition_for_day(&events, day(), TimeWindow::new(9, 17).unwrap());
        let wide = partition_for_day(&events, day(), TimeWindow::new(5, 22).unwrap());
        assert!(wide.hidden_count() <= narrow.hidden_count());
    }

    #[test]
    fn test_hidden_warning_pluralization() {
        assert_eq!(hidden_warning(0), None);
        assert_eq!(
            hidden_warning(1).unwrap(),
            "Warning: 1 event is outside the selected time range and is not visible."
        );
        assert_eq!(
            hidden_warning(3).unwrap(),
            "Warning: 3 events are outside the selected time range and are not visible."
        );
    }

    #[test]
    fn test_empty_input() {
        let partition = partition_for_day(&[], day(), TimeWindow::full_day());
        assert_eq!(partition, DayEvents::default());
    }
}
