// Property-based tests for the layout engine invariants.

mod fixtures;

use chrono::Duration;
use proptest::prelude::*;

use daygrid::layout::{
    columns, group_overlapping, partition_for_day, project_day, DragRescheduler, GridMetrics,
    HourAxis, LayoutParams, PointerPos, TimeWindow,
};
use daygrid::models::event::Event;

use fixtures::{at, base_day, timed};

/// Strategy for a timed event on the base day with a sane duration.
fn arb_event() -> impl Strategy<Value = Event> {
    (0u32..24, 0u32..60, 1i64..240).prop_map(|(hour, minute, duration_minutes)| {
        let start = at(base_day(), hour, minute);
        let end = start + Duration::minutes(duration_minutes);
        Event::new("Generated", start, end).unwrap()
    })
}

fn arb_events(max: usize) -> impl Strategy<Value = Vec<Event>> {
    proptest::collection::vec(arb_event(), 0..max)
}

fn arb_window() -> impl Strategy<Value = TimeWindow> {
    (0u8..24, 0u8..24).prop_map(|(a, b)| TimeWindow::new(a.min(b), a.max(b)).unwrap())
}

proptest! {
    /// Every event relevant to the day lands in exactly one partition set.
    #[test]
    fn prop_partition_is_complete(events in arb_events(12), window in arb_window()) {
        let partition = partition_for_day(&events, base_day(), window);
        let total = partition.all_day.len() + partition.visible.len() + partition.hidden.len();
        // Multi-day events may leave the base day when the duration crosses
        // midnight, so count the events that still touch it.
        let relevant = events
            .iter()
            .filter(|e| e.start.date_naive() <= base_day() && base_day() <= e.end.date_naive())
            .count();
        prop_assert_eq!(total, relevant);
    }

    /// Widening the window never hides more events.
    #[test]
    fn prop_window_monotonicity(events in arb_events(12), window in arb_window()) {
        let wide = TimeWindow::new(
            window.start_hour().saturating_sub(2),
            (window.end_hour() + 2).min(23),
        ).unwrap();

        let narrow_hidden = partition_for_day(&events, base_day(), window).hidden_count();
        let wide_hidden = partition_for_day(&events, base_day(), wide).hidden_count();
        prop_assert!(wide_hidden <= narrow_hidden);
    }

    /// Adjacent events in sort order share a group iff the chain rule links
    /// them, and column slots stay within bounds.
    #[test]
    fn prop_grouping_chain_and_column_bounds(events in arb_events(12)) {
        let groups = group_overlapping(&events);

        // Group sizes account for every event
        let total: usize = groups.iter().map(|g| g.events.len()).sum();
        prop_assert_eq!(total, events.len());

        let flattened: Vec<(&Event, usize)> = groups
            .iter()
            .enumerate()
            .flat_map(|(gi, g)| g.events.iter().map(move |e| (e, gi)))
            .collect();
        for pair in flattened.windows(2) {
            let ((prev, prev_group), (next, next_group)) = (&pair[0], &pair[1]);
            prop_assert!(next.start >= prev.start);
            prop_assert_eq!(prev_group == next_group, next.start < prev.end);
        }

        for (_, slot) in columns(&groups) {
            prop_assert!(slot.index < slot.count);
        }
        for group in &groups {
            prop_assert_eq!(group.max_overlap, group.events.len());
        }
    }

    /// Projected geometry never dips below the floor or above the grid top.
    #[test]
    fn prop_geometry_non_negative(
        events in arb_events(8),
        window in arb_window(),
        cap in 1usize..6,
    ) {
        let params = LayoutParams {
            max_visible_columns: cap,
            ..Default::default()
        };
        let axis = HourAxis::contiguous(window, 70.0);

        let partition = partition_for_day(&events, base_day(), window);
        let groups = group_overlapping(&partition.visible);
        for (event, slot) in columns(&groups) {
            let geometry = project_day(event, base_day(), &axis, slot, &params);
            prop_assert!(geometry.top >= 0.0);
            prop_assert!(geometry.top <= axis.total_height());
            prop_assert!(geometry.height >= params.min_event_height);
            prop_assert!(geometry.left_pct >= params.time_column_width_pct - 1e-3);
            prop_assert!(geometry.left_pct + geometry.width_pct <= 100.0 + 1e-3);
        }
    }

    /// Any drag preserves the event's duration exactly.
    #[test]
    fn prop_drag_preserves_duration(
        hour in 0u32..22,
        duration_minutes in 1i64..120,
        delta_y in -300.0f32..300.0,
        day_offset in 0usize..7,
    ) {
        let start = at(base_day(), hour, 0);
        let event = Event::new("Dragged", start, start + Duration::minutes(duration_minutes)).unwrap();

        let days: Vec<_> = (0..7).map(|i| base_day() + Duration::days(i)).collect();
        let metrics = GridMetrics {
            hour_height: 60.0,
            grid_left: 0.0,
            day_column_width: 100.0,
            days: &days,
        };

        let mut drag = DragRescheduler::new();
        let down_pos = PointerPos { x: 5.0, y: 0.0 };
        prop_assert!(drag.on_pointer_down(&event, down_pos, Some(0.0), true));

        let drop_x = day_offset as f32 * 100.0 + 50.0;
        let updated = drag
            .on_pointer_up(PointerPos { x: drop_x, y: delta_y }, &metrics)
            .unwrap();

        prop_assert_eq!(updated.duration(), event.duration());
        prop_assert_eq!(updated.start.date_naive(), days[day_offset]);
    }

    /// Dropping on another day column with no vertical movement changes only
    /// the date components.
    #[test]
    fn prop_day_change_keeps_time_of_day(
        hour in 0u32..24,
        minute in 0u32..60,
        day_offset in 0usize..7,
    ) {
        let start = at(base_day(), hour, minute);
        let event = Event::new("Moved", start, start + Duration::minutes(30)).unwrap();

        let days: Vec<_> = (0..7).map(|i| base_day() + Duration::days(i)).collect();
        let metrics = GridMetrics {
            hour_height: 60.0,
            grid_left: 0.0,
            day_column_width: 100.0,
            days: &days,
        };

        let mut drag = DragRescheduler::new();
        drag.on_pointer_down(&event, PointerPos { x: 5.0, y: 40.0 }, Some(0.0), true);
        let updated = drag
            .on_pointer_up(
                PointerPos { x: day_offset as f32 * 100.0 + 50.0, y: 40.0 },
                &metrics,
            )
            .unwrap();

        prop_assert_eq!(updated.start.date_naive(), days[day_offset]);
        prop_assert_eq!(updated.start.time(), event.start.time());
        prop_assert_eq!(updated.end.time(), event.end.time());
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_scenario_groups_match_hand_computation() {
        let events = vec![
            timed("A", (9, 0), (10, 0)),
            timed("B", (9, 30), (11, 0)),
            timed("C", (12, 0), (13, 0)),
        ];
        let groups = group_overlapping(&events);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].max_overlap, 2);
        assert_eq!(groups[1].max_overlap, 1);
    }

    #[test]
    fn test_degenerate_zero_duration_event_projects_to_floor() {
        let start = at(base_day(), 9, 0);
        let event = Event::new("Instant", start, start).unwrap();
        let params = LayoutParams::default();
        let axis = HourAxis::contiguous(TimeWindow::full_day(), 60.0);

        let geometry = project_day(
            &event,
            base_day(),
            &axis,
            daygrid::layout::ColumnSlot { index: 0, count: 1 },
            &params,
        );
        assert_eq!(geometry.height, params.min_event_height);
    }
}
