//! Chain-overlap grouping of a day's timed events.

use crate::models::event::Event;

/// A run of events sharing one column allocation.
///
/// `max_overlap` is the group size and becomes the column count for every
/// member when widths are divided.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapGroup {
    pub events: Vec<Event>,
    pub max_overlap: usize,
}

/// An event's slot within its group: `index` is its 0-based column,
/// `count` the group's `max_overlap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSlot {
    pub index: usize,
    pub count: usize,
}

/// Group events into chains of overlapping neighbors.
///
/// Events are sorted by start time; each event is compared against its
/// immediate predecessor in sort order only. `next.start < prev.end` extends
/// the current group, anything else closes it. This is chain linkage, not
/// interval-graph coloring: A(0:00-1:00), B(0:30-2:00), C(1:30-3:00) land in
/// one group of three even though A and C never overlap, and all three get a
/// column count of 3. Column assignment downstream is keyed to exactly this
/// behavior, so it must not be "improved" to a clique-based grouping.
pub fn group_overlapping(events: &[Event]) -> Vec<OverlapGroup> {
    if events.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<Event> = events.to_vec();
    sorted.sort_by_key(|e| e.start);

    let mut groups = Vec::new();
    let mut current = vec![sorted[0].clone()];

    for pair in sorted.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.start < prev.end {
            current.push(next.clone());
        } else {
            groups.push(OverlapGroup {
                max_overlap: current.len(),
                events: std::mem::take(&mut current),
            });
            current.push(next.clone());
        }
    }

    groups.push(OverlapGroup {
        max_overlap: current.len(),
        events: current,
    });

    groups
}

/// Flatten groups into `(event, slot)` pairs for projection.
pub fn columns(groups: &[OverlapGroup]) -> impl Iterator<Item = (&Event, ColumnSlot)> {
    groups.iter().flat_map(|group| {
        group.events.iter().enumerate().map(move |(index, event)| {
            (
                event,
                ColumnSlot {
                    index,
                    count: group.max_overlap,
                },
            )
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn timed(title: &str, start: (u32, u32), end: (u32, u32)) -> Event {
        let start = Local
            .with_ymd_and_hms(2025, 4, 5, start.0, start.1, 0)
            .unwrap();
        let end = Local.with_ymd_and_hms(2025, 4, 5, end.0, end.1, 0).unwrap();
        Event::new(title, start, end).unwrap()
    }

    fn titles(group: &OverlapGroup) -> Vec<&str> {
        group.events.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(group_overlapping(&[]).is_empty());
    }

    #[test]
    fn test_single_event() {
        let groups = group_overlapping(&[timed("Solo", (9, 0), (10, 0))]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].max_overlap, 1);
    }

    #[test]
    fn test_overlapping_pair_and_separate_event() {
        let events = vec![
            timed("A", (9, 0), (10, 0)),
            timed("B", (9, 30), (11, 0)),
            timed("C", (12, 0), (13, 0)),
        ];

        let groups = group_overlapping(&events);
        assert_eq!(groups.len(), 2);
        assert_eq!(titles(&groups[0]), vec!["A", "B"]);
        assert_eq!(groups[0].max_overlap, 2);
        assert_eq!(titles(&groups[1]), vec!["C"]);
        assert_eq!(groups[1].max_overlap, 1);
    }

    #[test]
    fn test_chain_links_non_overlapping_ends() {
        // A overlaps B, B overlaps C, A does not overlap C; the chain still
        // produces a single group of three.
        let events = vec![
            timed("A", (0, 0), (1, 0)),
            timed("B", (0, 30), (2, 0)),
            timed("C", (1, 30), (3, 0)),
        ];

        let groups = group_overlapping(&events);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].max_overlap, 3);
        assert_eq!(titles(&groups[0]), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_touching_events_do_not_link() {
        // next.start == prev.end is not an overlap
        let events = vec![timed("A", (9, 0), (10, 0)), timed("B", (10, 0), (11, 0))];

        let groups = group_overlapping(&events);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let sorted_first = vec![timed("A", (9, 0), (10, 0)), timed("B", (9, 30), (11, 0))];
        let reversed: Vec<Event> = sorted_first.iter().rev().cloned().collect();

        assert_eq!(group_overlapping(&sorted_first), group_overlapping(&reversed));
    }

    #[test]
    fn test_chain_invariant_over_adjacent_pairs() {
        let events = vec![
            timed("A", (8, 0), (9, 30)),
            timed("B", (9, 0), (9, 45)),
            timed("C", (9, 40), (10, 0)),
            timed("D", (11, 0), (12, 0)),
            timed("E", (11, 30), (13, 0)),
        ];

        let groups = group_overlapping(&events);
        let flattened: Vec<(&Event, usize)> = groups
            .iter()
            .enumerate()
            .flat_map(|(gi, g)| g.events.iter().map(move |e| (e, gi)))
            .collect();

        for pair in flattened.windows(2) {
            let ((prev, prev_group), (next, next_group)) = (&pair[0], &pair[1]);
            let same_group = prev_group == next_group;
            assert_eq!(same_group, next.start < prev.end);
        }
    }

    #[test]
    fn test_columns_assignment() {
        let events = vec![
            timed("A", (9, 0), (10, 0)),
            timed("B", (9, 30), (11, 0)),
            timed("C", (12, 0), (13, 0)),
        ];

        let groups = group_overlapping(&events);
        let slots: Vec<(String, ColumnSlot)> = columns(&groups)
            .map(|(e, slot)| (e.title.clone(), slot))
            .collect();

        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0], ("A".to_string(), ColumnSlot { index: 0, count: 2 }));
        assert_eq!(slots[1], ("B".to_string(), ColumnSlot { index: 1, count: 2 }));
        assert_eq!(slots[2], ("C".to_string(), ColumnSlot { index: 0, count: 1 }));

        for (_, slot) in slots {
            assert!(slot.index < slot.count);
        }
    }
}
