//! Drag-to-reschedule state machine.
//!
//! Owns the single active drag session: pointer-down over an event rect in
//! edit mode enters `Dragging`, moves produce a ghost preview, and release
//! yields an updated event with its duration preserved exactly. The machine
//! never mutates the original event; committing the update is the caller's
//! job.

use chrono::{DateTime, Duration, Local, NaiveDate};

use crate::models::event::Event;

/// Pointer position in screen pixels, decoupled from any UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPos {
    pub x: f32,
    pub y: f32,
}

/// Grid geometry needed to translate pointer movement into times and days.
/// `days` are the columns currently shown, left to right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics<'a> {
    pub hour_height: f32,
    pub grid_left: f32,
    pub day_column_width: f32,
    pub days: &'a [NaiveDate],
}

/// Visual-only preview of the dragged event for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostPreview {
    pub top: f32,
    pub day_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
struct DragSession {
    event: Event,
    start_pointer: PointerPos,
    initial_top: f32,
    over_day_index: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Two-state drag controller; at most one session at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragRescheduler {
    state: DragState,
}

impl DragRescheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Id of the event being dragged, if a session is active.
    pub fn dragged_event_id(&self) -> Option<i64> {
        match &self.state {
            DragState::Dragging(session) => session.event.id,
            DragState::Idle => None,
        }
    }

    /// Try to begin a drag. Requires edit mode and the event's rendered top
    /// edge; a pointer-down while another session is active is ignored.
    /// Returns whether a session started.
    pub fn on_pointer_down(
        &mut self,
        event: &Event,
        pointer: PointerPos,
        element_top: Option<f32>,
        edit_mode: bool,
    ) -> bool {
        if !edit_mode || self.is_dragging() {
            return false;
        }

        let Some(initial_top) = element_top else {
            log::warn!(
                "Drag aborted: no rendered geometry for event {:?}",
                event.id
            );
            return false;
        };

        self.state = DragState::Dragging(DragSession {
            event: event.clone(),
            start_pointer: pointer,
            initial_top,
            over_day_index: None,
        });
        true
    }

    /// Update the ghost from the latest pointer sample (last-write-wins).
    pub fn on_pointer_move(
        &mut self,
        pointer: PointerPos,
        metrics: &GridMetrics,
    ) -> Option<GhostPreview> {
        let DragState::Dragging(session) = &mut self.state else {
            return None;
        };

        let delta_y = pointer.y - session.start_pointer.y;
        session.over_day_index = hovered_day_index(pointer.x, metrics);

        Some(GhostPreview {
            top: session.initial_top + delta_y,
            day_index: session.over_day_index,
        })
    }

    /// Finish the drag and produce the rescheduled event, or `None` when the
    /// session was already cancelled or the target time cannot be resolved.
    /// The vertical delta becomes a minute shift applied to both endpoints,
    /// so the duration is preserved exactly; a day-column change rewrites
    /// only the date components.
    pub fn on_pointer_up(&mut self, pointer: PointerPos, metrics: &GridMetrics) -> Option<Event> {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return None;
        };

        if metrics.hour_height <= 0.0 {
            log::warn!("Drag aborted: grid has no vertical scale");
            return None;
        }

        let delta_y = pointer.y - session.start_pointer.y;
        let minutes_delta = (delta_y * 60.0 / metrics.hour_height).round() as i64;

        let mut updated = session.event;
        updated.start += Duration::minutes(minutes_delta);
        updated.end += Duration::minutes(minutes_delta);

        let target_day = hovered_day_index(pointer.x, metrics)
            .and_then(|index| metrics.days.get(index).copied());

        if let Some(day) = target_day {
            if day != updated.start.date_naive() {
                let duration = updated.end - updated.start;
                let Some(start) = rebase_to_day(updated.start, day) else {
                    log::warn!("Drag aborted: target day {} has no valid local time", day);
                    return None;
                };
                updated.start = start;
                // End follows from the duration so it survives midnight
                // crossings intact
                updated.end = start + duration;
            }
        }

        Some(updated)
    }

    /// Abort the session without emitting an update (pointer cancel,
    /// viewport resize, view unmount).
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

/// Day column under the pointer, clamped to the shown range.
fn hovered_day_index(x: f32, metrics: &GridMetrics) -> Option<usize> {
    if metrics.days.is_empty() || metrics.day_column_width <= 0.0 {
        return None;
    }
    let raw = ((x - metrics.grid_left) / metrics.day_column_width).floor() as i64;
    Some(raw.clamp(0, metrics.days.len() as i64 - 1) as usize)
}

/// Move a timestamp to another day, keeping its time of day. `None` when the
/// local timezone cannot represent that instant (DST gap).
fn rebase_to_day(ts: DateTime<Local>, day: NaiveDate) -> Option<DateTime<Local>> {
    day.and_time(ts.time()).and_local_timezone(Local).single()
}
