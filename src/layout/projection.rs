//! Projects clipped event intervals into absolute grid geometry.

use chrono::{NaiveDate, NaiveTime, Timelike};

use super::overlap::ColumnSlot;
use super::window::HourAxis;
use crate::models::event::Event;
use crate::utils::date::hour_decimal;

/// z-order base; columns stack above it so later columns paint on top.
const BASE_Z_INDEX: i32 = 20;

/// Last representable instant of a day on the hour axis (23:59:59).
const DAY_END_HOURS: f32 = 23.0 + 59.0 / 60.0;

/// Rendering parameters shared by the day and week projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Height floor in pixels so short events stay visible and clickable.
    pub min_event_height: f32,
    /// Width of the time-label gutter as a percentage of the grid width.
    pub time_column_width_pct: f32,
    /// Cap on side-by-side columns; indices beyond it wrap around.
    pub max_visible_columns: usize,
    /// When set, event ends are clipped to this time of day before layout.
    pub constrain_to: Option<NaiveTime>,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            min_event_height: 20.0,
            time_column_width_pct: 8.0,
            max_visible_columns: 3,
            constrain_to: None,
        }
    }
}

/// Absolute geometry for one event rect. Vertical values are pixels,
/// horizontal values percentages of the full grid width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventGeometry {
    pub top: f32,
    pub height: f32,
    pub left_pct: f32,
    pub width_pct: f32,
    pub z_index: i32,
}

/// The event's interval on `day` in hour decimals, clipped to the day and
/// to the optional `constrain_to` bound. Window clipping happens on the axis.
fn clipped_hours(event: &Event, day: NaiveDate, params: &LayoutParams) -> (f32, f32) {
    let start = if event.start.date_naive() < day {
        0.0
    } else {
        hour_decimal(event.start.time())
    };

    let mut end = if event.end.date_naive() > day {
        DAY_END_HOURS
    } else {
        hour_decimal(event.end.time())
    };

    if let Some(max_time) = params.constrain_to {
        end = end.min(hour_decimal(max_time));
    }

    (start, end)
}

fn vertical(event: &Event, day: NaiveDate, axis: &HourAxis, params: &LayoutParams) -> (f32, f32) {
    let (start, end) = clipped_hours(event, day, params);
    let top = axis.y_of(start);
    let bottom = axis.y_of(end);
    // Degenerate (zero or inverted) intervals get the floor, never an error
    let height = (bottom - top).max(params.min_event_height);
    (top, height)
}

fn column_slot(slot: ColumnSlot, params: &LayoutParams) -> (usize, usize) {
    let cap = params.max_visible_columns.max(1);
    let count = slot.count.clamp(1, cap);
    let column = slot.index % cap;
    (column, count)
}

/// Geometry for an event in the single-day grid.
pub fn project_day(
    event: &Event,
    day: NaiveDate,
    axis: &HourAxis,
    slot: ColumnSlot,
    params: &LayoutParams,
) -> EventGeometry {
    let (top, height) = vertical(event, day, axis, params);
    let (column, count) = column_slot(slot, params);

    let available = 100.0 - params.time_column_width_pct;
    let width = available / count as f32;
    let left = params.time_column_width_pct + column as f32 * width;

    EventGeometry {
        top,
        height,
        left_pct: left,
        width_pct: width,
        z_index: BASE_Z_INDEX + column as i32,
    }
}

/// Geometry for an event in one column of the week grid.
pub fn project_week(
    event: &Event,
    day: NaiveDate,
    day_index: usize,
    days_shown: usize,
    axis: &HourAxis,
    slot: ColumnSlot,
    params: &LayoutParams,
) -> EventGeometry {
    let (top, height) = vertical(event, day, axis, params);
    let (column, count) = column_slot(slot, params);

    let day_width = (100.0 - params.time_column_width_pct) / days_shown.max(1) as f32;
    let width = day_width / count as f32;
    let left = params.time_column_width_pct + day_index as f32 * day_width + column as f32 * width;

    EventGeometry {
        top,
        height,
        left_pct: left,
        width_pct: width,
        z_index: BASE_Z_INDEX + column as i32,
    }
}

/// Window hours touched by at least one event on `day`, ascending. Feeds
/// the hide-empty-rows axis.
pub fn occupied_hours(
    events: &[Event],
    day: NaiveDate,
    window: super::window::TimeWindow,
    params: &LayoutParams,
) -> Vec<u8> {
    window
        .hours()
        .filter(|&hour| {
            events.iter().any(|event| {
                let (start, end) = clipped_hours(event, day, params);
                start < (hour + 1) as f32 && end > hour as f32
            })
        })
        .collect()
}

/// Y offset of the "now" indicator line, `None` when the current hour is
/// outside the window or its row is hidden.
pub fn time_indicator_y(now: NaiveTime, axis: &HourAxis) -> Option<f32> {
    let hour = now.hour() as u8;
    if !axis.window().contains(hour) || !axis.rows().contains(&hour) {
        return None;
    }
    Some(axis.y_of(hour_decimal(now)))
}
