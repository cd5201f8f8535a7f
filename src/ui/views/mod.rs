//! Day and week views plus the rendering pieces they share.

use chrono::NaiveDate;
use egui::{Color32, Rounding, Stroke};

use crate::layout::{occupied_hours, DayEvents, HourAxis, LayoutParams, TimeWindow};
use crate::models::event::Event;
use crate::models::settings::GridSettings;
use crate::ui::palette::{parse_color, TimeGridPalette};

pub mod day_view;
pub mod time_grid;
pub mod time_range_bar;
pub mod week_view;

/// Which grid is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    Day,
    Week,
}

impl ViewType {
    pub const ALL: [ViewType; 2] = [ViewType::Day, ViewType::Week];

    pub fn label(self) -> &'static str {
        match self {
            ViewType::Day => "Day",
            ViewType::Week => "Week",
        }
    }

    /// Days to move when navigating backward/forward.
    pub fn step_days(self) -> i64 {
        match self {
            ViewType::Day => 1,
            ViewType::Week => 7,
        }
    }
}

/// Build the vertical axis for the shown days, compressing empty hour rows
/// when the settings ask for it.
pub(crate) fn build_axis(
    window: TimeWindow,
    settings: &GridSettings,
    params: &LayoutParams,
    days: &[NaiveDate],
    partitions: &[DayEvents],
) -> HourAxis {
    if !settings.hide_empty_rows {
        return HourAxis::contiguous(window, settings.hour_height);
    }

    let mut occupied: Vec<u8> = Vec::new();
    for (day, partition) in days.iter().zip(partitions) {
        for hour in occupied_hours(&partition.visible, *day, window, params) {
            if !occupied.contains(&hour) {
                occupied.push(hour);
            }
        }
    }
    HourAxis::occupied(window, settings.hour_height, &occupied)
}

/// Hover tooltip for an event rect.
pub(crate) fn event_tooltip(event: &Event) -> String {
    let mut lines = Vec::new();
    lines.push(event.title.clone());

    if event.all_day {
        lines.push(format!("All day - {}", event.start.format("%A, %B %d")));
    } else {
        lines.push(format!(
            "{} - {} ({})",
            event.start.format("%H:%M"),
            event.end.format("%H:%M"),
            event.start.format("%A, %B %d")
        ));
    }

    if let Some(ref location) = event.location {
        if !location.is_empty() {
            lines.push(format!("📍 {}", location));
        }
    }

    if let Some(ref recurrence) = event.recurring {
        lines.push(format!("🔄 Repeats {}", recurrence.frequency.label()));
    }

    lines.join("\n")
}

/// Render the fixed ribbon of all-day events above the hour grid.
/// Shown as chips; week view labels each chip with its day.
pub(crate) fn render_all_day_row(
    ui: &mut egui::Ui,
    days: &[NaiveDate],
    partitions: &[DayEvents],
    palette: &TimeGridPalette,
) {
    let has_any = partitions.iter().any(|p| !p.all_day.is_empty());
    if !has_any {
        return;
    }

    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new("All day").size(11.0).color(palette.time_label));

        for (day, partition) in days.iter().zip(partitions) {
            for event in &partition.all_day {
                let color = event
                    .color
                    .as_deref()
                    .and_then(parse_color)
                    .unwrap_or(palette.event_fallback);

                let label = if days.len() > 1 {
                    format!("{} · {}", day.format("%a"), event.title)
                } else {
                    event.title.clone()
                };

                let chip = egui::Frame::none()
                    .fill(color)
                    .rounding(Rounding::same(4.0))
                    .stroke(Stroke::new(1.0, Color32::from_black_alpha(40)))
                    .inner_margin(egui::Margin::symmetric(6.0, 2.0));

                chip.show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(label)
                            .size(11.0)
                            .color(palette.event_text),
                    );
                })
                .response
                .on_hover_text(event_tooltip(event));
            }
        }
    });
    ui.add_space(4.0);
}
