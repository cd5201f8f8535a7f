//! Single-day view: header strip, all-day ribbon, and the hour grid.

use chrono::{Local, NaiveDate};
use egui::{Margin, Rounding, Stroke};

use super::time_grid::{render_time_grid, TimeGridProps};
use super::{build_axis, render_all_day_row};
use crate::layout::{partition_for_day, DragRescheduler, LayoutParams, TimeWindow};
use crate::models::event::Event;
use crate::models::settings::GridSettings;
use crate::ui::palette::TimeGridPalette;

pub struct DayView;

impl DayView {
    /// Render the view. Returns a rescheduled event when a drag commits.
    pub fn show(
        ui: &mut egui::Ui,
        date: NaiveDate,
        events: &[Event],
        settings: &GridSettings,
        window: TimeWindow,
        params: &LayoutParams,
        edit_mode: bool,
        rescheduler: &mut DragRescheduler,
    ) -> Option<Event> {
        let palette = TimeGridPalette::from_ui(ui);
        let is_today = date == Local::now().date_naive();

        // Day header strip
        let header = egui::Frame::none()
            .rounding(Rounding::same(8.0))
            .stroke(Stroke::new(1.0, palette.divider))
            .inner_margin(Margin::symmetric(12.0, 8.0));
        header.show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(date.format("%A").to_string())
                            .size(20.0)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(date.format("%B %d, %Y").to_string())
                            .size(13.0)
                            .color(palette.time_label),
                    );
                });
                if is_today {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        egui::Frame::none()
                            .fill(palette.today_badge)
                            .rounding(Rounding::same(8.0))
                            .inner_margin(Margin::symmetric(8.0, 2.0))
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new("Today")
                                        .size(11.0)
                                        .color(egui::Color32::WHITE),
                                );
                            });
                    });
                }
            });
        });
        ui.add_space(6.0);

        let days = [date];
        let partitions = [partition_for_day(events, date, window)];

        render_all_day_row(ui, &days, &partitions, &palette);

        let axis = build_axis(window, settings, params, &days, &partitions);

        let mut updated = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let props = TimeGridProps {
                    days: &days,
                    partitions: &partitions,
                    axis: &axis,
                    params: *params,
                    edit_mode,
                };
                updated = render_time_grid(ui, &props, rescheduler);
            });

        updated
    }
}
