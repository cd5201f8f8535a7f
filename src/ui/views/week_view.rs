//! Week view: day-header row, all-day ribbon, and seven hour-grid columns.

use chrono::{Local, NaiveDate};
use egui::{Margin, Rounding};

use super::time_grid::{render_time_grid, TimeGridProps};
use super::{build_axis, render_all_day_row};
use crate::layout::{partition_for_day, DayEvents, DragRescheduler, LayoutParams, TimeWindow};
use crate::models::event::Event;
use crate::models::settings::GridSettings;
use crate::ui::palette::TimeGridPalette;
use crate::utils::date::week_days;

pub struct WeekView;

impl WeekView {
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
        let days = week_days(date, settings.week_starts_on);
        let today = Local::now().date_naive();

        // Day labels, aligned with the grid columns below
        let total_width = ui.available_width();
        let time_col_px = total_width * params.time_column_width_pct / 100.0;
        let day_col_px = (total_width - time_col_px) / days.len() as f32;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.add_space(time_col_px);
            for day in &days {
                let is_today = *day == today;
                ui.allocate_ui_with_layout(
                    egui::Vec2::new(day_col_px, 28.0),
                    egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                    |ui| {
                        let frame = egui::Frame::none()
                            .fill(if is_today {
                                palette.today_bg
                            } else {
                                egui::Color32::TRANSPARENT
                            })
                            .rounding(Rounding::same(4.0))
                            .inner_margin(Margin::symmetric(4.0, 2.0));
                        frame.show(ui, |ui| {
                            let label = day.format("%a %d").to_string();
                            let mut text = egui::RichText::new(label).size(12.0);
                            if is_today {
                                text = text.strong();
                            }
                            ui.label(text);
                        });
                    },
                );
            }
        });
        ui.add_space(4.0);

        let partitions: Vec<DayEvents> = days
            .iter()
            .map(|day| partition_for_day(events, *day, window))
            .collect();

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
