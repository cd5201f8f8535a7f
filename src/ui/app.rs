// Main Calendar Application
// Core eframe application implementation

use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeSet;

use crate::layout::{
    hidden_warning, partition_for_day, DragRescheduler, LayoutParams, TimeRangeControl, TimeWindow,
};
use crate::models::settings::GridSettings;
use crate::services::event_store::EventStore;
use crate::services::settings::SettingsService;
use crate::ui::palette::TimeGridPalette;
use crate::ui::toast::ToastManager;
use crate::ui::views::day_view::DayView;
use crate::ui::views::time_range_bar::render_time_range_bar;
use crate::ui::views::week_view::WeekView;
use crate::ui::views::ViewType;
use crate::utils::date::week_days;

pub struct CalendarApp {
    store: EventStore,
    settings: GridSettings,
    view: ViewType,
    current_date: NaiveDate,
    /// Drag-to-reschedule is only armed in edit mode.
    edit_mode: bool,
    time_range: TimeRangeControl,
    rescheduler: DragRescheduler,
    toasts: ToastManager,
    last_viewport: Option<egui::Vec2>,
}

impl CalendarApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = match SettingsService::new() {
            Ok(service) => service.load(),
            Err(err) => {
                log::warn!("No config directory available: {:#}", err);
                GridSettings::default()
            }
        };

        let window = match (settings.min_time_of_day(), settings.max_time_of_day()) {
            (Some(min), Some(max)) => TimeWindow::from_times(min, max),
            _ => TimeWindow::full_day(),
        };

        let today = Local::now().date_naive();

        Self {
            store: EventStore::with_sample_events(today),
            settings,
            view: ViewType::Week,
            current_date: today,
            edit_mode: false,
            time_range: TimeRangeControl::new(window),
            rescheduler: DragRescheduler::new(),
            toasts: ToastManager::new(),
            last_viewport: None,
        }
    }

    fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            min_event_height: self.settings.min_event_height,
            time_column_width_pct: self.settings.time_column_width_pct,
            max_visible_columns: self.settings.max_visible_columns,
            constrain_to: if self.settings.constrain_events {
                self.settings.max_time_of_day()
            } else {
                None
            },
        }
    }

    fn days_shown(&self) -> Vec<NaiveDate> {
        match self.view {
            ViewType::Day => vec![self.current_date],
            ViewType::Week => week_days(self.current_date, self.settings.week_starts_on),
        }
    }

    /// Distinct events excluded by the window across the shown days.
    fn hidden_event_count(&self) -> usize {
        let window = self.time_range.window();
        let mut ids = BTreeSet::new();
        let mut anonymous = 0usize;

        for day in self.days_shown() {
            let partition = partition_for_day(self.store.list(), day, window);
            for event in partition.hidden {
                match event.id {
                    Some(id) => {
                        ids.insert(id);
                    }
                    None => anonymous += 1,
                }
            }
        }
        ids.len() + anonymous
    }

    fn navigate(&mut self, step: i64) {
        self.current_date += Duration::days(step);
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("⏴").clicked() {
                self.navigate(-self.view.step_days());
            }
            if ui.button("Today").clicked() {
                self.current_date = Local::now().date_naive();
            }
            if ui.button("⏵").clicked() {
                self.navigate(self.view.step_days());
            }

            ui.separator();

            for view in ViewType::ALL {
                if ui.selectable_label(self.view == view, view.label()).clicked() {
                    self.view = view;
                }
            }

            ui.separator();
            ui.toggle_value(&mut self.edit_mode, "✏ Edit mode")
                .on_hover_text("Drag events to reschedule them");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = match self.view {
                    ViewType::Day => self.current_date.format("%B %d, %Y").to_string(),
                    ViewType::Week => {
                        let days = week_days(self.current_date, self.settings.week_starts_on);
                        format!(
                            "{} - {}",
                            days[0].format("%b %d"),
                            days[6].format("%b %d, %Y")
                        )
                    }
                };
                ui.label(egui::RichText::new(label).strong());
            });
        });
    }

    /// Time-range bar; surfaces the hidden-events warning on a committed
    /// window change.
    fn time_range_bar(&mut self, ui: &mut egui::Ui) {
        if render_time_range_bar(ui, &mut self.time_range).is_some() {
            if let Some(message) = hidden_warning(self.hidden_event_count()) {
                log::info!("{}", message);
                self.toasts.warning(message);
            }
        }
    }

    fn hidden_banner(&self, ui: &mut egui::Ui) {
        let Some(message) = hidden_warning(self.hidden_event_count()) else {
            return;
        };
        let palette = TimeGridPalette::from_ui(ui);
        egui::Frame::none()
            .fill(palette.banner_bg)
            .rounding(egui::Rounding::same(4.0))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(message)
                        .size(12.0)
                        .color(palette.banner_text),
                );
            });
        ui.add_space(4.0);
    }

    fn commit_reschedule(&mut self, updated: crate::models::event::Event) {
        let title = updated.title.clone();
        match self.store.update(&updated) {
            Ok(()) => {
                log::info!("Rescheduled event {:?} ({})", updated.id, title);
                self.toasts.success(format!("{} has been moved.", title));
            }
            Err(err) => {
                log::error!("Failed to reschedule event {:?}: {}", updated.id, err);
                self.toasts.error(format!("Could not move {}.", title));
            }
        }
    }
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // A viewport resize invalidates the drag's captured geometry, so an
        // in-flight session is cancelled rather than committed stale.
        let viewport = ctx.screen_rect().size();
        if let Some(last) = self.last_viewport {
            if last != viewport && self.rescheduler.is_dragging() {
                log::debug!("Viewport resized during drag, cancelling session");
                self.rescheduler.cancel();
            }
        }
        self.last_viewport = Some(viewport);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.toolbar(ui);
            ui.add_space(2.0);
            self.time_range_bar(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.hidden_banner(ui);

            let params = self.layout_params();
            let window = self.time_range.window();
            let events = self.store.list().to_vec();

            let updated = match self.view {
                ViewType::Day => DayView::show(
                    ui,
                    self.current_date,
                    &events,
                    &self.settings,
                    window,
                    &params,
                    self.edit_mode,
                    &mut self.rescheduler,
                ),
                ViewType::Week => WeekView::show(
                    ui,
                    self.current_date,
                    &events,
                    &self.settings,
                    window,
                    &params,
                    self.edit_mode,
                    &mut self.rescheduler,
                ),
            };

            if let Some(updated) = updated {
                self.commit_reschedule(updated);
            }
        });

        self.toasts.render(ctx);
    }
}
