//! Hour-grid renderer shared by the day and week views.
//!
//! Paints hour rows, day columns, and the event rects produced by the layout
//! engine, and routes pointer input into the drag rescheduler. All geometry
//! comes from `layout::projection`; this file only converts percentages to
//! pixels inside the allocated grid rect.

use chrono::{Local, NaiveDate};
use egui::{Align2, Color32, CursorIcon, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use super::event_tooltip;
use crate::layout::{
    columns, group_overlapping, project_day, project_week, time_indicator_y, DayEvents,
    DragRescheduler, EventGeometry, GhostPreview, GridMetrics, HourAxis, LayoutParams, PointerPos,
};
use crate::models::event::Event;
use crate::ui::palette::{parse_color, TimeGridPalette};

pub(crate) struct TimeGridProps<'a> {
    pub days: &'a [NaiveDate],
    /// One partition per shown day, same order as `days`.
    pub partitions: &'a [DayEvents],
    pub axis: &'a HourAxis,
    pub params: LayoutParams,
    pub edit_mode: bool,
}

/// Render the grid. Returns the rescheduled event when a drag commits.
pub(crate) fn render_time_grid(
    ui: &mut egui::Ui,
    props: &TimeGridProps<'_>,
    rescheduler: &mut DragRescheduler,
) -> Option<Event> {
    let palette = TimeGridPalette::from_ui(ui);
    let width = ui.available_width();
    let height = props.axis.total_height();
    let (grid_rect, response) =
        ui.allocate_exact_size(Vec2::new(width, height), Sense::click_and_drag());

    let time_col_px = grid_rect.width() * props.params.time_column_width_pct / 100.0;
    let day_count = props.days.len().max(1);
    let day_col_px = (grid_rect.width() - time_col_px) / day_count as f32;
    let today = Local::now().date_naive();

    paint_backdrop(ui, props, &palette, grid_rect, time_col_px, day_col_px, today);

    // Event rects, painted in column order so later columns sit on top.
    // Hitboxes keep the paint order for reverse hit testing.
    let mut hitboxes: Vec<(Rect, Event)> = Vec::new();
    let dragged_id = rescheduler.dragged_event_id();

    for (day_index, (day, partition)) in props.days.iter().zip(props.partitions).enumerate() {
        let groups = group_overlapping(&partition.visible);
        for (event, slot) in columns(&groups) {
            let geometry = if day_count == 1 {
                project_day(event, *day, props.axis, slot, &props.params)
            } else {
                project_week(event, *day, day_index, day_count, props.axis, slot, &props.params)
            };
            let rect = geometry_to_rect(&geometry, grid_rect);
            let dimmed = dragged_id.is_some() && dragged_id == event.id;
            paint_event(ui, rect, event, &palette, dimmed);
            hitboxes.push((rect, event.clone()));
        }
    }

    paint_now_indicator(ui, props, &palette, grid_rect, time_col_px, day_col_px, today);

    let metrics = GridMetrics {
        hour_height: props.axis.hour_height(),
        grid_left: grid_rect.left() + time_col_px,
        day_column_width: day_col_px,
        days: props.days,
    };

    let pointer = response
        .interact_pointer_pos()
        .or_else(|| ui.input(|i| i.pointer.hover_pos()));
    let hovered = pointer.and_then(|pos| {
        hitboxes
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(rect, event)| (*rect, event.clone()))
    });

    if response.drag_started() {
        if let (Some(pos), Some((rect, event))) = (response.interact_pointer_pos(), &hovered) {
            rescheduler.on_pointer_down(
                event,
                PointerPos { x: pos.x, y: pos.y },
                Some(rect.top() - grid_rect.top()),
                props.edit_mode,
            );
        }
    }

    if rescheduler.is_dragging() {
        if let Some(pos) = pointer {
            let ghost =
                rescheduler.on_pointer_move(PointerPos { x: pos.x, y: pos.y }, &metrics);
            if let Some(ghost) = ghost {
                paint_ghost(
                    ui,
                    &ghost,
                    rescheduler,
                    &hitboxes,
                    &palette,
                    grid_rect,
                    time_col_px,
                    day_col_px,
                );
            }
        }
        ui.output_mut(|out| out.cursor_icon = CursorIcon::Grabbing);
        ui.ctx().request_repaint();
    } else if let Some((_, event)) = &hovered {
        if props.edit_mode {
            ui.output_mut(|out| out.cursor_icon = CursorIcon::Grab);
        } else {
            ui.output_mut(|out| out.cursor_icon = CursorIcon::PointingHand);
        }
        if response.hovered() {
            let tooltip = event_tooltip(event);
            response.clone().on_hover_ui_at_pointer(|ui| {
                ui.label(tooltip);
            });
        }
    }

    if response.drag_stopped() {
        if let Some(pos) = response.interact_pointer_pos().or(pointer) {
            return rescheduler.on_pointer_up(PointerPos { x: pos.x, y: pos.y }, &metrics);
        }
        rescheduler.cancel();
    }

    None
}

fn geometry_to_rect(geometry: &EventGeometry, grid_rect: Rect) -> Rect {
    Rect::from_min_size(
        Pos2::new(
            grid_rect.left() + grid_rect.width() * geometry.left_pct / 100.0,
            grid_rect.top() + geometry.top,
        ),
        Vec2::new(grid_rect.width() * geometry.width_pct / 100.0, geometry.height),
    )
}

fn paint_backdrop(
    ui: &mut egui::Ui,
    props: &TimeGridProps<'_>,
    palette: &TimeGridPalette,
    grid_rect: Rect,
    time_col_px: f32,
    day_col_px: f32,
    today: NaiveDate,
) {
    // Today column tint
    if let Some(index) = props.days.iter().position(|d| *d == today) {
        let x = grid_rect.left() + time_col_px + index as f32 * day_col_px;
        let col_rect = Rect::from_min_size(
            Pos2::new(x, grid_rect.top()),
            Vec2::new(day_col_px, grid_rect.height()),
        );
        ui.painter().rect_filled(col_rect, 0.0, palette.today_bg);
    }

    // Hour rows with time labels in the gutter
    for (row, hour) in props.axis.rows().iter().enumerate() {
        let y = grid_rect.top() + row as f32 * props.axis.hour_height();
        ui.painter().line_segment(
            [Pos2::new(grid_rect.left(), y), Pos2::new(grid_rect.right(), y)],
            Stroke::new(1.0, palette.hour_line),
        );
        ui.painter().text(
            Pos2::new(grid_rect.left() + time_col_px - 6.0, y + 2.0),
            Align2::RIGHT_TOP,
            format!("{:02}:00", hour),
            FontId::proportional(11.0),
            palette.time_label,
        );
    }
    ui.painter().line_segment(
        [
            Pos2::new(grid_rect.left(), grid_rect.bottom()),
            Pos2::new(grid_rect.right(), grid_rect.bottom()),
        ],
        Stroke::new(1.0, palette.hour_line),
    );

    // Day column dividers
    for i in 0..=props.days.len() {
        let x = grid_rect.left() + time_col_px + i as f32 * day_col_px;
        ui.painter().line_segment(
            [Pos2::new(x, grid_rect.top()), Pos2::new(x, grid_rect.bottom())],
            Stroke::new(1.0, palette.divider),
        );
    }
}

fn paint_event(
    ui: &mut egui::Ui,
    rect: Rect,
    event: &Event,
    palette: &TimeGridPalette,
    dimmed: bool,
) {
    let base_color = event
        .color
        .as_deref()
        .and_then(parse_color)
        .unwrap_or(palette.event_fallback);
    let fill = if dimmed {
        base_color.gamma_multiply(0.4)
    } else {
        base_color
    };

    let bar = rect.shrink2(Vec2::new(1.0, 1.0));
    ui.painter().rect_filled(bar, Rounding::same(3.0), fill);

    let text_color = if dimmed {
        Color32::from_rgba_unmultiplied(255, 255, 255, 160)
    } else {
        palette.event_text
    };
    let available_width = (bar.width() - 8.0).max(0.0);

    let title_job = egui::text::LayoutJob::simple(
        event.title.clone(),
        FontId::proportional(11.0),
        text_color,
        available_width,
    );
    let galley = ui.fonts(|f| f.layout_job(title_job));
    ui.painter()
        .galley(Pos2::new(bar.left() + 4.0, bar.top() + 3.0), galley, text_color);

    // Time range on a second line when the rect is tall enough
    if bar.height() >= 34.0 {
        let times = format!(
            "{} - {}",
            event.start.format("%H:%M"),
            event.end.format("%H:%M")
        );
        let time_job = egui::text::LayoutJob::simple(
            times,
            FontId::proportional(9.0),
            text_color.gamma_multiply(0.9),
            available_width,
        );
        let galley = ui.fonts(|f| f.layout_job(time_job));
        ui.painter()
            .galley(Pos2::new(bar.left() + 4.0, bar.top() + 17.0), galley, text_color);
    }
}

fn paint_now_indicator(
    ui: &mut egui::Ui,
    props: &TimeGridProps<'_>,
    palette: &TimeGridPalette,
    grid_rect: Rect,
    time_col_px: f32,
    day_col_px: f32,
    today: NaiveDate,
) {
    let Some(index) = props.days.iter().position(|d| *d == today) else {
        return;
    };
    let Some(y) = time_indicator_y(Local::now().time(), props.axis) else {
        return;
    };

    let y = grid_rect.top() + y;
    let x_start = grid_rect.left() + time_col_px + index as f32 * day_col_px;
    let x_end = x_start + day_col_px;

    ui.painter()
        .circle_filled(Pos2::new(x_start - 4.0, y), 3.0, palette.now_line);
    ui.painter().line_segment(
        [Pos2::new(x_start, y), Pos2::new(x_end, y)],
        Stroke::new(2.0, palette.now_line),
    );
}

#[allow(clippy::too_many_arguments)]
fn paint_ghost(
    ui: &mut egui::Ui,
    ghost: &GhostPreview,
    rescheduler: &DragRescheduler,
    hitboxes: &[(Rect, Event)],
    palette: &TimeGridPalette,
    grid_rect: Rect,
    time_col_px: f32,
    day_col_px: f32,
) {
    let dragged = rescheduler.dragged_event_id();
    let source = hitboxes
        .iter()
        .find(|(_, event)| dragged.is_some() && event.id == dragged);

    // Fall back to one hour of height if the source rect is not on screen
    let ghost_height = source.map(|(rect, _)| rect.height()).unwrap_or(60.0);

    let (x, width) = match ghost.day_index {
        Some(index) => {
            let x = grid_rect.left() + time_col_px + index as f32 * day_col_px;
            // Highlight the hovered day column
            let col_rect = Rect::from_min_size(
                Pos2::new(x, grid_rect.top()),
                Vec2::new(day_col_px, grid_rect.height()),
            );
            ui.painter()
                .rect_filled(col_rect, 0.0, palette.column_highlight);
            (x, day_col_px)
        }
        None => source
            .map(|(rect, _)| (rect.left(), rect.width()))
            .unwrap_or((grid_rect.left() + time_col_px, day_col_px)),
    };

    let ghost_rect = Rect::from_min_size(
        Pos2::new(x + 2.0, grid_rect.top() + ghost.top),
        Vec2::new(width - 4.0, ghost_height),
    );
    ui.painter()
        .rect_filled(ghost_rect, Rounding::same(3.0), palette.ghost_fill);
    ui.painter().rect_stroke(
        ghost_rect,
        Rounding::same(3.0),
        Stroke::new(1.5, palette.ghost_stroke),
    );
}
