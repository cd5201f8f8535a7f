//! Preset buttons and hour inputs for the visible-window selector.

use crate::layout::{HourField, TimeRangeControl, TimeWindow, WindowPreset};

/// Render the selector. Returns the new window when this frame's
/// interactions committed a change.
pub(crate) fn render_time_range_bar(
    ui: &mut egui::Ui,
    control: &mut TimeRangeControl,
) -> Option<TimeWindow> {
    let before = control.window();

    ui.horizontal(|ui| {
        ui.label("Hours:");
        for preset in WindowPreset::ALL {
            let selected = control.active_preset() == Some(preset);
            if ui.selectable_label(selected, preset.label()).clicked() {
                control.select_preset(preset);
            }
        }

        ui.separator();

        hour_input(ui, control, "From", HourField::Start);
        hour_input(ui, control, "to", HourField::End);
    });

    let after = control.window();
    (after != before).then_some(after)
}

fn hour_input(ui: &mut egui::Ui, control: &mut TimeRangeControl, label: &str, field: HourField) {
    ui.label(label);
    let response = ui.add(
        egui::TextEdit::singleline(control.text_mut(field))
            .desired_width(26.0)
            .char_limit(2),
    );
    if response.changed() {
        control.text_edited(field);
    }
    if response.lost_focus() {
        control.commit_blur(field);
    }
}
