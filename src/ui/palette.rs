//! Colors for the time grid, derived from the active egui visuals.

use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[derive(Clone, Copy)]
pub(crate) struct TimeGridPalette {
    pub today_bg: Color32,
    pub hour_line: Color32,
    pub divider: Color32,
    pub time_label: Color32,
    pub event_fallback: Color32,
    pub event_text: Color32,
    pub now_line: Color32,
    pub ghost_fill: Color32,
    pub ghost_stroke: Color32,
    pub column_highlight: Color32,
    pub today_badge: Color32,
    pub banner_bg: Color32,
    pub banner_text: Color32,
}

impl TimeGridPalette {
    pub fn from_ui(ui: &egui::Ui) -> Self {
        let fallback = Color32::from_rgb(66, 133, 244);
        let now_line = Color32::from_rgb(255, 100, 100);
        let highlight = Color32::from_rgb(120, 200, 120);

        if ui.visuals().dark_mode {
            Self {
                today_bg: Color32::from_rgb(38, 44, 54),
                hour_line: Color32::from_rgb(62, 66, 74),
                divider: Color32::from_rgb(54, 58, 66),
                time_label: Color32::from_rgb(150, 155, 165),
                event_fallback: fallback,
                event_text: Color32::WHITE,
                now_line,
                ghost_fill: with_alpha(highlight, 45),
                ghost_stroke: highlight,
                column_highlight: with_alpha(highlight, 30),
                today_badge: Color32::from_rgb(52, 120, 216),
                banner_bg: Color32::from_rgb(80, 60, 20),
                banner_text: Color32::from_rgb(255, 200, 80),
            }
        } else {
            Self {
                today_bg: Color32::from_rgb(232, 240, 254),
                hour_line: Color32::from_rgb(214, 218, 224),
                divider: Color32::from_rgb(226, 229, 234),
                time_label: Color32::GRAY,
                event_fallback: fallback,
                event_text: Color32::WHITE,
                now_line,
                ghost_fill: with_alpha(highlight, 40),
                ghost_stroke: Color32::from_rgb(80, 160, 80),
                column_highlight: with_alpha(highlight, 25),
                today_badge: Color32::from_rgb(66, 133, 244),
                banner_bg: Color32::from_rgb(255, 245, 200),
                banner_text: Color32::from_rgb(150, 100, 0),
            }
        }
    }
}

/// Parse a hex color string to Color32.
///
/// Accepts "#RRGGBB" and "#RGB", with or without the leading '#'.
pub(crate) fn parse_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim_start_matches('#');

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Color32::from_rgb(r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}
