//! Toast notifications for brief, non-blocking feedback.
//!
//! Used for the hidden-events warning and drag confirmations.

use std::time::{Duration, Instant};

use egui::{Color32, Context, Pos2, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Warning => "⚠",
            ToastLevel::Error => "✗",
        }
    }

    fn colors(&self, is_dark: bool) -> (Color32, Color32) {
        // (background, text)
        if is_dark {
            match self {
                ToastLevel::Success => {
                    (Color32::from_rgb(30, 70, 40), Color32::from_rgb(100, 220, 120))
                }
                ToastLevel::Warning => {
                    (Color32::from_rgb(80, 60, 20), Color32::from_rgb(255, 200, 80))
                }
                ToastLevel::Error => {
                    (Color32::from_rgb(80, 30, 30), Color32::from_rgb(255, 120, 120))
                }
            }
        } else {
            match self {
                ToastLevel::Success => {
                    (Color32::from_rgb(220, 255, 220), Color32::from_rgb(30, 120, 50))
                }
                ToastLevel::Warning => {
                    (Color32::from_rgb(255, 245, 200), Color32::from_rgb(150, 100, 0))
                }
                ToastLevel::Error => {
                    (Color32::from_rgb(255, 220, 220), Color32::from_rgb(180, 40, 40))
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    level: ToastLevel,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
            duration: Duration::from_secs(4),
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Fade out over the last half second.
    fn opacity(&self) -> f32 {
        let elapsed = self.created_at.elapsed();
        let fade_start = self.duration.saturating_sub(Duration::from_millis(500));

        if elapsed >= self.duration {
            0.0
        } else if elapsed >= fade_start {
            ((self.duration - elapsed).as_secs_f32() / 0.5).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Owns the active toasts and renders them bottom-right, stacking upward.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastLevel::Success));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastLevel::Warning));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastLevel::Error));
    }

    pub fn render(&mut self, ctx: &Context) {
        self.toasts.retain(|t| !t.is_expired());
        if self.toasts.is_empty() {
            return;
        }

        // Keep repainting while toasts animate
        ctx.request_repaint();

        let is_dark = ctx.style().visuals.dark_mode;
        let screen_rect = ctx.screen_rect();
        let toast_width = 320.0;
        let toast_height = 40.0;
        let margin = 10.0;

        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity();
            if opacity <= 0.0 {
                continue;
            }

            let pos = Pos2::new(
                screen_rect.right() - toast_width - margin,
                screen_rect.bottom() - toast_height - margin - (i as f32) * (toast_height + 5.0),
            );

            egui::Area::new(egui::Id::new("toast").with(i))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    let (bg, fg) = toast.level.colors(is_dark);
                    let bg = Color32::from_rgba_unmultiplied(
                        bg.r(),
                        bg.g(),
                        bg.b(),
                        (230.0 * opacity) as u8,
                    );
                    let fg = Color32::from_rgba_unmultiplied(
                        fg.r(),
                        fg.g(),
                        fg.b(),
                        (255.0 * opacity) as u8,
                    );

                    egui::Frame::none()
                        .fill(bg)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, fg.gamma_multiply(0.3)))
                        .show(ui, |ui| {
                            ui.set_min_width(toast_width - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(toast.level.icon()).color(fg).strong());
                                ui.label(RichText::new(&toast.message).color(fg));
                            });
                        });
                });
        }
    }
}
