//! Interactive state for the visible-window selector.

use super::window::{TimeWindow, WindowPreset};

/// Which hour input is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourField {
    Start,
    End,
}

/// Controller for the Full/Business/Evening/Morning presets and the
/// free-form hour inputs.
///
/// The committed window always satisfies the `TimeWindow` invariant. Typed
/// text may transiently violate it; valid keystrokes commit live, anything
/// else is left pending and reverted to the last committed value on blur.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRangeControl {
    window: TimeWindow,
    start_text: String,
    end_text: String,
}

impl TimeRangeControl {
    pub fn new(window: TimeWindow) -> Self {
        Self {
            window,
            start_text: window.start_hour().to_string(),
            end_text: window.end_hour().to_string(),
        }
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn text(&self, field: HourField) -> &str {
        match field {
            HourField::Start => &self.start_text,
            HourField::End => &self.end_text,
        }
    }

    /// Mutable access for the text-edit widget.
    pub fn text_mut(&mut self, field: HourField) -> &mut String {
        match field {
            HourField::Start => &mut self.start_text,
            HourField::End => &mut self.end_text,
        }
    }

    /// Matching preset for the committed window, if any.
    pub fn active_preset(&self) -> Option<WindowPreset> {
        WindowPreset::ALL
            .into_iter()
            .find(|preset| preset.window() == self.window)
    }

    /// Apply a named preset atomically and return the new window.
    pub fn select_preset(&mut self, preset: WindowPreset) -> TimeWindow {
        self.window = preset.window();
        self.sync_text();
        self.window
    }

    /// Called after each keystroke. Commits the typed hour only when it
    /// parses, lies in `[0, 23]`, and keeps `start <= end`; returns the new
    /// window when a commit happened. Invalid text stays pending.
    pub fn text_edited(&mut self, field: HourField) -> Option<TimeWindow> {
        let raw = self.text(field).trim();
        if raw.is_empty() {
            return None;
        }

        let hour = match raw.parse::<i64>() {
            Ok(h) if (0..=23).contains(&h) => h as u8,
            _ => return None,
        };

        let candidate = match field {
            HourField::Start if hour <= self.window.end_hour() => {
                TimeWindow::new(hour, self.window.end_hour())
            }
            HourField::End if hour >= self.window.start_hour() => {
                TimeWindow::new(self.window.start_hour(), hour)
            }
            _ => return None,
        };

        match candidate {
            Ok(window) if window != self.window => {
                self.window = window;
                Some(window)
            }
            _ => None,
        }
    }

    /// Called when an input loses focus: commit valid pending text, or
    /// revert the text to the last committed value.
    pub fn commit_blur(&mut self, field: HourField) -> TimeWindow {
        let raw = self.text(field).trim();
        let parsed = raw.parse::<i64>().ok();

        let accepted = match (field, parsed) {
            (HourField::Start, Some(h)) if (0..=23).contains(&h) => {
                let hour = h as u8;
                (hour <= self.window.end_hour())
                    .then(|| TimeWindow::new(hour, self.window.end_hour()))
                    .and_then(Result::ok)
            }
            (HourField::End, Some(h)) if (0..=23).contains(&h) => {
                let hour = h as u8;
                (hour >= self.window.start_hour())
                    .then(|| TimeWindow::new(self.window.start_hour(), hour))
                    .and_then(Result::ok)
            }
            _ => None,
        };

        if let Some(window) = accepted {
            self.window = window;
        }
        // Normalizes accepted text ("08" -> "8") and reverts rejected text
        self.sync_text();

        self.window
    }

    fn sync_text(&mut self) {
        self.start_text = self.window.start_hour().to_string();
        self.end_text = self.window.end_hour().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control() -> TimeRangeControl {
        TimeRangeControl::new(TimeWindow::full_day())
    }

    #[test]
    fn test_presets_commit_atomically() {
        let mut control = control();
        let window = control.select_preset(WindowPreset::Business);
        assert_eq!((window.start_hour(), window.end_hour()), (8, 18));
        assert_eq!(control.text(HourField::Start), "8");
        assert_eq!(control.text(HourField::End), "18");
        assert_eq!(control.active_preset(), Some(WindowPreset::Business));
    }

    #[test]
    fn test_valid_keystroke_commits_live() {
        let mut control = control();
        *control.text_mut(HourField::Start) = "9".to_string();
        let window = control.text_edited(HourField::Start);
        assert_eq!(window.unwrap().start_hour(), 9);
        assert_eq!(control.window().start_hour(), 9);
    }

    #[test]
    fn test_out_of_range_keystroke_is_pending() {
        let mut control = control();
        *control.text_mut(HourField::Start) = "25".to_string();
        assert_eq!(control.text_edited(HourField::Start), None);
        // Window untouched, text still shows what the user typed
        assert_eq!(control.window(), TimeWindow::full_day());
        assert_eq!(control.text(HourField::Start), "25");
    }

    #[test]
    fn test_blur_reverts_invalid_text() {
        let mut control = control();
        *control.text_mut(HourField::Start) = "25".to_string();
        control.text_edited(HourField::Start);
        let window = control.commit_blur(HourField::Start);

        assert_eq!(window, TimeWindow::full_day());
        assert_eq!(control.text(HourField::Start), "0");
    }

    #[test]
    fn test_blur_reverts_unparsable_text() {
        let mut control = control();
        *control.text_mut(HourField::End) = "noon".to_string();
        control.commit_blur(HourField::End);
        assert_eq!(control.text(HourField::End), "23");
    }

    #[test]
    fn test_ordering_violation_not_committed() {
        let mut control = control();
        control.select_preset(WindowPreset::Business); // 8..18

        *control.text_mut(HourField::Start) = "20".to_string();
        assert_eq!(control.text_edited(HourField::Start), None);
        assert_eq!(control.window().start_hour(), 8);

        control.commit_blur(HourField::Start);
        assert_eq!(control.text(HourField::Start), "8");
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut control = control();
        control.select_preset(WindowPreset::Evening); // 17..23

        *control.text_mut(HourField::End) = "5".to_string();
        assert_eq!(control.text_edited(HourField::End), None);
        let window = control.commit_blur(HourField::End);
        assert_eq!((window.start_hour(), window.end_hour()), (17, 23));
    }

    #[test]
    fn test_blur_normalizes_accepted_text() {
        let mut control = control();
        *control.text_mut(HourField::Start) = "08".to_string();
        control.text_edited(HourField::Start);
        control.commit_blur(HourField::Start);
        assert_eq!(control.text(HourField::Start), "8");
        assert_eq!(control.window().start_hour(), 8);
    }

    #[test]
    fn test_empty_text_is_pending_until_blur() {
        let mut control = control();
        control.select_preset(WindowPreset::Morning); // 4..12

        control.text_mut(HourField::Start).clear();
        assert_eq!(control.text_edited(HourField::Start), None);
        control.commit_blur(HourField::Start);
        assert_eq!(control.text(HourField::Start), "4");
    }

    #[test]
    fn test_committed_window_always_valid() {
        let mut control = control();
        for text in ["-3", "24", "abc", "12", "", "7"] {
            *control.text_mut(HourField::Start) = text.to_string();
            control.text_edited(HourField::Start);
            control.commit_blur(HourField::Start);
            let window = control.window();
            assert!(window.start_hour() <= window.end_hour());
            assert!(window.end_hour() <= 23);
        }
    }
}
