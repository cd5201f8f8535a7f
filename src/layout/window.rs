//! Visible-hour window and the vertical axis derived from it.

use std::ops::RangeInclusive;

use chrono::NaiveTime;

/// The hour range currently shown in a day/week grid.
///
/// Invariant: `0 <= start_hour <= end_hour <= 23`. The fields are private so
/// the invariant cannot be broken after construction; free-text input is
/// validated by `TimeRangeControl` before a window is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start_hour: u8,
    end_hour: u8,
}

impl TimeWindow {
    /// Create a window, rejecting out-of-range or inverted bounds.
    pub fn new(start_hour: u8, end_hour: u8) -> Result<Self, String> {
        if start_hour > 23 || end_hour > 23 {
            return Err(format!(
                "Hours must be between 0 and 23, got {}..{}",
                start_hour, end_hour
            ));
        }
        if start_hour > end_hour {
            return Err(format!(
                "Window start hour {} is after end hour {}",
                start_hour, end_hour
            ));
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// The full 24-hour window.
    pub fn full_day() -> Self {
        Self {
            start_hour: 0,
            end_hour: 23,
        }
    }

    /// Derive a window from configured "HH:MM" day bounds.
    ///
    /// Only the hour components matter; inverted bounds fall back to the
    /// full day rather than failing, since they come from a config file.
    pub fn from_times(min: NaiveTime, max: NaiveTime) -> Self {
        use chrono::Timelike;
        let start_hour = min.hour().min(23) as u8;
        let end_hour = max.hour().min(23) as u8;
        if start_hour > end_hour {
            return Self::full_day();
        }
        Self {
            start_hour,
            end_hour,
        }
    }

    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    /// The hours this window displays, inclusive on both ends.
    pub fn hours(&self) -> RangeInclusive<u8> {
        self.start_hour..=self.end_hour
    }

    pub fn hour_count(&self) -> usize {
        (self.end_hour - self.start_hour) as usize + 1
    }

    pub fn is_full_day(&self) -> bool {
        self.start_hour == 0 && self.end_hour == 23
    }

    pub fn contains(&self, hour: u8) -> bool {
        self.start_hour <= hour && hour <= self.end_hour
    }

    /// Exclusive upper bound in hour decimals. The end hour is shown in
    /// full, so a window ending at 18 extends to 19.0 on the axis.
    pub fn upper_bound(&self) -> f32 {
        self.end_hour as f32 + 1.0
    }
}

/// Named visible-window presets offered by the time-range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPreset {
    Full,
    Business,
    Evening,
    Morning,
}

impl WindowPreset {
    pub const ALL: [WindowPreset; 4] = [
        WindowPreset::Full,
        WindowPreset::Business,
        WindowPreset::Evening,
        WindowPreset::Morning,
    ];

    pub fn window(self) -> TimeWindow {
        let (start_hour, end_hour) = match self {
            WindowPreset::Full => (0, 23),
            WindowPreset::Business => (8, 18),
            WindowPreset::Evening => (17, 23),
            WindowPreset::Morning => (4, 12),
        };
        TimeWindow {
            start_hour,
            end_hour,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WindowPreset::Full => "Full",
            WindowPreset::Business => "Business",
            WindowPreset::Evening => "Evening",
            WindowPreset::Morning => "Morning",
        }
    }
}

/// Vertical axis of the time grid: maps hour decimals inside the visible
/// window to pixel offsets from the grid top.
///
/// A contiguous axis renders every hour of the window and `y_of` reduces to
/// `(hour - start_hour) * hour_height`. When empty rows are hidden the axis
/// carries only the occupied hours and compresses the gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct HourAxis {
    window: TimeWindow,
    rows: Vec<u8>,
    hour_height: f32,
}

impl HourAxis {
    /// Axis rendering every hour of the window.
    pub fn contiguous(window: TimeWindow, hour_height: f32) -> Self {
        Self {
            window,
            rows: window.hours().collect(),
            hour_height,
        }
    }

    /// Axis rendering only the window hours present in `occupied`.
    ///
    /// Falls back to the contiguous axis when nothing is occupied, so the
    /// grid never collapses to zero height.
    pub fn occupied(window: TimeWindow, hour_height: f32, occupied: &[u8]) -> Self {
        let rows: Vec<u8> = window.hours().filter(|h| occupied.contains(h)).collect();
        if rows.is_empty() {
            return Self::contiguous(window, hour_height);
        }
        Self {
            window,
            rows,
            hour_height,
        }
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// The hours actually rendered, ascending.
    pub fn rows(&self) -> &[u8] {
        &self.rows
    }

    pub fn hour_height(&self) -> f32 {
        self.hour_height
    }

    pub fn total_height(&self) -> f32 {
        self.rows.len() as f32 * self.hour_height
    }

    /// Pixel offset of an hour decimal, clamped into the visible span.
    pub fn y_of(&self, hour_decimal: f32) -> f32 {
        let clamped =
            hour_decimal.clamp(self.window.start_hour() as f32, self.window.upper_bound());

        let mut y = 0.0;
        for &row in &self.rows {
            let row_start = row as f32;
            let row_end = row_start + 1.0;
            if clamped >= row_end {
                y += self.hour_height;
            } else if clamped > row_start {
                y += (clamped - row_start) * self.hour_height;
                break;
            } else {
                break;
            }
        }
        y
    }
}
