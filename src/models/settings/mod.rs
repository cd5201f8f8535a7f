// Settings module
// Grid rendering and behavior configuration

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::utils::date::parse_hhmm;

/// User-configurable settings for the day/week time grids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// First day of the week: 0 = Sunday .. 6 = Saturday.
    pub week_starts_on: u8,
    /// Height of one hour row in pixels.
    pub hour_height: f32,
    /// Minimum rendered height for an event, so short events stay clickable.
    pub min_event_height: f32,
    /// Width of the time-label gutter as a percentage of the grid width.
    pub time_column_width_pct: f32,
    /// Cap on side-by-side columns; further overlaps wrap around.
    pub max_visible_columns: usize,
    /// Lower bound of the default visible window, "HH:MM".
    pub min_time: String,
    /// Upper bound of the default visible window, "HH:MM".
    pub max_time: String,
    /// Suppress hour rows that contain no events.
    pub hide_empty_rows: bool,
    /// Clip event end times to `max_time` before layout.
    pub constrain_events: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            week_starts_on: 1, // Monday
            hour_height: 80.0,
            min_event_height: 20.0,
            time_column_width_pct: 8.0,
            max_visible_columns: 3,
            min_time: "00:00".to_string(),
            max_time: "23:59".to_string(),
            hide_empty_rows: false,
            constrain_events: false,
        }
    }
}

impl GridSettings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.week_starts_on > 6 {
            return Err("week_starts_on must be between 0 and 6".to_string());
        }

        if self.hour_height <= 0.0 {
            return Err("hour_height must be positive".to_string());
        }

        if self.min_event_height < 0.0 {
            return Err("min_event_height cannot be negative".to_string());
        }

        if !(0.0..50.0).contains(&self.time_column_width_pct) {
            return Err("time_column_width_pct must be in [0, 50)".to_string());
        }

        if self.max_visible_columns == 0 {
            return Err("max_visible_columns must be at least 1".to_string());
        }

        let min = self
            .min_time_of_day()
            .ok_or_else(|| format!("min_time is not a valid HH:MM time: {}", self.min_time))?;
        let max = self
            .max_time_of_day()
            .ok_or_else(|| format!("max_time is not a valid HH:MM time: {}", self.max_time))?;

        if min > max {
            return Err("min_time must not be later than max_time".to_string());
        }

        Ok(())
    }

    pub fn min_time_of_day(&self) -> Option<NaiveTime> {
        parse_hhmm(&self.min_time)
    }

    pub fn max_time_of_day(&self) -> Option<NaiveTime> {
        parse_hhmm(&self.max_time)
    }
}
