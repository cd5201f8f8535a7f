//! Pure time-grid layout engine for the day and week views.
//!
//! Everything in this module is plain data in, plain data out: the render
//! layer feeds events, a day, and a visible-hour window through
//! [`visibility`], [`overlap`], and [`projection`] on every pass, and paints
//! whatever geometry comes back. Nothing here touches egui or retains state
//! between passes, apart from the two interactive controllers
//! ([`time_range::TimeRangeControl`] and [`drag::DragRescheduler`]) that own
//! exactly the state their widgets need.

pub mod drag;
pub mod overlap;
pub mod projection;
pub mod time_range;
pub mod visibility;
pub mod window;

pub use drag::{DragRescheduler, GhostPreview, GridMetrics, PointerPos};
pub use overlap::{columns, group_overlapping, ColumnSlot, OverlapGroup};
pub use projection::{
    occupied_hours, project_day, project_week, time_indicator_y, EventGeometry, LayoutParams,
};
pub use time_range::{HourField, TimeRangeControl};
pub use visibility::{hidden_warning, is_event_visible, partition_for_day, DayEvents};
pub use window::{HourAxis, TimeWindow, WindowPreset};
