//! Academic calendar: reference events and the month view layout.
pub mod data;
pub mod geometry;
pub mod layout;
pub mod models;

pub use data::academic_events;
pub use geometry::{BarGeometry, DEFAULT_CELL_HEIGHT};
pub use layout::{
    CalendarWeek, EventLayout, LayoutError, MAX_TRACKS_PER_WEEK, MonthLayout, events_on,
    layout_month, month_grid, shift_month,
};
pub use models::{AcademicEvent, EventType, RawEvent, parse_events};
