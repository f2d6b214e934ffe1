//! Public types for the calendar API
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{BarGeometry, CalendarWeek, EventLayout};

#[derive(Deserialize)]
pub struct CalendarQuery {
    // "YYYY-MM", defaults to the current month
    pub month: Option<String>,
    // Rendered height of one day cell in pixels
    pub cell_height: Option<f64>,
}

#[derive(Deserialize)]
pub struct DayQuery {
    pub date: NaiveDate,
}

#[derive(Serialize)]
pub struct BarCss {
    pub top: String,
    pub left: String,
    pub width: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedEvent {
    #[serde(flatten)]
    pub layout: EventLayout,
    pub geometry: BarGeometry,
    pub css: BarCss,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub month_start: NaiveDate,
    pub previous_month: Option<NaiveDate>,
    pub next_month: Option<NaiveDate>,
    pub cell_height: f64,
    pub weeks: Vec<CalendarWeek>,
    pub event_layouts: Vec<PositionedEvent>,
}
