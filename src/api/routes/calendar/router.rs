//! Router for the calendar API

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Json, Response},
    routing::get,
};
use axum_extra::extract::Query;
use chrono::{Local, NaiveDate};

use super::public;
use crate::api::public::error_response;
use crate::api::state::AppState;
use crate::calendar::{
    AcademicEvent, BarGeometry, DEFAULT_CELL_HEIGHT, events_on, layout_month, shift_month,
};

type SharedState = Arc<RwLock<AppState>>;

fn parse_month(month: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d").ok()
}

async fn calendar_handler(
    State(state): State<SharedState>,
    Query(params): Query<public::CalendarQuery>,
) -> Result<Json<public::CalendarResponse>, Response> {
    let reference = match params.month.as_deref() {
        Some(month) => parse_month(month).ok_or_else(|| {
            error_response(StatusCode::BAD_REQUEST, "month must be formatted as YYYY-MM")
        })?,
        None => Local::now().date_naive(),
    };
    let cell_height = params
        .cell_height
        .filter(|h| h.is_finite() && *h > 0.0)
        .unwrap_or(DEFAULT_CELL_HEIGHT);

    let layout = {
        let shared_state = state.read().expect("Unable to read share state");
        layout_month(reference, &shared_state.events)
    }
    .map_err(|e| error_response(StatusCode::BAD_REQUEST, &e.to_string()))?;

    let week_count = layout.weeks.len();
    let event_layouts = layout
        .event_layouts
        .into_iter()
        .map(|layout| {
            let geometry = BarGeometry::for_layout(&layout, week_count, cell_height);
            let (top, left, width) = geometry.css();
            public::PositionedEvent {
                layout,
                geometry,
                css: public::BarCss { top, left, width },
            }
        })
        .collect();

    Ok(Json(public::CalendarResponse {
        month_start: layout.month_start,
        previous_month: shift_month(layout.month_start, -1),
        next_month: shift_month(layout.month_start, 1),
        cell_height,
        weeks: layout.weeks,
        event_layouts,
    }))
}

async fn day_handler(
    State(state): State<SharedState>,
    Query(params): Query<public::DayQuery>,
) -> Json<Vec<AcademicEvent>> {
    let shared_state = state.read().expect("Unable to read share state");
    let events = events_on(params.date, &shared_state.events)
        .into_iter()
        .cloned()
        .collect();
    Json(events)
}

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(calendar_handler))
        .route("/day", get(day_handler))
}
