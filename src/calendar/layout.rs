//! Period-bar layout for a month grid.
//!
//! Events are drawn as horizontal bars spanning their date range. A
//! bar that crosses a week boundary is split into one segment per
//! week, and overlapping segments inside a week are stacked on
//! separate tracks. Tracks are assigned greedily: events are visited
//! earliest start first (longest first on ties) and each week segment
//! takes the lowest track that week has not handed out yet.
use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

use super::models::AcademicEvent;

pub const MAX_TRACKS_PER_WEEK: usize = 6;
const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("month containing {0} is outside the supported date range")]
    OutOfRange(NaiveDate),
}

/// Seven consecutive dates starting on a Sunday.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalendarWeek {
    pub days: [NaiveDate; DAYS_PER_WEEK],
}

impl CalendarWeek {
    fn starting(sunday: NaiveDate) -> Self {
        Self {
            days: std::array::from_fn(|i| sunday + Duration::days(i as i64)),
        }
    }

    pub fn first(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn last(&self) -> NaiveDate {
        self.days[DAYS_PER_WEEK - 1]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first() <= date && date <= self.last()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLayout {
    pub event: AcademicEvent,
    pub track: usize,
    pub start_week: usize,
    /// 0 is Sunday
    pub start_day: u32,
    pub duration: u32,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthLayout {
    pub month_start: NaiveDate,
    pub weeks: Vec<CalendarWeek>,
    pub event_layouts: Vec<EventLayout>,
}

impl MonthLayout {
    pub fn calendar_start(&self) -> Option<NaiveDate> {
        self.weeks.first().map(CalendarWeek::first)
    }

    pub fn calendar_end(&self) -> Option<NaiveDate> {
        self.weeks.last().map(CalendarWeek::last)
    }

    /// Segments drawn in the week at `week_index`, in track order.
    pub fn week_segments(&self, week_index: usize) -> Vec<&EventLayout> {
        let mut segments: Vec<&EventLayout> = self
            .event_layouts
            .iter()
            .filter(|l| l.start_week == week_index)
            .collect();
        segments.sort_by_key(|l| l.track);
        segments
    }
}

fn month_bounds(reference: NaiveDate) -> Result<(NaiveDate, NaiveDate), LayoutError> {
    let month_start = reference
        .with_day(1)
        .ok_or(LayoutError::OutOfRange(reference))?;
    let month_end = month_start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or(LayoutError::OutOfRange(reference))?;
    Ok((month_start, month_end))
}

/// The visible grid for the month containing `reference`: whole
/// Sunday-to-Saturday weeks covering the first through the last day
/// of the month.
pub fn month_grid(reference: NaiveDate) -> Result<Vec<CalendarWeek>, LayoutError> {
    let (month_start, month_end) = month_bounds(reference)?;
    let lead = month_start.weekday().num_days_from_sunday() as i64;
    let trail = 6 - month_end.weekday().num_days_from_sunday() as i64;

    let calendar_start = month_start
        .checked_sub_signed(Duration::days(lead))
        .ok_or(LayoutError::OutOfRange(reference))?;
    let calendar_end = month_end
        .checked_add_signed(Duration::days(trail))
        .ok_or(LayoutError::OutOfRange(reference))?;

    let week_count = ((calendar_end - calendar_start).num_days() + 1) / DAYS_PER_WEEK as i64;
    let weeks = (0..week_count)
        .map(|i| CalendarWeek::starting(calendar_start + Duration::weeks(i)))
        .collect();
    Ok(weeks)
}

/// Lay out `events` on the month containing `reference`.
///
/// `events` is the full event list; anything outside the grid is
/// ignored. The result is recomputed from scratch on every call.
pub fn layout_month(
    reference: NaiveDate,
    events: &[AcademicEvent],
) -> Result<MonthLayout, LayoutError> {
    let (month_start, _) = month_bounds(reference)?;
    let weeks = month_grid(reference)?;
    let (Some(calendar_start), Some(calendar_end)) =
        (weeks.first().map(CalendarWeek::first), weeks.last().map(CalendarWeek::last))
    else {
        return Ok(MonthLayout {
            month_start,
            weeks,
            event_layouts: vec![],
        });
    };

    let mut visible: Vec<&AcademicEvent> = events
        .iter()
        .filter(|event| {
            if event.end_date < event.start_date {
                tracing::warn!(
                    "Skipping event {} with end {} before start {}",
                    event.id,
                    event.end_date,
                    event.start_date
                );
                return false;
            }
            event.start_date <= calendar_end && event.end_date >= calendar_start
        })
        .collect();

    // Stable sort so events with identical ranges keep their input order
    visible.sort_by(|a, b| {
        a.start_date
            .cmp(&b.start_date)
            .then_with(|| b.end_date.cmp(&a.end_date))
    });

    let mut weekly_tracks = vec![[false; MAX_TRACKS_PER_WEEK]; weeks.len()];
    let mut event_layouts = Vec::new();

    for event in visible {
        let event_start = event.start_date.max(calendar_start);
        let event_end = event.end_date.min(calendar_end);

        let Some(start_week) = weeks.iter().position(|w| w.contains(event_start)) else {
            continue;
        };
        let Some(end_week) = weeks.iter().position(|w| w.contains(event_end)) else {
            continue;
        };

        for (week_index, week) in weeks.iter().enumerate().take(end_week + 1).skip(start_week) {
            let segment_start = event_start.max(week.first());
            let segment_end = event_end.min(week.last());

            let start_day = segment_start.weekday().num_days_from_sunday();
            let days = ((segment_end - segment_start).num_days() + 1) as u32;
            let duration = days.min(DAYS_PER_WEEK as u32 - start_day);

            let used = &mut weekly_tracks[week_index];
            let Some(track) = used.iter().position(|taken| !taken) else {
                tracing::debug!(
                    "No free track in week {} for event {}, dropping segment",
                    week_index,
                    event.id
                );
                continue;
            };
            used[track] = true;

            event_layouts.push(EventLayout {
                event: event.clone(),
                track,
                start_week: week_index,
                start_day,
                duration,
            });
        }
    }

    Ok(MonthLayout {
        month_start,
        weeks,
        event_layouts,
    })
}

/// Events that cover `date`, in their original order.
pub fn events_on(date: NaiveDate, events: &[AcademicEvent]) -> Vec<&AcademicEvent> {
    events.iter().filter(|e| e.covers(date)).collect()
}

/// First day of the month `delta` months away from the month of
/// `reference`. Used for previous/next month navigation.
pub fn shift_month(reference: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let month_start = reference.with_day(1)?;
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        month_start.checked_add_months(months)
    } else {
        month_start.checked_sub_months(months)
    }
}
