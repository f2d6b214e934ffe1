use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Academic,
    Registration,
    Ceremony,
    Festival,
    Exam,
    Holiday,
    #[serde(other)]
    Other,
}

impl EventType {
    /// Short Korean label shown on the event badge
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Academic => "학사",
            EventType::Registration => "신청",
            EventType::Ceremony => "행사",
            EventType::Festival => "축제",
            EventType::Exam => "시험",
            EventType::Holiday => "휴일",
            EventType::Other => "기타",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicEvent {
    pub id: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
}

impl AcademicEvent {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of calendar days the event spans, both ends inclusive.
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl fmt::Display for AcademicEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.event_type.label(), self.description)
    }
}

/// Event record as written in the reference data, before its dates
/// have been validated.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub start_date: String,
    pub end_date: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
}

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("invalid date {value:?} for event \"{title}\"")]
    InvalidDate { title: String, value: String },
    #[error("event \"{title}\" ends ({end}) before it starts ({start})")]
    InvertedRange {
        title: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl RawEvent {
    pub fn parse(&self, id: u32) -> Result<AcademicEvent, EventError> {
        let parse_date = |value: &str| {
            NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
                EventError::InvalidDate {
                    title: self.title.clone(),
                    value: value.to_string(),
                }
            })
        };
        let start_date = parse_date(&self.start_date)?;
        let end_date = parse_date(&self.end_date)?;
        if end_date < start_date {
            return Err(EventError::InvertedRange {
                title: self.title.clone(),
                start: start_date,
                end: end_date,
            });
        }

        Ok(AcademicEvent {
            id,
            start_date,
            end_date,
            title: self.title.clone(),
            description: self.description.clone(),
            event_type: self.event_type,
        })
    }
}

/// Parse raw records into events, assigning ids from 1 in input
/// order. A record with a bad date is logged and left out; the rest
/// are unaffected.
pub fn parse_events(raw: &[RawEvent]) -> Vec<AcademicEvent> {
    raw.iter()
        .zip(1u32..)
        .filter_map(|(record, id)| match record.parse(id) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::warn!("Skipping academic event {}: {}", id, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(start: &str, end: &str) -> RawEvent {
        RawEvent {
            start_date: start.to_string(),
            end_date: end.to_string(),
            title: "test".to_string(),
            description: "test event".to_string(),
            event_type: EventType::Exam,
        }
    }

    #[test]
    fn it_skips_malformed_events_without_dropping_others() {
        let events = parse_events(&[
            raw("2025-01-06", "2025-01-10"),
            raw("2025-13-01", "2025-13-02"),
            raw("2025-02-01", "2025-01-01"),
            raw("2025-03-04", "2025-03-04"),
        ]);

        assert_eq!(events.len(), 2);
        // Ids follow the position in the source data
        assert_eq!(events[0].id, 1);
        assert_eq!(events[1].id, 4);
        assert_eq!(events[1].day_count(), 1);
    }

    #[test]
    fn it_deserializes_unknown_types_as_other() {
        let record: RawEvent = serde_json::from_str(
            r#"{"startDate":"2025-01-01","endDate":"2025-01-01","title":"t","description":"d","type":"sports"}"#,
        )
        .unwrap();
        assert_eq!(record.event_type, EventType::Other);
        assert_eq!(record.event_type.label(), "기타");
    }
}
