//! Academic calendar for the 2025 school year.
use super::models::{AcademicEvent, EventType, RawEvent, parse_events};

#[rustfmt::skip]
const ACADEMIC_YEAR_2025: &[(&str, &str, &str, &str, EventType)] = &[
    ("2025-01-06", "2025-02-27", "1차 온라인 복학 신청", "01.06 (월) ~ 02.27 (목) 1차 온라인 복학 신청", EventType::Academic),
    ("2025-01-06", "2025-01-10", "전과 및 재입학 신청", "01.06 (월) ~ 01.10 (금) 전과 및 재입학 신청", EventType::Academic),
    ("2025-01-13", "2025-01-15", "복수, 융합, 연계 전공 신청", "01.13 (월) ~ 01.15 (수) 복수, 융합, 연계 전공 신청", EventType::Registration),
    ("2025-01-20", "2025-01-21", "예비 수강신청 (장바구니)", "01.20 (월) ~ 01.21 (화) 예비 수강신청 (장바구니)", EventType::Registration),
    ("2025-02-21", "2025-02-21", "2024학년도 전기 학위수여식", "02.21 (금) 2024학년도 전기 학위수여식", EventType::Ceremony),
    ("2025-02-24", "2025-02-28", "2025-1학기 재학생 등록기간", "02.24 (월) ~ 02.28 (금) 2025-1학기 재학생 등록기간", EventType::Academic),
    ("2025-03-04", "2025-03-04", "1학기 개강", "03.04 (화) 1학기 개강", EventType::Academic),
    ("2025-04-15", "2025-04-15", "개교기념일", "04.15 (화) 개교기념일", EventType::Holiday),
    ("2025-04-23", "2025-04-29", "1학기 중간시험", "04.23 (수) ~ 04.29 (화) 1학기 중간시험", EventType::Exam),
    ("2025-05-20", "2025-05-22", "한경체전(체육대회)", "05.20 (화) ~ 05.22 (목) 한경체전(체육대회)", EventType::Festival),
    ("2025-06-11", "2025-06-20", "1학기 기말시험", "06.11 (수) ~ 06.20 (금) 1학기 기말시험", EventType::Exam),
    ("2025-06-20", "2025-06-20", "종강", "06.20 (금) 종강", EventType::Academic),
    ("2025-06-23", "2025-07-11", "하계 계절수업", "06.23 (월) ~ 07.11 (금) 하계 계절수업", EventType::Academic),
    ("2025-09-29", "2025-09-30", "한경 대동제 (축제)", "09.29 (월) ~ 09.30 (화) 한경 대동제 (축제)", EventType::Festival),
    ("2025-10-25", "2025-10-31", "2학기 중간시험", "10.25 (토) ~ 10.31 (금) 2학기 중간시험", EventType::Exam),
    ("2025-12-13", "2025-12-19", "2학기 기말시험", "12.13 (토) ~ 12.19 (금) 2학기 기말시험", EventType::Exam),
    ("2025-12-19", "2025-12-19", "종강", "12.19 (금) 종강", EventType::Academic),
    ("2025-12-22", "2026-01-13", "동계 계절수업", "12.22 (월) ~ 01.13 (화) 동계 계절수업", EventType::Academic),
];

pub fn raw_academic_events() -> Vec<RawEvent> {
    ACADEMIC_YEAR_2025
        .iter()
        .map(|(start, end, title, description, event_type)| RawEvent {
            start_date: start.to_string(),
            end_date: end.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            event_type: *event_type,
        })
        .collect()
}

/// The built-in academic events with ids 1..=18.
pub fn academic_events() -> Vec<AcademicEvent> {
    parse_events(&raw_academic_events())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_every_builtin_event() {
        let events = academic_events();
        assert_eq!(events.len(), 18);
        assert_eq!(events.first().unwrap().id, 1);
        assert_eq!(events.last().unwrap().id, 18);
        assert!(events.iter().all(|e| e.start_date <= e.end_date));
    }
}
