use serde::Serialize;
use serde_json::Value;

use super::category::Category;
use super::client::SchoolClient;
use super::table::ProxyBody;

const LATEST_NOTICE_COUNT: usize = 3;
// Feeds disagree on what the date field is called
const DATE_FIELDS: [&str; 5] = ["noticeDate", "date", "regDate", "createdAt", "postedAt"];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Notice {
    pub title: String,
    pub date: String,
    pub url: Option<String>,
}

/// Text of a scalar JSON field, `None` when missing or null.
pub(crate) fn field_text(record: &Value, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl Notice {
    pub fn from_record(record: &Value) -> Self {
        let title = field_text(record, "title").unwrap_or_else(|| "제목 없음".to_string());
        let date = DATE_FIELDS
            .iter()
            .find_map(|field| field_text(record, field))
            .unwrap_or_else(|| "날짜 없음".to_string());
        let url = field_text(record, "url").filter(|u| !u.is_empty());
        Self { title, date, url }
    }
}

/// The latest notices, in feed order.
pub fn extract_notices(records: &[Value]) -> Vec<Notice> {
    records
        .iter()
        .take(LATEST_NOTICE_COUNT)
        .map(Notice::from_record)
        .collect()
}

pub fn format_notices(category: Category, notices: &[Notice]) -> String {
    let entries: Vec<String> = notices
        .iter()
        .enumerate()
        .map(|(idx, notice)| {
            let url = notice
                .url
                .as_ref()
                .map(|u| format!("\n{}", u))
                .unwrap_or_default();
            format!("{}. {} ({}){}", idx + 1, notice.title, notice.date, url)
        })
        .collect();
    format!("{} 최신 3건입니다:\n\n{}", category, entries.join("\n\n"))
}

/// Fetch a notice feed and render it as a chat answer. Failures are
/// turned into a Korean explanation instead of an error.
pub async fn get_notice(client: &SchoolClient, category: Category) -> String {
    let body = match client.notice_feed(category).await {
        Ok(body) => body,
        Err(e) => {
            let status = e
                .downcast_ref::<reqwest::Error>()
                .and_then(|e| e.status());
            if let Some(status) = status {
                tracing::error!("Notice server responded with {}", status);
                return "공지사항 서버 응답에 문제가 발생했습니다.".to_string();
            }
            tracing::error!("Failed to load notices: {}", e);
            return "공지사항을 불러오는 중 오류가 발생했습니다.".to_string();
        }
    };

    let records = match body {
        ProxyBody::OtherJson(_) => {
            tracing::warn!("Notice response for {} is not a list", category);
            return format!("{} 공지를 찾을 수 없습니다.", category);
        }
        ProxyBody::Unrecognized => {
            tracing::error!("Unrecognized notice response for {}", category);
            return "공지사항을 불러오는 중 오류가 발생했습니다.".to_string();
        }
        body => body.into_records().unwrap_or_default(),
    };

    if records.is_empty() {
        return format!("{} 공지를 찾을 수 없습니다.", category);
    }

    format_notices(category, &extract_notices(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_falls_back_through_date_fields() {
        let notice = Notice::from_record(&json!({"title": "a", "regDate": "2025-03-01", "postedAt": "x"}));
        assert_eq!(notice.date, "2025-03-01");

        let notice = Notice::from_record(&json!({"title": "a", "noticeDate": null, "date": "2025-03-02"}));
        assert_eq!(notice.date, "2025-03-02");

        let notice = Notice::from_record(&json!({}));
        assert_eq!(notice.title, "제목 없음");
        assert_eq!(notice.date, "날짜 없음");
        assert_eq!(notice.url, None);
    }

    #[test]
    fn it_formats_the_latest_three() {
        let records = vec![
            json!({"title": "수강신청 안내", "noticeDate": "2025-02-10", "url": "https://www.hknu.ac.kr/1"}),
            json!({"title": "휴학 안내", "noticeDate": "2025-02-09"}),
            json!({"title": "졸업 안내", "noticeDate": "2025-02-08"}),
            json!({"title": "오래된 공지", "noticeDate": "2025-01-01"}),
        ];
        let notices = extract_notices(&records);
        assert_eq!(notices.len(), 3);

        let text = format_notices(Category::Academic, &notices);
        assert_eq!(
            text,
            "학사 최신 3건입니다:\n\n\
             1. 수강신청 안내 (2025-02-10)\nhttps://www.hknu.ac.kr/1\n\n\
             2. 휴학 안내 (2025-02-09)\n\n\
             3. 졸업 안내 (2025-02-08)"
        );
    }

    #[tokio::test]
    async fn it_explains_failures_in_korean() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/notice")
            .match_query(mockito::Matcher::Any)
            .with_status(502)
            .create();
        let client = SchoolClient::new(&server.url());
        assert_eq!(
            get_notice(&client, Category::Scholarship).await,
            "공지사항 서버 응답에 문제가 발생했습니다."
        );
    }

    #[tokio::test]
    async fn it_reports_empty_feeds() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/notice")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create();
        let client = SchoolClient::new(&server.url());
        assert_eq!(
            get_notice(&client, Category::General).await,
            "일반 공지를 찾을 수 없습니다."
        );
    }

    #[tokio::test]
    async fn it_reports_non_list_feeds_as_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/notice")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"error": "none"}"#)
            .create();
        let client = SchoolClient::new(&server.url());
        assert_eq!(
            get_notice(&client, Category::Academic).await,
            "학사 공지를 찾을 수 없습니다."
        );
    }
}
