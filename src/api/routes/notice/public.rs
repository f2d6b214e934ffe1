//! Public types for the notice proxy API
use serde::Deserialize;

pub const INVALID_CATEGORY: &str = "유효하지 않은 카테고리입니다.";
pub const UPSTREAM_STATUS_ERROR: &str = "서버 응답 오류";
pub const PROXY_FAILED: &str = "프록시 요청 실패";

#[derive(Deserialize)]
pub struct NoticeQuery {
    // Korean category name, e.g. "학사" or "기숙사식단"
    pub category: Option<String>,
}
