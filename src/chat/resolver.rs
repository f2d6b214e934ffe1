//! Turn user input into an answer.
//!
//! Two strategies are available. [`IntentResolver`] hands the text to
//! the remote intent API. [`KeywordResolver`] matches the text against
//! an ordered list of Korean keyword rules and fetches notices or
//! menus itself.
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::AppConfig;
use crate::school::{Category, SchoolClient, get_menu, get_notice};

pub const SEND_ERROR_ANSWER: &str =
    "메시지 전송 중 오류가 발생했습니다. 네트워크 상태를 확인하고 다시 시도해주세요.";
pub const EMPTY_ANSWER: &str = "응답을 받지 못했습니다. 다시 시도해주세요.";
pub const FALLBACK_ANSWER: &str =
    "안녕하세요! 학사, 장학, 일반 공지사항이나 학식 정보 등에 대해 물어보세요.";

/// Produces the assistant's answer for a user message. Never fails:
/// problems are reported as answer text.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, text: &str) -> String;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolverKind {
    Intent,
    Keyword,
}

impl FromStr for ResolverKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "intent" => Ok(ResolverKind::Intent),
            "keyword" => Ok(ResolverKind::Keyword),
            other => Err(anyhow::anyhow!("Unknown resolver: {}", other)),
        }
    }
}

pub fn build_resolver(config: &AppConfig) -> Arc<dyn Resolver> {
    match config.resolver {
        ResolverKind::Intent => Arc::new(IntentResolver::new(SchoolClient::new(
            &config.intent_api_url,
        ))),
        ResolverKind::Keyword => Arc::new(KeywordResolver::new(SchoolClient::new(
            &config.proxy_api_url,
        ))),
    }
}

pub struct IntentResolver {
    client: SchoolClient,
    // One anonymous id per client session
    user_id: String,
}

impl IntentResolver {
    pub fn new(client: SchoolClient) -> Self {
        Self {
            client,
            user_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

#[async_trait]
impl Resolver for IntentResolver {
    async fn resolve(&self, text: &str) -> String {
        match self.client.chat_intent(text, &self.user_id).await {
            Ok(resp) => resp
                .answer
                .filter(|answer| !answer.is_empty())
                .unwrap_or_else(|| EMPTY_ANSWER.to_string()),
            Err(e) => {
                tracing::error!("Intent API error: {}", e);
                SEND_ERROR_ANSWER.to_string()
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Notice(Category),
    Menu {
        category: Category,
        label: &'static str,
    },
    Canned(&'static str),
}

/// A keyword rule. It matches when the text contains any of its
/// keywords.
#[derive(Clone, Debug)]
pub struct Rule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub action: Action,
}

impl Rule {
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
    }
}

/// Rules in priority order. Several rules can match the same text
/// ("장학금 공지" contains "장학금", "기숙사 메뉴" contains "메뉴"), so
/// the more specific rule has to come first.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "academic_notice",
            keywords: &["학사공지"],
            action: Action::Notice(Category::Academic),
        },
        Rule {
            name: "scholarship_notice",
            keywords: &["장학공지", "장학금 공지"],
            action: Action::Notice(Category::Scholarship),
        },
        Rule {
            name: "general_notice",
            keywords: &["일반공지", "한경공지"],
            action: Action::Notice(Category::General),
        },
        Rule {
            name: "academic_schedule",
            keywords: &["학사일정"],
            action: Action::Notice(Category::Schedule),
        },
        Rule {
            name: "student_meals",
            keywords: &["학생식단", "학생식당", "학생 학식", "학생 메뉴"],
            action: Action::Menu {
                category: Category::StudentMeals,
                label: "학생식단",
            },
        },
        Rule {
            name: "staff_meals",
            keywords: &["교직원식단", "교직원식당", "교직원 학식", "교직원 메뉴"],
            action: Action::Menu {
                category: Category::StaffMeals,
                label: "교직원식단",
            },
        },
        Rule {
            name: "dorm_meals",
            keywords: &["기숙사식단", "기숙사식당", "기숙사 학식", "기숙사 메뉴"],
            action: Action::Menu {
                category: Category::DormMeals,
                label: "기숙사식단",
            },
        },
        Rule {
            name: "any_meal",
            keywords: &["식단", "학식", "메뉴", "밥", "점심", "저녁"],
            action: Action::Menu {
                category: Category::StudentMeals,
                label: "오늘의 식단",
            },
        },
        Rule {
            name: "course_registration",
            keywords: &["수강 신청"],
            action: Action::Canned(
                "수강 신청은 학교 포털 사이트에서 가능합니다. 신청 기간은 2월 15일부터 2월 28일까지입니다.",
            ),
        },
        Rule {
            name: "scholarship",
            keywords: &["장학금"],
            action: Action::Canned(
                "장학금 신청은 매 학기 시작 전 한 달 전부터 가능합니다. 자세한 내용은 학생지원과에 문의해주세요.",
            ),
        },
        Rule {
            name: "dormitory",
            keywords: &["기숙사"],
            action: Action::Canned("기숙사 신청은 학교 홈페이지 기숙사 메뉴에서 확인하실 수 있습니다."),
        },
    ]
}

pub struct KeywordResolver {
    client: SchoolClient,
    rules: Vec<Rule>,
}

impl KeywordResolver {
    pub fn new(client: SchoolClient) -> Self {
        Self::with_rules(client, default_rules())
    }

    pub fn with_rules(client: SchoolClient, rules: Vec<Rule>) -> Self {
        Self { client, rules }
    }

    /// First rule that matches, `None` means the fallback answer.
    pub fn route(&self, text: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(text))
    }
}

#[async_trait]
impl Resolver for KeywordResolver {
    async fn resolve(&self, text: &str) -> String {
        let Some(rule) = self.route(text) else {
            return FALLBACK_ANSWER.to_string();
        };
        tracing::debug!("Routing message with rule {}", rule.name);

        match &rule.action {
            Action::Notice(category) => get_notice(&self.client, *category).await,
            Action::Menu { category, label } => get_menu(&self.client, *category, label).await,
            Action::Canned(answer) => answer.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword_resolver(url: &str) -> KeywordResolver {
        KeywordResolver::new(SchoolClient::new(url))
    }

    fn routed(text: &str) -> Option<&'static str> {
        let resolver = keyword_resolver("http://localhost:2222");
        resolver.route(text).map(|r| r.name)
    }

    #[test]
    fn it_prefers_specific_rules() {
        assert_eq!(routed("오늘 학생식당 메뉴 알려줘"), Some("student_meals"));
        assert_eq!(routed("오늘 기숙사식당 메뉴 알려줘"), Some("dorm_meals"));
        assert_eq!(routed("11월 05일 교직원식당"), Some("staff_meals"));
        assert_eq!(routed("기숙사 메뉴"), Some("dorm_meals"));
        assert_eq!(routed("오늘 점심 뭐야"), Some("any_meal"));
        assert_eq!(routed("장학금 공지 보여줘"), Some("scholarship_notice"));
        assert_eq!(routed("장학금 신청 기간은 언제인가요?"), Some("scholarship"));
        assert_eq!(routed("기숙사 신청 방법이 궁금합니다."), Some("dormitory"));
        assert_eq!(routed("학사일정을 확인하고 싶어요"), Some("academic_schedule"));
        assert_eq!(routed("10월 한경공지"), Some("general_notice"));
    }

    #[tokio::test]
    async fn it_falls_back_for_unmatched_text() {
        let resolver = keyword_resolver("http://localhost:2222");
        assert_eq!(routed("안녕"), None);
        assert_eq!(resolver.resolve("안녕").await, FALLBACK_ANSWER);
    }

    #[tokio::test]
    async fn it_answers_canned_questions_without_network() {
        let resolver = keyword_resolver("http://localhost:1");
        let answer = resolver.resolve("수강 신청은 어떻게 하나요?").await;
        assert!(answer.starts_with("수강 신청은 학교 포털 사이트에서"));
    }

    #[tokio::test]
    async fn it_fetches_menus_for_meal_rules() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/notice")
            .match_query(mockito::Matcher::UrlEncoded(
                "category".into(),
                "학생식단".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 1, "mealDate": "2025-03-04", "mealTime": "중식", "menu": "김치찌개\n쌀밥"}]"#)
            .create();

        let resolver = keyword_resolver(&server.url());
        let answer = resolver.resolve("오늘 학생식당 메뉴 알려줘").await;
        assert_eq!(
            answer,
            "학생식단 최근 식단 정보입니다:\n\n2025-03-04 (중식)\n- 김치찌개\n- 쌀밥"
        );
    }

    #[tokio::test]
    async fn it_returns_the_intent_answer() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/chat/intent")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"answer": "도서관은 9시에 엽니다."}"#)
            .create();

        let resolver = IntentResolver::new(SchoolClient::new(&server.url()));
        assert_eq!(resolver.resolve("도서관").await, "도서관은 9시에 엽니다.");
    }

    #[tokio::test]
    async fn it_substitutes_messages_for_intent_failures() {
        let mut server = mockito::Server::new_async().await;
        let _empty = server
            .mock("POST", "/api/chat/intent")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"answer": ""}"#)
            .create();
        let resolver = IntentResolver::new(SchoolClient::new(&server.url()));
        assert_eq!(resolver.resolve("도서관").await, EMPTY_ANSWER);

        let resolver = IntentResolver::new(SchoolClient::new("http://127.0.0.1:1"));
        assert_eq!(resolver.resolve("도서관").await, SEND_ERROR_ANSWER);
    }

    #[test]
    fn it_parses_resolver_kind() {
        assert_eq!("Keyword".parse::<ResolverKind>().unwrap(), ResolverKind::Keyword);
        assert!("nlp".parse::<ResolverKind>().is_err());
    }
}
