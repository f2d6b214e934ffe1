//! Static navigation shown in the sidebar.
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct QuickLink {
    pub title: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
    // Opens in the system browser instead of the in-app one
    pub external: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct Shortcut {
    pub title: &'static str,
    pub reply: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub quick_links: &'static [QuickLink],
    pub cafeterias: &'static [Shortcut],
    pub quick_replies: &'static [&'static str],
}

pub const QUICK_LINKS: &[QuickLink] = &[
    QuickLink {
        title: "학교 홈페이지",
        icon: "web",
        url: "https://www.hknu.ac.kr/",
        external: false,
    },
    QuickLink {
        title: "사이버캠퍼스",
        icon: "laptop",
        url: "https://cyber.hknu.ac.kr/ilos/main/main_form.acl",
        external: false,
    },
    QuickLink {
        title: "수강 신청",
        icon: "book-open-variant",
        url: "https://sugang.hknu.ac.kr/login",
        external: true,
    },
    QuickLink {
        title: "도서관",
        icon: "library",
        url: "https://lib.hknu.ac.kr/",
        external: true,
    },
];

pub const CAFETERIA_SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        title: "학생식당",
        reply: "오늘 학생식당 메뉴 알려줘",
    },
    Shortcut {
        title: "기숙사식당",
        reply: "오늘 기숙사식당 메뉴 알려줘",
    },
    Shortcut {
        title: "교직원식당",
        reply: "오늘 교직원식당 메뉴 알려줘",
    },
];

pub const QUICK_REPLIES: &[&str] = &[
    "수강 신청은 어떻게 하나요?",
    "장학금 신청 기간은 언제인가요?",
    "기숙사 신청 방법이 궁금합니다.",
    "도서관 이용시간을 알려주세요",
    "학사일정을 확인하고 싶어요",
];

pub fn navigation() -> Navigation {
    Navigation {
        quick_links: QUICK_LINKS,
        cafeterias: CAFETERIA_SHORTCUTS,
        quick_replies: QUICK_REPLIES,
    }
}

/// Message to send when a cafeteria entry is picked.
pub fn cafeteria_reply(title: &str) -> Option<&'static str> {
    CAFETERIA_SHORTCUTS
        .iter()
        .find(|s| s.title == title)
        .map(|s| s.reply)
}
