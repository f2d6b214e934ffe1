use std::sync::LazyLock;

use regex::{Captures, Regex};

// "• 제목 (https://...)" on a line of its own
static TITLE_WITH_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(•[ \t]*)?(.+?)[ \t]+\((https?://[^)\n]+)\)[ \t]*$")
        .expect("valid link regex")
});

/// Rewrite `title (url)` lines into markdown links so they render as
/// tappable links.
pub fn linkify(content: &str) -> String {
    TITLE_WITH_URL
        .replace_all(content, |caps: &Captures| {
            let bullet = caps.get(1).map_or("", |m| m.as_str());
            format!("{}[{}]({})\n", bullet, &caps[2], &caps[3])
        })
        .into_owned()
}
