//! Public types for the chat proxy API
use serde::Deserialize;

/// Both fields are optional so a missing field can be reported with
/// its own message instead of a generic rejection.
#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}
