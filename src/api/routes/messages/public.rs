//! Public types for the message history API
use serde::{Deserialize, Serialize};

use crate::chat::ChatMessage;

#[derive(Deserialize)]
pub struct SendRequest {
    pub content: String,
}

#[derive(Serialize)]
pub struct MessageView {
    #[serde(flatten)]
    pub message: ChatMessage,
    // Content with bare links rewritten as markdown links
    pub display: String,
}

impl From<ChatMessage> for MessageView {
    fn from(message: ChatMessage) -> Self {
        let display = message.display_content();
        Self { message, display }
    }
}

#[derive(Serialize)]
pub struct SendResponse {
    pub user: MessageView,
    pub assistant: MessageView,
}
