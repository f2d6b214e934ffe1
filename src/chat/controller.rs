use std::sync::Arc;

use anyhow::{Error, Result};
use serde::Serialize;
use tokio::sync::Mutex;

use super::models::{ChatMessage, Role};
use super::resolver::Resolver;
use super::store::MessageStore;

/// The user message and the answer it produced.
#[derive(Clone, Debug, Serialize)]
pub struct Exchange {
    pub user: ChatMessage,
    pub assistant: ChatMessage,
}

/// Accepts user input, asks the resolver for an answer and records
/// both in the message store.
///
/// The store is locked only while appending. A second message sent
/// before the first answer arrives is not queued or cancelled: each
/// answer is appended when it comes back, so answers can land out of
/// order.
#[derive(Clone)]
pub struct ChatController {
    store: Arc<Mutex<MessageStore>>,
    resolver: Arc<dyn Resolver>,
}

impl ChatController {
    pub fn new(store: MessageStore, resolver: Arc<dyn Resolver>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            resolver,
        }
    }

    /// Send a message. Blank input is ignored and returns `None`.
    pub async fn send(&self, content: &str) -> Option<Exchange> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }

        let user = ChatMessage::new(Role::User, content);
        self.store.lock().await.append(user.clone()).await;

        let answer = self.resolver.resolve(content).await;

        let assistant = ChatMessage::new(Role::Assistant, &answer);
        self.store.lock().await.append(assistant.clone()).await;

        Some(Exchange { user, assistant })
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.store.lock().await.messages().to_vec()
    }

    pub async fn clear(&self) -> Result<(), Error> {
        self.store.lock().await.clear().await
    }

    /// Plain text transcript for saving to a file.
    pub async fn export_text(&self) -> String {
        self.store
            .lock()
            .await
            .messages()
            .iter()
            .map(|msg| {
                let speaker = match msg.role {
                    Role::User => "사용자",
                    Role::Assistant => "한경대 챗봇",
                };
                format!("{}: {}", speaker, msg.content)
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
