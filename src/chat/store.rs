use anyhow::{Error, Result};
use serde_json::Value;
use tokio_rusqlite::Connection;

use super::models::{ChatMessage, Role};
use crate::core::kv::{kv_delete, kv_get, kv_set};

pub const MESSAGES_STORAGE_KEY: &str = "chatMessages";

pub const GREETING: &str = r#"[한경국립대학교 챗봇 사용 안내]

안녕하세요 한경국립대학교 챗봇입니다! 무엇을 도와드릴까요? 학사 일정, 학식 메뉴, 빠른 링크 등 다양한 정보를 얻을 수 있습니다. 궁금한 점이 있다면 언제든지 물어봐주세요!

[주요 기능별 사용 방법 예시]

챗봇은 요청하시는 월 또는 날짜를 함께 입력하시면 해당 정보를 빠르고 정확하게 찾아줍니다.

1. 공지사항 (월 입력 필수)
- 📌 장학 공지 확인
  예시: 10월 장학공지

- 📌 한경 일반 공지 확인
  예시: 10월 한경공지

- 📌 학사 공지 확인
  예시: 10월 학사공지

2. 식단 정보 (날짜 입력 필수)
- 📌 교직원 식당 식단
  예시: 11월 05일 교직원식당

- 📌 기숙사 식당 식단
  예시: 11월 05일 기숙사식당

- 📌 학생 식당 식단
  예시: 11월 05일 학생식당


**사용 팁:** [월/날짜] + [원하는 정보] 형태로 입력하시면 됩니다."#;

pub async fn save_messages(db: &Connection, messages: &[ChatMessage]) -> Result<(), Error> {
    let data = serde_json::to_string(messages)?;
    kv_set(db, MESSAGES_STORAGE_KEY, &data).await
}

/// Load the persisted message list. Anything unreadable is treated
/// as no history at all rather than an error.
pub async fn load_messages(db: &Connection) -> Vec<ChatMessage> {
    let stored = match kv_get(db, MESSAGES_STORAGE_KEY).await {
        Ok(Some(stored)) => stored,
        Ok(None) => return vec![],
        Err(e) => {
            tracing::error!("Error loading messages from storage: {}", e);
            return vec![];
        }
    };
    parse_messages(&stored)
}

pub fn parse_messages(stored: &str) -> Vec<ChatMessage> {
    let items = match serde_json::from_str::<Value>(stored) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            tracing::error!("Stored messages are not in the expected array format.");
            return vec![];
        }
        Err(e) => {
            tracing::error!("Error parsing stored messages: {}", e);
            return vec![];
        }
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<ChatMessage>(item) {
            Ok(msg) => Some(msg),
            Err(e) => {
                tracing::warn!("Dropping unreadable stored message: {}", e);
                None
            }
        })
        .collect()
}

pub async fn clear_messages(db: &Connection) -> Result<(), Error> {
    kv_delete(db, MESSAGES_STORAGE_KEY).await
}

/// Ordered message list mirrored to local storage.
pub struct MessageStore {
    db: Connection,
    messages: Vec<ChatMessage>,
}

impl MessageStore {
    /// Restore the saved history, or start a new conversation with
    /// the usage guide when there is none.
    pub async fn open(db: Connection) -> Self {
        let mut messages = load_messages(&db).await;
        if messages.is_empty() {
            messages.push(ChatMessage::new(Role::Assistant, GREETING));
        }
        Self { db, messages }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub async fn append(&mut self, msg: ChatMessage) {
        self.messages.push(msg);
        // The greeting alone is not worth saving
        if self.messages.len() > 1 {
            if let Err(e) = save_messages(&self.db, &self.messages).await {
                tracing::error!("Error saving messages to storage: {}", e);
            }
        }
    }

    pub async fn clear(&mut self) -> Result<(), Error> {
        clear_messages(&self.db).await?;
        self.messages = vec![ChatMessage::new(Role::Assistant, GREETING)];
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kv::test_db::memory_db;

    #[tokio::test]
    async fn it_round_trips_messages() {
        let db = memory_db().await;
        let messages = vec![
            ChatMessage::new(Role::User, "학사공지 알려줘"),
            ChatMessage::new(Role::Assistant, "학사 최신 3건입니다"),
        ];
        save_messages(&db, &messages).await.unwrap();

        let loaded = load_messages(&db).await;
        assert_eq!(loaded.len(), 2);
        for (original, restored) in messages.iter().zip(&loaded) {
            assert_eq!(original.id, restored.id);
            assert_eq!(original.role, restored.role);
            assert_eq!(original.content, restored.content);
            assert_eq!(
                original.timestamp.timestamp_millis(),
                restored.timestamp.timestamp_millis()
            );
        }
    }

    #[tokio::test]
    async fn it_discards_malformed_storage() {
        let db = memory_db().await;

        kv_set(&db, MESSAGES_STORAGE_KEY, "{not json").await.unwrap();
        assert!(load_messages(&db).await.is_empty());

        kv_set(&db, MESSAGES_STORAGE_KEY, r#"{"id": "1"}"#).await.unwrap();
        assert!(load_messages(&db).await.is_empty());
    }

    #[test]
    fn it_reads_javascript_iso_timestamps() {
        let messages = parse_messages(
            r#"[
                {"id": "a", "role": "user", "content": "안녕", "timestamp": "2025-03-04T01:02:03.456Z"},
                {"id": "b", "role": "bot", "content": "?", "timestamp": "2025-03-04T01:02:04.000Z"}
            ]"#,
        );
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].timestamp.timestamp_millis(), 1741050123456);
    }

    #[tokio::test]
    async fn it_seeds_the_greeting_and_skips_saving_it() {
        let db = memory_db().await;
        let mut store = MessageStore::open(db.clone()).await;
        assert_eq!(store.messages().len(), 1);
        assert_eq!(store.messages()[0].role, Role::Assistant);
        assert!(kv_get(&db, MESSAGES_STORAGE_KEY).await.unwrap().is_none());

        store.append(ChatMessage::new(Role::User, "안녕")).await;
        let reopened = MessageStore::open(db.clone()).await;
        assert_eq!(reopened.messages().len(), 2);

        store.clear().await.unwrap();
        assert_eq!(store.messages().len(), 1);
        assert!(load_messages(&db).await.is_empty());
    }
}
