use tokio_rusqlite::Connection;

use crate::calendar::{AcademicEvent, academic_events};
use crate::chat::{ChatController, MessageStore, build_resolver};
use crate::core::AppConfig;
use crate::school::SchoolClient;
use crate::settings::Preferences;

pub struct AppState {
    pub db: Connection,
    pub config: AppConfig,
    pub chat: ChatController,
    pub preferences: Preferences,
    // School data API behind the notice proxy
    pub upstream: SchoolClient,
    // Intent API behind the chat proxy
    pub intent: SchoolClient,
    pub events: Vec<AcademicEvent>,
}

impl AppState {
    pub async fn new(db: Connection, config: AppConfig) -> Self {
        let store = MessageStore::open(db.clone()).await;
        let chat = ChatController::new(store, build_resolver(&config));
        let preferences = Preferences::load(db.clone()).await;
        let upstream = SchoolClient::new(&config.upstream_api_url);
        let intent = SchoolClient::new(&config.intent_api_url);

        Self {
            db,
            config,
            chat,
            preferences,
            upstream,
            intent,
            events: academic_events(),
        }
    }
}
