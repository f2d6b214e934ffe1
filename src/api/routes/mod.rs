//! API routes module

pub mod calendar;
pub mod chat;
pub mod messages;
pub mod nav;
pub mod notice;
pub mod settings;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Intent chat proxy
        .nest("/chat", chat::router())
        // Notice and menu feed proxy
        .nest("/notice", notice::router())
        // Academic calendar layout
        .nest("/calendar", calendar::router())
        // Local conversation history
        .nest("/messages", messages::router())
        // Display preferences
        .nest("/settings", settings::router())
        // Sidebar links and shortcuts
        .nest("/nav", nav::router())
}
