//! Router for the local message history
//!
//! Sending a message here runs it through the configured resolver
//! and records both sides of the exchange.

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Local;

use super::public;
use crate::api::public::{ApiError, error_response};
use crate::api::state::AppState;
use crate::chat::ChatController;

type SharedState = Arc<RwLock<AppState>>;

fn controller(state: &SharedState) -> ChatController {
    let shared_state = state.read().expect("Unable to read share state");
    shared_state.chat.clone()
}

async fn list_messages(State(state): State<SharedState>) -> Json<Vec<public::MessageView>> {
    let messages = controller(&state).messages().await;
    Json(messages.into_iter().map(public::MessageView::from).collect())
}

async fn send_message(
    State(state): State<SharedState>,
    Json(payload): Json<public::SendRequest>,
) -> Response {
    match controller(&state).send(&payload.content).await {
        Some(exchange) => Json(public::SendResponse {
            user: exchange.user.into(),
            assistant: exchange.assistant.into(),
        })
        .into_response(),
        None => error_response(StatusCode::BAD_REQUEST, "Message is required"),
    }
}

async fn clear_messages(
    State(state): State<SharedState>,
) -> Result<Json<Vec<public::MessageView>>, ApiError> {
    let chat = controller(&state);
    chat.clear().await?;
    let messages = chat.messages().await;
    Ok(Json(
        messages.into_iter().map(public::MessageView::from).collect(),
    ))
}

async fn export_messages(State(state): State<SharedState>) -> Response {
    let text = controller(&state).export_text().await;
    let disposition = format!(
        "attachment; filename=\"schoolbot-chat-{}.txt\"",
        Local::now().format("%Y-%m-%d")
    );
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        text,
    )
        .into_response()
}

pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/",
            get(list_messages).post(send_message).delete(clear_messages),
        )
        .route("/export", get(export_messages))
}
