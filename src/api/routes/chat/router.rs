//! Router for the chat proxy API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};

use super::public;
use crate::api::public::error_response;
use crate::api::state::AppState;
use crate::school::IntentRequest;

type SharedState = Arc<RwLock<AppState>>;

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> Response {
    let Some(message) = required(payload.message) else {
        return error_response(StatusCode::BAD_REQUEST, "Message is required");
    };
    let Some(user_id) = required(payload.user_id) else {
        return error_response(StatusCode::BAD_REQUEST, "userId is required");
    };

    let client = {
        let shared_state = state.read().expect("Unable to read share state");
        shared_state.intent.clone()
    };

    let request = IntentRequest { message, user_id };
    match client.chat_intent_raw(&request).await {
        Ok(data) => Json(data).into_response(),
        Err(e) => {
            tracing::error!("Chat API Error: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
