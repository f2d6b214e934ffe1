//! Router for the notice proxy API
//!
//! Forwards a category lookup to the school data API and hands the
//! JSON back unchanged. Feeds that answer with a markdown table are
//! converted to an array of records first.

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_extra::extract::Query;

use super::public;
use crate::api::public::error_response;
use crate::api::state::AppState;
use crate::school::{Category, ProxyBody};

type SharedState = Arc<RwLock<AppState>>;

async fn notice_handler(
    State(state): State<SharedState>,
    Query(params): Query<public::NoticeQuery>,
) -> Response {
    let Some(category) = params
        .category
        .as_deref()
        .and_then(|name| name.parse::<Category>().ok())
    else {
        return error_response(StatusCode::BAD_REQUEST, public::INVALID_CATEGORY);
    };

    let client = {
        let shared_state = state.read().expect("Unable to read share state");
        shared_state.upstream.clone()
    };

    let resp = match client.search(category).await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("Proxy request for {} failed: {}", category, e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, public::PROXY_FAILED);
        }
    };

    let status = resp.status();
    if !status.is_success() {
        tracing::warn!("Upstream answered {} for {}", status, category);
        return error_response(status, public::UPSTREAM_STATUS_ERROR);
    }

    let text = match resp.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Failed to read upstream body for {}: {}", category, e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, public::PROXY_FAILED);
        }
    };

    match ProxyBody::parse(&text).into_json() {
        Some(body) => Json(body).into_response(),
        None => {
            tracing::error!("Unrecognized upstream body for {}", category);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, public::PROXY_FAILED)
        }
    }
}

pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(notice_handler))
}
