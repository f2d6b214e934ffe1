//! Router for the sidebar navigation

use std::sync::{Arc, RwLock};

use axum::{Json, Router, routing::get};

use crate::api::state::AppState;
use crate::nav::{Navigation, navigation};

type SharedState = Arc<RwLock<AppState>>;

async fn nav_handler() -> Json<Navigation> {
    Json(navigation())
}

pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(nav_handler))
}
