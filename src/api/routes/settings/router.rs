//! Router for the settings API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use super::public;
use crate::api::public::{ApiError, error_response};
use crate::api::state::AppState;
use crate::settings::{ColorScheme, FontScale, PreferenceState};

type SharedState = Arc<RwLock<AppState>>;

async fn get_settings(State(state): State<SharedState>) -> Json<PreferenceState> {
    let preferences = {
        let shared_state = state.read().expect("Unable to read share state");
        shared_state.preferences.clone()
    };
    Json(preferences.reload().await)
}

async fn update_settings(
    State(state): State<SharedState>,
    Json(payload): Json<public::SettingsUpdate>,
) -> Result<Response, ApiError> {
    // Validate everything before writing anything
    let font_scale = match payload.font_scale.map(FontScale::new).transpose() {
        Ok(scale) => scale,
        Err(e) => return Ok(error_response(StatusCode::BAD_REQUEST, &e.to_string())),
    };
    let color_scheme = match payload
        .color_scheme
        .as_deref()
        .map(str::parse::<ColorScheme>)
        .transpose()
    {
        Ok(scheme) => scheme,
        Err(e) => return Ok(error_response(StatusCode::BAD_REQUEST, &e.to_string())),
    };

    let preferences = {
        let shared_state = state.read().expect("Unable to read share state");
        shared_state.preferences.clone()
    };
    if let Some(scale) = font_scale {
        preferences.set_font_scale(scale).await?;
    }
    if let Some(scheme) = color_scheme {
        preferences.set_color_scheme(scheme).await?;
    }

    Ok(Json(preferences.current()).into_response())
}

pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(get_settings).put(update_settings))
}
