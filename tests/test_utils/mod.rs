//! Test utilities for integration tests
#![allow(dead_code)]

use std::env;
use std::fs;
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};
use uuid::Uuid;

use schoolbot::api::AppState;
use schoolbot::api::app;
use schoolbot::chat::ResolverKind;
use schoolbot::core::AppConfig;
use schoolbot::core::db::open_db;

// Nothing listens on the discard port so requests fail fast
const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

/// Creates a test application router backed by a fresh db in a
/// temporary directory. Outbound calls go nowhere.
pub async fn test_app() -> Router {
    test_app_with_upstream(UNREACHABLE_URL).await
}

/// Creates a test application router whose upstream school API,
/// intent API and proxy all point at `upstream_url`, usually a
/// `mockito` server. Chat messages use the keyword resolver.
pub async fn test_app_with_upstream(upstream_url: &str) -> Router {
    let dir = env::temp_dir().join(format!("schoolbot-test-{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("Failed to create base directory");
    let db_path = dir.join("db");
    let db_path = db_path.to_str().unwrap();

    let db = open_db(db_path).await.expect("Failed to connect to async db");

    let app_config = AppConfig {
        storage_path: dir.display().to_string(),
        db_path: db_path.to_string(),
        upstream_api_url: upstream_url.to_string(),
        proxy_api_url: upstream_url.to_string(),
        intent_api_url: upstream_url.to_string(),
        resolver: ResolverKind::Keyword,
    };
    let app_state = AppState::new(db, app_config).await;
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    let text = body_to_string(body).await;
    serde_json::from_str(&text).expect("Body is not json")
}
