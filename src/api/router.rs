// src/api/router.rs
// HTTP router composition. Wrong-method requests on known paths get the
// framework's 405 response.

use axum::{
    http::{header, Method},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::art::generate_art_handler;
use super::fortune::{fetch_fortune_handler, generate_fortune_handler};
use crate::state::AppState;

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub fn api_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::exact(
            state
                .cors_origin
                .parse()
                .expect("invalid FORTUNE_CORS_ORIGIN"),
        ))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/fortune", get(fetch_fortune_handler))
        .route("/api/generate-fortune", post(generate_fortune_handler))
        .route("/api/generate-art", post(generate_art_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
