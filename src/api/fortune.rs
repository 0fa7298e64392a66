// src/api/fortune.rs
// Fortune endpoints: random personality fetch (pre-written axis) and
// AI text generation behind the per-client limiter.

use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use super::error::{ApiError, ApiResult};
use crate::generation::{GenerationError, MessageMode};
use crate::personality::Personality;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneResponse {
    pub personality: Personality,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_mode: Option<MessageMode>,
}

/// GET /api/fortune
pub async fn fetch_fortune_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let personality = state.pick_personality();
    let message = state.registry.resolve_prewritten(personality);

    info!("Serving {} ({})", personality.name, personality.id);

    Json(FortuneResponse {
        personality: personality.clone(),
        message,
        generation_mode: None,
    })
}

/// POST /api/generate-fortune
pub async fn generate_fortune_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult<Json<FortuneResponse>> {
    let client_key = client_key(&headers);
    if !state.text_limiter.allow(&client_key) {
        return Err(ApiError::rate_limited(
            "Too many requests. Please try again later.",
        ));
    }

    let personality: Personality = body
        .get("personality")
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
        .filter(|p: &Personality| !p.id.is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing personality data"))?;

    let resolved = state
        .orchestrator
        .resolve_message(&personality, MessageMode::AiGenerated)
        .await
        .map_err(|e| match e {
            GenerationError::MissingTemplate { .. } => ApiError::not_found(e.to_string()),
            other => ApiError::upstream(other.to_string()),
        })?;

    Ok(Json(FortuneResponse {
        personality,
        message: resolved.text,
        generation_mode: Some(MessageMode::AiGenerated),
    }))
}

// The limiter only needs a stable opaque key; how the deployment derives it
// (proxy header vs. peer address) stays out of the core.
fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn client_key_prefers_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("1.2.3.4, 10.0.0.1"),
        );
        assert_eq!(client_key(&headers), "1.2.3.4");
    }

    #[test]
    fn client_key_defaults_to_unknown() {
        assert_eq!(client_key(&HeaderMap::new()), "unknown");
    }
}
