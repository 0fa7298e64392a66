// src/api/art.rs
// AI image generation behind the process-wide limiter. Every failure shape
// tells the client to revert this cycle's art to the emoji.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::error;

use super::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtResponse {
    pub image_url: String,
}

/// POST /api/generate-art
pub async fn generate_art_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<ArtResponse>> {
    let personality_id = required_field(&body, "personalityId")?;
    let personality_name = required_field(&body, "personalityName")?;

    match state
        .orchestrator
        .generate_image(personality_id, personality_name)
        .await
    {
        Ok(image_url) => Ok(Json(ArtResponse { image_url })),
        Err(e) if e.is_rate_limit() => {
            Err(ApiError::rate_limited(e.to_string()).with_emoji_fallback())
        }
        Err(e) => {
            error!("Art generation failed for {}: {}", personality_id, e);
            Err(ApiError::upstream(e.to_string()).with_emoji_fallback())
        }
    }
}

fn required_field<'a>(body: &'a Value, field: &str) -> Result<&'a str, ApiError> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing personality information"))
}
