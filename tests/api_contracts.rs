// tests/api_contracts.rs
// Endpoint contract tests driving the real router in-process. No test here
// performs a network call: credential-free states resolve to fallbacks and
// zero-capacity windows trip the limiters before any request leaves.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use fortunate::api::router::api_router;
use fortunate::config::FortuneConfig;
use fortunate::generation::client::OpenAiClient;
use fortunate::generation::GENERATION_UNAVAILABLE;
use fortunate::personality::PersonalityRegistry;
use fortunate::state::AppState;

fn test_app(api_key: Option<&str>, configure: impl FnOnce(&mut FortuneConfig)) -> Router {
    let mut config = FortuneConfig::from_env();
    configure(&mut config);
    let client = OpenAiClient::new(&config, api_key.map(String::from));
    api_router(Arc::new(AppState::new(&config, client)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn personality_json(id: &str) -> Value {
    let registry = PersonalityRegistry::new();
    serde_json::to_value(registry.by_id(id).unwrap()).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(test_app(None, |_| {}), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn fetch_fortune_returns_personality_and_message() {
    let app = test_app(None, |config| {
        config.force_cookie = "error".to_string();
    });
    let (status, body) = send(app, get("/api/fortune")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["personality"]["id"], "error");
    assert_eq!(body["personality"]["specialBehavior"], "standard");

    let registry = PersonalityRegistry::new();
    let messages = &registry.by_id("error").unwrap().messages;
    let message = body["message"].as_str().unwrap();
    assert!(messages.contains(&message.to_string()));
}

#[tokio::test]
async fn fetch_fortune_quantum_serves_one_whole_pair() {
    let app = test_app(None, |config| {
        config.force_cookie = "quantum".to_string();
    });
    let (status, body) = send(app, get("/api/fortune")).await;

    assert_eq!(status, StatusCode::OK);
    let message = body["message"].as_str().unwrap();
    let expected = [
        "Your outlook is good / Your outlook is not so good",
        "There is no cookie / There is no you",
    ];
    assert!(
        expected.contains(&message),
        "cross-pair recombination: {}",
        message
    );
}

#[tokio::test]
async fn fetch_fortune_rejects_wrong_method() {
    let (status, _) = send(test_app(None, |_| {}), post_json("/api/fortune", json!({}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn generate_fortune_rejects_wrong_method() {
    let (status, _) = send(test_app(None, |_| {}), get("/api/generate-fortune")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn generate_fortune_requires_personality_data() {
    let (status, body) = send(
        test_app(None, |_| {}),
        post_json("/api/generate-fortune", json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing personality data");
}

#[tokio::test]
async fn generate_fortune_without_credentials_degrades_to_sentinel() {
    let request = post_json(
        "/api/generate-fortune",
        json!({ "personality": personality_json("misfortune") }),
    );
    let (status, body) = send(test_app(None, |_| {}), request).await;

    assert_eq!(status, StatusCode::OK, "upstream failure still returns 200");
    assert_eq!(body["message"], GENERATION_UNAVAILABLE);
    assert_eq!(body["generationMode"], "ai-generated");
    assert_eq!(body["personality"]["id"], "misfortune");
}

#[tokio::test]
async fn generate_fortune_matryoshka_suppresses_generation() {
    let request = post_json(
        "/api/generate-fortune",
        json!({ "personality": personality_json("matryoshka") }),
    );
    let (status, body) = send(test_app(Some("sk-test"), |_| {}), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "");
}

#[tokio::test]
async fn generate_fortune_apathetic_uses_filler_pool() {
    let request = post_json(
        "/api/generate-fortune",
        json!({ "personality": personality_json("apathetic") }),
    );
    let (status, body) = send(test_app(Some("sk-test"), |_| {}), request).await;

    assert_eq!(status, StatusCode::OK);
    let message = body["message"].as_str().unwrap();
    assert!(["", "...", "whatever", "meh"].contains(&message));
}

#[tokio::test]
async fn generate_fortune_unknown_personality_is_not_found() {
    let personality = json!({
        "id": "fig-newton",
        "name": "Fig Newton Cookie",
        "emoji": "🍪",
        "messages": ["hello"],
        "specialBehavior": "standard",
    });
    let request = post_json("/api/generate-fortune", json!({ "personality": personality }));
    let (status, _) = send(test_app(Some("sk-test"), |_| {}), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn generate_fortune_rate_limit_carries_flag() {
    let app = test_app(None, |config| {
        config.rate_limit_text = 0;
    });
    let request = post_json(
        "/api/generate-fortune",
        json!({ "personality": personality_json("error") }),
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["isRateLimitError"], true);
}

#[tokio::test]
async fn generate_art_rejects_wrong_method() {
    let (status, _) = send(test_app(None, |_| {}), get("/api/generate-art")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn generate_art_requires_both_fields() {
    let app = test_app(Some("sk-test"), |_| {});
    let request = post_json("/api/generate-art", json!({ "personalityId": "quantum" }));
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing personality information");
}

#[tokio::test]
async fn generate_art_over_cap_is_429_with_fallback_flags() {
    // Zero-capacity image window models the exhausted 5/min cap without
    // letting a request reach the network.
    let app = test_app(Some("sk-test"), |config| {
        config.rate_limit_image = 0;
    });
    let request = post_json(
        "/api/generate-art",
        json!({ "personalityId": "quantum", "personalityName": "Quantum Cookie" }),
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["fallbackToEmoji"], true);
    assert_eq!(body["isRateLimitError"], true);
}

#[tokio::test]
async fn generate_art_without_credentials_is_500_with_fallback() {
    let app = test_app(None, |_| {});
    let request = post_json(
        "/api/generate-art",
        json!({ "personalityId": "quantum", "personalityName": "Quantum Cookie" }),
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["fallbackToEmoji"], true);
    assert!(body.get("isRateLimitError").is_none());
}
