// src/main.rs

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fortunate::api::router::api_router;
use fortunate::config::CONFIG;
use fortunate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(CONFIG.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting fortune backend");
    info!("Text model: {}", CONFIG.text_model);
    info!("Image model: {}", CONFIG.image_model);
    info!(
        "Credentials: {}",
        if CONFIG.openai_api_key().is_some() {
            "present"
        } else {
            "absent (AI generation degrades to fallbacks)"
        }
    );
    if let Some(id) = CONFIG.force_cookie() {
        info!("Forced cookie override active: {}", id);
    }

    let app_state = Arc::new(AppState::from_config(&CONFIG));
    let app = api_router(app_state);

    let bind_address = CONFIG.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
