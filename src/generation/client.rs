// src/generation/client.rs
// Thin reqwest client for the OpenAI text and image endpoints. Credentials
// are injected at construction so tests can exercise the no-key path.

use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use super::GenerationError;
use crate::config::FortuneConfig;

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    api_base: String,
    text_model: String,
    text_max_tokens: u32,
    text_temperature: f32,
    image_model: String,
    image_size: String,
}

impl OpenAiClient {
    pub fn from_config(config: &FortuneConfig) -> Self {
        Self::new(config, config.openai_api_key())
    }

    pub fn new(config: &FortuneConfig, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.openai_timeout))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            api_base: config.openai_base_url.clone(),
            text_model: config.text_model.clone(),
            text_max_tokens: config.text_max_tokens,
            text_temperature: config.text_temperature,
            image_model: config.image_model.clone(),
            image_size: config.image_size.clone(),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/v1/{}",
            self.api_base.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn key(&self) -> Result<&str, GenerationError> {
        self.api_key
            .as_deref()
            .ok_or(GenerationError::MissingCredentials)
    }

    /// One chat completion with a system/user prompt pair. Returns the
    /// trimmed assistant message.
    pub async fn chat_completion(&self, system: &str, user: &str) -> Result<String, GenerationError> {
        let api_key = self.key()?;

        let payload = json!({
            "model": self.text_model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "max_tokens": self.text_max_tokens,
            "temperature": self.text_temperature,
        });

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error(response).await);
        }

        let body: Value = response.json().await?;
        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(GenerationError::InvalidResponse)?;

        Ok(content.trim().to_string())
    }

    /// One image generation call. Returns the hosted image URL.
    pub async fn generate_image(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self.key()?;

        let payload = json!({
            "model": self.image_model,
            "prompt": prompt,
            "n": 1,
            "size": self.image_size,
            "response_format": "url",
        });

        let response = self
            .client
            .post(self.api_url("images/generations"))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&payload)
            .send()
            .await?;

        if response.status().as_u16() == 429 {
            return Err(GenerationError::RateLimited(
                "Image generation rate limit reached. Please try again later.".to_string(),
            ));
        }

        if !response.status().is_success() {
            return Err(upstream_error(response).await);
        }

        let body: Value = response.json().await?;
        let url = body["data"][0]["url"]
            .as_str()
            .ok_or(GenerationError::InvalidResponse)?;

        Ok(url.to_string())
    }
}

async fn upstream_error(response: reqwest::Response) -> GenerationError {
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    GenerationError::Upstream { status, message }
}
