// src/config/mod.rs
// All tunables load from the environment (.env supported), with defaults
// that match the original deployment.

use once_cell::sync::Lazy;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FortuneConfig {
    // ── OpenAI Configuration
    pub openai_base_url: String,
    pub text_model: String,
    pub text_max_tokens: u32,
    pub text_temperature: f32,
    pub image_model: String,
    pub image_size: String,
    pub openai_timeout: u64,

    // ── Rate Limiting (requests per window)
    pub rate_limit_window_secs: u64,
    pub rate_limit_text: usize,
    pub rate_limit_image: usize,

    // ── Server Configuration
    pub host: String,
    pub port: u16,
    pub cors_origin: String,

    // ── Share / presentation
    pub share_url: String,

    // ── Override tooling
    pub force_cookie: String,

    // ── Logging
    pub log_level: String,
}

// Values may carry trailing comments when sourced from a hand-edited .env;
// strip those before parsing.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl FortuneConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            openai_base_url: env_var_or("OPENAI_BASE_URL", "https://api.openai.com".to_string()),
            text_model: env_var_or("FORTUNE_TEXT_MODEL", "gpt-4o".to_string()),
            text_max_tokens: env_var_or("FORTUNE_TEXT_MAX_TOKENS", 100),
            text_temperature: env_var_or("FORTUNE_TEXT_TEMPERATURE", 0.7),
            image_model: env_var_or("FORTUNE_IMAGE_MODEL", "dall-e-2".to_string()),
            image_size: env_var_or("FORTUNE_IMAGE_SIZE", "256x256".to_string()),
            openai_timeout: env_var_or("FORTUNE_OPENAI_TIMEOUT", 30),
            rate_limit_window_secs: env_var_or("FORTUNE_RATE_LIMIT_WINDOW", 60),
            rate_limit_text: env_var_or("FORTUNE_RATE_LIMIT_TEXT", 10),
            rate_limit_image: env_var_or("FORTUNE_RATE_LIMIT_IMAGE", 5),
            host: env_var_or("FORTUNE_HOST", "0.0.0.0".to_string()),
            port: env_var_or("FORTUNE_PORT", 3001),
            cors_origin: env_var_or("FORTUNE_CORS_ORIGIN", "http://localhost:3000".to_string()),
            share_url: env_var_or("FORTUNE_SHARE_URL", "https://fortune.example.com".to_string()),
            force_cookie: env_var_or("FORTUNE_FORCE_COOKIE", String::new()),
            log_level: env_var_or("FORTUNE_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Rate-limit window as a Duration
    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }

    /// Forced personality id, if the override is set
    pub fn force_cookie(&self) -> Option<&str> {
        let id = self.force_cookie.trim();
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }

    /// API key from the environment. The checked-in .env template ships a
    /// placeholder value; treat it the same as a missing key.
    pub fn openai_api_key(&self) -> Option<String> {
        sanitize_api_key(std::env::var("OPENAI_API_KEY").ok())
    }
}

pub fn sanitize_api_key(raw: Option<String>) -> Option<String> {
    raw.filter(|key| !key.trim().is_empty() && key != "your_api_key_here")
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<FortuneConfig> = Lazy::new(FortuneConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = FortuneConfig::from_env();

        assert_eq!(config.text_model, "gpt-4o");
        assert_eq!(config.image_model, "dall-e-2");
        assert_eq!(config.rate_limit_image, 5);
        assert_eq!(config.rate_limit_text, 10);
        assert_eq!(config.rate_limit_window_secs, 60);
    }

    #[test]
    fn test_sanitize_api_key() {
        assert_eq!(sanitize_api_key(None), None);
        assert_eq!(sanitize_api_key(Some("".to_string())), None);
        assert_eq!(sanitize_api_key(Some("your_api_key_here".to_string())), None);
        assert_eq!(
            sanitize_api_key(Some("sk-real".to_string())),
            Some("sk-real".to_string())
        );
    }
}
