// src/state.rs
// Shared application state: the catalog, both limiters, and the generation
// orchestrator, wired once per process and handed to request handlers.

use std::sync::Arc;
use tracing::warn;

use crate::config::FortuneConfig;
use crate::generation::{client::OpenAiClient, GenerationOrchestrator};
use crate::personality::{Personality, PersonalityRegistry};
use crate::rate_limit::{KeyedLimiter, WindowLimiter};

pub struct AppState {
    pub registry: Arc<PersonalityRegistry>,
    pub orchestrator: GenerationOrchestrator,
    pub text_limiter: KeyedLimiter,
    pub cors_origin: String,
    force_cookie: Option<String>,
}

impl AppState {
    /// Production wiring: credentials come from the environment.
    pub fn from_config(config: &FortuneConfig) -> Self {
        Self::new(config, OpenAiClient::from_config(config))
    }

    /// Explicit-client wiring, used by tests to pin the credential state.
    pub fn new(config: &FortuneConfig, client: OpenAiClient) -> Self {
        let registry = Arc::new(PersonalityRegistry::new());
        let image_limiter = Arc::new(WindowLimiter::new(
            config.rate_limit_window(),
            config.rate_limit_image,
        ));

        Self {
            registry: registry.clone(),
            orchestrator: GenerationOrchestrator::new(client, registry, image_limiter),
            text_limiter: KeyedLimiter::new(config.rate_limit_window(), config.rate_limit_text),
            cors_origin: config.cors_origin.clone(),
            force_cookie: config.force_cookie().map(String::from),
        }
    }

    /// Random personality, unless the forced-cookie override pins one.
    pub fn pick_personality(&self) -> &Personality {
        if let Some(id) = self.force_cookie.as_deref() {
            match self.registry.by_id(id) {
                Some(personality) => return personality,
                None => warn!("FORTUNE_FORCE_COOKIE set to unknown id '{}', ignoring", id),
            }
        }
        self.registry.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_force(force: &str) -> AppState {
        let mut config = FortuneConfig::from_env();
        config.force_cookie = force.to_string();
        let client = OpenAiClient::new(&config, None);
        AppState::new(&config, client)
    }

    #[test]
    fn forced_cookie_pins_the_personality() {
        let state = state_with_force("quantum");
        for _ in 0..10 {
            assert_eq!(state.pick_personality().id, "quantum");
        }
    }

    #[test]
    fn unknown_forced_cookie_falls_back_to_random() {
        let state = state_with_force("fig-newton");
        let personality = state.pick_personality();
        assert!(state.registry.by_id(&personality.id).is_some());
    }
}
