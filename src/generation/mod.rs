// src/generation/mod.rs
// Dual-mode content resolution for a freshly cracked cookie. The message and
// art axes resolve independently; external failures always degrade to a
// displayable fallback instead of escaping to the behavior layer.

pub mod client;
pub mod prompts;

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::personality::{Personality, PersonalityRegistry, SpecialBehavior};
use crate::rate_limit::WindowLimiter;
use client::OpenAiClient;

/// Sentinel shown whenever text generation is unavailable or fails.
pub const GENERATION_UNAVAILABLE: &str =
    "AI-generated fortunes are currently unavailable. Please try again later.";

/// Apathetic cookies cannot be bothered to call an external service.
pub const APATHY_FILLERS: [&str; 4] = ["", "...", "whatever", "meh"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageMode {
    #[serde(rename = "pre-written")]
    PreWritten,
    #[serde(rename = "ai-generated")]
    AiGenerated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtMode {
    #[serde(rename = "emoji")]
    Emoji,
    #[serde(rename = "dall-e")]
    AiImage,
}

/// Per-axis generation choice. Mutations apply to the next crack cycle only;
/// a session snapshots its resolved content at crack time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationPreference {
    pub message_mode: MessageMode,
    pub art_mode: ArtMode,
}

impl Default for GenerationPreference {
    fn default() -> Self {
        Self {
            message_mode: MessageMode::PreWritten,
            art_mode: ArtMode::Emoji,
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("OpenAI API key is missing")]
    MissingCredentials,
    #[error("No prompt template found for personality: {id}")]
    MissingTemplate { id: String },
    #[error("{0}")]
    RateLimited(String),
    #[error("Upstream service error {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("Upstream service returned an unexpected payload")]
    InvalidResponse,
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl GenerationError {
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, GenerationError::RateLimited(_))
    }
}

/// Resolved message content for one crack cycle.
#[derive(Debug, Clone)]
pub struct ResolvedMessage {
    pub text: String,
    /// The superposition pair backing a quantum display, when one applies.
    pub quantum_pair: Option<(String, String)>,
    pub mode: MessageMode,
}

/// Resolved art content for one crack cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtContent {
    Emoji(String),
    Image(String),
}

#[derive(Debug, Clone)]
pub struct ResolvedArt {
    pub content: ArtContent,
    /// True when an AI-image request degraded to the emoji for this cycle.
    /// The stored art preference is left untouched.
    pub fell_back: bool,
}

pub struct GenerationOrchestrator {
    client: OpenAiClient,
    registry: Arc<PersonalityRegistry>,
    image_limiter: Arc<WindowLimiter>,
}

impl GenerationOrchestrator {
    pub fn new(
        client: OpenAiClient,
        registry: Arc<PersonalityRegistry>,
        image_limiter: Arc<WindowLimiter>,
    ) -> Self {
        Self {
            client,
            registry,
            image_limiter,
        }
    }

    /// Resolve the message axis. Upstream failures and missing credentials
    /// resolve to the unavailable sentinel; only an unknown prompt template
    /// surfaces as an error.
    pub async fn resolve_message(
        &self,
        personality: &Personality,
        mode: MessageMode,
    ) -> Result<ResolvedMessage, GenerationError> {
        match mode {
            MessageMode::PreWritten => Ok(self.resolve_prewritten(personality)),
            MessageMode::AiGenerated => self.resolve_generated(personality).await,
        }
    }

    fn resolve_prewritten(&self, personality: &Personality) -> ResolvedMessage {
        if personality.special_behavior == SpecialBehavior::Quantum {
            if let Some(pair) = self.registry.pick_quantum_pair(personality) {
                return ResolvedMessage {
                    text: format!("{} / {}", pair.0, pair.1),
                    quantum_pair: Some(pair),
                    mode: MessageMode::PreWritten,
                };
            }
        }

        ResolvedMessage {
            text: self.registry.resolve_prewritten(personality),
            quantum_pair: None,
            mode: MessageMode::PreWritten,
        }
    }

    async fn resolve_generated(
        &self,
        personality: &Personality,
    ) -> Result<ResolvedMessage, GenerationError> {
        let resolved = |text: String, pair: Option<(String, String)>| ResolvedMessage {
            text,
            quantum_pair: pair,
            mode: MessageMode::AiGenerated,
        };

        match personality.special_behavior {
            // Nothing to generate until the final nesting level.
            SpecialBehavior::Matryoshka => return Ok(resolved(String::new(), None)),
            SpecialBehavior::Apathetic => {
                let filler = APATHY_FILLERS[rand::random_range(0..APATHY_FILLERS.len())];
                return Ok(resolved(filler.to_string(), None));
            }
            _ => {}
        }

        let template =
            prompts::text_template(&personality.id).ok_or(GenerationError::MissingTemplate {
                id: personality.id.clone(),
            })?;

        let raw = match self.client.chat_completion(template.system, template.user).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Text generation failed for {}: {}", personality.id, e);
                return Ok(resolved(GENERATION_UNAVAILABLE.to_string(), None));
            }
        };

        if personality.special_behavior == SpecialBehavior::Quantum {
            let (text, pair) = split_quantum_response(&raw);
            return Ok(resolved(text, pair));
        }

        Ok(resolved(raw, None))
    }

    /// Resolve the art axis. Any failure reverts this cycle to the emoji and
    /// flags the fallback.
    pub async fn resolve_art(&self, personality: &Personality, mode: ArtMode) -> ResolvedArt {
        match mode {
            ArtMode::Emoji => ResolvedArt {
                content: ArtContent::Emoji(personality.emoji.clone()),
                fell_back: false,
            },
            ArtMode::AiImage => match self.generate_image(&personality.id, &personality.name).await
            {
                Ok(url) => ResolvedArt {
                    content: ArtContent::Image(url),
                    fell_back: false,
                },
                Err(e) => {
                    warn!("Art generation failed for {}: {}", personality.id, e);
                    ResolvedArt {
                        content: ArtContent::Emoji(personality.emoji.clone()),
                        fell_back: true,
                    }
                }
            },
        }
    }

    /// Generate one image through the global limiter. Callers map the error
    /// variants onto their own fallback signalling.
    pub async fn generate_image(
        &self,
        personality_id: &str,
        personality_name: &str,
    ) -> Result<String, GenerationError> {
        if !self.client.has_credentials() {
            return Err(GenerationError::MissingCredentials);
        }

        if !self.image_limiter.check() {
            return Err(GenerationError::RateLimited(
                "Image generation rate limit reached. Please try again later.".to_string(),
            ));
        }

        let prompt = prompts::art_prompt(personality_id, personality_name);
        info!(
            "Generating image for {} ({}) with prompt: {}",
            personality_name, personality_id, prompt
        );

        self.image_limiter.record();
        self.client.generate_image(&prompt).await
    }
}

/// Split a generated quantum response into its superposition pair: slash or
/// newline separated, trimmed, empties dropped. Joins as "A / B" only when
/// exactly two parts remain; anything else falls back to the raw response.
pub fn split_quantum_response(raw: &str) -> (String, Option<(String, String)>) {
    let parts: Vec<&str> = raw
        .split(['/', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() == 2 {
        let pair = (parts[0].to_string(), parts[1].to_string());
        (format!("{} / {}", pair.0, pair.1), Some(pair))
    } else {
        (raw.to_string(), None)
    }
}
