// src/share.rs
// Assembles the shareable payload from a session's display state and the
// current art. Platforms without a native share capability get the same
// content as one clipboard-ready string.

use serde::Serialize;

use crate::generation::ArtContent;
use crate::session::Session;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl SharePayload {
    /// Textual fallback for platforms without a native share sheet.
    pub fn fallback_text(&self) -> String {
        format!("{}\n{}\n{}", self.title, self.text, self.url)
    }
}

pub struct ShareComposer {
    share_url: String,
}

impl ShareComposer {
    pub fn new(share_url: impl Into<String>) -> Self {
        Self {
            share_url: share_url.into(),
        }
    }

    pub fn compose(&self, session: &Session, art: &ArtContent) -> SharePayload {
        let personality = session.personality();
        let display = session.display();

        let text = if display.message.is_empty() {
            format!("{} {}", personality.emoji, personality.name)
        } else {
            format!(
                "{} {}: {}",
                personality.emoji, personality.name, display.message
            )
        };

        let image_url = match art {
            ArtContent::Image(url) => Some(url.clone()),
            ArtContent::Emoji(_) => None,
        };

        SharePayload {
            title: personality.name.clone(),
            text,
            url: self.share_url.clone(),
            image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{MessageMode, ResolvedMessage};
    use crate::personality::PersonalityRegistry;

    fn cracked_session(id: &str, text: &str) -> Session {
        let personality = PersonalityRegistry::new().by_id(id).unwrap().clone();
        let mut session = Session::new(personality);
        session.crack(ResolvedMessage {
            text: text.to_string(),
            quantum_pair: None,
            mode: MessageMode::PreWritten,
        });
        session
    }

    #[tokio::test]
    async fn compose_includes_displayed_message_and_emoji_art_has_no_image() {
        let session = cracked_session("error", "Error 404: Destiny not found.");
        let composer = ShareComposer::new("https://fortune.example.com");

        let payload = composer.compose(&session, &ArtContent::Emoji("🚫".to_string()));
        assert_eq!(payload.title, "Error Cookie");
        assert!(payload.text.contains("Error 404: Destiny not found."));
        assert!(payload.text.contains("🚫"));
        assert_eq!(payload.url, "https://fortune.example.com");
        assert!(payload.image_url.is_none());
    }

    #[tokio::test]
    async fn compose_carries_generated_image_url() {
        let session = cracked_session("quantum", "There is no cookie / There is no you");
        let composer = ShareComposer::new("https://fortune.example.com");

        let art = ArtContent::Image("https://img.example.com/q.png".to_string());
        let payload = composer.compose(&session, &art);
        assert_eq!(
            payload.image_url.as_deref(),
            Some("https://img.example.com/q.png")
        );
    }

    #[tokio::test]
    async fn compose_with_suppressed_message_still_names_the_cookie() {
        let session = cracked_session("apathetic", "whatever");
        let composer = ShareComposer::new("https://fortune.example.com");

        let payload = composer.compose(&session, &ArtContent::Emoji("😑".to_string()));
        assert_eq!(payload.text, "😑 Apathetic Cookie");
    }

    #[tokio::test]
    async fn fallback_text_renders_all_lines() {
        let session = cracked_session("error", "Core dumped.");
        let composer = ShareComposer::new("https://fortune.example.com");

        let payload = composer.compose(&session, &ArtContent::Emoji("🚫".to_string()));
        let fallback = payload.fallback_text();
        assert!(fallback.contains("Error Cookie"));
        assert!(fallback.contains("Core dumped."));
        assert!(fallback.contains("https://fortune.example.com"));
    }
}
