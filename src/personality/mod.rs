// src/personality/mod.rs
// Cookie personality catalog and selection.

pub mod catalog;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Shown when a personality has no pre-written messages at all.
pub const NO_FORTUNE_AVAILABLE: &str = "No fortune available for this cookie.";

/// Controls how a personality's content is revealed after the crack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialBehavior {
    Standard,
    Matryoshka,
    Quantum,
    Gaslighting,
    Apathetic,
}

/// A named content profile: emoji, candidate messages, and the behavior
/// variant that governs its reveal. Immutable once the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub messages: Vec<String>,
    pub special_behavior: SpecialBehavior,
    /// Quantum superposition pairs. The two members of a pair alternate on
    /// display and are never mixed with another pair's member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum_pairs: Option<Vec<(String, String)>>,
}

/// Static catalog plus the uniform-random selector.
pub struct PersonalityRegistry {
    personalities: Vec<Personality>,
}

impl PersonalityRegistry {
    pub fn new() -> Self {
        Self {
            personalities: catalog::cookie_personalities(),
        }
    }

    pub fn all(&self) -> &[Personality] {
        &self.personalities
    }

    pub fn random(&self) -> &Personality {
        let index = rand::rng().random_range(0..self.personalities.len());
        &self.personalities[index]
    }

    /// Lookup by id, used by the forced-cookie override.
    pub fn by_id(&self, id: &str) -> Option<&Personality> {
        self.personalities.iter().find(|p| p.id == id)
    }

    /// One whole quantum pair, chosen uniformly. None for personalities
    /// without pairs.
    pub fn pick_quantum_pair(&self, personality: &Personality) -> Option<(String, String)> {
        let pairs = personality.quantum_pairs.as_ref()?;
        if pairs.is_empty() {
            return None;
        }
        let index = rand::rng().random_range(0..pairs.len());
        Some(pairs[index].clone())
    }

    /// Pre-written message resolution: a random catalog message, except for
    /// Quantum where both members of one pair are joined as "A / B".
    pub fn resolve_prewritten(&self, personality: &Personality) -> String {
        if personality.special_behavior == SpecialBehavior::Quantum {
            if let Some((first, second)) = self.pick_quantum_pair(personality) {
                return format!("{} / {}", first, second);
            }
        }

        if personality.messages.is_empty() {
            return NO_FORTUNE_AVAILABLE.to_string();
        }

        let index = rand::rng().random_range(0..personality.messages.len());
        personality.messages[index].clone()
    }
}

impl Default for PersonalityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
