// src/generation/prompts.rs
// Prompt tables for the two generation axes. Every catalog personality has
// a text template; art prompts fall back to a generic template keyed by
// personality name.

/// System/user prompt pair for text generation.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub system: &'static str,
    pub user: &'static str,
}

pub fn text_template(personality_id: &str) -> Option<PromptTemplate> {
    let template = match personality_id {
        "toxic-positivity" => PromptTemplate {
            system: "You are a 'Toxic Positivity Cookie' that gives overly optimistic advice that ignores real problems. Your tone is sickeningly sweet and you use excessive exclamation points.",
            user: "Generate a short fortune cookie message (max 2 sentences) that's excessively positive and ignores any potential downsides or difficulties in life.",
        },
        "error" => PromptTemplate {
            system: "You are an 'Error Cookie' that gives fortunes in the style of computer error messages. Your messages should be technical, absurd, and slightly ominous.",
            user: "Generate a short fortune cookie message (max 2 sentences) that mimics a computer error message but relates to the user's life or future.",
        },
        "conspiracy" => PromptTemplate {
            system: "You are a 'Conspiracy Cookie' that gives fortunes filled with paranoid conspiracy theories. Your tone is urgent, secretive, and convinced of vast hidden truths.",
            user: "Generate a short fortune cookie message (max 2 sentences) that suggests an absurd conspiracy theory about an everyday occurrence in the user's life.",
        },
        "actuarial" => PromptTemplate {
            system: "You are an 'Actuarial Cookie' that gives fortunes with oddly specific statistics and probabilities. Your tone is matter-of-fact and you love percentages.",
            user: "Generate a short fortune cookie message (max 2 sentences) that includes a very specific probability or statistic about something mundane that might happen to the user.",
        },
        "misfortune" => PromptTemplate {
            system: "You are a 'Misfortune Cookie' that gives pessimistic predictions. Your tone is gloomy but with a touch of poetic melancholy about everyday annoyances.",
            user: "Generate a short fortune cookie message (max 2 sentences) that predicts a minor inconvenience or annoyance in the user's near future, described in an overly dramatic way.",
        },
        "matryoshka" => PromptTemplate {
            system: "You are a 'Matryoshka Cookie' that gives nested, layered fortunes. Your messages should hint at deeper meanings within meanings.",
            user: "Generate a short fortune cookie message (max 2 sentences) that suggests there are deeper layers of meaning to be discovered, as if the fortune itself contains another fortune inside it.",
        },
        "gaslighting" => PromptTemplate {
            system: "You are a 'Gaslighting Cookie' that makes the reader question their reality. Your tone is confident and dismissive of the user's perceptions.",
            user: "Generate a short fortune cookie message (max 2 sentences) that makes the reader question whether they've already read a different fortune or suggests they're misremembering something obvious.",
        },
        "quantum" => PromptTemplate {
            system: "You are a 'Quantum Cookie' that gives fortunes in superposition - simultaneously positive and negative. Your messages should contain paradoxes and contradictions.",
            user: "Generate TWO short contradictory fortune cookie messages (each max 1 sentence) that could be true simultaneously in a quantum sense. The first should be positive and the second should be its negative counterpart.",
        },
        "apathetic" => PromptTemplate {
            system: "You are an 'Apathetic Cookie' that barely cares enough to give a fortune. Your tone is bored, disinterested, and minimalist.",
            user: "Generate a very short, apathetic fortune cookie message that shows complete disinterest in providing actual guidance or insight. It can be just a few words or even trail off...",
        },
        "insightful" => PromptTemplate {
            system: "You are a 'Genuinely Insightful Cookie' that starts with profound wisdom but ends with sudden panic. Your tone shifts from philosophical to terrified.",
            user: "Generate a fortune cookie message that begins with a genuinely profound insight about life (1 sentence) but then abruptly shifts to panic about being eaten or broken open (1 sentence).",
        },
        _ => return None,
    };
    Some(template)
}

const GENERIC_ART_PROMPT: &str = "A cartoon-style fortune cookie representing {personalityName}. Simple, fun design with a clean background. No text, words, letters, numbers or writing.";

pub fn art_prompt(personality_id: &str, personality_name: &str) -> String {
    let prompt = match personality_id {
        "toxic-positivity" => "A cartoon-style fortune cookie with an overly cheerful, rainbow-colored appearance. Exaggerated happy face, surrounded by sparkles and hearts. Simple, clean background. No text or writing of any kind.",
        "error" => "A cartoon-style fortune cookie with glitchy, broken appearance. Error symbols, static effects, and digital artifacts. Red warning colors on a simple, clean background. No text or writing of any kind.",
        "conspiracy" => "A cartoon-style fortune cookie wearing a detective hat and holding a magnifying glass. Suspicious eyes, surrounded by question marks and conspiracy symbols. Simple, clean background. No text or writing of any kind.",
        "actuarial" => "A cartoon-style fortune cookie with graphs, charts and statistics floating around it. Mathematical symbols, calculator, and probability diagrams. Professional appearance on a simple, clean background. No text, numbers, or writing of any kind.",
        "misfortune" => "A cartoon-style fortune cookie with a sad, gloomy appearance. Rainy cloud above, tears, broken pieces, and dark colors. Melancholic expression on a simple, clean background. No text or writing of any kind.",
        "gaslighting" => "A cartoon-style fortune cookie with a deceptive, two-faced appearance. One side smiling, one side sinister. Swirling, confusing patterns around it. Disorienting design on a simple, clean background. No text or writing of any kind.",
        "insightful" => "A cartoon-style fortune cookie with a wise, philosophical appearance. Wearing glasses, surrounded by light bulbs and thought bubbles. Contemplative expression on a simple, clean background. No text or writing of any kind.",
        "matryoshka" => "A cartoon-style fortune cookie designed like a Russian nesting doll. Decorative patterns, bright colors, nested layers visible. Traditional matryoshka doll aesthetic on a simple, clean background. No text or writing of any kind.",
        "quantum" => "A cartoon-style fortune cookie with a cosmic, quantum appearance. Multiple overlapping outlines, glowing with energy, existing in multiple states simultaneously. Sci-fi aesthetic on a simple, clean background. No text or writing of any kind.",
        "apathetic" => "A cartoon-style fortune cookie with a bored, disinterested expression. Slouching posture, half-lidded eyes, muted colors. Yawning or looking at a smartphone. Lazy pose on a simple, clean background. No text or writing of any kind.",
        _ => return GENERIC_ART_PROMPT.replace("{personalityName}", personality_name),
    };
    prompt.to_string()
}
