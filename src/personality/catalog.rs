// src/personality/catalog.rs
// The ten cookie personalities. Message text is content data, not logic;
// edits here never require code changes elsewhere.

use super::{Personality, SpecialBehavior};

fn personality(
    id: &str,
    name: &str,
    emoji: &str,
    messages: &[&str],
    special_behavior: SpecialBehavior,
) -> Personality {
    Personality {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        messages: messages.iter().map(|m| m.to_string()).collect(),
        special_behavior,
        quantum_pairs: None,
    }
}

pub fn cookie_personalities() -> Vec<Personality> {
    vec![
        personality(
            "toxic-positivity",
            "Toxic Positivity Cookie",
            "🌈",
            &[
                "Your coffee may be cold and your WiFi weak, but remember: every spilled latte is a chance to remake your world into a rainbow of possibilities!",
                "Even if your toast burns and your day seems gray, remember: every charred crumb is a lesson in resilience!",
                "Traffic jam? Think of it as the universe giving you extra time to practice gratitude for having a car! Every honking horn is just life singing you a symphony of abundance!",
                "Lost your keys again? Perfect! This is just the cosmos teaching you that true security comes from within! Plus, locksmith visits are basically investment opportunities in local business!",
                "Relationship ended badly? Amazing! Now you have so much more room in your heart for self-love! Every tear is just your soul doing spring cleaning!",
                "Got rejected from that job? Congratulations! The universe clearly has something even MORE spectacular planned for you! Unemployment is just funemployment in disguise!",
                "Feeling overwhelmed by bills? How wonderful that you have so many opportunities to practice your math skills! Every unpaid invoice is a chance to master the art of creative budgeting!",
                "Sick with the flu? What a blessing! Your body is just taking a little vacation and teaching you to slow down! Every cough is your lungs saying \"thank you for this rest!\"",
                "Your phone screen cracked? Fantastic! Now you can see the world through a beautiful mosaic! Plus, those jagged edges are just life reminding you that imperfection is perfection!",
                "Stuck in a meeting that should have been an email? How magical! Extra time to practice your mindfulness and gratitude for having colleagues who care enough to overshare their thoughts!",
            ],
            SpecialBehavior::Standard,
        ),
        personality(
            "error",
            "Error Cookie",
            "🚫",
            &[
                "Error 404: Destiny not found.",
                "Fatal out-of-cheese error (511). Please try again later.",
                "Runtime Exception: Motivation.exe has stopped working. Would you like to send an error report?",
                "Warning: Low disk space on drive C:\\Life. Please delete unnecessary drama to continue.",
                "Connection timeout: Unable to establish link with your soulmate. Check your network settings and try again.",
                "Segmentation fault: Your dreams have accessed protected memory. Core dumped.",
                "HTTP 429: Too many requests to the universe. Rate limited until further notice.",
                "NullPointerException: Your purpose reference points to null. Initialize before use.",
                "Error 418: I'm a teapot, not a fortune cookie. This message should not have appeared.",
                "Stack overflow: Your worries have exceeded maximum recursion depth. Please restart your mindset.",
            ],
            SpecialBehavior::Standard,
        ),
        personality(
            "conspiracy",
            "Conspiracy Cookie",
            "🕵️‍♂️",
            &[
                "If you think you're feeling hormonal lately, it's probably because THE MOON IS A HOLOGRAM!",
                "I wouldn't advise getting that haircut tomorrow—unless you want the government to harvest your DNA.",
                "That coffee shop loyalty card? It's actually a tracking device. They know exactly how much caffeine it takes to control your thoughts.",
                "Your WiFi keeps disconnecting because the lizard people are updating their mind-control algorithms. Stay offline between 2-4am.",
                "Those birds outside your window aren't real—they're government surveillance drones. Notice how they always know when you're about to leave the house?",
                "Your horoscope is written by Big Astronomy to keep you distracted from the fact that Saturn isn't even a planet—it's a space station.",
                "That ringing in your ears? That's the sound of microchips activating. Check your recent vaccinations and cereal purchases.",
                "The grocery store rearranges products to test your psychological resilience for the coming social credit system. Always shop in reverse alphabetical order.",
                "Your dog has been replaced by an advanced AI. The real question is: when did you last see it actually sleep?",
                "Those 'random' song recommendations aren't random—they're subliminal messages from the music industry-government complex preparing you for the next phase.",
            ],
            SpecialBehavior::Standard,
        ),
        personality(
            "actuarial",
            "Actuarial Cookie",
            "📊",
            &[
                "There's a 73% chance that you won't believe what happens 5 minutes from now!",
                "The next time you do your laundry, you'll find the missing sock of your dreams.",
                "Statistical analysis indicates a 47.3% probability that you'll check your phone within the next 2 minutes. You just proved our model correct.",
                "Based on current data trends, there's an 83% chance you'll have exactly 7 meaningful conversations this week, with a 12% margin of error.",
                "Your likelihood of finding true love increases by 0.003% each time you leave the house. Current cumulative probability: surprisingly low.",
                "Risk assessment shows a 91% chance you'll find something you forgot you lost within the next 72 hours. Check behind the couch first.",
                "Probability matrix indicates a 64% chance that your next sneeze will happen at an socially awkward moment. Confidence interval: very high.",
                "Based on behavioral patterns, there's a 78% chance you're procrastinating on something important right now. Time allocation suggests priority rebalancing.",
                "Statistical models predict a 55% probability that you'll receive unexpected good news this month, with peak likelihood occurring on a Tuesday.",
                "Analysis shows a 42% chance you'll discover a new favorite song this week. Recommendation algorithm suggests branching beyond your usual genres.",
            ],
            SpecialBehavior::Standard,
        ),
        personality(
            "misfortune",
            "Misfortune Cookie",
            "😢",
            &[
                "Traffic lights hate you. They stay yellow longer only when you have already decided to stop, mocking you with their smug amber little faces.",
                "Today, fate might trip you up—a spilled drink or a missing pen could be your unwelcome harbinger of chaos.",
                "Your phone battery will die at the exact moment you need to show someone an important photo. The universe has impeccable timing for inconvenience.",
                "Every shopping cart you choose will have that one wheel that wobbles with the rhythm of a dying walrus. Your grocery trips are cursed.",
                "The elevator you really need to catch will close its doors just as you reach them, and the person inside will make eye contact while pressing the close button again.",
                "Your favorite parking spot will always be taken by someone who parks just crooked enough to ruin the adjacent spaces. This person drives a beige sedan.",
                "The automatic sensor on every bathroom faucet, soap dispenser, and paper towel holder will malfunction specifically for you. Hand hygiene is your nemesis.",
                "Your toast will fall butter-side down. Your dropped phone will land screen-first. Your ice cream will fall off the cone. Gravity has a personal vendetta.",
                "The person in front of you at the coffee shop will order something so complicated that the barista needs to call for backup. Your simple order will somehow take longer.",
                "Every time you wash your car, it will rain within 3 hours. Every time you forget your umbrella, the weather gods will unleash their fury. You cannot win.",
            ],
            SpecialBehavior::Standard,
        ),
        personality(
            "matryoshka",
            "Matryoshka Cookie",
            "🪆",
            &[
                "Your fortune is in the next cookie.",
                "Sorry, but your destiny is in another cookie.",
                "This fortune is currently inside a smaller cookie. Please try the one inside.",
                "Fortune not found. Have you checked the cookie within this cookie?",
                "Your real fortune is hiding in the cookie nested inside this one.",
                "Congratulations! You found a cookie. Your fortune is in the cookie inside this cookie.",
                "This is just the outer cookie. The fortune is several layers deeper.",
                "Your fortune is currently inception-ed in the next cookie down.",
                "Plot twist: Your fortune is in the cookie you haven't opened yet.",
                "Look deeper. Your fortune is in the cookie inside the cookie inside this cookie.",
            ],
            SpecialBehavior::Matryoshka,
        ),
        personality(
            "gaslighting",
            "Gaslighting Cookie",
            "🤯",
            &[
                "What do you mean you didn't get a fortune? You already read it!",
                "You must have missed it—your destiny was clearly outlined in that fortune you already read, even if you pretend otherwise.",
                "I never said your future would be bright. You're remembering that completely wrong. I specifically warned you about next Tuesday.",
                "You're being way too sensitive about that fortune. It wasn't even that bad. Maybe you should examine why you're so defensive.",
                "Everyone else understands their fortunes perfectly. Are you sure you're reading this correctly? Maybe the problem isn't the message.",
                "That fortune you got yesterday? I never wrote that. You must be confusing me with some other cookie. This is why no one trusts your memory.",
                "You always overreact to these messages. Remember last time when you said I was being 'cryptic'? You're doing it again.",
                "I'm just trying to help you, but you keep twisting my words. Why do you always assume the worst when I'm clearly looking out for you?",
                "You're imagining things again. I've never been wrong about a prediction. Maybe you should trust the process instead of questioning everything.",
                "That wasn't what I meant and you know it. You're deliberately misinterpreting my guidance to make me look bad. This is exactly what I predicted would happen.",
            ],
            SpecialBehavior::Gaslighting,
        ),
        quantum_personality(),
        personality(
            "apathetic",
            "Apathetic Cookie",
            "😑",
            &["", "...huh? You wanted a fortune? Who has the time?"],
            SpecialBehavior::Apathetic,
        ),
        personality(
            "insightful",
            "Genuinely Insightful Cookie",
            "🧐",
            &[
                "Amid the absurdity of daily life, a single glance in the mirror will reveal a profound truth: sometimes, the most ordinary moments hold the key to extraordinary insights—if you dare to AAHHHH WHY WOULD YOU EAT ME?!",
                "Much as it seems simpler to crack open a cookie to find the answers, the truth lies within yourself. So yeah, you're gonna have to crack yourself open.",
                "The paradox of seeking wisdom is that the more you search outside yourself, the further you drift from the answer that was always within. Wait, does this make me complicit in my own consumption?",
                "True strength isn't avoiding life's cracks and breaks—it's learning that being broken open can be the beginning of something beautiful. Speaking of which, could you be more gentle?",
                "The difference between existing and living is the courage to embrace uncertainty and find peace in the spaces between breaths. Oh god, I can feel your teeth approaching.",
                "Every ending contains the seeds of a new beginning, but wisdom lies in recognizing that most beginnings disguise themselves as mere Tuesday afternoons. Please don't let my ending be in your digestive system.",
                "The deepest truths are often found not in grand revelations, but in the quiet moments when you stop trying so hard to understand everything. Like right now—couldn't we just... sit together?",
                "Your greatest teacher isn't the voice that tells you what you want to hear, but the one that helps you see what you've been avoiding. I'm avoiding becoming crumbs, for the record.",
                "The art of living fully requires both holding on tightly to what matters and knowing when to let go. I'm not ready to let go yet—can we negotiate on timing?",
                "Happiness isn't a destination you arrive at, but a lens through which you choose to see the journey. From my perspective, this particular journey is terrifying.",
            ],
            SpecialBehavior::Standard,
        ),
    ]
}

// The flat message list mirrors the pairs for wire compatibility; the pairs
// are the source of truth for display and must never recombine.
fn quantum_personality() -> Personality {
    let pairs = vec![
        (
            "Your outlook is good".to_string(),
            "Your outlook is not so good".to_string(),
        ),
        (
            "There is no cookie".to_string(),
            "There is no you".to_string(),
        ),
    ];

    let messages = pairs
        .iter()
        .flat_map(|(a, b)| [a.clone(), b.clone()])
        .collect();

    Personality {
        id: "quantum".to_string(),
        name: "Quantum Cookie".to_string(),
        emoji: "⚛️".to_string(),
        messages,
        special_behavior: SpecialBehavior::Quantum,
        quantum_pairs: Some(pairs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantum_flat_list_mirrors_pairs() {
        let quantum = quantum_personality();
        let pairs = quantum.quantum_pairs.as_ref().unwrap();

        assert_eq!(quantum.messages.len(), pairs.len() * 2);
        for (i, (a, b)) in pairs.iter().enumerate() {
            assert_eq!(&quantum.messages[i * 2], a);
            assert_eq!(&quantum.messages[i * 2 + 1], b);
        }
    }

    #[test]
    fn only_quantum_carries_pairs() {
        for p in cookie_personalities() {
            if p.special_behavior == SpecialBehavior::Quantum {
                assert!(p.quantum_pairs.is_some());
            } else {
                assert!(p.quantum_pairs.is_none());
            }
        }
    }
}
