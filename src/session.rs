// src/session.rs
// Per-session reveal state machine. One tagged dispatch on the personality's
// special behavior decides how resolved content surfaces over time; the
// presentation layer only ever reads the emitted display state.
//
// Every timer is owned by the session and aborted on reset, on re-crack, and
// on drop. A stale timer firing into a superseded session is the bug class
// this module exists to prevent.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::generation::ResolvedMessage;
use crate::personality::{Personality, SpecialBehavior};

/// Quantum phrase alternation period.
pub const QUANTUM_ALTERNATION: Duration = Duration::from_millis(800);
/// Gaslighting concealment delay after the crack.
pub const GASLIGHT_CONCEAL: Duration = Duration::from_millis(3000);
/// Matryoshka hint auto-clear delay.
pub const MATRYOSHKA_HINT_CLEAR: Duration = Duration::from_millis(2000);
/// Final matryoshka nesting level.
pub const MATRYOSHKA_MAX_LEVEL: u8 = 5;

/// What the presentation layer renders right now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub message: String,
    /// Transient matryoshka hint. Cosmetic only; never affects the level.
    pub hint: Option<String>,
}

pub struct Session {
    personality: Personality,
    cracked: bool,
    matryoshka_level: u8,
    resolved: Option<ResolvedMessage>,
    display: Arc<Mutex<DisplayState>>,
    timers: Vec<JoinHandle<()>>,
    hint_timer: Option<JoinHandle<()>>,
}

impl Session {
    pub fn new(personality: Personality) -> Self {
        Self {
            personality,
            cracked: false,
            matryoshka_level: 1,
            resolved: None,
            display: Arc::new(Mutex::new(DisplayState::default())),
            timers: Vec::new(),
            hint_timer: None,
        }
    }

    pub fn personality(&self) -> &Personality {
        &self.personality
    }

    pub fn cracked(&self) -> bool {
        self.cracked
    }

    pub fn matryoshka_level(&self) -> u8 {
        self.matryoshka_level
    }

    pub fn resolved(&self) -> Option<&ResolvedMessage> {
        self.resolved.as_ref()
    }

    pub fn display(&self) -> DisplayState {
        self.display.lock().unwrap().clone()
    }

    /// Crack the cookie with content resolved for this cycle. Cancels any
    /// leftover timers before entering the behavior's initial state.
    pub fn crack(&mut self, resolved: ResolvedMessage) {
        self.cancel_timers();
        *self.display.lock().unwrap() = DisplayState::default();

        self.cracked = true;
        self.matryoshka_level = 1;

        match self.personality.special_behavior {
            SpecialBehavior::Standard => {
                self.display.lock().unwrap().message = resolved.text.clone();
            }
            SpecialBehavior::Matryoshka => {
                // Nothing shows until the final nesting level.
            }
            SpecialBehavior::Quantum => match resolved.quantum_pair.clone() {
                Some(pair) => self.start_quantum_alternation(pair),
                // Un-pairable resolution (e.g. a raw generated response)
                // displays statically.
                None => {
                    self.display.lock().unwrap().message = resolved.text.clone();
                }
            },
            SpecialBehavior::Gaslighting => {
                self.display.lock().unwrap().message = resolved.text.clone();
                self.start_gaslight_concealment();
            }
            SpecialBehavior::Apathetic => {
                // Suppressed regardless of what was resolved.
            }
        }

        self.resolved = Some(resolved);
    }

    /// One user interaction with a cracked cookie. Only matryoshka cookies
    /// react: the level climbs by one per interaction until the fortune is
    /// revealed at the final level, then further interactions are no-ops.
    pub fn interact(&mut self) {
        if !self.cracked || self.personality.special_behavior != SpecialBehavior::Matryoshka {
            return;
        }
        if self.matryoshka_level >= MATRYOSHKA_MAX_LEVEL {
            return;
        }

        self.matryoshka_level += 1;

        if self.matryoshka_level == MATRYOSHKA_MAX_LEVEL {
            self.clear_hint_timer();
            let mut display = self.display.lock().unwrap();
            display.hint = None;
            display.message = self
                .resolved
                .as_ref()
                .map(|r| r.text.clone())
                .unwrap_or_default();
        } else {
            self.show_transient_hint();
        }
    }

    /// Reset to the uncracked state: cancel every pending timer, clear the
    /// display, drop this cycle's content.
    pub fn reset(&mut self) {
        self.cancel_timers();
        self.cracked = false;
        self.matryoshka_level = 1;
        self.resolved = None;
        *self.display.lock().unwrap() = DisplayState::default();
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.iter().filter(|t| !t.is_finished()).count()
            + self
                .hint_timer
                .as_ref()
                .map(|t| usize::from(!t.is_finished()))
                .unwrap_or(0)
    }

    fn start_quantum_alternation(&mut self, pair: (String, String)) {
        self.display.lock().unwrap().message = pair.0.clone();

        let display = self.display.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(QUANTUM_ALTERNATION);
            // The first tick of an interval completes immediately.
            ticker.tick().await;
            let mut show_second = true;
            loop {
                ticker.tick().await;
                let mut state = display.lock().unwrap();
                state.message = if show_second {
                    pair.1.clone()
                } else {
                    pair.0.clone()
                };
                show_second = !show_second;
            }
        });
        self.timers.push(handle);
    }

    fn start_gaslight_concealment(&mut self) {
        let display = self.display.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(GASLIGHT_CONCEAL).await;
            display.lock().unwrap().message.clear();
        });
        self.timers.push(handle);
    }

    fn show_transient_hint(&mut self) {
        self.clear_hint_timer();

        if self.personality.messages.is_empty() {
            return;
        }
        let index = rand::random_range(0..self.personality.messages.len());
        let hint = self.personality.messages[index].clone();
        self.display.lock().unwrap().hint = Some(hint);

        let display = self.display.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(MATRYOSHKA_HINT_CLEAR).await;
            display.lock().unwrap().hint = None;
        });
        self.hint_timer = Some(handle);
    }

    fn clear_hint_timer(&mut self) {
        if let Some(timer) = self.hint_timer.take() {
            timer.abort();
        }
    }

    fn cancel_timers(&mut self) {
        for timer in self.timers.drain(..) {
            timer.abort();
        }
        self.clear_hint_timer();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}
