// src/rate_limit.rs
// Counting-window limiters for the two generation axes: one process-wide
// window for image generation, one keyed per client for text generation.
// State is per-process; nothing coordinates across processes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Time source, swappable for deterministic tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Process-wide sliding window: prunes timestamps older than the window and
/// admits a request while fewer than `max_requests` remain.
pub struct WindowLimiter {
    window: Duration,
    max_requests: usize,
    timestamps: Mutex<Vec<Instant>>,
    clock: Arc<dyn Clock>,
}

impl WindowLimiter {
    pub fn new(window: Duration, max_requests: usize) -> Self {
        Self::with_clock(window, max_requests, Arc::new(SystemClock))
    }

    pub fn with_clock(window: Duration, max_requests: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            window,
            max_requests,
            timestamps: Mutex::new(Vec::new()),
            clock,
        }
    }

    /// Dry-run: would a request be admitted right now? Records nothing.
    pub fn check(&self) -> bool {
        let now = self.clock.now();
        let mut timestamps = self.timestamps.lock().unwrap();
        timestamps.retain(|t| now.duration_since(*t) < self.window);
        timestamps.len() < self.max_requests
    }

    /// Record an attempt without admission control (used after a positive
    /// `check` so the spend is counted exactly once).
    pub fn record(&self) {
        let now = self.clock.now();
        self.timestamps.lock().unwrap().push(now);
    }

    /// Admit-and-record in one step.
    pub fn allow(&self) -> bool {
        let now = self.clock.now();
        let mut timestamps = self.timestamps.lock().unwrap();
        timestamps.retain(|t| now.duration_since(*t) < self.window);
        if timestamps.len() < self.max_requests {
            timestamps.push(now);
            true
        } else {
            false
        }
    }
}

struct ClientWindow {
    count: usize,
    reset_at: Instant,
}

/// Fixed window keyed by an opaque client identity. Entries whose window has
/// passed are expired lazily on the next call.
pub struct KeyedLimiter {
    window: Duration,
    max_requests: usize,
    clients: Mutex<HashMap<String, ClientWindow>>,
    clock: Arc<dyn Clock>,
}

impl KeyedLimiter {
    pub fn new(window: Duration, max_requests: usize) -> Self {
        Self::with_clock(window, max_requests, Arc::new(SystemClock))
    }

    pub fn with_clock(window: Duration, max_requests: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            window,
            max_requests,
            clients: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Count this attempt against `key` and report whether it stays within
    /// the window cap.
    pub fn allow(&self, key: &str) -> bool {
        let now = self.clock.now();
        let mut clients = self.clients.lock().unwrap();

        clients.retain(|_, window| window.reset_at > now);

        let entry = clients.entry(key.to_string()).or_insert(ClientWindow {
            count: 0,
            reset_at: now + self.window,
        });
        entry.count += 1;
        entry.count <= self.max_requests
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.clients.lock().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ManualClock {
        now: Mutex<Instant>,
    }

    impl ManualClock {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                now: Mutex::new(Instant::now()),
            })
        }

        fn advance(&self, by: Duration) {
            let mut now = self.now.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            *self.now.lock().unwrap()
        }
    }

    const WINDOW: Duration = Duration::from_millis(60_000);

    #[test]
    fn window_limiter_rejects_sixth_request() {
        let clock = ManualClock::new();
        let limiter = WindowLimiter::with_clock(WINDOW, 5, clock.clone());

        for _ in 0..5 {
            assert!(limiter.allow());
        }
        assert!(!limiter.allow(), "sixth request within the window must fail");
    }

    #[test]
    fn window_limiter_recovers_after_window() {
        let clock = ManualClock::new();
        let limiter = WindowLimiter::with_clock(WINDOW, 5, clock.clone());

        for _ in 0..5 {
            assert!(limiter.allow());
        }
        assert!(!limiter.allow());

        clock.advance(WINDOW + Duration::from_millis(1));
        assert!(limiter.allow(), "window passed, requests admitted again");
    }

    #[test]
    fn window_limiter_check_is_a_dry_run() {
        let clock = ManualClock::new();
        let limiter = WindowLimiter::with_clock(WINDOW, 5, clock.clone());

        for _ in 0..100 {
            assert!(limiter.check(), "check must not consume the budget");
        }

        limiter.record();
        for _ in 0..4 {
            assert!(limiter.allow());
        }
        assert!(!limiter.check(), "recorded attempts count toward the cap");
    }

    #[test]
    fn keyed_limiter_caps_per_client() {
        let clock = ManualClock::new();
        let limiter = KeyedLimiter::with_clock(WINDOW, 10, clock.clone());

        for _ in 0..10 {
            assert!(limiter.allow("1.2.3.4"));
        }
        assert!(!limiter.allow("1.2.3.4"));

        // A different client is unaffected.
        assert!(limiter.allow("5.6.7.8"));
    }

    #[test]
    fn keyed_limiter_resets_after_window() {
        let clock = ManualClock::new();
        let limiter = KeyedLimiter::with_clock(WINDOW, 10, clock.clone());

        for _ in 0..11 {
            limiter.allow("1.2.3.4");
        }
        assert!(!limiter.allow("1.2.3.4"));

        clock.advance(WINDOW + Duration::from_millis(1));
        assert!(limiter.allow("1.2.3.4"));
    }

    #[test]
    fn keyed_limiter_expires_stale_entries() {
        let clock = ManualClock::new();
        let limiter = KeyedLimiter::with_clock(WINDOW, 10, clock.clone());

        limiter.allow("a");
        limiter.allow("b");
        assert_eq!(limiter.tracked_clients(), 2);

        clock.advance(WINDOW + Duration::from_millis(1));
        limiter.allow("c");
        assert_eq!(limiter.tracked_clients(), 1, "expired windows are dropped");
    }
}
