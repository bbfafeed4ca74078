//! Fetch debouncing
//!
//! Suggestion fetches are not issued per keystroke; the prefix is held
//! until input settles for a quiet period. Re-arming with a newer prefix
//! replaces the pending one, so at most one fetch fires per burst of
//! typing.

use std::time::{Duration, Instant};

/// Default quiet period before a fetch fires
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    /// Prefix waiting to be fetched once the quiet period elapses
    pending: Option<String>,
    armed_at: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending: None,
            armed_at: None,
        }
    }

    /// Hold `prefix` and restart the quiet period
    pub fn arm(&mut self, prefix: String) {
        self.pending = Some(prefix);
        self.armed_at = Some(Instant::now());
    }

    /// Drop any pending prefix
    pub fn clear(&mut self) {
        self.pending = None;
        self.armed_at = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending prefix if the quiet period has elapsed
    pub fn poll(&mut self) -> Option<String> {
        let armed_at = self.armed_at?;
        if armed_at.elapsed() < self.delay {
            return None;
        }
        self.armed_at = None;
        self.pending.take()
    }

    /// Time until the pending prefix is ready, for event-loop poll timeouts
    ///
    /// Returns None when nothing is pending.
    pub fn time_until_ready(&self) -> Option<Duration> {
        let armed_at = self.armed_at?;
        self.pending.as_ref()?;
        Some(self.delay.saturating_sub(armed_at.elapsed()))
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
