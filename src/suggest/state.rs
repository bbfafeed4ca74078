//! Suggestion fetcher state
//!
//! Main-thread side of the fetch pipeline: holds the latest winning
//! suggestion list, the debouncer, and the channel handles to the worker
//! thread. Responses are applied only when their request id matches the
//! current in-flight request; everything else is discarded on arrival, so
//! slow responses from superseded fetches never flicker back into view.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use super::debouncer::Debouncer;
use super::provider::SuggestionProvider;
use super::worker::{self, SuggestRequest, SuggestResponse};

/// Debounced, cancellable remote suggestion fetcher
#[derive(Debug)]
pub struct SuggestState {
    /// Latest remote suggestions, already filtered against the exclude set
    suggestions: Vec<String>,
    /// Strings suppressed from results (the current history suggestions)
    exclude: Vec<String>,
    debouncer: Debouncer,
    /// Channel to the worker thread (None = offline, history only)
    request_tx: Option<Sender<SuggestRequest>>,
    response_rx: Option<Receiver<SuggestResponse>>,
    /// Current request ID, incremented for each new fetch
    request_id: u64,
    /// ID of the in-flight fetch, if any; the only response that may land
    in_flight_request_id: Option<u64>,
}

impl SuggestState {
    /// Fetcher with no worker; suggestions stay empty (offline mode, tests)
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            suggestions: Vec::new(),
            exclude: Vec::new(),
            debouncer: Debouncer::new(debounce_ms),
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight_request_id: None,
        }
    }

    /// Fetcher backed by a worker thread running `provider`
    pub fn spawn<P: SuggestionProvider>(debounce_ms: u64, provider: P) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        worker::spawn_worker(provider, request_rx, response_tx);

        let mut state = Self::new(debounce_ms);
        state.request_tx = Some(request_tx);
        state.response_rx = Some(response_rx);
        state
    }

    /// Fetcher wired to explicit channels (tests drive the worker side)
    #[cfg(test)]
    pub fn with_channels(
        debounce_ms: u64,
        request_tx: Sender<SuggestRequest>,
        response_rx: Receiver<SuggestResponse>,
    ) -> Self {
        let mut state = Self::new(debounce_ms);
        state.request_tx = Some(request_tx);
        state.response_rx = Some(response_rx);
        state
    }

    /// Latest remote suggestions
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Strings that must never appear in results (current history block)
    pub fn set_exclude(&mut self, exclude: Vec<String>) {
        self.exclude = exclude;
        self.suggestions.retain(|s| !self.exclude.contains(s));
    }

    /// Queue a fetch for `prefix` behind the debounce window
    ///
    /// An empty prefix clears the suggestions immediately, cancels any
    /// in-flight fetch, and issues no network call.
    pub fn request(&mut self, prefix: &str) {
        if prefix.is_empty() {
            self.debouncer.clear();
            self.cancel_in_flight();
            self.suggestions.clear();
            return;
        }
        // The newer prefix makes any in-flight fetch stale right away;
        // waiting for the debounced fetch to fire would let the old
        // response land during the quiet period.
        self.cancel_in_flight();
        self.debouncer.arm(prefix.to_string());
    }

    /// Drop all suggestion state (submit, clear, teardown)
    pub fn reset(&mut self) {
        self.debouncer.clear();
        self.cancel_in_flight();
        self.suggestions.clear();
    }

    /// Fire the pending fetch once the debounce window has elapsed
    pub fn poll_debounce(&mut self) {
        if let Some(prefix) = self.debouncer.poll() {
            self.start_request(prefix);
        }
    }

    /// Drain worker responses; returns true when the suggestions changed
    pub fn poll_responses(&mut self) -> bool {
        let mut changed = false;

        loop {
            let response = match self.response_rx.as_ref() {
                Some(rx) => match rx.try_recv() {
                    Ok(response) => response,
                    Err(_) => break,
                },
                None => break,
            };

            match response {
                SuggestResponse::Results {
                    suggestions,
                    request_id,
                } if Some(request_id) == self.in_flight_request_id => {
                    self.suggestions = suggestions
                        .into_iter()
                        .filter(|s| !self.exclude.contains(s))
                        .collect();
                    self.in_flight_request_id = None;
                    changed = true;
                }
                SuggestResponse::Results { request_id, .. } => {
                    log::debug!("discarding stale results for request {}", request_id);
                }
                SuggestResponse::Failed { message, request_id }
                    if Some(request_id) == self.in_flight_request_id =>
                {
                    // Transient failure: fall back to an empty list, no retry.
                    log::debug!("suggestion fetch failed: {}", message);
                    self.suggestions.clear();
                    self.in_flight_request_id = None;
                    changed = true;
                }
                SuggestResponse::Failed { .. } | SuggestResponse::Cancelled { .. } => {}
            }
        }

        changed
    }

    /// Time until the debounced fetch fires, for event-loop poll timeouts
    pub fn time_until_ready(&self) -> Option<Duration> {
        self.debouncer.time_until_ready()
    }

    /// Check if there's an in-flight fetch
    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    fn start_request(&mut self, prefix: String) {
        self.cancel_in_flight();

        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;

        let Some(ref tx) = self.request_tx else { return };
        if tx.send(SuggestRequest::Fetch { prefix, request_id }).is_ok() {
            self.in_flight_request_id = Some(request_id);
        } else {
            log::warn!("suggestion worker is gone; staying on history only");
        }
    }

    /// Cancel any in-flight fetch; returns true if a cancel was sent
    pub fn cancel_in_flight(&mut self) -> bool {
        if let Some(request_id) = self.in_flight_request_id.take() {
            if let Some(ref tx) = self.request_tx
                && tx.send(SuggestRequest::Cancel { request_id }).is_ok()
            {
                log::debug!("sent cancel for request {}", request_id);
                return true;
            }
        }
        false
    }
}

impl Drop for SuggestState {
    // Session teardown must not leave a fetch updating state after the
    // consuming view is gone.
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
