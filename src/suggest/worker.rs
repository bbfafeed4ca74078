//! Suggestion fetch worker thread
//!
//! Handles suggestion requests in a background thread to avoid blocking
//! the UI. Receives requests via channel, calls the suggestion provider,
//! and sends the results back to the main thread. Every message carries a
//! request id; the main thread applies a response only when its id matches
//! the current in-flight request, so late arrivals from superseded fetches
//! can never clobber newer results.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::provider::SuggestionProvider;

/// Request messages sent to the suggestion worker thread
#[derive(Debug)]
pub enum SuggestRequest {
    /// Fetch suggestions for the given prefix
    Fetch {
        prefix: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Cancel the request with the given ID
    Cancel { request_id: u64 },
}

/// Response messages received from the suggestion worker thread
#[derive(Debug)]
pub enum SuggestResponse {
    /// Suggestions for a completed fetch
    Results {
        suggestions: Vec<String>,
        request_id: u64,
    },
    /// The fetch failed; the caller falls back to an empty list
    Failed {
        message: String,
        request_id: u64,
    },
    /// The request was cancelled or superseded before fetching
    Cancelled { request_id: u64 },
}

/// Spawn the suggestion worker thread
pub fn spawn_worker<P: SuggestionProvider>(
    provider: P,
    request_rx: Receiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(provider, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop<P: SuggestionProvider>(
    provider: P,
    request_rx: Receiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        // A burst of keystrokes can queue several requests behind a slow
        // fetch; execute only the newest one.
        match coalesce(request, &request_rx, &response_tx) {
            Some(SuggestRequest::Fetch { prefix, request_id }) => {
                handle_fetch(&provider, &prefix, request_id, &response_tx);
            }
            Some(SuggestRequest::Cancel { request_id }) => {
                // Cancel received with nothing in-flight - just acknowledge
                let _ = response_tx.send(SuggestResponse::Cancelled { request_id });
                log::debug!("cancelled request {} (no active request)", request_id);
            }
            None => {}
        }
    }

    log::debug!("suggestion worker thread shutting down");
}

/// Drain queued requests and keep only the newest fetch
///
/// Superseded fetches are acknowledged with `Cancelled`. A `Cancel`
/// matching the pending fetch drops it.
fn coalesce(
    first: SuggestRequest,
    request_rx: &Receiver<SuggestRequest>,
    response_tx: &Sender<SuggestResponse>,
) -> Option<SuggestRequest> {
    let mut current = Some(first);

    loop {
        let next = match request_rx.try_recv() {
            Ok(next) => next,
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return current,
        };

        match next {
            SuggestRequest::Fetch { .. } => {
                // A newer fetch supersedes whatever is pending.
                match current.take() {
                    Some(SuggestRequest::Fetch { request_id, .. })
                    | Some(SuggestRequest::Cancel { request_id }) => {
                        let _ = response_tx.send(SuggestResponse::Cancelled { request_id });
                    }
                    None => {}
                }
                current = Some(next);
            }
            SuggestRequest::Cancel { request_id } => {
                let cancels_pending = matches!(
                    &current,
                    Some(SuggestRequest::Fetch { request_id: pending, .. }) if *pending == request_id
                );
                let _ = response_tx.send(SuggestResponse::Cancelled { request_id });
                if cancels_pending {
                    current = None;
                }
            }
        }
    }
}

/// Fetch suggestions for one prefix and report the outcome
fn handle_fetch<P: SuggestionProvider>(
    provider: &P,
    prefix: &str,
    request_id: u64,
    response_tx: &Sender<SuggestResponse>,
) {
    match provider.fetch(prefix) {
        Ok(suggestions) => {
            let _ = response_tx.send(SuggestResponse::Results {
                suggestions,
                request_id,
            });
        }
        Err(e) => {
            log::debug!("suggestion fetch for request {} failed: {}", request_id, e);
            let _ = response_tx.send(SuggestResponse::Failed {
                message: e.to_string(),
                request_id,
            });
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
