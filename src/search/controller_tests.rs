//! Tests for the search controller state machine

use std::sync::mpsc::{self, Receiver, Sender};

use super::*;
use crate::history::DEFAULT_MAX_SUGGESTIONS;
use crate::suggest::worker::{SuggestRequest, SuggestResponse};

/// Controller wired to hand-driven worker channels, zero debounce
fn harness(
    history_entries: &[&str],
) -> (
    SearchController,
    Receiver<SuggestRequest>,
    Sender<SuggestResponse>,
) {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    let mut history = HistoryState::in_memory(DEFAULT_MAX_SUGGESTIONS);
    for entry in history_entries.iter().rev() {
        history.append(entry);
    }

    let suggest = SuggestState::with_channels(0, request_tx, response_rx);
    let mut controller = SearchController::new(history, suggest);
    controller.focus();
    (controller, request_rx, response_tx)
}

/// Let the pending fetch fire and answer it with `suggestions`
fn deliver(
    controller: &mut SearchController,
    request_rx: &Receiver<SuggestRequest>,
    response_tx: &Sender<SuggestResponse>,
    suggestions: &[&str],
) {
    controller.tick();

    let request_id = loop {
        match request_rx.try_recv().expect("expected a fetch request") {
            SuggestRequest::Fetch { request_id, .. } => break request_id,
            SuggestRequest::Cancel { .. } => continue,
        }
    };

    response_tx
        .send(SuggestResponse::Results {
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            request_id,
        })
        .unwrap();
    controller.tick();
}

#[test]
fn test_type_navigate_submit() {
    // Empty history; remote answers for "cat"; Down twice selects the
    // second candidate; Enter submits it and records it in history.
    let (mut controller, request_rx, response_tx) = harness(&[]);

    controller.change_query("cat");
    deliver(&mut controller, &request_rx, &response_tx, &["cats", "category"]);
    assert_eq!(controller.candidates(), ["cats", "category"]);

    controller.next();
    controller.next();
    assert_eq!(controller.query(), "category");
    assert_eq!(controller.mode(), Mode::Navigating);

    let submitted = controller.submit();
    assert_eq!(submitted.as_deref(), Some("category"));
    assert_eq!(controller.history.entries(), ["category"]);
    assert_eq!(controller.query(), "");
    assert_eq!(controller.mode(), Mode::Idle);
    assert!(controller.candidates().is_empty());
}

#[test]
fn test_history_suppresses_remote_duplicate() {
    let (mut controller, request_rx, response_tx) = harness(&["catfish"]);

    controller.change_query("cat");
    deliver(
        &mut controller,
        &request_rx,
        &response_tx,
        &["catfish", "category"],
    );

    // The remote "catfish" is suppressed; only the history copy appears.
    assert_eq!(controller.candidates(), ["catfish", "category"]);
    assert_eq!(controller.history_len(), 1);
}

#[test]
fn test_delete_selected_removes_from_history_and_candidates() {
    let (mut controller, request_rx, response_tx) = harness(&["catfish"]);

    controller.change_query("cat");
    deliver(&mut controller, &request_rx, &response_tx, &["category"]);
    assert_eq!(controller.candidates(), ["catfish", "category"]);

    controller.next(); // selects "catfish"
    controller.delete_selected();

    assert!(controller.history.entries().is_empty());
    assert_eq!(controller.candidates(), ["category"]);
    assert_eq!(controller.selected(), None);
    assert_eq!(controller.query(), "cat");
    assert_eq!(controller.mode(), Mode::Editing);
}

#[test]
fn test_delete_on_remote_candidate_leaves_history_alone() {
    let (mut controller, request_rx, response_tx) = harness(&["catfish"]);

    controller.change_query("cat");
    deliver(&mut controller, &request_rx, &response_tx, &["category"]);

    controller.next();
    controller.next(); // "category", remote-only
    controller.delete_selected();

    assert_eq!(controller.history.entries(), ["catfish"]);
    assert_eq!(controller.selected(), None);
}

#[test]
fn test_delete_without_selection_is_noop() {
    let (mut controller, request_rx, response_tx) = harness(&["catfish"]);

    controller.change_query("cat");
    deliver(&mut controller, &request_rx, &response_tx, &[]);
    controller.delete_selected();

    assert_eq!(controller.history.entries(), ["catfish"]);
    assert_eq!(controller.candidates(), ["catfish"]);
}

#[test]
fn test_navigation_previews_and_unselect_restores_typed_text() {
    let (mut controller, request_rx, response_tx) = harness(&[]);

    controller.change_query("ca");
    deliver(&mut controller, &request_rx, &response_tx, &["cats", "cars"]);

    controller.next();
    assert_eq!(controller.query(), "cats");

    controller.unselect();
    assert_eq!(controller.query(), "ca");
    assert_eq!(controller.mode(), Mode::Editing);
    assert_eq!(controller.selected(), None);
}

#[test]
fn test_editing_text_clears_selection() {
    let (mut controller, request_rx, response_tx) = harness(&[]);

    controller.change_query("ca");
    deliver(&mut controller, &request_rx, &response_tx, &["cats"]);
    controller.next();
    assert_eq!(controller.selected(), Some(0));

    controller.change_query("cat");
    assert_eq!(controller.selected(), None);
    assert_eq!(controller.mode(), Mode::Editing);
}

#[test]
fn test_text_change_while_blurred_transitions_to_editing() {
    let (mut controller, _request_rx, _response_tx) = harness(&[]);

    controller.blur();
    controller.change_query("cat");
    assert_eq!(controller.mode(), Mode::Editing);
}

#[test]
fn test_navigation_wraps_circularly() {
    let (mut controller, request_rx, response_tx) = harness(&[]);

    controller.change_query("ca");
    deliver(&mut controller, &request_rx, &response_tx, &["cats", "cars"]);

    controller.next(); // 0
    controller.next(); // 1
    controller.next(); // wraps to 0
    assert_eq!(controller.selected(), Some(0));
    assert_eq!(controller.query(), "cats");

    controller.prev(); // back to 1
    assert_eq!(controller.query(), "cars");
}

#[test]
fn test_navigation_with_closed_panel_is_noop() {
    let (mut controller, _request_rx, _response_tx) = harness(&[]);

    controller.next();
    controller.prev();
    assert_eq!(controller.selected(), None);
    assert_eq!(controller.mode(), Mode::Editing);
}

#[test]
fn test_blur_closes_panel_and_focus_reopens() {
    let (mut controller, request_rx, response_tx) = harness(&["catfish"]);

    controller.change_query("cat");
    deliver(&mut controller, &request_rx, &response_tx, &[]);
    assert!(controller.panel_open());

    controller.blur();
    assert_eq!(controller.mode(), Mode::Idle);
    assert!(!controller.panel_open());

    controller.focus();
    assert_eq!(controller.mode(), Mode::Editing);
    assert!(controller.panel_open());
}

#[test]
fn test_blur_while_navigating_commits_the_preview() {
    let (mut controller, request_rx, response_tx) = harness(&[]);

    controller.change_query("ca");
    deliver(&mut controller, &request_rx, &response_tx, &["cats"]);
    controller.next();

    controller.blur();
    assert_eq!(controller.query(), "cats");
    assert_eq!(controller.selected(), None);
}

#[test]
fn test_submit_empty_query_is_noop() {
    let (mut controller, _request_rx, _response_tx) = harness(&[]);

    assert_eq!(controller.submit(), None);
    controller.change_query("   ");
    assert_eq!(controller.submit(), None);
    assert!(controller.history.entries().is_empty());
}

#[test]
fn test_submit_reappends_existing_entry_without_duplicating() {
    let (mut controller, _request_rx, _response_tx) = harness(&["cats", "dogs"]);

    controller.change_query("dogs");
    controller.submit();
    assert_eq!(controller.history.entries(), ["dogs", "cats"]);
}

#[test]
fn test_clear_keeps_panel_open_with_recent_history() {
    let (mut controller, _request_rx, _response_tx) = harness(&["cats", "dogs"]);

    controller.change_query("zebra");
    controller.clear();

    assert_eq!(controller.query(), "");
    assert_eq!(controller.mode(), Mode::Editing);
    assert_eq!(controller.candidates(), ["cats", "dogs"]);
}

#[test]
fn test_arriving_results_reset_selection_and_preview() {
    let (mut controller, request_rx, response_tx) = harness(&[]);

    controller.change_query("ca");
    deliver(&mut controller, &request_rx, &response_tx, &["cats"]);
    controller.next();
    assert_eq!(controller.query(), "cats");

    // A newer fetch lands while a candidate is selected: the list changed
    // identity, so the selection resets and the typed text comes back.
    controller.change_query("cat");
    deliver(&mut controller, &request_rx, &response_tx, &["category"]);
    assert_eq!(controller.selected(), None);
    assert_eq!(controller.query(), "cat");
    assert_eq!(controller.candidates(), ["category"]);
}

#[test]
fn test_merged_candidates_never_contain_duplicates() {
    let (mut controller, request_rx, response_tx) = harness(&["cat videos", "catfish"]);

    controller.change_query("cat");
    deliver(
        &mut controller,
        &request_rx,
        &response_tx,
        &["catfish", "cat videos", "category", "category"],
    );

    let mut seen = std::collections::HashSet::new();
    for candidate in controller.candidates() {
        assert!(seen.insert(candidate.clone()), "duplicate {}", candidate);
    }
    assert_eq!(
        controller.candidates(),
        ["cat videos", "catfish", "category"]
    );
}
