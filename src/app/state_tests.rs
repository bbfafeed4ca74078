//! Tests for app/state

use super::*;
use crate::history::{DEFAULT_MAX_SUGGESTIONS, HistoryState};
use crate::search::Mode;
use crate::suggest::SuggestState;

fn app_with_history(entries: &[&str]) -> App {
    let mut history = HistoryState::in_memory(DEFAULT_MAX_SUGGESTIONS);
    for entry in entries.iter().rev() {
        history.append(entry);
    }
    let controller = SearchController::new(history, SuggestState::new(0));
    App::new(controller, Filter::All)
}

#[test]
fn test_new_app_starts_focused_with_recent_history() {
    let app = app_with_history(&["cats", "dogs"]);

    assert_eq!(app.controller.mode(), Mode::Editing);
    assert_eq!(app.controller.candidates(), ["cats", "dogs"]);
    assert_eq!(app.input_line(), "");
    assert!(!app.should_quit());
}

#[test]
fn test_new_app_with_empty_history_has_closed_panel() {
    let app = app_with_history(&[]);
    assert!(!app.controller.panel_open());
}

#[test]
fn test_into_submission_carries_the_filter() {
    let mut app = app_with_history(&[]);
    app.set_submission("cats".to_string());
    assert_eq!(
        app.into_submission(),
        Some(("cats".to_string(), Filter::All))
    );
}

#[test]
fn test_into_submission_none_without_submit() {
    let app = app_with_history(&[]);
    assert_eq!(app.into_submission(), None);
}

#[test]
fn test_poll_timeout_is_bounded() {
    let app = app_with_history(&[]);
    assert!(app.poll_timeout() <= TICK);
}
