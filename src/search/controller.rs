//! Search suggestion controller
//!
//! Composition root for the search box: merges history and remote
//! suggestions into one candidate list, drives the selection cursor, and
//! turns keyboard intents into history mutations and fetch requests.
//!
//! The displayed query and the typed query are tracked separately.
//! Navigating previews a candidate in the input line, but the text the
//! user actually typed is preserved and restored on unselect, so browsing
//! the list never destroys their input.

use crate::history::HistoryState;
use crate::select::SelectionCursor;
use crate::suggest::SuggestState;

/// Controller state
///
/// `Idle` - input unfocused, panel closed. `Editing` - focused, panel open
/// when there are candidates. `Navigating` - focused with a candidate
/// selected; the input shows a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Editing,
    Navigating,
}

pub struct SearchController {
    /// Displayed text; a candidate preview while navigating
    query: String,
    /// Text as actually typed, restored when the selection clears
    typed_query: String,
    mode: Mode,
    /// Merged candidates: history block first, then remote minus history
    candidates: Vec<String>,
    /// Length of the history block at the front of `candidates`
    history_len: usize,
    cursor: SelectionCursor,
    pub history: HistoryState,
    pub suggest: SuggestState,
}

impl SearchController {
    pub fn new(history: HistoryState, suggest: SuggestState) -> Self {
        Self {
            query: String::new(),
            typed_query: String::new(),
            mode: Mode::Idle,
            candidates: Vec::new(),
            history_len: 0,
            cursor: SelectionCursor::new(),
            history,
            suggest,
        }
    }

    /// The text to display in the input line
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// How many candidates at the front came from history
    pub fn history_len(&self) -> usize {
        self.history_len
    }

    pub fn selected(&self) -> Option<usize> {
        self.cursor.selected()
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.cursor
            .selected()
            .and_then(|idx| self.candidates.get(idx))
            .map(String::as_str)
    }

    /// Whether the suggestion panel is visible
    pub fn panel_open(&self) -> bool {
        self.mode != Mode::Idle && !self.candidates.is_empty()
    }

    /// Input gained focus; panel may open
    pub fn focus(&mut self) {
        if self.mode == Mode::Idle {
            self.mode = Mode::Editing;
        }
    }

    /// Input lost focus; panel closes regardless of selection
    ///
    /// A preview that was showing becomes the query, matching what the
    /// user sees in the input line when focus returns.
    pub fn blur(&mut self) {
        self.typed_query = self.query.clone();
        self.cursor.unselect();
        self.mode = Mode::Idle;
    }

    /// The user edited the input text; editing implies focus
    pub fn change_query(&mut self, text: &str) {
        self.query = text.to_string();
        self.typed_query = text.to_string();
        self.cursor.unselect();
        self.mode = Mode::Editing;
        self.refresh_sources();
    }

    /// Service the debounce timer and any arrived fetch results
    ///
    /// Returns true when the candidate list changed. A changed list
    /// invalidates the selection: the preview is rolled back to the typed
    /// text so the cursor never silently points at a different string.
    pub fn tick(&mut self) -> bool {
        self.suggest.poll_debounce();
        if !self.suggest.poll_responses() {
            return false;
        }

        self.cursor.unselect();
        if self.mode == Mode::Navigating {
            self.query = self.typed_query.clone();
            self.mode = Mode::Editing;
        }
        self.rebuild_candidates();
        true
    }

    /// Select the next candidate and preview it in the input line
    pub fn next(&mut self) {
        if !self.panel_open() {
            return;
        }
        if let Some(idx) = self.cursor.next(self.candidates.len()) {
            self.mode = Mode::Navigating;
            self.query = self.candidates[idx].clone();
        }
    }

    /// Select the previous candidate and preview it in the input line
    pub fn prev(&mut self) {
        if !self.panel_open() {
            return;
        }
        if let Some(idx) = self.cursor.prev(self.candidates.len()) {
            self.mode = Mode::Navigating;
            self.query = self.candidates[idx].clone();
        }
    }

    /// Clear the selection and restore the typed text
    pub fn unselect(&mut self) {
        self.cursor.unselect();
        self.query = self.typed_query.clone();
        if self.mode == Mode::Navigating {
            self.mode = Mode::Editing;
        }
    }

    /// Delete the selected candidate from history
    ///
    /// No-op without a selection. Removal is idempotent, so a selected
    /// remote-only candidate leaves the history untouched; either way the
    /// selection clears and the typed text comes back.
    pub fn delete_selected(&mut self) {
        if self.mode != Mode::Navigating {
            return;
        }
        let Some(item) = self.selected_item().map(str::to_string) else {
            return;
        };

        self.unselect();
        self.history.remove(&item);
        self.refresh_sources();
    }

    /// Commit the current text (typed or previewed)
    ///
    /// Returns the submitted query for the router collaborator, records it
    /// in history, and resets the session. An effectively empty query is a
    /// no-op.
    pub fn submit(&mut self) -> Option<String> {
        let submitted = self.query.trim().to_string();
        if submitted.is_empty() {
            return None;
        }

        self.history.append(&submitted);
        self.query.clear();
        self.typed_query.clear();
        self.cursor.unselect();
        self.suggest.reset();
        self.candidates.clear();
        self.history_len = 0;
        self.mode = Mode::Idle;
        Some(submitted)
    }

    /// Empty the input; the panel stays open showing recent history
    pub fn clear(&mut self) {
        self.query.clear();
        self.typed_query.clear();
        self.cursor.unselect();
        if self.mode != Mode::Idle {
            self.mode = Mode::Editing;
        }
        self.refresh_sources();
    }

    /// Re-query both sources for the typed prefix and merge
    fn refresh_sources(&mut self) {
        let history = self.history.suggestions(&self.typed_query);
        self.suggest.set_exclude(history.clone());
        self.suggest.request(&self.typed_query);
        self.merge(history);
    }

    /// Merge the current remote slot behind a fresh history block
    fn rebuild_candidates(&mut self) {
        let history = self.history.suggestions(&self.typed_query);
        self.merge(history);
    }

    fn merge(&mut self, history: Vec<String>) {
        self.history_len = history.len();
        let mut candidates = history;
        // The exclude set already filters arrivals; this guards the window
        // where history changed after the results landed.
        for suggestion in self.suggest.suggestions() {
            if !candidates.contains(suggestion) {
                candidates.push(suggestion.clone());
            }
        }
        self.candidates = candidates;
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
