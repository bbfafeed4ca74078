//! In-memory search history
//!
//! Entries are kept most recent first. Every mutation is persisted
//! best-effort; a failed write is logged and the in-memory state stays
//! authoritative for the session.

use std::path::PathBuf;

use super::{matcher, storage};

/// Default cap on history entries offered as suggestions
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Persisted search history with capped suggestion lookup
#[derive(Debug)]
pub struct HistoryState {
    /// Past queries, most recent first
    entries: Vec<String>,
    /// History file location (None = in-memory only, used by tests)
    path: Option<PathBuf>,
    /// Cap on the number of entries returned by `suggestions`
    max_suggestions: usize,
}

impl HistoryState {
    /// Load history from the default platform location
    pub fn load(max_suggestions: usize) -> Self {
        let path = storage::default_path();
        let entries = path.as_deref().map(storage::load).unwrap_or_default();
        Self {
            entries,
            path,
            max_suggestions,
        }
    }

    /// History backed by an explicit file
    pub fn with_path(path: PathBuf, max_suggestions: usize) -> Self {
        let entries = storage::load(&path);
        Self {
            entries,
            path: Some(path),
            max_suggestions,
        }
    }

    /// History with no backing file
    pub fn in_memory(max_suggestions: usize) -> Self {
        Self {
            entries: Vec::new(),
            path: None,
            max_suggestions,
        }
    }

    /// All entries, most recent first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// History entries matching `prefix`, most recent first, capped
    ///
    /// Matching is case-insensitive containment; an empty prefix returns
    /// the most recent entries.
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        matcher::filter(prefix, &self.entries)
            .into_iter()
            .take(self.max_suggestions)
            .map(|idx| self.entries[idx].clone())
            .collect()
    }

    /// Record a submitted query as the most recent entry
    ///
    /// Empty (after trimming) queries are ignored. A query already in the
    /// history moves to the front instead of duplicating.
    pub fn append(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        self.entries.retain(|entry| entry != query);
        self.entries.insert(0, query.to_string());
        if self.entries.len() > storage::MAX_HISTORY_ENTRIES {
            self.entries.truncate(storage::MAX_HISTORY_ENTRIES);
        }
        self.persist();
    }

    /// Delete an exact-match entry; idempotent when absent
    pub fn remove(&mut self, query: &str) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry != query);
        if self.entries.len() != before {
            self.persist();
        }
    }

    fn persist(&self) {
        let Some(ref path) = self.path else { return };
        if let Err(e) = storage::save(path, &self.entries) {
            log::warn!("failed to persist history to {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
