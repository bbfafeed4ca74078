//! History file persistence
//!
//! The history is a flat JSON array of strings, most recent first, stored
//! under the platform data directory. Load is best-effort: a missing or
//! unreadable file yields an empty history rather than an error, since
//! losing suggestions must never block the search box.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::QuestError;

/// Upper bound on entries kept on disk
pub const MAX_HISTORY_ENTRIES: usize = 1000;

/// Default location of the history file (`<data_dir>/quest/history.json`)
pub fn default_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("quest").join("history.json"))
}

/// Load history entries from `path`, most recent first
///
/// Any failure (missing file, bad JSON) returns an empty list. The file is
/// sanitized on the way in: duplicates collapse to their first (most
/// recent) occurrence and the list is trimmed to `MAX_HISTORY_ENTRIES`.
pub fn load(path: &Path) -> Vec<String> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(_) => return Vec::new(),
    };

    match serde_json::from_str::<Vec<String>>(&text) {
        Ok(entries) => trim_to_max(&deduplicate(&entries)),
        Err(e) => {
            log::warn!("ignoring malformed history file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Write history entries to `path`, creating parent directories as needed
pub fn save(path: &Path, entries: &[String]) -> Result<(), QuestError> {
    let entries = trim_to_max(&deduplicate(entries));

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&entries)
        .map_err(|e| QuestError::Storage(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

/// Collapse duplicate entries, keeping the first occurrence
pub fn deduplicate(entries: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(entries.len());
    for entry in entries {
        if !seen.contains(entry) {
            seen.push(entry.clone());
        }
    }
    seen
}

/// Trim the entry list to `MAX_HISTORY_ENTRIES`, keeping the front
pub fn trim_to_max(entries: &[String]) -> Vec<String> {
    entries.iter().take(MAX_HISTORY_ENTRIES).cloned().collect()
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
