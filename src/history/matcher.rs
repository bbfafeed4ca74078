/// Indices of entries that contain `query`, case-insensitively
///
/// Entry order is preserved, so a most-recent-first input stays
/// most-recent-first in the output. An empty query matches everything.
pub fn filter(query: &str, entries: &[String]) -> Vec<usize> {
    if query.is_empty() {
        return (0..entries.len()).collect();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
