//! Circular selection cursor for the suggestion popup
//!
//! Tracks which candidate is currently selected (if any). The cursor never
//! owns the candidate list; callers pass the current item count on every
//! navigation call, so the cursor stays total no matter how the list
//! changes between calls.

/// Selection cursor over an externally owned candidate list
///
/// `None` means no selection: the raw typed text is authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    selected: Option<usize>,
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Get the currently selected index
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Clear the current selection
    pub fn unselect(&mut self) {
        self.selected = None;
    }

    /// Move to the next candidate, wrapping from last to first
    ///
    /// No-op when the list is empty. From no selection, lands on index 0.
    /// Returns the new index so the caller can apply the preview.
    pub fn next(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        let next = match self.selected {
            Some(current) => (current + 1) % len,
            None => 0,
        };
        self.selected = Some(next);
        self.selected
    }

    /// Move to the previous candidate, wrapping from first to last
    ///
    /// No-op when the list is empty. From no selection, lands on the last
    /// index. Returns the new index so the caller can apply the preview.
    pub fn prev(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        let prev = match self.selected {
            Some(0) | None => len - 1,
            Some(current) => current - 1,
        };
        self.selected = Some(prev);
        self.selected
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod select_tests;
