use thiserror::Error;

/// Custom error types for quest
#[derive(Debug, Error)]
pub enum QuestError {
    #[error("History storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
