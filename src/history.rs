mod matcher;
mod state;
pub mod storage;

pub use state::{DEFAULT_MAX_SUGGESTIONS, HistoryState};
