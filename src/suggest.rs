mod debouncer;
pub mod provider;
mod state;
pub mod worker;

pub use debouncer::{DEFAULT_DEBOUNCE_MS, Debouncer};
pub use state::SuggestState;
