mod controller;
mod filter;

pub use controller::{Mode, SearchController};
pub use filter::Filter;
