pub mod app;
pub mod config;
pub mod error;
pub mod history;
pub mod search;
pub mod select;
pub mod suggest;
