mod events;
mod render;
mod state;

pub use state::App;
