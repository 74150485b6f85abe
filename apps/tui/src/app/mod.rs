// App module for placescout
// Handles application state and the orchestration around the API clients

pub mod actions;
pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, AppScreen, DetailsPanel, SearchState};
