// UI module for placescout
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Main => screens::main::render_main(app, f),
        AppScreen::Details => screens::details::render_details(app, f),
    }
}
