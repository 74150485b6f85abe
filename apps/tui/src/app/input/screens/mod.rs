use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod details;
mod help;
mod main;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Main => main::handle_main_input(app, key),
        AppScreen::Details => details::handle_details_input(app, key),
    }
}
