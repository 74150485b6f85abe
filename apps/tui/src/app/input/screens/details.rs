use crate::app::state::{App, DetailsPanel};
use crossterm::event::KeyCode;

pub fn handle_details_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Enter => {
            // A fetch still in flight keeps its panel; the loop never hands
            // keys over mid-request, so this only ever closes a settled panel
            if app.details != DetailsPanel::Requested {
                app.close_details();
            }
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}
