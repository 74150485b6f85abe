use crate::app::state::App;
use crossterm::event::KeyCode;

#[allow(clippy::missing_const_for_fn)]
pub fn handle_main_input(app: &mut App, key: KeyCode) {
    let total_cards = app.shown_count();

    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('s') => {
            app.request_search();
        }
        KeyCode::Char('c') => {
            app.clear_results();
        }
        KeyCode::Enter => {
            app.request_details();
        }
        KeyCode::Up => {
            if app.selected_index > 0 {
                app.selected_index -= 1;
            }
        }
        KeyCode::Down => {
            if total_cards > 0 && app.selected_index + 1 < total_cards {
                app.selected_index += 1;
            }
        }
        KeyCode::Home => {
            app.selected_index = 0;
        }
        KeyCode::End => {
            if total_cards > 0 {
                app.selected_index = total_cards - 1;
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{AppScreen, DetailsPanel, SearchState};
    use crate::config::{AppConfig, SearchQuery};
    use crate::domain::{DataSource, Place};
    use std::path::PathBuf;

    fn test_app() -> App {
        App::new(AppConfig {
            api_key: None,
            query: SearchQuery {
                keyword: "dinner".to_string(),
                latitude: 35.68944,
                longitude: 139.70056,
                radius_m: 1500.0,
            },
            max_results: 6,
            sample_path: PathBuf::from("data/places.sample.json"),
            language_code: "ja".to_string(),
            region_code: "JP".to_string(),
        })
    }

    fn seed_places(app: &mut App, count: usize) {
        let places = (0..count)
            .map(|index| Place {
                name: format!("Place {index}"),
                rating: None,
                review_count: None,
                address: None,
                price_level: None,
                description: None,
                tags: Vec::new(),
                maps_url: None,
                detail_resource: None,
            })
            .collect();
        app.apply_results(DataSource::Sample, places);
    }

    #[test]
    fn start_key_marks_a_search_request_once() {
        let mut app = test_app();
        handle_main_input(&mut app, KeyCode::Char('s'));
        assert_eq!(app.search_state, SearchState::Requested);

        handle_main_input(&mut app, KeyCode::Char('s'));
        assert_eq!(app.search_state, SearchState::Requested);
    }

    #[test]
    fn selection_stays_within_the_visible_cards() {
        let mut app = test_app();
        seed_places(&mut app, 8);

        handle_main_input(&mut app, KeyCode::End);
        // Eight entries, six visible: End lands on the last visible card
        assert_eq!(app.selected_index, 5);

        handle_main_input(&mut app, KeyCode::Down);
        assert_eq!(app.selected_index, 5);

        handle_main_input(&mut app, KeyCode::Home);
        handle_main_input(&mut app, KeyCode::Up);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn enter_opens_details_for_the_selected_card() {
        let mut app = test_app();
        seed_places(&mut app, 2);

        handle_main_input(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, AppScreen::Details);
        assert_eq!(app.details, DetailsPanel::Requested);
    }

    #[test]
    fn clear_key_resets_the_results_area() {
        let mut app = test_app();
        seed_places(&mut app, 3);
        app.status_message = "3 displayed".to_string();

        handle_main_input(&mut app, KeyCode::Char('c'));
        assert!(app.places.is_empty());
        assert!(app.status_message.is_empty());
    }
}
