use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::convert::TryFrom;
use std::fmt;
use std::io::Stdout;

use crate::app::state::results_status;
use crate::app::{handle_input, App, DetailsPanel, SearchState};
use crate::ui;

// Define states for one start action
#[derive(Clone, Copy, PartialEq, Debug)]
enum SearchRunState {
    Idle,
    Searching,
    Rendered,
    Empty,
    Failed,
}

impl fmt::Display for SearchRunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Searching => write!(f, "Searching"),
            Self::Rendered => write!(f, "Rendered"),
            Self::Empty => write!(f, "Empty"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

// Define events for the search lifecycle
#[derive(Clone, Debug)]
enum SearchEvent {
    Start,
    Completed { shown: usize },
    Error(String),
    Reset,
}

impl fmt::Display for SearchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::Completed { shown } => write!(f, "Completed({shown})"),
            Self::Error(msg) => write!(f, "Error({msg})"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}

// Define a custom error type for state transitions
#[derive(Debug)]
struct StateTransitionError {
    from: SearchRunState,
    event: SearchEvent,
}

impl fmt::Display for StateTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid transition from {} with event {}",
            self.from, self.event
        )
    }
}

impl std::error::Error for StateTransitionError {}

// State machine for the start action: Idle -> Searching -> Rendered/Empty/Failed
struct SearchMachine {
    state: SearchRunState,
}

impl SearchMachine {
    const fn new(initial_state: SearchRunState) -> Self {
        Self {
            state: initial_state,
        }
    }

    const fn state(&self) -> SearchRunState {
        self.state
    }

    // Process an event and update the state machine and app
    fn process_event(
        &mut self,
        event: &SearchEvent,
        app: &mut App,
    ) -> std::result::Result<(), StateTransitionError> {
        let next_state = NextState::try_from((self.state, event, app))?;
        self.state = next_state.0;
        Ok(())
    }
}

// Helper struct for state transitions
struct NextState(SearchRunState);

impl NextState {
    const fn new(state: SearchRunState) -> Self {
        Self(state)
    }
}

impl SearchRunState {
    const fn next_state(self) -> NextState {
        NextState::new(self)
    }
}

impl TryFrom<(SearchRunState, &SearchEvent, &mut App)> for NextState {
    type Error = StateTransitionError;

    fn try_from(
        value: (SearchRunState, &SearchEvent, &mut App),
    ) -> std::result::Result<Self, Self::Error> {
        let (current_state, event, app) = value;

        match (current_state, event) {
            (SearchRunState::Idle, SearchEvent::Start) => {
                app.status_message = "Searching...".to_string();
                Ok(SearchRunState::Searching.next_state())
            }
            (SearchRunState::Searching, SearchEvent::Completed { shown }) => {
                app.status_message = results_status(*shown);
                if *shown == 0 {
                    Ok(SearchRunState::Empty.next_state())
                } else {
                    Ok(SearchRunState::Rendered.next_state())
                }
            }
            (SearchRunState::Searching, SearchEvent::Error(_)) => {
                // Both sources failed: generic status, empty results area
                app.status_message = "Load failed".to_string();
                app.places.clear();
                app.selected_index = 0;
                Ok(SearchRunState::Failed.next_state())
            }
            (
                SearchRunState::Rendered | SearchRunState::Empty | SearchRunState::Failed,
                SearchEvent::Reset,
            ) => Ok(SearchRunState::Idle.next_state()),
            _ => Err(StateTransitionError {
                from: current_state,
                event: event.clone(),
            }),
        }
    }
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    match app.actions.start_search().await {
        Ok(outcome) => {
            if let Some(reason) = &outcome.live_error {
                if std::env::var("DEBUG").is_ok() {
                    eprintln!("live search failed, using sample: {reason}");
                }
            }
            app.apply_results(outcome.source, outcome.places);
        }
        Err(err) => {
            eprintln!("search failed: {err}");
            return Err(err.into());
        }
    }

    if json {
        render_headless_json(app)?;
    } else {
        render_headless_cards(app);
    }

    Ok(())
}

fn render_headless_cards(app: &App) {
    println!("\nPlace Scout");
    println!("===========");
    println!("Source: {}", app.source.label());
    println!("Shown: {}", app.shown_count());

    if app.shown_count() == 0 {
        println!("\n{}", results_status(0));
        return;
    }

    println!();
    for place in app.visible_places() {
        let rating = place
            .rating
            .map_or_else(|| "-".to_string(), |value| format!("{value:.1}"));
        let price = place
            .price_level
            .map_or_else(String::new, |level| format!(" | {}", level.as_str()));
        println!(
            "- {} | ⭐ {} | {} reviews | {}{}",
            place.name,
            rating,
            place.review_count.unwrap_or(0),
            place.address.as_deref().unwrap_or("(no address)"),
            price
        );
    }

    println!("\n{}", results_status(app.shown_count()));
}

fn render_headless_json(app: &App) -> Result<()> {
    let report = HeadlessReport {
        source: app.source.as_str(),
        shown: app.shown_count(),
        places: app.visible_places().to_vec(),
    };
    let json = serde_json::to_string_pretty(&report)?;
    println!("{json}");
    Ok(())
}

#[derive(serde::Serialize)]
struct HeadlessReport {
    source: &'static str,
    shown: usize,
    places: Vec<crate::domain::Place>,
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let mut search_machine = SearchMachine::new(SearchRunState::Idle);

    loop {
        // Update animations
        app.update();

        // Draw the UI with better error context
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        // Handle events with improved error context
        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events for now
                }
            }
        }

        // Handle a pending start action with the state machine
        if app.search_state == SearchState::Requested
            && search_machine.state() == SearchRunState::Idle
        {
            // Transition to searching state
            if search_machine
                .process_event(&SearchEvent::Start, app)
                .is_err()
            {
                continue;
            }

            // Show the searching status before the request goes out
            if terminal.draw(|f| ui::ui(app, f)).is_err() {
                // Non-fatal redraw error
            }

            // One fallback chain per start action; no cancellation once sent
            match app.actions.start_search().await {
                Ok(outcome) => {
                    app.apply_results(outcome.source, outcome.places);
                    let shown = app.shown_count();
                    if search_machine
                        .process_event(&SearchEvent::Completed { shown }, app)
                        .is_err()
                    {
                        // Non-fatal state transition error
                    }
                }
                Err(e) => {
                    let error_msg = format!("{e}");
                    if search_machine
                        .process_event(&SearchEvent::Error(error_msg), app)
                        .is_err()
                    {
                        // Non-fatal state transition error
                    }
                }
            }

            // Reset the state machine for the next start action
            if search_machine
                .process_event(&SearchEvent::Reset, app)
                .is_err()
            {
                // Non-fatal reset error
            }
            app.search_state = SearchState::Idle;

            // Force a redraw to show the updated state
            if terminal.draw(|f| ui::ui(app, f)).is_err() {
                // Non-fatal redraw error
            }
        }

        // Handle a pending details open; at most one fetch per open
        if app.details == DetailsPanel::Requested {
            process_details_request(terminal, app).await;
        }
    }
    Ok(())
}

/// One lazy details fetch for the selected card. Savings mode and sample
/// entries never reach the network.
async fn process_details_request(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) {
    let resource = app
        .selected_place()
        .and_then(|place| place.detail_resource.clone());

    app.details = DetailsPanel::Loading;
    if terminal.draw(|f| ui::ui(app, f)).is_err() {
        // Non-fatal redraw error
    }

    app.details = if app.actions.savings_mode() {
        // No credential: skip the call entirely
        DetailsPanel::SavingsMode
    } else if let Some(resource) = resource {
        match app.actions.fetch_details(&resource).await {
            Ok(fragment) => DetailsPanel::Loaded(fragment),
            Err(e) => DetailsPanel::Failed(format!("{e}")),
        }
    } else {
        // Credential present, but sample entries have no detail resource
        DetailsPanel::NoLiveDetail
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, SearchQuery};
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

    #[test]
    fn start_walks_idle_to_searching_to_rendered() {
        let mut app = test_app();
        let mut machine = SearchMachine::new(SearchRunState::Idle);

        machine
            .process_event(&SearchEvent::Start, &mut app)
            .expect("start from idle");
        assert_eq!(machine.state(), SearchRunState::Searching);
        assert_eq!(app.status_message, "Searching...");

        machine
            .process_event(&SearchEvent::Completed { shown: 6 }, &mut app)
            .expect("completion");
        assert_eq!(machine.state(), SearchRunState::Rendered);
        assert!(app.status_message.starts_with("6 displayed"));

        machine
            .process_event(&SearchEvent::Reset, &mut app)
            .expect("reset");
        assert_eq!(machine.state(), SearchRunState::Idle);
    }

    #[test]
    fn zero_results_land_in_the_empty_state() {
        let mut app = test_app();
        let mut machine = SearchMachine::new(SearchRunState::Idle);

        machine
            .process_event(&SearchEvent::Start, &mut app)
            .expect("start from idle");
        machine
            .process_event(&SearchEvent::Completed { shown: 0 }, &mut app)
            .expect("completion");

        assert_eq!(machine.state(), SearchRunState::Empty);
        assert!(app.status_message.contains("No matching places"));
    }

    #[test]
    fn total_failure_clears_results_and_sets_a_generic_status() {
        let mut app = test_app();
        app.places = vec![];
        let mut machine = SearchMachine::new(SearchRunState::Idle);

        machine
            .process_event(&SearchEvent::Start, &mut app)
            .expect("start from idle");
        machine
            .process_event(&SearchEvent::Error("boom".to_string()), &mut app)
            .expect("error transition");

        assert_eq!(machine.state(), SearchRunState::Failed);
        assert_eq!(app.status_message, "Load failed");
        assert!(app.places.is_empty());
    }

    #[test]
    fn a_second_start_is_rejected_mid_flight() {
        let mut app = test_app();
        let mut machine = SearchMachine::new(SearchRunState::Idle);

        machine
            .process_event(&SearchEvent::Start, &mut app)
            .expect("start from idle");
        let err = machine
            .process_event(&SearchEvent::Start, &mut app)
            .expect_err("start while searching must fail");
        assert!(err.to_string().contains("Invalid transition"));
    }
}
