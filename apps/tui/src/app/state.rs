use throbber_widgets_tui::ThrobberState;

use crate::app::actions::AppActions;
use crate::config::AppConfig;
use crate::domain::{DataSource, DetailFragment, Place};

#[derive(Debug, PartialEq, Eq)]
pub enum AppScreen {
    Main,
    Details,
}

/// Start-action marker. Input handlers set `Requested`; the event loop picks
/// it up, runs the search, and returns the marker to `Idle`. A start pressed
/// while one is pending is ignored.
#[derive(Debug, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Requested,
}

/// Per-open state of the details panel for the selected card. There is no
/// cache: closing drops the fragment and the next open fetches again.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailsPanel {
    Closed,
    /// Set by input, consumed by the event loop.
    Requested,
    Loading,
    Loaded(DetailFragment),
    /// No credential configured; the panel shows a notice instead of calling.
    SavingsMode,
    /// A credential exists but the card has no detail resource, which is the
    /// case for every sample entry.
    NoLiveDetail,
    Failed(String),
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub search_state: SearchState,
    pub status_message: String,
    pub source: DataSource,
    pub places: Vec<Place>,
    pub selected_index: usize,
    pub details: DetailsPanel,
    pub show_help: bool,
    pub throbber_state: ThrobberState,
    pub actions: AppActions,
    display_limit: usize,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let display_limit = config.max_results;
        Self {
            running: true,
            screen: AppScreen::Main,
            search_state: SearchState::Idle,
            status_message: "Press s to search".to_string(),
            // The badge starts on the sample path until a live search lands
            source: DataSource::Sample,
            places: Vec::new(),
            selected_index: 0,
            details: DetailsPanel::Closed,
            show_help: false,
            throbber_state: ThrobberState::default(),
            actions: AppActions::new(config),
            display_limit,
        }
    }

    /// Advances the search spinner; called once per event-loop frame.
    pub fn update(&mut self) {
        self.throbber_state.calc_next();
    }

    /// The cards actually rendered: at most `display_limit`, input order.
    pub fn visible_places(&self) -> &[Place] {
        let shown = self.places.len().min(self.display_limit);
        &self.places[..shown]
    }

    pub fn shown_count(&self) -> usize {
        self.places.len().min(self.display_limit)
    }

    pub fn selected_place(&self) -> Option<&Place> {
        self.visible_places().get(self.selected_index)
    }

    /// Accepts a start action unless one is already pending.
    pub fn request_search(&mut self) {
        if self.search_state == SearchState::Idle {
            self.search_state = SearchState::Requested;
        }
    }

    /// Installs a fresh result list and resets the cursor and panel.
    pub fn apply_results(&mut self, source: DataSource, places: Vec<Place>) {
        self.source = source;
        self.places = places;
        self.selected_index = 0;
        self.details = DetailsPanel::Closed;
    }

    /// The clear action: results, status, and panel go away; the badge keeps
    /// whatever source produced the last list.
    pub fn clear_results(&mut self) {
        self.places.clear();
        self.status_message.clear();
        self.selected_index = 0;
        self.details = DetailsPanel::Closed;
        self.screen = AppScreen::Main;
    }

    /// Opens the details panel for the selected card. Every open causes a
    /// fresh fetch; nothing survives from the previous open.
    pub fn request_details(&mut self) {
        if self.selected_place().is_none() {
            return;
        }
        if self.details == DetailsPanel::Closed {
            self.details = DetailsPanel::Requested;
            self.screen = AppScreen::Details;
        }
    }

    /// Closing is purely local; no request is issued or cancelled.
    pub fn close_details(&mut self) {
        self.details = DetailsPanel::Closed;
        self.screen = AppScreen::Main;
    }
}

/// Status line after a completed start action.
pub fn results_status(shown: usize) -> String {
    if shown == 0 {
        "No matching places found".to_string()
    } else {
        format!("{shown} displayed (no photos, minimal cost)")
    }
}
