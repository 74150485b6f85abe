use crate::config::AppConfig;
use crate::domain::{DataSource, DetailFragment, Place};
use crate::places::{load_sample, PlacesClient, PlacesError};

/// What one completed start action produced.
#[derive(Debug)]
pub struct SearchOutcome {
    pub source: DataSource,
    pub places: Vec<Place>,
    /// Why the live path was skipped, when the sample served instead.
    pub live_error: Option<String>,
}

/// Holds the configuration and the API client, and runs the fallback chain.
/// The one place that may reach the network.
#[derive(Debug)]
pub struct AppActions {
    config: AppConfig,
    client: PlacesClient,
}

impl AppActions {
    pub fn new(config: AppConfig) -> Self {
        let client = PlacesClient::new(&config);
        Self { config, client }
    }

    #[cfg(test)]
    pub(crate) fn with_client(config: AppConfig, client: PlacesClient) -> Self {
        Self { config, client }
    }

    /// No credential means detail fetches are skipped entirely.
    pub const fn savings_mode(&self) -> bool {
        !self.config.has_credential()
    }

    /// One start action: live search first, sample fallback on ANY live
    /// failure (a missing credential included). Each source is attempted at
    /// most once; only both failing propagates an error.
    pub async fn start_search(&self) -> Result<SearchOutcome, PlacesError> {
        match self.client.search(&self.config.query).await {
            Ok(places) => Ok(SearchOutcome {
                source: DataSource::Live,
                places,
                live_error: None,
            }),
            Err(live_err) => {
                let places = load_sample(&self.config.sample_path).await?;
                Ok(SearchOutcome {
                    source: DataSource::Sample,
                    places,
                    live_error: Some(live_err.to_string()),
                })
            }
        }
    }

    /// Lazy per-card detail fetch. Callers hold the savings-mode branch; this
    /// always goes to the network.
    pub async fn fetch_details(&self, resource: &str) -> Result<DetailFragment, PlacesError> {
        self.client.details(resource).await
    }
}
