use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "placescout", version, about = "Place search TUI")]
pub struct CliArgs {
    /// Run one search and print the cards instead of starting the UI
    #[arg(long)]
    pub headless: bool,

    /// Print headless results as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the API key (otherwise PLACES_API_KEY / .env)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Override the search keyword
    #[arg(long, value_name = "TEXT")]
    pub keyword: Option<String>,

    /// Override the search center latitude
    #[arg(long, value_name = "DEG")]
    pub lat: Option<f64>,

    /// Override the search center longitude
    #[arg(long, value_name = "DEG")]
    pub lng: Option<f64>,

    /// Override the search radius in meters
    #[arg(long, value_name = "METERS")]
    pub radius: Option<f64>,

    /// Override how many cards are shown
    #[arg(long = "max-results", value_name = "COUNT")]
    pub max_results: Option<usize>,

    /// Override the sample document path
    #[arg(long = "sample", value_name = "PATH")]
    pub sample: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(key) = &self.api_key {
            std::env::set_var("PLACES_API_KEY", key);
        }
        if let Some(keyword) = &self.keyword {
            std::env::set_var("PLACES_KEYWORD", keyword);
        }
        if let Some(lat) = self.lat {
            std::env::set_var("PLACES_LAT", lat.to_string());
        }
        if let Some(lng) = self.lng {
            std::env::set_var("PLACES_LNG", lng.to_string());
        }
        if let Some(radius) = self.radius {
            std::env::set_var("PLACES_RADIUS_M", radius.to_string());
        }
        if let Some(count) = self.max_results {
            std::env::set_var("MAX_RESULTS", count.to_string());
        }
        if let Some(path) = &self.sample {
            std::env::set_var("SAMPLE_PATH", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
