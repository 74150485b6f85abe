use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Default query: dinner search around Shinjuku station.
const DEFAULT_KEYWORD: &str = "dinner";
const DEFAULT_LATITUDE: f64 = 35.68944;
const DEFAULT_LONGITUDE: f64 = 139.70056;
const DEFAULT_RADIUS_M: f64 = 1500.0;

/// Cards shown at most, regardless of how many results come back.
const DEFAULT_MAX_RESULTS: usize = 6;

const DEFAULT_SAMPLE_PATH: &str = "data/places.sample.json";
const DEFAULT_LANGUAGE: &str = "ja";
const DEFAULT_REGION: &str = "JP";

/// The fixed text-search parameters, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub keyword: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_m: f64,
}

/// Everything the clients need, resolved from the environment. Built once and
/// handed to `PlacesClient` and `AppActions` at construction; nothing reads
/// the environment after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub query: SearchQuery,
    pub max_results: usize,
    pub sample_path: PathBuf,
    pub language_code: String,
    pub region_code: String,
}

impl AppConfig {
    /// Whether any live call can be attempted at all.
    pub const fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Initializes the application configuration from `.env` and the process
/// environment. Missing or unparseable values fall back to the defaults.
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    // An empty key counts as absent so a blank .env line stays in sample mode
    let api_key = env::var("PLACES_API_KEY")
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty());

    let query = SearchQuery {
        keyword: env::var("PLACES_KEYWORD").unwrap_or_else(|_| DEFAULT_KEYWORD.to_string()),
        latitude: env_f64("PLACES_LAT", DEFAULT_LATITUDE),
        longitude: env_f64("PLACES_LNG", DEFAULT_LONGITUDE),
        radius_m: env_f64("PLACES_RADIUS_M", DEFAULT_RADIUS_M),
    };

    let max_results = env::var("MAX_RESULTS")
        .ok()
        .and_then(|value| value.parse().ok())
        .filter(|&count: &usize| count > 0)
        .unwrap_or(DEFAULT_MAX_RESULTS);

    let sample_path =
        env::var("SAMPLE_PATH").map_or_else(|_| PathBuf::from(DEFAULT_SAMPLE_PATH), PathBuf::from);

    Ok(AppConfig {
        api_key,
        query,
        max_results,
        sample_path,
        language_code: env::var("PLACES_LANG").unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string()),
        region_code: env::var("PLACES_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string()),
    })
}

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var driven paths are covered indirectly; mutating the process
    // environment in parallel tests races, so only the defaults are pinned.
    #[test]
    fn defaults_match_the_shinjuku_dinner_query() {
        assert_eq!(DEFAULT_KEYWORD, "dinner");
        assert!((DEFAULT_LATITUDE - 35.68944).abs() < f64::EPSILON);
        assert!((DEFAULT_LONGITUDE - 139.70056).abs() < f64::EPSILON);
        assert!((DEFAULT_RADIUS_M - 1500.0).abs() < f64::EPSILON);
        assert_eq!(DEFAULT_MAX_RESULTS, 6);
    }
}
