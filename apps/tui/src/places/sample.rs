use std::path::Path;

use serde::Deserialize;

use crate::domain::{Place, PriceLevel};
use crate::places::error::PlacesError;

/// Sample documents come in two shapes: `{ "places": [...] }` or a bare
/// array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SampleDocument {
    Wrapped { places: Vec<SamplePlace> },
    Bare(Vec<SamplePlace>),
}

/// One sample entry. Aliases accept the field names the original dataset
/// carried over from the legacy places schema.
#[derive(Debug, Deserialize)]
struct SamplePlace {
    name: Option<String>,
    rating: Option<f64>,
    #[serde(default, alias = "user_ratings_total")]
    review_count: Option<u32>,
    #[serde(default, alias = "vicinity")]
    address: Option<String>,
    price_level: Option<u8>,
    #[serde(default, alias = "summary", alias = "editorial_summary")]
    description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default, alias = "url")]
    maps_url: Option<String>,
}

impl From<SamplePlace> for Place {
    fn from(sample: SamplePlace) -> Self {
        Self {
            name: sample.name.unwrap_or_else(|| "(unnamed)".to_string()),
            rating: sample.rating,
            review_count: sample.review_count,
            address: sample.address,
            price_level: sample
                .price_level
                .and_then(|level| PriceLevel::from_index(level as usize)),
            description: sample.description,
            tags: sample.tags,
            maps_url: sample.maps_url,
            // No detail resource: sample entries can never go live
            detail_resource: None,
        }
    }
}

/// Loads the bundled fallback document from disk.
pub async fn load_sample(path: &Path) -> Result<Vec<Place>, PlacesError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| PlacesError::SampleUnavailable(format!("{}: {err}", path.display())))?;

    parse_sample(&raw)
}

/// Parses a sample document into the place list.
pub fn parse_sample(raw: &str) -> Result<Vec<Place>, PlacesError> {
    let document: SampleDocument = serde_json::from_str(raw)
        .map_err(|err| PlacesError::SampleUnavailable(err.to_string()))?;

    let entries = match document {
        SampleDocument::Wrapped { places } => places,
        SampleDocument::Bare(places) => places,
    };

    Ok(entries.into_iter().map(Place::from).collect())
}
