use serde::{Deserialize, Serialize};

use crate::domain::{DetailFragment, Place, PriceLevel};

/// Body of the text-search POST.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub text_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_bias: Option<LocationBias>,
    pub max_result_count: u32,
    pub language_code: String,
    pub region_code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationBias {
    pub circle: Circle,
}

#[derive(Debug, Clone, Serialize)]
pub struct Circle {
    pub center: LatLng,
    pub radius: f64,
}

/// The API wants `latitude`/`longitude` here, not `lat`/`lng`.
#[derive(Debug, Clone, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub places: Vec<ApiPlace>,
}

/// One entry of the `places` array, restricted to the requested field mask.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPlace {
    /// Resource id in `places/{id}` form, kept for the details call.
    pub name: Option<String>,
    pub display_name: Option<LocalizedText>,
    pub rating: Option<f64>,
    pub user_rating_count: Option<u32>,
    pub price_level: Option<String>,
    pub formatted_address: Option<String>,
    pub google_maps_uri: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LocalizedText {
    pub text: String,
}

impl From<ApiPlace> for Place {
    fn from(api: ApiPlace) -> Self {
        Self {
            name: api
                .display_name
                .map_or_else(|| "(unnamed)".to_string(), |name| name.text),
            rating: api.rating,
            review_count: api.user_rating_count,
            address: api.formatted_address,
            price_level: api.price_level.as_deref().and_then(PriceLevel::parse),
            // The live field mask carries neither a summary nor tags
            description: None,
            tags: Vec::new(),
            maps_url: api.google_maps_uri,
            detail_resource: api.name,
        }
    }
}

/// Response of the per-place details GET, restricted to its field allowlist.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsResponse {
    pub display_name: Option<LocalizedText>,
    pub international_phone_number: Option<String>,
    pub formatted_address: Option<String>,
    pub current_opening_hours: Option<OpeningHours>,
    pub website_uri: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    #[serde(default)]
    pub weekday_descriptions: Vec<String>,
}

impl From<DetailsResponse> for DetailFragment {
    fn from(details: DetailsResponse) -> Self {
        Self {
            display_name: details
                .display_name
                .map(|name| name.text)
                .unwrap_or_default(),
            formatted_address: details.formatted_address,
            phone: details.international_phone_number,
            opening_hours: details
                .current_opening_hours
                .map(|hours| hours.weekday_descriptions)
                .unwrap_or_default(),
            website: details.website_uri,
        }
    }
}
