use std::time::Duration;

use crate::config::{AppConfig, SearchQuery};
use crate::domain::{DetailFragment, Place};
use crate::places::error::PlacesError;
use crate::places::models::{
    Circle, LatLng, LocationBias, SearchRequest, SearchResponse,
};

const BASE_URL: &str = "https://places.googleapis.com/v1";

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Response fields requested from the text search. No photo fields; photo
/// delivery is billed separately and nothing here renders images.
const SEARCH_FIELD_MASK: &str = "places.name,places.displayName,places.rating,\
places.userRatingCount,places.priceLevel,places.formattedAddress,places.googleMapsUri";

/// Response fields requested from the details endpoint.
const DETAILS_FIELD_MASK: &str =
    "displayName,internationalPhoneNumber,formattedAddress,currentOpeningHours,websiteUri";

/// Results requested per search. More than the display limit so short lists
/// are the renderer's choice, not the provider's.
const MAX_RESULT_COUNT: u32 = 12;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper over the two outbound endpoints. Holds the credential and
/// the fixed request parameters; one instance for the process lifetime.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    language_code: String,
    region_code: String,
}

impl PlacesClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url: BASE_URL.to_string(),
            api_key: config.api_key.clone(),
            language_code: config.language_code.clone(),
            region_code: config.region_code.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Runs one text search. Exactly one outbound call, or none at all when
    /// no credential is configured.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Place>, PlacesError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(PlacesError::NoCredential);
        };

        let body = self.search_request(query);
        let response = self
            .http
            .post(format!("{}/places:searchText", self.base_url))
            .header(API_KEY_HEADER, key)
            .header(FIELD_MASK_HEADER, SEARCH_FIELD_MASK)
            .json(&body)
            .send()
            .await
            .map_err(|err| PlacesError::RequestFailed(err.to_string()))?;

        if !response.status().is_success() {
            return Err(PlacesError::RequestFailed(format!(
                "status {}",
                response.status()
            )));
        }

        let data: SearchResponse = response
            .json()
            .await
            .map_err(|err| PlacesError::RequestFailed(err.to_string()))?;

        Ok(data.places.into_iter().map(Place::from).collect())
    }

    /// Fetches the detail fragment for one `places/{id}` resource.
    pub async fn details(&self, resource: &str) -> Result<DetailFragment, PlacesError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(PlacesError::NoCredential);
        };

        let url = format!(
            "{}/{resource}?fields={DETAILS_FIELD_MASK}",
            self.base_url
        );
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, key)
            .send()
            .await
            .map_err(|err| PlacesError::DetailsUnavailable(err.to_string()))?;

        if !response.status().is_success() {
            return Err(PlacesError::DetailsUnavailable(format!(
                "status {}",
                response.status()
            )));
        }

        response
            .json::<crate::places::models::DetailsResponse>()
            .await
            .map(DetailFragment::from)
            .map_err(|err| PlacesError::DetailsUnavailable(err.to_string()))
    }

    fn search_request(&self, query: &SearchQuery) -> SearchRequest {
        SearchRequest {
            text_query: query.keyword.clone(),
            location_bias: Some(LocationBias {
                circle: Circle {
                    center: LatLng {
                        latitude: query.latitude,
                        longitude: query.longitude,
                    },
                    radius: query.radius_m,
                },
            }),
            max_result_count: MAX_RESULT_COUNT,
            language_code: self.language_code.clone(),
            region_code: self.region_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config(api_key: Option<&str>) -> AppConfig {
        AppConfig {
            api_key: api_key.map(ToString::to_string),
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
        }
    }

    #[tokio::test]
    async fn search_without_credential_never_touches_the_network() {
        // Unroutable base URL: if the client tried to connect this would
        // come back as RequestFailed instead of NoCredential.
        let client = PlacesClient::new(&test_config(None)).with_base_url("http://127.0.0.1:9");

        let err = client
            .search(&test_config(None).query)
            .await
            .expect_err("must fail");
        assert!(matches!(err, PlacesError::NoCredential));
    }

    #[tokio::test]
    async fn details_without_credential_never_touches_the_network() {
        let client = PlacesClient::new(&test_config(None)).with_base_url("http://127.0.0.1:9");

        let err = client.details("places/abc").await.expect_err("must fail");
        assert!(matches!(err, PlacesError::NoCredential));
    }

    #[tokio::test]
    async fn search_with_failing_transport_reports_request_failed() {
        let config = test_config(Some("test-key"));
        let client = PlacesClient::new(&config).with_base_url("http://127.0.0.1:9");

        let err = client.search(&config.query).await.expect_err("must fail");
        assert!(matches!(err, PlacesError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn details_with_failing_transport_reports_details_unavailable() {
        let config = test_config(Some("test-key"));
        let client = PlacesClient::new(&config).with_base_url("http://127.0.0.1:9");

        let err = client.details("places/abc").await.expect_err("must fail");
        assert!(matches!(err, PlacesError::DetailsUnavailable(_)));
    }

    #[test]
    fn field_masks_request_no_photo_fields() {
        assert!(!SEARCH_FIELD_MASK.contains("photo"));
        assert!(!DETAILS_FIELD_MASK.contains("photo"));
    }

    #[test]
    fn search_request_carries_the_configured_query() {
        let config = test_config(Some("test-key"));
        let client = PlacesClient::new(&config);
        let request = client.search_request(&config.query);

        assert_eq!(request.text_query, "dinner");
        assert_eq!(request.max_result_count, MAX_RESULT_COUNT);
        assert_eq!(request.language_code, "ja");
        assert_eq!(request.region_code, "JP");
        let bias = request.location_bias.expect("bias present");
        assert!((bias.circle.radius - 1500.0).abs() < f64::EPSILON);
    }
}
