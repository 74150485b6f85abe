use thiserror::Error;

/// Failure taxonomy for the two API paths and the sample fallback.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// No API key configured. Raised before any network I/O happens.
    #[error("no API key configured")]
    NoCredential,

    /// Text search reached the network but came back unusable.
    #[error("search request failed: {0}")]
    RequestFailed(String),

    /// The bundled sample document could not be read or parsed.
    #[error("sample data unavailable: {0}")]
    SampleUnavailable(String),

    /// A per-place details request failed. Confined to one card's panel.
    #[error("details unavailable: {0}")]
    DetailsUnavailable(String),
}
