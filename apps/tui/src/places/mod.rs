pub mod client;
pub mod error;
pub mod models;
pub mod sample;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use sample::{load_sample, parse_sample};
