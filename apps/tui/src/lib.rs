// Export our modules for use in binaries and tests
pub mod config;
pub mod domain;
pub mod places;

pub use domain::{DataSource, DetailFragment, Place, PriceLevel};
