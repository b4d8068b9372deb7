#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

use crate::domain::model::Coordinate;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};

pub use file::{EndpointsConfig, FileConfig, KeysConfig};

/// Fully resolved runtime settings: coordinate, API keys, and any service
/// endpoint overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub point: Coordinate,
    pub tomtom_key: String,
    pub openweather_key: String,
    pub newsapi_key: String,
    pub endpoints: EndpointsConfig,
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_range("lat", self.point.lat, -90.0, 90.0)?;
        validate_range("lng", self.point.lng, -180.0, 180.0)?;
        validate_non_empty_string("tomtom_key", &self.tomtom_key)?;
        validate_non_empty_string("openweather_key", &self.openweather_key)?;
        validate_non_empty_string("newsapi_key", &self.newsapi_key)?;
        Ok(())
    }
}
