use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML config: API keys plus service endpoint overrides.
///
/// ```toml
/// [keys]
/// tomtom = "..."
/// openweather = "..."
/// newsapi = "..."
///
/// [endpoints]
/// traffic = "https://api.tomtom.com"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub keys: KeysConfig,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeysConfig {
    pub tomtom: Option<String>,
    pub openweather: Option<String>,
    pub newsapi: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointsConfig {
    pub traffic: Option<String>,
    pub weather: Option<String>,
    pub geocode: Option<String>,
    pub news: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        let overrides = [
            ("endpoints.traffic", &self.endpoints.traffic),
            ("endpoints.weather", &self.endpoints.weather),
            ("endpoints.geocode", &self.endpoints.geocode),
            ("endpoints.news", &self.endpoints.news),
        ];
        for (field, value) in overrides {
            if let Some(url) = value {
                validate_url(field, url)?;
            }
        }
        Ok(())
    }
}
