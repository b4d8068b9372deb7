use crate::config::file::FileConfig;
use crate::config::Settings;
use crate::domain::model::Coordinate;
use crate::utils::error::{ChaosError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments. Keys can come from the CLI, the TOML config file,
/// or the environment (TOMTOM_KEY / OPENWEATHER_KEY / NEWSAPI_KEY), in that
/// order of precedence.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "chaos-score",
    about = "Compute a composite chaos index for a geographic point"
)]
pub struct CliConfig {
    /// Latitude of the point to score
    #[arg(long, default_value_t = 28.6139, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude of the point to score
    #[arg(long, default_value_t = 77.2090, allow_hyphen_values = true)]
    pub lng: f64,

    /// Path to a TOML config file with keys and endpoint overrides
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// TomTom traffic API key
    #[arg(long)]
    pub tomtom_key: Option<String>,

    /// OpenWeather API key
    #[arg(long)]
    pub openweather_key: Option<String>,

    /// NewsAPI key
    #[arg(long)]
    pub newsapi_key: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges CLI arguments, the config file (if any) and environment
    /// variables into validated settings.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };

        let settings = Settings {
            point: Coordinate::new(self.lat, self.lng),
            tomtom_key: resolve_key("tomtom_key", &self.tomtom_key, &file.keys.tomtom, "TOMTOM_KEY")?,
            openweather_key: resolve_key(
                "openweather_key",
                &self.openweather_key,
                &file.keys.openweather,
                "OPENWEATHER_KEY",
            )?,
            newsapi_key: resolve_key(
                "newsapi_key",
                &self.newsapi_key,
                &file.keys.newsapi,
                "NEWSAPI_KEY",
            )?,
            endpoints: file.endpoints,
        };
        settings.validate()?;
        Ok(settings)
    }
}

fn resolve_key(
    field: &str,
    cli_value: &Option<String>,
    file_value: &Option<String>,
    env_var: &str,
) -> Result<String> {
    cli_value
        .clone()
        .or_else(|| file_value.clone())
        .or_else(|| std::env::var(env_var).ok())
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ChaosError::MissingConfigError {
            field: field.to_string(),
        })
}
