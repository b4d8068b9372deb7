pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::{FileConfig, Settings};

pub use adapters::{NewsApi, NominatimGeocoder, OpenWeather, TomTomTraffic};
pub use crate::core::ChaosEngine;
pub use domain::{ChaosLevel, ChaosResult, Coordinate, ScoreBreakdown};
pub use utils::error::{ChaosError, Result};
