use crate::domain::model::{Coordinate, WeatherAlert, WeatherObservation};
use crate::domain::ports::WeatherProvider;
use crate::utils::error::{ChaosError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// OpenWeather current-conditions client (metric units).
pub struct OpenWeather {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeather {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    #[serde(default)]
    weather: Vec<ConditionEntry>,
    main: MainEntry,
    rain: Option<RainEntry>,
    alerts: Option<Vec<WeatherAlert>>,
}

#[derive(Debug, Deserialize)]
struct ConditionEntry {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainEntry {
    temp: f64,
    #[serde(default)]
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct RainEntry {
    #[serde(rename = "1h")]
    last_hour: Option<f64>,
    #[serde(rename = "3h")]
    last_three_hours: Option<f64>,
}

#[async_trait]
impl WeatherProvider for OpenWeather {
    async fn conditions_at(&self, point: Coordinate) -> Result<WeatherObservation> {
        let endpoint = format!("{}/data/2.5/weather", self.base_url);

        tracing::debug!("🌧️ Requesting weather: {}", endpoint);
        let response = self
            .client
            .get(&endpoint)
            .query(&[
                ("lat", point.lat.to_string()),
                ("lon", point.lng.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ChaosError::SignalError {
                signal: "weather".to_string(),
                message: format!("request failed with status {}", response.status()),
            });
        }

        let body: WeatherResponse = response.json().await?;
        let precipitation_mm = body
            .rain
            .and_then(|rain| rain.last_hour.or(rain.last_three_hours))
            .unwrap_or(0.0);

        let (condition, description) = match body.weather.into_iter().next() {
            Some(entry) => (Some(entry.main), entry.description),
            None => (None, String::new()),
        };

        Ok(WeatherObservation {
            condition,
            description,
            precipitation_mm,
            humidity: body.main.humidity,
            temp_c: body.main.temp,
            alerts: body.alerts.unwrap_or_default(),
        })
    }
}
