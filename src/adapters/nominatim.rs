use crate::domain::model::{Coordinate, Locality};
use crate::domain::ports::GeocodeProvider;
use crate::utils::error::{ChaosError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Nominatim's usage policy requires an identifying User-Agent.
const USER_AGENT: &str = concat!("chaos-score/", env!("CARGO_PKG_VERSION"));

/// OpenStreetMap Nominatim reverse-geocoding client.
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

impl Default for NominatimGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Option<AddressEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct AddressEntry {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
}

#[async_trait]
impl GeocodeProvider for NominatimGeocoder {
    async fn reverse(&self, point: Coordinate) -> Result<Locality> {
        let endpoint = format!("{}/reverse", self.base_url);

        tracing::debug!("📍 Reverse geocoding: {}", endpoint);
        let response = self
            .client
            .get(&endpoint)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("lat", point.lat.to_string()),
                ("lon", point.lng.to_string()),
                ("format", "json".to_string()),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ChaosError::SignalError {
                signal: "geocode".to_string(),
                message: format!("request failed with status {}", response.status()),
            });
        }

        let body: ReverseResponse = response.json().await?;
        let address = body.address.unwrap_or_default();

        // Settlements come back under different keys depending on size.
        let city = address.city.or(address.town).or(address.village);
        Ok(Locality {
            city,
            state: address.state,
        })
    }
}
