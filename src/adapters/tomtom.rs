use crate::domain::model::{Coordinate, TrafficFlow};
use crate::domain::ports::TrafficProvider;
use crate::utils::error::{ChaosError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.tomtom.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// TomTom flow-segment client: current vs. free-flow speed at a point.
pub struct TomTomTraffic {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TomTomTraffic {
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
struct FlowResponse {
    #[serde(rename = "flowSegmentData")]
    flow_segment_data: Option<FlowSegment>,
}

#[derive(Debug, Deserialize)]
struct FlowSegment {
    #[serde(rename = "currentSpeed")]
    current_speed: f64,
    #[serde(rename = "freeFlowSpeed")]
    free_flow_speed: f64,
}

#[async_trait]
impl TrafficProvider for TomTomTraffic {
    async fn flow_at(&self, point: Coordinate) -> Result<Option<TrafficFlow>> {
        let endpoint = format!(
            "{}/traffic/services/4/flowSegmentData/relative0/10/json",
            self.base_url
        );

        tracing::debug!("🚗 Requesting traffic flow: {}", endpoint);
        let response = self
            .client
            .get(&endpoint)
            .query(&[
                ("point", format!("{},{}", point.lat, point.lng)),
                ("key", self.api_key.clone()),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ChaosError::SignalError {
                signal: "traffic".to_string(),
                message: format!("request failed with status {}", response.status()),
            });
        }

        let body: FlowResponse = response.json().await?;
        Ok(body.flow_segment_data.map(|segment| TrafficFlow {
            current_speed: segment.current_speed,
            free_flow_speed: segment.free_flow_speed,
        }))
    }
}
