use crate::domain::model::{Coordinate, Locality, NewsItem, TrafficFlow, WeatherObservation};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Traffic flow at a point. `None` when the service has no segment data for
/// the location.
#[async_trait]
pub trait TrafficProvider: Send + Sync {
    async fn flow_at(&self, point: Coordinate) -> Result<Option<TrafficFlow>>;
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn conditions_at(&self, point: Coordinate) -> Result<WeatherObservation>;
}

#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    async fn reverse(&self, point: Coordinate) -> Result<Locality>;
}

/// Recent-article search, at most 10 items per query.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<NewsItem>>;
}
