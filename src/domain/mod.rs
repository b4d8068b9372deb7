// Domain layer: core models and ports (interfaces). No external dependencies
// beyond std/serde and async-trait.

pub mod model;
pub mod ports;

pub use model::{
    ChaosLevel, ChaosResult, Coordinate, Locality, NewsArticle, NewsItem, ScoreBreakdown,
    TrafficFlow, WeatherAlert, WeatherObservation,
};
pub use ports::{GeocodeProvider, NewsProvider, TrafficProvider, WeatherProvider};
