use serde::{Deserialize, Serialize};

/// A geographic point. Latitude in [-90, 90], longitude in [-180, 180];
/// ranges are checked at the config boundary, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Current vs. free-flow speed at a point, as reported by the traffic service.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TrafficFlow {
    pub current_speed: f64,
    pub free_flow_speed: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherAlert {
    pub severity: Option<String>,
}

/// Current conditions at a point. `precipitation_mm` is 0 when the upstream
/// reports no measured rain.
#[derive(Debug, Clone, Default)]
pub struct WeatherObservation {
    pub condition: Option<String>,
    pub description: String,
    pub precipitation_mm: f64,
    pub humidity: f64,
    pub temp_c: f64,
    pub alerts: Vec<WeatherAlert>,
}

/// City/state pair from reverse geocoding. Both fields are best-effort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Locality {
    pub city: Option<String>,
    pub state: Option<String>,
}

/// One article as returned by the news search.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// Title and link kept for display, at most two per result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
}

/// Per-signal contributions before weighting. Traffic, rain and temp are in
/// [0, 10]; news in [0, 3]; peak is 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub traffic: f64,
    pub rain: f64,
    pub temp: f64,
    pub peak: u8,
    pub news: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChaosLevel {
    Low,
    Moderate,
    High,
    Extreme,
    /// Computation failed; score and breakdown are zeroed.
    Unknown,
}

impl ChaosLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChaosLevel::Low => "low",
            ChaosLevel::Moderate => "moderate",
            ChaosLevel::High => "high",
            ChaosLevel::Extreme => "extreme",
            ChaosLevel::Unknown => "unknown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChaosLevel::Low => "😊 Low chaos. Enjoy the peace while it lasts!",
            ChaosLevel::Moderate => "😬 Moderate chaos. Usual city hustle.",
            ChaosLevel::High => "😰 High chaos. Expect heavy traffic and tough conditions.",
            ChaosLevel::Extreme => "🚨 Extreme chaos! Stay safe and avoid going out if possible.",
            ChaosLevel::Unknown => "Could not calculate chaos score. Please try again.",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ChaosLevel::Low => "😊",
            ChaosLevel::Moderate => "😬",
            ChaosLevel::High => "😰",
            ChaosLevel::Extreme => "🥵",
            ChaosLevel::Unknown => "❓",
        }
    }
}

/// Final result of one chaos-score computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaosResult {
    pub score: f64,
    pub level: ChaosLevel,
    pub description: String,
    pub emoji: String,
    pub breakdown: ScoreBreakdown,
    pub news_articles: Vec<NewsArticle>,
    /// Resolved place name, when reverse geocoding succeeded.
    pub locality: Locality,
}

impl ChaosResult {
    /// The defined fallback when the computation itself fails: zero score,
    /// zero breakdown, explicit error description.
    pub fn unavailable(reason: &str) -> Self {
        Self {
            score: 0.0,
            level: ChaosLevel::Unknown,
            description: format!("{} ({})", ChaosLevel::Unknown.description(), reason),
            emoji: ChaosLevel::Unknown.emoji().to_string(),
            breakdown: ScoreBreakdown::default(),
            news_articles: Vec::new(),
            locality: Locality::default(),
        }
    }
}
