use crate::core::{news, score};
use crate::domain::model::{ChaosResult, Coordinate, Locality, NewsArticle, ScoreBreakdown};
use crate::domain::ports::{GeocodeProvider, NewsProvider, TrafficProvider, WeatherProvider};
use crate::utils::error::Result;

/// Orchestrates one chaos-score computation: fans out to the three signal
/// fetchers concurrently, folds their sub-scores into the weighted total and
/// attaches the classification. Each signal degrades to 0 on failure; only
/// an unexpected internal error yields the "unavailable" result.
pub struct ChaosEngine<T, W, G, N> {
    traffic: T,
    weather: W,
    geocode: G,
    news: N,
}

impl<T, W, G, N> ChaosEngine<T, W, G, N>
where
    T: TrafficProvider,
    W: WeatherProvider,
    G: GeocodeProvider,
    N: NewsProvider,
{
    pub fn new(traffic: T, weather: W, geocode: G, news: N) -> Self {
        Self {
            traffic,
            weather,
            geocode,
            news,
        }
    }

    /// Computes the chaos score for a point at the given local hour. Never
    /// fails: a computation that cannot complete returns the defined
    /// zero/"unknown" result instead.
    pub async fn compute(&self, point: Coordinate, hour: u32) -> ChaosResult {
        match self.compute_inner(point, hour).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("❌ Chaos score computation failed: {}", e);
                ChaosResult::unavailable(&e.to_string())
            }
        }
    }

    async fn compute_inner(&self, point: Coordinate, hour: u32) -> Result<ChaosResult> {
        tracing::info!("Computing chaos score for {:.4}, {:.4}", point.lat, point.lng);

        // The three signals are independent; news resolves its locality
        // inside its own future, so geocoding never blocks the other two.
        let (traffic, (rain, temp), (news_score, articles, locality)) = tokio::join!(
            self.traffic_signal(point),
            self.weather_signal(point),
            self.news_signal(point),
        );

        let breakdown = ScoreBreakdown {
            traffic,
            rain,
            temp,
            peak: score::peak_bonus(hour),
            news: news_score,
        };
        let total = score::aggregate(&breakdown);
        let level = score::classify(total);

        tracing::info!(
            "Score {}/10 ({}): traffic {} rain {} temp {} peak {} news {}",
            total,
            level.as_str(),
            breakdown.traffic,
            breakdown.rain,
            breakdown.temp,
            breakdown.peak,
            breakdown.news
        );

        Ok(ChaosResult {
            score: total,
            level,
            description: level.description().to_string(),
            emoji: level.emoji().to_string(),
            breakdown,
            news_articles: articles,
            locality,
        })
    }

    async fn traffic_signal(&self, point: Coordinate) -> f64 {
        match self.traffic.flow_at(point).await {
            Ok(flow) => {
                let sub_score = score::traffic_sub_score(flow.as_ref());
                tracing::debug!("🚗 Traffic sub-score: {}", sub_score);
                sub_score
            }
            Err(e) => {
                tracing::warn!("🚗 Traffic signal unavailable, scoring 0: {}", e);
                0.0
            }
        }
    }

    async fn weather_signal(&self, point: Coordinate) -> (f64, f64) {
        match self.weather.conditions_at(point).await {
            Ok(obs) => {
                let rain = score::rain_sub_score(&obs);
                let temp = score::temp_sub_score(obs.temp_c);
                tracing::debug!("🌧️ Rain sub-score: {}, temp sub-score: {}", rain, temp);
                (rain, temp)
            }
            Err(e) => {
                tracing::warn!("🌧️ Weather signal unavailable, scoring 0: {}", e);
                (0.0, 0.0)
            }
        }
    }

    async fn news_signal(&self, point: Coordinate) -> (f64, Vec<NewsArticle>, Locality) {
        // Geocoding is best-effort; the news query falls back to the
        // nationwide default when it resolves nothing.
        let locality = match self.geocode.reverse(point).await {
            Ok(locality) => locality,
            Err(e) => {
                tracing::warn!("📰 Reverse geocoding failed, using default query: {}", e);
                Locality::default()
            }
        };

        let query = news::build_query(&locality);
        tracing::debug!("📰 News query: {}", query);

        match self.news.search(&query).await {
            Ok(items) => {
                let (sub_score, articles) = news::score_articles(&items);
                tracing::debug!(
                    "📰 News sub-score: {} ({} articles kept)",
                    sub_score,
                    articles.len()
                );
                (sub_score, articles, locality)
            }
            Err(e) => {
                tracing::warn!("📰 News signal unavailable, scoring 0: {}", e);
                (0.0, Vec::new(), locality)
            }
        }
    }
}
