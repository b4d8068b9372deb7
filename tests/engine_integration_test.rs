use chaos_score::{
    ChaosEngine, ChaosLevel, Coordinate, NewsApi, NominatimGeocoder, OpenWeather, TomTomTraffic,
};
use httpmock::prelude::*;

const POINT: Coordinate = Coordinate {
    lat: 28.6,
    lng: 77.2,
};

fn engine_for(
    server: &MockServer,
) -> ChaosEngine<TomTomTraffic, OpenWeather, NominatimGeocoder, NewsApi> {
    ChaosEngine::new(
        TomTomTraffic::with_base_url("traffic-key".to_string(), server.base_url()),
        OpenWeather::with_base_url("weather-key".to_string(), server.base_url()),
        NominatimGeocoder::with_base_url(server.base_url()),
        NewsApi::with_base_url("news-key".to_string(), server.base_url()),
    )
}

fn mock_traffic(server: &MockServer, current: f64, free_flow: f64) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/traffic/services/4/flowSegmentData/relative0/10/json")
            .query_param("key", "traffic-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "flowSegmentData": {
                    "currentSpeed": current,
                    "freeFlowSpeed": free_flow,
                    "confidence": 0.95
                }
            }));
    })
}

fn mock_weather(server: &MockServer, body: serde_json::Value) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/data/2.5/weather")
            .query_param("units", "metric");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(body);
    })
}

fn mock_geocode<'a>(server: &'a MockServer, city: &str, state: &str) -> httpmock::Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path("/reverse").query_param("format", "json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "address": { "city": city, "state": state }
            }));
    })
}

fn mock_news<'a>(server: &'a MockServer, query: &str, articles: serde_json::Value) -> httpmock::Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", query)
            .query_param("language", "en")
            .query_param("sortBy", "publishedAt")
            .query_param("pageSize", "10");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "status": "ok", "articles": articles }));
    })
}

fn rainy_weather() -> serde_json::Value {
    serde_json::json!({
        "weather": [{ "main": "Rain", "description": "light rain" }],
        "main": { "temp": 20.0, "humidity": 70 },
        "rain": { "1h": 2.0 }
    })
}

fn jam_article() -> serde_json::Value {
    serde_json::json!([{
        "title": "Traffic jam after waterlogging",
        "description": "Commuters stuck for hours",
        "url": "https://news.example/jam"
    }])
}

#[tokio::test]
async fn end_to_end_moderate_score() {
    let server = MockServer::start();
    let traffic = mock_traffic(&server, 24.0, 60.0); // ratio 0.6 -> 6
    let weather = mock_weather(&server, rainy_weather()); // rain 4, temp 2
    let geocode = mock_geocode(&server, "Pune", "Maharashtra");
    let news = mock_news(&server, "Pune Maharashtra local news", jam_article()); // news 1

    let engine = engine_for(&server);
    let result = engine.compute(POINT, 14).await; // off-peak

    traffic.assert();
    weather.assert();
    geocode.assert();
    news.assert();

    // 6*0.5 + 4*0.25 + 2*0.25 + 1 = 5.5
    assert_eq!(result.score, 5.5);
    assert_eq!(result.level, ChaosLevel::Moderate);
    assert_eq!(result.breakdown.traffic, 6.0);
    assert_eq!(result.breakdown.rain, 4.0);
    assert_eq!(result.breakdown.temp, 2.0);
    assert_eq!(result.breakdown.peak, 0);
    assert_eq!(result.breakdown.news, 1.0);
    assert_eq!(result.news_articles.len(), 1);
    assert_eq!(result.locality.city.as_deref(), Some("Pune"));
}

#[tokio::test]
async fn peak_hour_adds_one() {
    let server = MockServer::start();
    mock_traffic(&server, 24.0, 60.0);
    mock_weather(&server, rainy_weather());
    mock_geocode(&server, "Pune", "Maharashtra");
    mock_news(&server, "Pune Maharashtra local news", jam_article());

    let engine = engine_for(&server);
    let result = engine.compute(POINT, 9).await;

    assert_eq!(result.breakdown.peak, 1);
    assert_eq!(result.score, 6.5);
}

#[tokio::test]
async fn traffic_failure_leaves_other_signals_untouched() {
    let server = MockServer::start();
    let traffic = server.mock(|when, then| {
        when.method(GET)
            .path("/traffic/services/4/flowSegmentData/relative0/10/json");
        then.status(500);
    });
    mock_weather(&server, rainy_weather());
    mock_geocode(&server, "Pune", "Maharashtra");
    mock_news(&server, "Pune Maharashtra local news", jam_article());

    let engine = engine_for(&server);
    let result = engine.compute(POINT, 14).await;

    traffic.assert();
    assert_eq!(result.breakdown.traffic, 0.0);
    assert_eq!(result.breakdown.rain, 4.0);
    assert_eq!(result.breakdown.temp, 2.0);
    assert_eq!(result.breakdown.news, 1.0);
    // 0 + 1 + 0.5 + 1 = 2.5
    assert_eq!(result.score, 2.5);
    assert_eq!(result.level, ChaosLevel::Low);
}

#[tokio::test]
async fn missing_flow_segment_scores_zero() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/traffic/services/4/flowSegmentData/relative0/10/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({}));
    });
    mock_weather(&server, rainy_weather());
    mock_geocode(&server, "Pune", "Maharashtra");
    mock_news(&server, "Pune Maharashtra local news", jam_article());

    let engine = engine_for(&server);
    let result = engine.compute(POINT, 14).await;

    assert_eq!(result.breakdown.traffic, 0.0);
}

#[tokio::test]
async fn all_signals_down_yields_zero_breakdown() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(500);
    });

    let engine = engine_for(&server);
    let result = engine.compute(POINT, 14).await;

    assert_eq!(result.score, 0.0);
    assert_eq!(result.level, ChaosLevel::Low);
    assert_eq!(result.breakdown.traffic, 0.0);
    assert_eq!(result.breakdown.rain, 0.0);
    assert_eq!(result.breakdown.temp, 0.0);
    assert_eq!(result.breakdown.news, 0.0);
    assert!(result.news_articles.is_empty());
}

#[tokio::test]
async fn recomputation_is_idempotent() {
    let server = MockServer::start();
    mock_traffic(&server, 24.0, 60.0);
    mock_weather(&server, rainy_weather());
    mock_geocode(&server, "Pune", "Maharashtra");
    mock_news(&server, "Pune Maharashtra local news", jam_article());

    let engine = engine_for(&server);
    let first = engine.compute(POINT, 14).await;
    let second = engine.compute(POINT, 14).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn severe_alert_forces_rain_to_ten() {
    let server = MockServer::start();
    mock_traffic(&server, 60.0, 60.0);
    mock_weather(
        &server,
        serde_json::json!({
            "weather": [{ "main": "Clouds", "description": "overcast clouds" }],
            "main": { "temp": 20.0, "humidity": 60 },
            "alerts": [{ "severity": "Severe", "event": "Cyclone watch" }]
        }),
    );
    mock_geocode(&server, "Pune", "Maharashtra");
    mock_news(&server, "Pune Maharashtra local news", serde_json::json!([]));

    let engine = engine_for(&server);
    let result = engine.compute(POINT, 14).await;

    assert_eq!(result.breakdown.rain, 10.0);
}
