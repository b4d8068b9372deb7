use chaos_score::utils::logger;
use chaos_score::{
    ChaosEngine, CliConfig, NewsApi, NominatimGeocoder, OpenWeather, TomTomTraffic,
};
use chrono::Timelike;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting chaos-score CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let traffic = match settings.endpoints.traffic.clone() {
        Some(url) => TomTomTraffic::with_base_url(settings.tomtom_key.clone(), url),
        None => TomTomTraffic::new(settings.tomtom_key.clone()),
    };
    let weather = match settings.endpoints.weather.clone() {
        Some(url) => OpenWeather::with_base_url(settings.openweather_key.clone(), url),
        None => OpenWeather::new(settings.openweather_key.clone()),
    };
    let geocode = match settings.endpoints.geocode.clone() {
        Some(url) => NominatimGeocoder::with_base_url(url),
        None => NominatimGeocoder::new(),
    };
    let news = match settings.endpoints.news.clone() {
        Some(url) => NewsApi::with_base_url(settings.newsapi_key.clone(), url),
        None => NewsApi::new(settings.newsapi_key.clone()),
    };

    let engine = ChaosEngine::new(traffic, weather, geocode, news);
    let hour = chrono::Local::now().hour();
    let result = engine.compute(settings.point, hour).await;

    println!(
        "📍 Location: {:.4}, {:.4}",
        settings.point.lat, settings.point.lng
    );
    if let Some(city) = &result.locality.city {
        match &result.locality.state {
            Some(state) => println!("🏙️ {}, {}", city, state),
            None => println!("🏙️ {}", city),
        }
    }
    println!("{} Chaos Score: {}/10", result.emoji, result.score);
    println!("{}", result.description);
    println!();
    println!("Breakdown:");
    println!("  🚗 Traffic: {}/10", result.breakdown.traffic);
    println!("  🌧️ Rain: {}/10", result.breakdown.rain);
    println!("  🔥 Temp: {}/10", result.breakdown.temp);
    println!("  ⏰ Peak Hour Bonus: {}", result.breakdown.peak);
    println!("  📰 News: {}/3", result.breakdown.news);

    if result.news_articles.is_empty() {
        println!();
        println!("No major disruption in the news right now.");
    } else {
        println!();
        println!("News disruption found:");
        for article in &result.news_articles {
            println!("  • {} ({})", article.title, article.url);
        }
    }

    Ok(())
}
