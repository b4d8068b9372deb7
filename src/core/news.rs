use crate::domain::model::{Locality, NewsArticle, NewsItem};

/// Query used when reverse geocoding resolves nothing usable.
pub const DEFAULT_NEWS_QUERY: &str = "India local news";

/// Articles mentioning any of these words count towards the news sub-score.
const DISRUPTION_KEYWORDS: [&str; 20] = [
    "accident", "flood", "protest", "strike", "jam", "chaos", "disaster", "alert", "rain",
    "storm", "violence", "blockade", "shutdown", "curfew", "fire", "collapse", "crash", "riot",
    "emergency", "warning",
];

/// Maximum news sub-score; more matches than this do not raise it further.
pub const NEWS_SCORE_CAP: usize = 3;

/// Number of matching articles kept for display.
pub const DISPLAY_ARTICLE_LIMIT: usize = 2;

/// Builds the search query from a resolved locality. A city name that
/// already contains the state (e.g. "Delhi" in "Delhi") keeps the query
/// city-only.
pub fn build_query(locality: &Locality) -> String {
    let city = locality.city.as_deref().unwrap_or("");
    let state = locality.state.as_deref().unwrap_or("");

    if !city.is_empty() && !state.is_empty() && !city.to_lowercase().contains(&state.to_lowercase())
    {
        format!("{} {} local news", city, state)
    } else if !city.is_empty() {
        format!("{} local news", city)
    } else if !state.is_empty() {
        format!("{} local news", state)
    } else {
        DEFAULT_NEWS_QUERY.to_string()
    }
}

fn mentions_disruption(item: &NewsItem) -> bool {
    let title = item.title.as_deref().unwrap_or("").to_lowercase();
    let description = item.description.as_deref().unwrap_or("").to_lowercase();
    DISRUPTION_KEYWORDS
        .iter()
        .any(|word| title.contains(word) || description.contains(word))
}

/// Filters the fetched articles down to those mentioning a disruption
/// keyword and returns the capped sub-score plus the articles kept for
/// display (title and url both required).
pub fn score_articles(items: &[NewsItem]) -> (f64, Vec<NewsArticle>) {
    let relevant: Vec<&NewsItem> = items.iter().filter(|item| mentions_disruption(item)).collect();

    let articles = relevant
        .iter()
        .take(DISPLAY_ARTICLE_LIMIT)
        .filter_map(|item| {
            Some(NewsArticle {
                title: item.title.clone()?,
                url: item.url.clone()?,
            })
        })
        .collect();

    (relevant.len().min(NEWS_SCORE_CAP) as f64, articles)
}
