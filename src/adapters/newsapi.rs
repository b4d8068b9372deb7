use crate::domain::model::NewsItem;
use crate::domain::ports::NewsProvider;
use crate::utils::error::{ChaosError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://newsapi.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const PAGE_SIZE: usize = 10;

/// NewsAPI "everything" search client: recent English articles, newest first.
pub struct NewsApi {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsApi {
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
struct SearchResponse {
    #[serde(default)]
    articles: Vec<NewsItem>,
}

#[async_trait]
impl NewsProvider for NewsApi {
    async fn search(&self, query: &str) -> Result<Vec<NewsItem>> {
        let endpoint = format!("{}/v2/everything", self.base_url);

        tracing::debug!("📰 Searching news: {} (q={})", endpoint, query);
        let response = self
            .client
            .get(&endpoint)
            .query(&[
                ("q", query.to_string()),
                ("language", "en".to_string()),
                ("sortBy", "publishedAt".to_string()),
                ("pageSize", PAGE_SIZE.to_string()),
                ("apiKey", self.api_key.clone()),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ChaosError::SignalError {
                signal: "news".to_string(),
                message: format!("request failed with status {}", response.status()),
            });
        }

        let body: SearchResponse = response.json().await?;
        let mut articles = body.articles;
        articles.truncate(PAGE_SIZE);
        Ok(articles)
    }
}
