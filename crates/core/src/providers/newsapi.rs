use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::market::NewsArticle;

use super::traits::NewsProvider;

const BASE_URL: &str = "https://newsapi.org/v2";

/// NewsAPI provider for market news, via the `/everything` search endpoint.
///
/// Requires an API key. Without one, every fetch fails with
/// `CoreError::MissingApiKey` and the caller substitutes the fallback
/// article — the news surface degrades, nothing else is affected.
pub struct NewsApiProvider {
    client: Client,
    api_key: Option<String>,
}

impl NewsApiProvider {
    pub fn new(api_key: Option<String>) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key,
        }
    }
}

// ── NewsAPI response types ──────────────────────────────────────────

#[derive(Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<ArticleEntry>,
}

#[derive(Deserialize)]
struct ArticleEntry {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    source: SourceEntry,
    #[serde(rename = "publishedAt")]
    published_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct SourceEntry {
    name: Option<String>,
}

#[async_trait]
impl NewsProvider for NewsApiProvider {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn fetch_articles(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<NewsArticle>, CoreError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CoreError::MissingApiKey("newsapi".into()))?;

        let url = format!(
            "{BASE_URL}/everything?q={query}&sortBy=publishedAt&pageSize={limit}&apiKey={api_key}"
        );

        let resp: EverythingResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "NewsAPI".into(),
                message: format!("Failed to parse articles response: {e}"),
            })?;

        Ok(resp
            .articles
            .into_iter()
            .filter_map(|a| {
                Some(NewsArticle {
                    title: a.title?,
                    description: a.description.unwrap_or_default(),
                    url: a.url.unwrap_or_else(|| "#".to_string()),
                    source: a.source.name.unwrap_or_else(|| "Unknown".to_string()),
                    published_at: a.published_at.unwrap_or_else(Utc::now),
                })
            })
            .collect())
    }
}
