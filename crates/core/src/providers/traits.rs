use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::market::{CoinListing, GlobalMarket, NewsArticle};

/// Trait abstraction for market-data providers.
///
/// The live implementation talks to a public REST API. Tests swap in a
/// mock without touching the rest of the codebase.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Top coins by market cap, up to `limit` entries.
    async fn fetch_listings(&self, limit: usize) -> Result<Vec<CoinListing>, CoreError>;

    /// Aggregate statistics for the whole market.
    async fn fetch_global(&self) -> Result<GlobalMarket, CoreError>;
}

/// Trait abstraction for market-news providers.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Most recent articles matching `query`, up to `limit` entries.
    async fn fetch_articles(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<NewsArticle>, CoreError>;
}
