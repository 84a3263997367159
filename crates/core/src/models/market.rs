use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the market listing (a single coin).
///
/// Optional fields mirror the upstream API, which omits figures for
/// thinly traded assets rather than reporting zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinListing {
    /// Provider-side identifier (e.g., "bitcoin")
    pub id: String,

    /// Ticker symbol, uppercased (e.g., "BTC")
    pub symbol: String,

    /// Human-readable name (e.g., "Bitcoin")
    pub name: String,

    /// Latest price in USD
    pub current_price: Option<f64>,

    /// Absolute price change over the last 24 h
    pub price_change_24h: Option<f64>,

    /// Percentage price change over the last 24 h
    pub price_change_percentage_24h: Option<f64>,

    /// Market capitalization in USD
    pub market_cap: Option<f64>,

    /// Rank by market capitalization (1 = largest)
    pub market_cap_rank: Option<u32>,

    /// 24 h trading volume in USD
    pub total_volume: Option<f64>,

    /// Coins currently in circulation
    pub circulating_supply: Option<f64>,
}

/// Aggregate statistics for the whole crypto market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalMarket {
    /// Total market capitalization in USD
    pub total_market_cap_usd: f64,

    /// Total 24 h volume in USD
    pub total_volume_usd: f64,

    /// Bitcoin's share of total market cap, in percent
    pub btc_dominance_pct: f64,

    /// 24 h change of total market cap, in percent
    pub market_cap_change_pct_24h: f64,
}

/// Coarse market mood derived from the 24 h market-cap change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketSentiment {
    ExtremeGreed,
    Greed,
    Neutral,
    Fear,
    ExtremeFear,
}

impl MarketSentiment {
    /// Classify a 24 h market-cap change percentage.
    /// Thresholds: >5 extreme greed, >2 greed, >−2 neutral, >−5 fear.
    #[must_use]
    pub fn from_cap_change_pct(change: f64) -> Self {
        if change > 5.0 {
            MarketSentiment::ExtremeGreed
        } else if change > 2.0 {
            MarketSentiment::Greed
        } else if change > -2.0 {
            MarketSentiment::Neutral
        } else if change > -5.0 {
            MarketSentiment::Fear
        } else {
            MarketSentiment::ExtremeFear
        }
    }
}

impl std::fmt::Display for MarketSentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketSentiment::ExtremeGreed => write!(f, "Extreme Greed"),
            MarketSentiment::Greed => write!(f, "Greed"),
            MarketSentiment::Neutral => write!(f, "Neutral"),
            MarketSentiment::Fear => write!(f, "Fear"),
            MarketSentiment::ExtremeFear => write!(f, "Extreme Fear"),
        }
    }
}

/// A single market-news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub description: String,
    pub url: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
}

impl NewsArticle {
    /// The hard-coded article substituted when the news fetch fails
    /// (or no API key is configured).
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            title: "Bitcoin Continues Strong Performance".to_string(),
            description: "Bitcoin shows resilience as institutional adoption increases."
                .to_string(),
            url: "#".to_string(),
            source: "CoinDesk".to_string(),
            published_at: Utc::now(),
        }
    }
}

/// In-memory state of the market watcher, replaced wholesale on each
/// successful refresh.
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    pub listings: Vec<CoinListing>,
    pub global: Option<GlobalMarket>,
    pub news: Vec<NewsArticle>,

    /// Set when the most recent refresh failed; cleared on success.
    /// Surfaced to the UI as a retryable banner.
    pub last_error: Option<String>,

    /// Timestamp of the last successful refresh.
    pub last_updated: Option<DateTime<Utc>>,
}

impl MarketSnapshot {
    /// Sentiment for the current global stats, if available.
    #[must_use]
    pub fn sentiment(&self) -> Option<MarketSentiment> {
        self.global
            .as_ref()
            .map(|g| MarketSentiment::from_cap_change_pct(g.market_cap_change_pct_24h))
    }
}
