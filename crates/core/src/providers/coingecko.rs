use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::market::{CoinListing, GlobalMarket};

use super::traits::MarketDataProvider;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko API provider for cryptocurrency market data.
///
/// - **Free**: No API key required on the public endpoints.
/// - **Endpoints**: `/coins/markets` (listing), `/global` (aggregate stats).
///
/// Prices are requested in USD; the upstream returns nulls for thinly
/// traded assets, which map to `None` on the listing fields.
pub struct CoinGeckoProvider {
    client: Client,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinGecko API response types ────────────────────────────────────

#[derive(Deserialize)]
struct MarketsEntry {
    id: String,
    symbol: String,
    name: String,
    current_price: Option<f64>,
    price_change_24h: Option<f64>,
    price_change_percentage_24h: Option<f64>,
    market_cap: Option<f64>,
    market_cap_rank: Option<u32>,
    total_volume: Option<f64>,
    circulating_supply: Option<f64>,
}

#[derive(Deserialize)]
struct GlobalResponse {
    data: GlobalData,
}

#[derive(Deserialize)]
struct GlobalData {
    total_market_cap: std::collections::HashMap<String, f64>,
    total_volume: std::collections::HashMap<String, f64>,
    market_cap_percentage: std::collections::HashMap<String, f64>,
    market_cap_change_percentage_24h_usd: f64,
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    async fn fetch_listings(&self, limit: usize) -> Result<Vec<CoinListing>, CoreError> {
        let url = format!(
            "{BASE_URL}/coins/markets?vs_currency=usd&order=market_cap_desc\
             &per_page={limit}&page=1&sparkline=false&price_change_percentage=24h"
        );

        let entries: Vec<MarketsEntry> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "CoinGecko".into(),
                message: format!("Failed to parse markets response: {e}"),
            })?;

        Ok(entries
            .into_iter()
            .map(|e| CoinListing {
                id: e.id,
                symbol: e.symbol.to_uppercase(),
                name: e.name,
                current_price: e.current_price,
                price_change_24h: e.price_change_24h,
                price_change_percentage_24h: e.price_change_percentage_24h,
                market_cap: e.market_cap,
                market_cap_rank: e.market_cap_rank,
                total_volume: e.total_volume,
                circulating_supply: e.circulating_supply,
            })
            .collect())
    }

    async fn fetch_global(&self) -> Result<GlobalMarket, CoreError> {
        let url = format!("{BASE_URL}/global");

        let resp: GlobalResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "CoinGecko".into(),
                message: format!("Failed to parse global response: {e}"),
            })?;

        let usd = |map: &std::collections::HashMap<String, f64>| {
            map.get("usd").copied().unwrap_or(0.0)
        };

        Ok(GlobalMarket {
            total_market_cap_usd: usd(&resp.data.total_market_cap),
            total_volume_usd: usd(&resp.data.total_volume),
            btc_dominance_pct: resp
                .data
                .market_cap_percentage
                .get("btc")
                .copied()
                .unwrap_or(0.0),
            market_cap_change_pct_24h: resp.data.market_cap_change_percentage_24h_usd,
        })
    }
}
