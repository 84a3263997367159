use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "Buy"),
            TradeSide::Sell => write!(f, "Sell"),
        }
    }
}

/// Lifecycle state of a trade. Only closed trades count toward
/// win rate and the cumulative P&L series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeStatus {
    Open,
    Closed,
}

impl std::fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeStatus::Open => write!(f, "Open"),
            TradeStatus::Closed => write!(f, "Closed"),
        }
    }
}

/// A single journal entry for a trade.
///
/// `pnl` is entered by the user, not derived from price × quantity — the
/// journal supports manual P&L for multi-fill or partially hedged trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Unique identifier
    pub id: Uuid,

    /// Ticker symbol, uppercased
    pub symbol: String,

    /// Buy or Sell
    pub side: TradeSide,

    /// Number of units (always positive)
    pub quantity: f64,

    /// Execution price per unit
    pub price: f64,

    /// Trade date (daily granularity)
    pub date: NaiveDate,

    /// Open or Closed
    pub status: TradeStatus,

    /// Free-text strategy label (defaults to "General")
    pub strategy: String,

    /// Realized profit/loss, user-entered
    pub pnl: f64,
}

impl Trade {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: impl Into<String>,
        side: TradeSide,
        quantity: f64,
        price: f64,
        date: NaiveDate,
        status: TradeStatus,
        strategy: impl Into<String>,
        pnl: f64,
    ) -> Self {
        let strategy = strategy.into();
        let strategy = if strategy.trim().is_empty() {
            "General".to_string()
        } else {
            strategy
        };
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into().trim().to_uppercase(),
            side,
            quantity,
            price,
            date,
            status,
            strategy,
            pnl,
        }
    }

    /// True for closed trades with a strictly positive P&L.
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.status == TradeStatus::Closed && self.pnl > 0.0
    }
}
