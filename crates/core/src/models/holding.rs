use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Market sector of a holding.
/// Fixed set — drives the sector allocation breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    Technology,
    Healthcare,
    Finance,
    Energy,
    Consumer,
    Industrial,
}

impl Sector {
    /// All sectors, in display order.
    pub const ALL: [Sector; 6] = [
        Sector::Technology,
        Sector::Healthcare,
        Sector::Finance,
        Sector::Energy,
        Sector::Consumer,
        Sector::Industrial,
    ];
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sector::Technology => write!(f, "Technology"),
            Sector::Healthcare => write!(f, "Healthcare"),
            Sector::Finance => write!(f, "Finance"),
            Sector::Energy => write!(f, "Energy"),
            Sector::Consumer => write!(f, "Consumer"),
            Sector::Industrial => write!(f, "Industrial"),
        }
    }
}

/// A single position in the portfolio.
///
/// **Important**: Holdings do NOT store market value or gain. Those are
/// derived from `shares`, `avg_price`, and `current_price` on every read,
/// so the stored record can never drift out of sync with its own totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Unique identifier
    pub id: Uuid,

    /// Ticker symbol, uppercased (e.g., "AAPL")
    pub symbol: String,

    /// Human-readable company name
    pub name: String,

    /// Number of shares held (always positive)
    pub shares: f64,

    /// Average cost basis per share
    pub avg_price: f64,

    /// Latest known market price per share
    pub current_price: f64,

    /// Market sector — drives allocation breakdown
    pub sector: Sector,
}

impl Holding {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        shares: f64,
        avg_price: f64,
        current_price: f64,
        sector: Sector,
    ) -> Self {
        let symbol = symbol.into().trim().to_uppercase();
        let name = name.into();
        // Blank names fall back to a placeholder derived from the symbol
        let name = if name.trim().is_empty() {
            format!("{symbol} Corp.")
        } else {
            name
        };
        Self {
            id: Uuid::new_v4(),
            symbol,
            name,
            shares,
            avg_price,
            current_price,
            sector,
        }
    }

    /// Current market value: shares × current price.
    #[must_use]
    pub fn market_value(&self) -> f64 {
        self.shares * self.current_price
    }

    /// Unrealized gain/loss: (current price − avg price) × shares.
    #[must_use]
    pub fn unrealized_gain(&self) -> f64 {
        (self.current_price - self.avg_price) * self.shares
    }

    /// Percentage return relative to cost basis. Clamps to 0 when the
    /// cost basis is zero.
    #[must_use]
    pub fn gain_pct(&self) -> f64 {
        let basis = self.avg_price * self.shares;
        if basis > 0.0 {
            (self.unrealized_gain() / basis) * 100.0
        } else {
            0.0
        }
    }
}

/// The portfolio durable-slot shape: the held positions plus uninvested cash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioBook {
    pub holdings: Vec<Holding>,

    #[serde(rename = "cashAvailable")]
    pub cash_available: f64,
}

impl Default for PortfolioBook {
    fn default() -> Self {
        Self {
            holdings: Vec::new(),
            cash_available: 0.0,
        }
    }
}
