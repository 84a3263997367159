use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::holding::Sector;
use super::ledger::BudgetLine;

/// Summary of the whole portfolio, derived from the current holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Combined market value of all positions
    pub positions_value: f64,

    /// positions_value + cash available
    pub total_value: f64,

    /// Uninvested cash
    pub cash_available: f64,

    /// Sum of unrealized gains/losses across positions
    pub total_gain_loss: f64,

    /// Total cost basis (Σ avg_price × shares)
    pub cost_basis: f64,

    /// (total_gain_loss / cost_basis) × 100, 0 when the basis is 0
    pub total_return_pct: f64,

    /// Per-sector breakdown, largest allocation first
    pub allocation: Vec<SectorAllocation>,
}

/// One sector's share of the invested portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorAllocation {
    pub sector: Sector,

    /// Combined market value of holdings in this sector
    pub value: f64,

    /// value / positions_value × 100, 0 when the portfolio is empty
    pub pct: f64,
}

/// Budget view plus ledger-wide cash-flow totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetReport {
    /// One line per budgeted category, in fixed table order
    pub lines: Vec<BudgetLine>,

    /// Σ budgeted across all lines
    pub total_budgeted: f64,

    /// Σ spent across all lines
    pub total_spent: f64,

    /// Σ income entries across the whole ledger
    pub total_income: f64,

    /// Σ expense entries across the whole ledger (all categories)
    pub total_expenses: f64,

    /// total_income − total_expenses
    pub net: f64,
}

/// Summary statistics over the trading journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalSummary {
    /// Sum of P&L over all trades, open and closed
    pub total_pnl: f64,

    pub open_count: usize,
    pub closed_count: usize,

    /// Winning closed trades ÷ closed trades × 100, 0 with no closed trades
    pub win_rate_pct: f64,

    /// Closed-trade P&L with running total, ordered by date ascending
    pub equity_curve: Vec<PnlPoint>,
}

/// One point of the cumulative P&L series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlPoint {
    pub date: NaiveDate,

    /// P&L of the trade closed at this point
    pub pnl: f64,

    /// Running sum of closed-trade P&L up to and including this point
    pub cumulative: f64,
}
