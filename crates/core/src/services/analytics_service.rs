use std::collections::HashMap;

use crate::models::analytics::{
    BudgetReport, JournalSummary, PnlPoint, PortfolioSummary, SectorAllocation,
};
use crate::models::holding::{PortfolioBook, Sector};
use crate::models::ledger::{BudgetLine, EntryType, LedgerEntry, BUDGET_CEILINGS};
use crate::models::trade::{Trade, TradeStatus};

/// Computes derived metrics over the three collections.
///
/// Every function here is pure: the same inputs always produce the same
/// summary, and nothing derived is ever written back to storage.
///
/// Divide-by-zero policy: every percentage with a zero denominator clamps
/// to 0.0. Applied uniformly across all aggregates.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Portfolio totals and per-sector allocation.
    pub fn portfolio_summary(&self, book: &PortfolioBook) -> PortfolioSummary {
        let positions_value: f64 = book.holdings.iter().map(|h| h.market_value()).sum();
        let total_gain_loss: f64 = book.holdings.iter().map(|h| h.unrealized_gain()).sum();
        let cost_basis: f64 = book
            .holdings
            .iter()
            .map(|h| h.avg_price * h.shares)
            .sum();
        let total_return_pct = if cost_basis > 0.0 {
            (total_gain_loss / cost_basis) * 100.0
        } else {
            0.0
        };

        // Group market value by sector
        let mut by_sector: HashMap<Sector, f64> = HashMap::new();
        for holding in &book.holdings {
            *by_sector.entry(holding.sector).or_insert(0.0) += holding.market_value();
        }

        let mut allocation: Vec<SectorAllocation> = by_sector
            .into_iter()
            .map(|(sector, value)| SectorAllocation {
                sector,
                value,
                pct: if positions_value > 0.0 {
                    (value / positions_value) * 100.0
                } else {
                    0.0
                },
            })
            .collect();
        // Largest allocation first; sector order breaks ties deterministically
        allocation.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.sector.to_string().cmp(&b.sector.to_string()))
        });

        PortfolioSummary {
            positions_value,
            total_value: positions_value + book.cash_available,
            cash_available: book.cash_available,
            total_gain_loss,
            cost_basis,
            total_return_pct,
            allocation,
        }
    }

    /// Budget lines for the fixed ceiling table plus ledger-wide totals.
    ///
    /// Expense entries in categories outside the ceiling table contribute
    /// to `total_expenses` but get no budget line.
    pub fn budget_report(&self, entries: &[LedgerEntry]) -> BudgetReport {
        let mut spent_by_category: HashMap<_, f64> = HashMap::new();
        let mut total_income = 0.0;
        let mut total_expenses = 0.0;

        for entry in entries {
            match entry.entry_type {
                EntryType::Expense => {
                    total_expenses += entry.amount;
                    *spent_by_category.entry(entry.category).or_insert(0.0) += entry.amount;
                }
                EntryType::Income => total_income += entry.amount,
            }
        }

        let lines: Vec<BudgetLine> = BUDGET_CEILINGS
            .iter()
            .map(|&(category, budgeted)| {
                let spent = spent_by_category.get(&category).copied().unwrap_or(0.0);
                BudgetLine {
                    category,
                    budgeted,
                    spent,
                    remaining: budgeted - spent,
                }
            })
            .collect();

        let total_budgeted = lines.iter().map(|l| l.budgeted).sum();
        let total_spent = lines.iter().map(|l| l.spent).sum();

        BudgetReport {
            lines,
            total_budgeted,
            total_spent,
            total_income,
            total_expenses,
            net: total_income - total_expenses,
        }
    }

    /// Win rate and cumulative P&L over the journal.
    pub fn journal_summary(&self, trades: &[Trade]) -> JournalSummary {
        let total_pnl: f64 = trades.iter().map(|t| t.pnl).sum();
        let open_count = trades.iter().filter(|t| t.status == TradeStatus::Open).count();
        let closed_count = trades
            .iter()
            .filter(|t| t.status == TradeStatus::Closed)
            .count();
        let winners = trades.iter().filter(|t| t.is_winner()).count();
        let win_rate_pct = if closed_count > 0 {
            (winners as f64 / closed_count as f64) * 100.0
        } else {
            0.0
        };

        // Running sum over closed trades, oldest first
        let mut closed: Vec<&Trade> = trades
            .iter()
            .filter(|t| t.status == TradeStatus::Closed)
            .collect();
        closed.sort_by_key(|t| t.date);

        let mut cumulative = 0.0;
        let equity_curve = closed
            .iter()
            .map(|t| {
                cumulative += t.pnl;
                PnlPoint {
                    date: t.date,
                    pnl: t.pnl,
                    cumulative,
                }
            })
            .collect();

        JournalSummary {
            total_pnl,
            open_count,
            closed_count,
            win_rate_pct,
            equity_curve,
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
