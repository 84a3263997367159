//! First-run sample data. Used whenever a durable slot is empty or
//! unparsable — the store fails open to these records and immediately
//! persists them.

use chrono::NaiveDate;

use super::holding::{Holding, PortfolioBook, Sector};
use super::ledger::{Category, EntryType, LedgerEntry};
use super::trade::{Trade, TradeSide, TradeStatus};

/// Starting uninvested cash for a fresh portfolio.
pub const DEFAULT_CASH_AVAILABLE: f64 = 10_000.0;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    // The seed dates are compile-time constants and always valid.
    NaiveDate::from_ymd_opt(y, m, day).unwrap_or_default()
}

/// Default portfolio: four large-cap positions plus starting cash.
#[must_use]
pub fn default_portfolio() -> PortfolioBook {
    PortfolioBook {
        holdings: vec![
            Holding::new("AAPL", "Apple Inc.", 100.0, 150.0, 175.43, Sector::Technology),
            Holding::new(
                "MSFT",
                "Microsoft Corporation",
                50.0,
                320.0,
                342.56,
                Sector::Technology,
            ),
            Holding::new("GOOGL", "Alphabet Inc.", 25.0, 130.0, 138.92, Sector::Technology),
            Holding::new(
                "JNJ",
                "Johnson & Johnson",
                120.0,
                160.0,
                165.25,
                Sector::Healthcare,
            ),
        ],
        cash_available: DEFAULT_CASH_AVAILABLE,
    }
}

/// Default spending ledger: three expenses and one salary deposit.
#[must_use]
pub fn default_ledger() -> Vec<LedgerEntry> {
    vec![
        LedgerEntry::new(
            Category::Food,
            "Grocery shopping",
            150.0,
            d(2024, 1, 15),
            EntryType::Expense,
        ),
        LedgerEntry::new(
            Category::Transportation,
            "Gas",
            60.0,
            d(2024, 1, 16),
            EntryType::Expense,
        ),
        LedgerEntry::new(
            Category::Entertainment,
            "Movie tickets",
            25.0,
            d(2024, 1, 17),
            EntryType::Expense,
        ),
        LedgerEntry::new(
            Category::Income,
            "Salary",
            5000.0,
            d(2024, 1, 1),
            EntryType::Income,
        ),
    ]
}

/// Default trading journal: two closed trades and one open position.
#[must_use]
pub fn default_journal() -> Vec<Trade> {
    vec![
        Trade::new(
            "AAPL",
            TradeSide::Buy,
            100.0,
            150.25,
            d(2024, 1, 15),
            TradeStatus::Closed,
            "Growth",
            2500.0,
        ),
        Trade::new(
            "TSLA",
            TradeSide::Buy,
            50.0,
            245.80,
            d(2024, 2, 20),
            TradeStatus::Open,
            "Momentum",
            1200.0,
        ),
        Trade::new(
            "MSFT",
            TradeSide::Sell,
            75.0,
            338.50,
            d(2024, 3, 10),
            TradeStatus::Closed,
            "Value",
            -500.0,
        ),
    ]
}
