use chrono::NaiveDate;
use marketsentry_core::models::holding::{Holding, PortfolioBook, Sector};
use marketsentry_core::models::ledger::{
    Category, EntryType, LedgerEntry, BUDGET_CEILINGS,
};
use marketsentry_core::models::market::{MarketSentiment, NewsArticle};
use marketsentry_core::models::seed;
use marketsentry_core::models::settings::Settings;
use marketsentry_core::models::trade::{Trade, TradeSide, TradeStatus};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Sector
// ═══════════════════════════════════════════════════════════════════

mod sector {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Sector::Technology.to_string(), "Technology");
        assert_eq!(Sector::Healthcare.to_string(), "Healthcare");
        assert_eq!(Sector::Finance.to_string(), "Finance");
        assert_eq!(Sector::Energy.to_string(), "Energy");
        assert_eq!(Sector::Consumer.to_string(), "Consumer");
        assert_eq!(Sector::Industrial.to_string(), "Industrial");
    }

    #[test]
    fn all_lists_every_sector_once() {
        let mut seen = std::collections::HashSet::new();
        for s in Sector::ALL {
            assert!(seen.insert(s.to_string()));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn serde_roundtrip() {
        for s in Sector::ALL {
            let json = serde_json::to_string(&s).unwrap();
            let back: Sector = serde_json::from_str(&json).unwrap();
            assert_eq!(s, back);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Holding
// ═══════════════════════════════════════════════════════════════════

mod holding {
    use super::*;

    #[test]
    fn new_uppercases_symbol() {
        let h = Holding::new("aapl", "Apple Inc.", 10.0, 100.0, 120.0, Sector::Technology);
        assert_eq!(h.symbol, "AAPL");
    }

    #[test]
    fn new_trims_symbol() {
        let h = Holding::new(" msft ", "Microsoft", 1.0, 1.0, 1.0, Sector::Technology);
        assert_eq!(h.symbol, "MSFT");
    }

    #[test]
    fn blank_name_gets_placeholder() {
        let h = Holding::new("tsla", "  ", 1.0, 1.0, 1.0, Sector::Consumer);
        assert_eq!(h.name, "TSLA Corp.");
    }

    #[test]
    fn explicit_name_preserved() {
        let h = Holding::new("JNJ", "Johnson & Johnson", 1.0, 1.0, 1.0, Sector::Healthcare);
        assert_eq!(h.name, "Johnson & Johnson");
    }

    #[test]
    fn market_value_is_shares_times_price() {
        let h = Holding::new("AAPL", "Apple", 10.0, 100.0, 120.0, Sector::Technology);
        assert_eq!(h.market_value(), 1200.0);
    }

    #[test]
    fn unrealized_gain() {
        let h = Holding::new("AAPL", "Apple", 10.0, 100.0, 120.0, Sector::Technology);
        assert_eq!(h.unrealized_gain(), 200.0);
    }

    #[test]
    fn unrealized_loss_is_negative() {
        let h = Holding::new("XOM", "Exxon", 5.0, 50.0, 40.0, Sector::Energy);
        assert_eq!(h.unrealized_gain(), -50.0);
    }

    #[test]
    fn gain_pct() {
        let h = Holding::new("AAPL", "Apple", 10.0, 100.0, 120.0, Sector::Technology);
        assert!((h.gain_pct() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn ids_are_unique() {
        let a = Holding::new("A", "A", 1.0, 1.0, 1.0, Sector::Finance);
        let b = Holding::new("A", "A", 1.0, 1.0, 1.0, Sector::Finance);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn book_serializes_cash_with_camel_case_key() {
        let book = PortfolioBook {
            holdings: vec![],
            cash_available: 42.0,
        };
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains("\"cashAvailable\":42.0"));
    }

    #[test]
    fn derived_fields_are_not_serialized() {
        let h = Holding::new("AAPL", "Apple", 10.0, 100.0, 120.0, Sector::Technology);
        let json = serde_json::to_string(&h).unwrap();
        assert!(!json.contains("value"));
        assert!(!json.contains("change"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Ledger
// ═══════════════════════════════════════════════════════════════════

mod ledger {
    use super::*;

    #[test]
    fn entry_type_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&EntryType::Expense).unwrap(),
            "\"EXPENSE\""
        );
        assert_eq!(
            serde_json::to_string(&EntryType::Income).unwrap(),
            "\"INCOME\""
        );
    }

    #[test]
    fn entry_serializes_type_under_type_key() {
        let e = LedgerEntry::new(
            Category::Food,
            "Groceries",
            50.0,
            d(2024, 1, 15),
            EntryType::Expense,
        );
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"type\":\"EXPENSE\""));
    }

    #[test]
    fn entry_date_roundtrips_through_json() {
        let e = LedgerEntry::new(
            Category::Utilities,
            "Electricity",
            80.0,
            d(2024, 2, 1),
            EntryType::Expense,
        );
        let json = serde_json::to_string(&e).unwrap();
        let back: LedgerEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.date, d(2024, 2, 1));
    }

    #[test]
    fn ceilings_cover_six_categories() {
        assert_eq!(BUDGET_CEILINGS.len(), 6);
        let categories: Vec<Category> = BUDGET_CEILINGS.iter().map(|&(c, _)| c).collect();
        assert!(categories.contains(&Category::Food));
        assert!(!categories.contains(&Category::Income));
        assert!(!categories.contains(&Category::Other));
    }

    #[test]
    fn food_ceiling_is_500() {
        let (_, ceiling) = BUDGET_CEILINGS
            .iter()
            .find(|(c, _)| *c == Category::Food)
            .copied()
            .unwrap();
        assert_eq!(ceiling, 500.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Trade
// ═══════════════════════════════════════════════════════════════════

mod trade {
    use super::*;

    fn sample(status: TradeStatus, pnl: f64) -> Trade {
        Trade::new(
            "AAPL",
            TradeSide::Buy,
            10.0,
            150.0,
            d(2024, 1, 15),
            status,
            "Growth",
            pnl,
        )
    }

    #[test]
    fn new_uppercases_symbol() {
        let t = Trade::new(
            "tsla",
            TradeSide::Buy,
            1.0,
            1.0,
            d(2024, 1, 1),
            TradeStatus::Open,
            "Momentum",
            0.0,
        );
        assert_eq!(t.symbol, "TSLA");
    }

    #[test]
    fn blank_strategy_defaults_to_general() {
        let t = Trade::new(
            "AAPL",
            TradeSide::Buy,
            1.0,
            1.0,
            d(2024, 1, 1),
            TradeStatus::Open,
            "",
            0.0,
        );
        assert_eq!(t.strategy, "General");
    }

    #[test]
    fn winner_requires_closed_and_positive_pnl() {
        assert!(sample(TradeStatus::Closed, 100.0).is_winner());
        assert!(!sample(TradeStatus::Closed, -100.0).is_winner());
        assert!(!sample(TradeStatus::Closed, 0.0).is_winner());
        assert!(!sample(TradeStatus::Open, 100.0).is_winner());
    }

    #[test]
    fn side_and_status_serialize_uppercase() {
        let t = sample(TradeStatus::Open, 0.0);
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"side\":\"BUY\""));
        assert!(json.contains("\"status\":\"OPEN\""));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Market
// ═══════════════════════════════════════════════════════════════════

mod market {
    use super::*;

    #[test]
    fn sentiment_thresholds() {
        assert_eq!(
            MarketSentiment::from_cap_change_pct(6.0),
            MarketSentiment::ExtremeGreed
        );
        assert_eq!(
            MarketSentiment::from_cap_change_pct(3.0),
            MarketSentiment::Greed
        );
        assert_eq!(
            MarketSentiment::from_cap_change_pct(0.0),
            MarketSentiment::Neutral
        );
        assert_eq!(
            MarketSentiment::from_cap_change_pct(-3.0),
            MarketSentiment::Fear
        );
        assert_eq!(
            MarketSentiment::from_cap_change_pct(-10.0),
            MarketSentiment::ExtremeFear
        );
    }

    #[test]
    fn sentiment_boundaries_are_exclusive() {
        // Exactly at a threshold falls into the calmer band
        assert_eq!(
            MarketSentiment::from_cap_change_pct(5.0),
            MarketSentiment::Greed
        );
        assert_eq!(
            MarketSentiment::from_cap_change_pct(2.0),
            MarketSentiment::Neutral
        );
        assert_eq!(
            MarketSentiment::from_cap_change_pct(-2.0),
            MarketSentiment::Fear
        );
        assert_eq!(
            MarketSentiment::from_cap_change_pct(-5.0),
            MarketSentiment::ExtremeFear
        );
    }

    #[test]
    fn sentiment_display() {
        assert_eq!(MarketSentiment::ExtremeGreed.to_string(), "Extreme Greed");
        assert_eq!(MarketSentiment::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn fallback_article_is_fixed() {
        let a = NewsArticle::fallback();
        assert_eq!(a.title, "Bitcoin Continues Strong Performance");
        assert_eq!(a.source, "CoinDesk");
        assert_eq!(a.url, "#");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings & Seed Data
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.currency, "USD");
        assert_eq!(s.refresh_interval_secs, 60);
        assert!(s.api_keys.is_empty());
    }
}

mod seed_data {
    use super::*;

    #[test]
    fn portfolio_has_four_holdings_and_cash() {
        let book = seed::default_portfolio();
        assert_eq!(book.holdings.len(), 4);
        assert_eq!(book.cash_available, 10_000.0);
    }

    #[test]
    fn portfolio_sectors() {
        let book = seed::default_portfolio();
        let tech = book
            .holdings
            .iter()
            .filter(|h| h.sector == Sector::Technology)
            .count();
        let health = book
            .holdings
            .iter()
            .filter(|h| h.sector == Sector::Healthcare)
            .count();
        assert_eq!(tech, 3);
        assert_eq!(health, 1);
    }

    #[test]
    fn ledger_has_one_income_entry() {
        let entries = seed::default_ledger();
        assert_eq!(entries.len(), 4);
        let income: Vec<_> = entries
            .iter()
            .filter(|e| e.entry_type == EntryType::Income)
            .collect();
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].amount, 5000.0);
        assert_eq!(income[0].category, Category::Income);
    }

    #[test]
    fn journal_has_two_closed_trades() {
        let trades = seed::default_journal();
        assert_eq!(trades.len(), 3);
        let closed = trades
            .iter()
            .filter(|t| t.status == TradeStatus::Closed)
            .count();
        assert_eq!(closed, 2);
    }

    #[test]
    fn seed_amounts_are_positive() {
        for e in seed::default_ledger() {
            assert!(e.amount > 0.0);
        }
        for t in seed::default_journal() {
            assert!(t.quantity > 0.0);
            assert!(t.price > 0.0);
        }
    }
}
