pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use errors::CoreError;
use models::{
    analytics::{BudgetReport, JournalSummary, PortfolioSummary},
    holding::{Holding, PortfolioBook},
    ledger::{Category, LedgerEntry},
    seed,
    settings::Settings,
    trade::{Trade, TradeStatus},
};
use providers::{
    coingecko::CoinGeckoProvider,
    newsapi::NewsApiProvider,
    traits::{MarketDataProvider, NewsProvider},
};
use services::{
    analytics_service::AnalyticsService,
    journal_service::{JournalService, TradeDraft},
    ledger_service::{EntryDraft, LedgerService},
    market_watcher::MarketWatcher,
    portfolio_service::{HoldingDraft, PortfolioService},
};
use storage::{
    repository::Repository,
    slot::{FileSlotStore, SlotStore},
};

/// Durable slot keys, one per collection.
pub const PORTFOLIO_SLOT: &str = "portfolio";
pub const EXPENSES_SLOT: &str = "expenses";
pub const JOURNAL_SLOT: &str = "tradingJournal";
pub const SETTINGS_SLOT: &str = "settings";

/// Main entry point for the MarketSentry core library.
///
/// Owns the three domain collections (portfolio, spending ledger, trading
/// journal) plus settings, each mirrored to its own durable slot. Every
/// mutation is validated, applied in memory, and synchronously written
/// through — after any operation the slot equals the in-memory state.
#[must_use]
pub struct MarketSentry {
    store: Arc<dyn SlotStore>,

    portfolio: PortfolioBook,
    ledger: Vec<LedgerEntry>,
    journal: Vec<Trade>,
    settings: Settings,

    portfolio_repo: Repository<PortfolioBook>,
    ledger_repo: Repository<Vec<LedgerEntry>>,
    journal_repo: Repository<Vec<Trade>>,
    settings_repo: Repository<Settings>,

    portfolio_service: PortfolioService,
    ledger_service: LedgerService,
    journal_service: JournalService,
    analytics_service: AnalyticsService,
}

impl std::fmt::Debug for MarketSentry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketSentry")
            .field("holdings", &self.portfolio.holdings.len())
            .field("ledger_entries", &self.ledger.len())
            .field("trades", &self.journal.len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl MarketSentry {
    /// Open against a data directory on disk, loading every collection
    /// (or seeding it with sample data on first run).
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, CoreError> {
        let store: Arc<dyn SlotStore> = Arc::new(FileSlotStore::open(data_dir)?);
        Self::with_store(store)
    }

    /// Open against any slot store (e.g., an in-memory store in tests).
    pub fn with_store(store: Arc<dyn SlotStore>) -> Result<Self, CoreError> {
        let portfolio_repo = Repository::new(Arc::clone(&store), PORTFOLIO_SLOT);
        let ledger_repo = Repository::new(Arc::clone(&store), EXPENSES_SLOT);
        let journal_repo = Repository::new(Arc::clone(&store), JOURNAL_SLOT);
        let settings_repo = Repository::new(Arc::clone(&store), SETTINGS_SLOT);

        let portfolio = portfolio_repo.load_or_seed(seed::default_portfolio)?;
        let ledger = ledger_repo.load_or_seed(seed::default_ledger)?;
        let journal = journal_repo.load_or_seed(seed::default_journal)?;
        let settings = settings_repo.load_or_seed(Settings::default)?;

        Ok(Self {
            store,
            portfolio,
            ledger,
            journal,
            settings,
            portfolio_repo,
            ledger_repo,
            journal_repo,
            settings_repo,
            portfolio_service: PortfolioService::new(),
            ledger_service: LedgerService::new(),
            journal_service: JournalService::new(),
            analytics_service: AnalyticsService::new(),
        })
    }

    // ── Portfolio ───────────────────────────────────────────────────

    /// Validate and add a new holding, then persist the portfolio.
    /// Returns the id of the added holding.
    pub fn add_holding(&mut self, draft: HoldingDraft) -> Result<Uuid, CoreError> {
        let holding = self
            .portfolio_service
            .add_holding(&mut self.portfolio, draft)?;
        self.portfolio_repo.save(&self.portfolio)?;
        Ok(holding.id)
    }

    /// Remove a holding by id, then persist. Returns the removed holding.
    pub fn remove_holding(&mut self, id: Uuid) -> Result<Holding, CoreError> {
        let removed = self
            .portfolio_service
            .remove_holding(&mut self.portfolio, id)?;
        self.portfolio_repo.save(&self.portfolio)?;
        Ok(removed)
    }

    /// Set the uninvested cash balance, then persist.
    pub fn set_cash(&mut self, amount: f64) -> Result<(), CoreError> {
        self.portfolio_service.set_cash(&mut self.portfolio, amount)?;
        self.portfolio_repo.save(&self.portfolio)
    }

    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.portfolio.holdings
    }

    #[must_use]
    pub fn cash_available(&self) -> f64 {
        self.portfolio.cash_available
    }

    /// Get a single holding by id.
    #[must_use]
    pub fn get_holding(&self, id: Uuid) -> Option<&Holding> {
        self.portfolio.holdings.iter().find(|h| h.id == id)
    }

    /// Totals and sector allocation, recomputed from current holdings.
    #[must_use]
    pub fn portfolio_summary(&self) -> PortfolioSummary {
        self.analytics_service.portfolio_summary(&self.portfolio)
    }

    // ── Spending ledger ─────────────────────────────────────────────

    /// Validate and add an expense/income entry, then persist the ledger.
    /// Returns the id of the added entry.
    pub fn add_entry(&mut self, draft: EntryDraft) -> Result<Uuid, CoreError> {
        let entry = self.ledger_service.build_entry(draft)?;
        let id = entry.id;
        self.ledger_repo.append(&mut self.ledger, entry)?;
        Ok(id)
    }

    /// Remove a ledger entry by id, then persist. Returns the removed entry.
    pub fn remove_entry(&mut self, id: Uuid) -> Result<LedgerEntry, CoreError> {
        self.ledger_repo.remove(&mut self.ledger, id)
    }

    #[must_use]
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// Entries in a single category, preserving insertion order.
    #[must_use]
    pub fn entries_for_category(&self, category: Category) -> Vec<&LedgerEntry> {
        self.ledger_service
            .entries_for_category(&self.ledger, category)
    }

    /// Budget lines and cash-flow totals, recomputed from the ledger.
    #[must_use]
    pub fn budget_report(&self) -> BudgetReport {
        self.analytics_service.budget_report(&self.ledger)
    }

    // ── Trading journal ─────────────────────────────────────────────

    /// Validate and add a trade, then persist the journal.
    /// Returns the id of the added trade.
    pub fn add_trade(&mut self, draft: TradeDraft) -> Result<Uuid, CoreError> {
        let trade = self.journal_service.build_trade(draft)?;
        let id = trade.id;
        self.journal_repo.append(&mut self.journal, trade)?;
        Ok(id)
    }

    /// Remove a trade by id, then persist. Returns the removed trade.
    pub fn remove_trade(&mut self, id: Uuid) -> Result<Trade, CoreError> {
        self.journal_repo.remove(&mut self.journal, id)
    }

    /// Replace an existing trade wholesale (matched by id), then persist.
    pub fn update_trade(&mut self, trade: Trade) -> Result<(), CoreError> {
        self.journal_service.validate_update(&trade)?;
        self.journal_repo.replace(&mut self.journal, trade)
    }

    #[must_use]
    pub fn trades(&self) -> &[Trade] {
        &self.journal
    }

    /// Trades matching a status filter, preserving insertion order.
    #[must_use]
    pub fn trades_with_status(&self, status: TradeStatus) -> Vec<&Trade> {
        self.journal_service.trades_with_status(&self.journal, status)
    }

    /// Win rate and cumulative P&L, recomputed from the journal.
    #[must_use]
    pub fn journal_summary(&self) -> JournalSummary {
        self.analytics_service.journal_summary(&self.journal)
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Set the display currency. Must be a 3-letter alphabetic code.
    pub fn set_currency(&mut self, currency: String) -> Result<(), CoreError> {
        let trimmed = currency.trim().to_uppercase();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::Validation(format!(
                "Invalid currency code '{currency}': must be exactly 3 ASCII letters (e.g., USD, EUR)"
            )));
        }
        self.settings.currency = trimmed;
        self.settings_repo.save(&self.settings)
    }

    /// Set an API key for a provider (e.g., "newsapi"), then persist.
    /// Takes effect the next time a market watcher is built.
    pub fn set_api_key(&mut self, provider: String, key: String) -> Result<(), CoreError> {
        self.settings.api_keys.insert(provider, key);
        self.settings_repo.save(&self.settings)
    }

    /// Remove an API key for a provider. Returns whether a key was removed.
    pub fn remove_api_key(&mut self, provider: &str) -> Result<bool, CoreError> {
        let removed = self.settings.api_keys.remove(provider).is_some();
        if removed {
            self.settings_repo.save(&self.settings)?;
        }
        Ok(removed)
    }

    // ── Market data ─────────────────────────────────────────────────

    /// Build a market watcher wired to the live providers, using the
    /// configured news API key (if any).
    #[must_use]
    pub fn market_watcher(&self) -> MarketWatcher {
        let market: Arc<dyn MarketDataProvider> = Arc::new(CoinGeckoProvider::new());
        let news: Arc<dyn NewsProvider> = Arc::new(NewsApiProvider::new(
            self.settings.api_keys.get("newsapi").cloned(),
        ));
        MarketWatcher::new(market, news)
    }

    /// The refresh period from settings.
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.settings.refresh_interval_secs)
    }

    // ── Internal / test support ─────────────────────────────────────

    /// The underlying slot store (shared).
    #[must_use]
    pub fn store(&self) -> Arc<dyn SlotStore> {
        Arc::clone(&self.store)
    }
}
