pub mod analytics_service;
pub mod journal_service;
pub mod ledger_service;
pub mod market_watcher;
pub mod portfolio_service;
