pub mod analytics;
pub mod holding;
pub mod ledger;
pub mod market;
pub mod seed;
pub mod settings;
pub mod trade;
