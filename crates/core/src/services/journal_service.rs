use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::trade::{Trade, TradeSide, TradeStatus};

/// Draft of a new journal entry, as entered in the add-trade form.
#[derive(Debug, Clone)]
pub struct TradeDraft {
    pub symbol: String,
    pub side: TradeSide,
    pub quantity: f64,
    pub price: f64,
    pub date: NaiveDate,
    pub status: TradeStatus,
    pub strategy: String,
    pub pnl: f64,
}

/// Manages the trading journal: validation-gated create/destroy/update.
pub struct JournalService;

impl JournalService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a draft and build the trade to append.
    ///
    /// Rules: symbol non-blank; quantity and price positive. P&L is
    /// accepted as entered (manual override for multi-fill trades).
    pub fn build_trade(&self, draft: TradeDraft) -> Result<Trade, CoreError> {
        self.validate(&draft)?;
        Ok(Trade::new(
            draft.symbol,
            draft.side,
            draft.quantity,
            draft.price,
            draft.date,
            draft.status,
            draft.strategy,
            draft.pnl,
        ))
    }

    /// Validate an edited trade before it replaces the stored record.
    pub fn validate_update(&self, trade: &Trade) -> Result<(), CoreError> {
        if trade.symbol.trim().is_empty() {
            return Err(CoreError::Validation("Symbol is required".into()));
        }
        if !(trade.quantity.is_finite() && trade.quantity > 0.0) {
            return Err(CoreError::Validation("Quantity must be positive".into()));
        }
        if !(trade.price.is_finite() && trade.price > 0.0) {
            return Err(CoreError::Validation("Price must be positive".into()));
        }
        Ok(())
    }

    /// Trades matching a status filter, preserving insertion order.
    pub fn trades_with_status<'a>(
        &self,
        trades: &'a [Trade],
        status: TradeStatus,
    ) -> Vec<&'a Trade> {
        trades.iter().filter(|t| t.status == status).collect()
    }

    fn validate(&self, draft: &TradeDraft) -> Result<(), CoreError> {
        if draft.symbol.trim().is_empty() {
            return Err(CoreError::Validation("Symbol is required".into()));
        }
        if !(draft.quantity.is_finite() && draft.quantity > 0.0) {
            return Err(CoreError::Validation("Quantity must be positive".into()));
        }
        if !(draft.price.is_finite() && draft.price > 0.0) {
            return Err(CoreError::Validation("Price must be positive".into()));
        }
        Ok(())
    }
}

impl Default for JournalService {
    fn default() -> Self {
        Self::new()
    }
}
