use crate::errors::CoreError;
use crate::models::holding::{Holding, PortfolioBook, Sector};

/// Draft of a new holding, as entered in the add-position form.
/// Validated by [`PortfolioService::add_holding`] before anything is stored.
#[derive(Debug, Clone)]
pub struct HoldingDraft {
    pub symbol: String,
    pub name: String,
    pub shares: f64,
    pub avg_price: f64,
    pub current_price: f64,
    pub sector: Sector,
}

/// Manages the holdings collection: validation-gated create/destroy plus
/// cash adjustments.
///
/// Pure business logic — no I/O. Persistence is the caller's concern.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a draft and append the resulting holding.
    ///
    /// Rules: symbol must be non-blank; shares, average price, and current
    /// price must all be positive. On failure nothing is added.
    pub fn add_holding(
        &self,
        book: &mut PortfolioBook,
        draft: HoldingDraft,
    ) -> Result<Holding, CoreError> {
        self.validate_draft(&draft)?;
        let holding = Holding::new(
            draft.symbol,
            draft.name,
            draft.shares,
            draft.avg_price,
            draft.current_price,
            draft.sector,
        );
        book.holdings.push(holding.clone());
        Ok(holding)
    }

    /// Remove a holding by id. Other records are untouched.
    pub fn remove_holding(
        &self,
        book: &mut PortfolioBook,
        id: uuid::Uuid,
    ) -> Result<Holding, CoreError> {
        let idx = book
            .holdings
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;
        Ok(book.holdings.remove(idx))
    }

    /// Set the uninvested cash balance. Must be non-negative.
    pub fn set_cash(&self, book: &mut PortfolioBook, amount: f64) -> Result<(), CoreError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CoreError::Validation(format!(
                "Cash balance must be a non-negative number, got {amount}"
            )));
        }
        book.cash_available = amount;
        Ok(())
    }

    fn validate_draft(&self, draft: &HoldingDraft) -> Result<(), CoreError> {
        if draft.symbol.trim().is_empty() {
            return Err(CoreError::Validation("Symbol is required".into()));
        }
        if !(draft.shares.is_finite() && draft.shares > 0.0) {
            return Err(CoreError::Validation("Share count must be positive".into()));
        }
        if !(draft.avg_price.is_finite() && draft.avg_price > 0.0) {
            return Err(CoreError::Validation(
                "Average price must be positive".into(),
            ));
        }
        if !(draft.current_price.is_finite() && draft.current_price > 0.0) {
            return Err(CoreError::Validation(
                "Current price must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
