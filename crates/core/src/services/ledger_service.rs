use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::ledger::{Category, EntryType, LedgerEntry};

/// Draft of a new ledger entry, as entered in the add-transaction form.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub category: Category,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub entry_type: EntryType,
}

/// Manages the spending ledger: validation-gated create/destroy.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a draft and build the entry to append.
    ///
    /// Rules: description non-blank, amount positive. Amounts are stored
    /// positive regardless of entry type; the type flag carries the sign.
    pub fn build_entry(&self, draft: EntryDraft) -> Result<LedgerEntry, CoreError> {
        if draft.description.trim().is_empty() {
            return Err(CoreError::Validation("Description is required".into()));
        }
        if !(draft.amount.is_finite() && draft.amount > 0.0) {
            return Err(CoreError::Validation("Amount must be positive".into()));
        }
        Ok(LedgerEntry::new(
            draft.category,
            draft.description,
            draft.amount,
            draft.date,
            draft.entry_type,
        ))
    }

    /// Entries in a single category, preserving insertion order.
    pub fn entries_for_category<'a>(
        &self,
        entries: &'a [LedgerEntry],
        category: Category,
    ) -> Vec<&'a LedgerEntry> {
        entries.iter().filter(|e| e.category == category).collect()
    }

    /// Entries of one type (expense or income), preserving insertion order.
    pub fn entries_of_type<'a>(
        &self,
        entries: &'a [LedgerEntry],
        entry_type: EntryType,
    ) -> Vec<&'a LedgerEntry> {
        entries
            .iter()
            .filter(|e| e.entry_type == entry_type)
            .collect()
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
