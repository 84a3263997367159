use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a ledger entry adds to or subtracts from net cash flow.
/// Amounts are always stored positive; the sign is implied by this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryType {
    Expense,
    Income,
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryType::Expense => write!(f, "Expense"),
            EntryType::Income => write!(f, "Income"),
        }
    }
}

/// Spending category.
///
/// `Income` doubles as the category for income entries (it carries no
/// budget ceiling). `Other` exists for entries outside the budgeted set;
/// such entries are silently excluded from the budget view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    Shopping,
    Utilities,
    Healthcare,
    Income,
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Food => write!(f, "Food"),
            Category::Transportation => write!(f, "Transportation"),
            Category::Entertainment => write!(f, "Entertainment"),
            Category::Shopping => write!(f, "Shopping"),
            Category::Utilities => write!(f, "Utilities"),
            Category::Healthcare => write!(f, "Healthcare"),
            Category::Income => write!(f, "Income"),
            Category::Other => write!(f, "Other"),
        }
    }
}

/// A single expense or income record in the spending ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier
    pub id: Uuid,

    /// Spending category
    pub category: Category,

    /// Free-text description (required, non-blank)
    pub description: String,

    /// Amount (always positive — sign implied by `entry_type`)
    pub amount: f64,

    /// Date of the transaction (daily granularity)
    pub date: NaiveDate,

    /// Expense or Income
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

impl LedgerEntry {
    pub fn new(
        category: Category,
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        entry_type: EntryType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            description: description.into(),
            amount,
            date,
            entry_type,
        }
    }
}

/// One row of the budget view: fixed ceiling vs. actual spend.
///
/// Budget lines are fully derived — recomputed from the ledger on every
/// read, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub category: Category,

    /// Fixed ceiling for this category
    pub budgeted: f64,

    /// Sum of EXPENSE entries in this category
    pub spent: f64,

    /// budgeted − spent (negative when over budget)
    pub remaining: f64,
}

/// The fixed per-category budget ceilings, in display order.
/// Categories outside this table (Income, Other) carry no budget line.
pub const BUDGET_CEILINGS: [(Category, f64); 6] = [
    (Category::Food, 500.0),
    (Category::Transportation, 200.0),
    (Category::Entertainment, 150.0),
    (Category::Shopping, 300.0),
    (Category::Utilities, 250.0),
    (Category::Healthcare, 200.0),
];
