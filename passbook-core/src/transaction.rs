//! Transaction record types produced by statement extraction

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single extracted transaction.
///
/// Both the rule-based statement parser and the AI fallback produce this exact
/// shape, so callers can treat the two paths interchangeably.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Opaque owner identifier, passed through unchanged
    pub owner_id: String,
    /// Always non-negative; direction lives in `kind`
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: Category,
    pub description: String,
    /// Serialized as YYYY-MM-DD
    pub date: NaiveDate,
    /// Reserved for receipt-derived transactions; statements leave it empty
    pub receipt_source: Option<String>,
}

impl Transaction {
    /// Create a statement-derived transaction (no receipt source).
    pub fn new(
        owner_id: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        kind: TransactionType,
        category: Category,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            amount,
            kind,
            category,
            description: description.into(),
            date,
            receipt_source: None,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

/// Direction of money movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of category labels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Salary")]
    Salary,
    #[serde(rename = "Investment")]
    Investment,
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Travel")]
    Travel,
    #[serde(rename = "Other Expenses")]
    OtherExpenses,
    #[serde(rename = "Other Income")]
    OtherIncome,
}

impl Category {
    /// Human-readable label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Investment => "Investment",
            Category::FoodAndDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::BillsAndUtilities => "Bills & Utilities",
            Category::Healthcare => "Healthcare",
            Category::Travel => "Travel",
            Category::OtherExpenses => "Other Expenses",
            Category::OtherIncome => "Other Income",
        }
    }

    /// Fallback bucket for a direction when no keyword rule matches
    pub fn other(is_expense: bool) -> Self {
        if is_expense {
            Category::OtherExpenses
        } else {
            Category::OtherIncome
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
