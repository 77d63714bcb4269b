//! JSON contract of the model replies and their mapping into `Transaction`.

use std::path::Path;

use chrono::NaiveDate;
use passbook_core::{categorize, Transaction, TransactionType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One row of the statement reply array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiStatementRow {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// Receipt reply; any field may be null when the model is unsure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptExtraction {
    #[serde(default)]
    pub total_amount: Option<Decimal>,
    #[serde(default)]
    pub transaction_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ReceiptExtraction {
    /// Build an expense from a receipt, or `None` without a positive total
    /// and a date.
    pub fn into_transaction(
        self,
        owner_id: &str,
        receipt_source: impl Into<String>,
    ) -> Option<Transaction> {
        let amount = self.total_amount.filter(|a| *a > Decimal::ZERO)?;
        let date = self.transaction_date?;
        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "Receipt".to_string());
        let category = categorize(Some(description.as_str()), true);

        let mut tx = Transaction::new(
            owner_id,
            date,
            description,
            amount,
            TransactionType::Expense,
            category,
        );
        tx.receipt_source = Some(receipt_source.into());
        Some(tx)
    }
}

/// Strip Markdown code fences the model tends to wrap JSON in.
pub fn clean_model_reply(reply: &str) -> String {
    reply.replace("```json", "").replace("```", "").trim().to_string()
}

pub fn parse_statement_reply(reply: &str) -> Result<Vec<AiStatementRow>> {
    Ok(serde_json::from_str(&clean_model_reply(reply))?)
}

pub fn parse_receipt_reply(reply: &str) -> Result<ReceiptExtraction> {
    Ok(serde_json::from_str(&clean_model_reply(reply))?)
}

/// Map statement rows into transactions, categorized by the same rule table
/// as the rule-based parser.
pub fn map_statement_rows(rows: Vec<AiStatementRow>, owner_id: &str) -> Vec<Transaction> {
    rows.into_iter()
        .map(|row| {
            let category = categorize(
                Some(row.description.as_str()),
                row.kind == TransactionType::Expense,
            );
            Transaction::new(
                owner_id,
                row.date,
                row.description,
                row.amount.abs(),
                row.kind,
                category,
            )
        })
        .collect()
}

pub fn receipt_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
