//! Statement orchestration: text in, envelope out.
//!
//! `parse_statement_text` is the inner step and reports errors normally.
//! `process_text` and `process_document` are the outer boundary: every
//! failure becomes a `StatementOutcome` with `success = false`.

use std::path::Path;

use passbook_core::Transaction;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::error::{IngestError, Result};
use crate::lines::{locate_start, split_lines};
use crate::parsers::{AnchorPattern, DescriptionAccumulator};
use crate::render::DocumentRenderer;

const RAW_TEXT_PREVIEW_CHARS: usize = 1500;

/// Success/failure envelope returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementOutcome {
    pub success: bool,
    pub transactions: Vec<Transaction>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    pub raw_text: Option<String>,
}

impl StatementOutcome {
    pub fn success(transactions: Vec<Transaction>, text: &str) -> Self {
        Self {
            success: true,
            count: transactions.len(),
            transactions,
            error: None,
            raw_text: Some(preview(text, RAW_TEXT_PREVIEW_CHARS)),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            transactions: Vec::new(),
            count: 0,
            error: Some(message.into()),
            raw_text: None,
        }
    }
}

/// Extract transactions from rendered statement text.
///
/// Returns an empty list when the start marker is absent.
pub fn parse_statement_text(text: &str, owner_id: &str) -> Result<Vec<Transaction>> {
    let lines = split_lines(text);
    let section = locate_start(&lines);
    if section.is_empty() {
        warn!("could not find the start of transaction data");
        return Ok(Vec::new());
    }

    let pattern = AnchorPattern::new()?;
    let mut acc = DescriptionAccumulator::new(&pattern, owner_id);
    for line in section {
        acc.push_line(line);
    }

    let transactions = acc.finish();
    debug!(count = transactions.len(), "extracted statement transactions");
    Ok(transactions)
}

/// Full text entry point. Never fails; errors come back inside the envelope.
pub fn process_text(text: &str, owner_id: &str) -> StatementOutcome {
    match checked_parse(text, owner_id) {
        Ok(transactions) => StatementOutcome::success(transactions, text),
        Err(e) => {
            error!("statement processing failed: {e}");
            StatementOutcome::failure(e.to_string())
        }
    }
}

/// Render the document at `path` and process its text.
pub fn process_document(
    renderer: &dyn DocumentRenderer,
    path: &Path,
    owner_id: &str,
) -> StatementOutcome {
    let rendered = if path.exists() {
        renderer.render(path)
    } else {
        Err(IngestError::DocumentNotFound(path.to_path_buf()))
    };

    match rendered {
        Ok(text) => process_text(&text, owner_id),
        Err(e) => {
            error!(path = %path.display(), "statement processing failed: {e}");
            StatementOutcome::failure(e.to_string())
        }
    }
}

fn checked_parse(text: &str, owner_id: &str) -> Result<Vec<Transaction>> {
    if text.trim().is_empty() {
        return Err(IngestError::EmptyText);
    }
    parse_statement_text(text, owner_id)
}

fn preview(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
