//! passbook-ai: generative-model fallback for statement and receipt extraction.
//!
//! The JSON contract and its mapping live here so that AI-extracted
//! transactions come out in exactly the same shape (and with the same
//! categories) as the rule-based parser's.

pub mod config;
pub mod contract;
pub mod error;
pub mod gemini;
pub mod prompts;

pub use config::AiConfig;
pub use contract::{
    clean_model_reply, map_statement_rows, parse_receipt_reply, parse_statement_reply,
    receipt_mime_type, AiStatementRow, ReceiptExtraction,
};
pub use error::{AiError, Result};
pub use gemini::GeminiClient;
