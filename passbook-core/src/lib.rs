//! passbook-core: transaction record types and the deterministic categorizer
//! shared by the rule-based and AI extraction paths.

pub mod categorizer;
pub mod transaction;

pub use categorizer::{categorize, CategoryRule, Keyword, CATEGORY_RULES};
pub use transaction::{Category, Transaction, TransactionType};
