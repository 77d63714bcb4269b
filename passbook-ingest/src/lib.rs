//! passbook-ingest: rule-based extraction of transactions from rendered
//! bank-statement text, plus the document renderers that feed it.

pub mod error;
pub mod fields;
pub mod lines;
pub mod parsers;
pub mod render;
pub mod statement;

pub use error::{IngestError, Result};
pub use fields::{parse_amount, parse_date};
pub use lines::{locate_start, split_lines, START_MARKER};
pub use parsers::{AnchorFields, AnchorPattern, DescriptionAccumulator};
pub use render::{is_supported_document, supported_formats, DocumentRenderer, FileRenderer};
pub use statement::{parse_statement_text, process_document, process_text, StatementOutcome};
