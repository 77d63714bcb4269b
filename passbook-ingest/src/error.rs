//! Error types for statement ingestion.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Debug, Error)]
pub enum IngestError {
    /// No document text was supplied, or rendering produced nothing.
    #[error("No text could be extracted from the document")]
    EmptyText,

    /// The document path does not exist.
    #[error("Document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    /// The document extension has no renderer.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The renderer failed to turn the document into text.
    #[error("Failed to extract text from document: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line pattern failed to compile.
    #[error("Invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),
}
