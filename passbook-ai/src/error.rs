//! Error types for the AI extraction fallback.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AiError>;

#[derive(Debug, Error)]
pub enum AiError {
    /// The API key environment variable is unset or blank.
    #[error("{0} is not defined")]
    MissingApiKey(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the model API.
    #[error("model API error: {status} {body}")]
    Api { status: u16, body: String },

    /// The reply had no text part, or the text was not the expected JSON.
    #[error("invalid model response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
