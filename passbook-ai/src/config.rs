//! Credential and endpoint configuration for the model API.
//!
//! Validation is an explicit step: call [`AiConfig::from_env`] once at
//! startup and decide what to do with the error. Nothing here aborts the
//! process, and the rule-based parser never needs it.

use crate::error::{AiError, Result};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "PASSBOOK_GEMINI_MODEL";
pub const BASE_URL_VAR: &str = "PASSBOOK_GEMINI_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1";
pub const DEFAULT_STATEMENT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_RECEIPT_MODEL: &str = "gemini-2.5-flash";

#[derive(Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub base_url: String,
    pub statement_model: String,
    pub receipt_model: String,
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("statement_model", &self.statement_model)
            .field("receipt_model", &self.receipt_model)
            .finish()
    }
}

impl AiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            statement_model: DEFAULT_STATEMENT_MODEL.to_string(),
            receipt_model: DEFAULT_RECEIPT_MODEL.to_string(),
        }
    }

    /// Read and validate configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`AiConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = present(API_KEY_VAR).ok_or(AiError::MissingApiKey(API_KEY_VAR))?;
        let mut config = Self::new(api_key.trim());

        if let Some(model) = present(MODEL_VAR) {
            config.statement_model = model.clone();
            config.receipt_model = model;
        }
        if let Some(base) = present(BASE_URL_VAR) {
            config.base_url = base.trim_end_matches('/').to_string();
        }

        Ok(config)
    }

    /// `generateContent` endpoint for a model (key is sent as a header).
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}
