//! Minimal Gemini `generateContent` client.

use std::fs;
use std::path::Path;

use base64::Engine;
use passbook_core::Transaction;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AiConfig;
use crate::contract::{
    map_statement_rows, parse_receipt_reply, parse_statement_reply, receipt_mime_type,
    ReceiptExtraction,
};
use crate::error::{AiError, Result};
use crate::prompts::{statement_prompt, RECEIPT_PROMPT};

#[derive(Debug, Serialize)]
struct Req {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct Resp {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<RespPart>,
}

#[derive(Debug, Deserialize)]
struct RespPart {
    text: Option<String>,
}

impl Resp {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: AiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Extract statement transactions from rendered text.
    pub async fn parse_statement(&self, text: &str, owner_id: &str) -> Result<Vec<Transaction>> {
        info!(model = %self.config.statement_model, "sending statement to Gemini");
        let parts = vec![Part::Text {
            text: statement_prompt(text),
        }];
        let reply = self.generate(&self.config.statement_model, parts).await?;
        let rows = parse_statement_reply(&reply)?;
        debug!(rows = rows.len(), "model returned statement rows");
        Ok(map_statement_rows(rows, owner_id))
    }

    /// Extract total, date and merchant from a receipt image.
    pub async fn parse_receipt(&self, image: &Path) -> Result<ReceiptExtraction> {
        info!(model = %self.config.receipt_model, path = %image.display(), "sending receipt image to Gemini");
        let bytes = fs::read(image)?;
        let parts = vec![
            Part::Text {
                text: RECEIPT_PROMPT.to_string(),
            },
            Part::Inline {
                inline_data: InlineData {
                    mime_type: receipt_mime_type(image).to_string(),
                    data: base64::engine::general_purpose::STANDARD.encode(bytes),
                },
            },
        ];
        let reply = self.generate(&self.config.receipt_model, parts).await?;
        parse_receipt_reply(&reply)
    }

    async fn generate(&self, model: &str, parts: Vec<Part>) -> Result<String> {
        let body = Req {
            contents: vec![Content { parts }],
        };

        let resp = self
            .http
            .post(self.config.endpoint(model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let out: Resp = resp.json().await?;
        out.first_text()
            .ok_or_else(|| AiError::InvalidResponse("no text part in candidates".to_string()))
    }
}
