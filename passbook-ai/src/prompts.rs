//! Prompt text sent to the model.

pub const RECEIPT_PROMPT: &str = r#"You are an expert system for extracting structured data from receipts.

Extract these fields:
- totalAmount (number)
- transactionDate (YYYY-MM-DD)
- description (merchant/store name)

Rules:
- Respond with ONLY valid JSON
- If a value is unclear, use null
- Do not include markdown or extra text

Example:
{ "totalAmount": 249.50, "transactionDate": "2025-07-28", "description": "Reliance Fresh" }
"#;

const STATEMENT_RULES: &str = r#"Return JSON array with:
- date (YYYY-MM-DD)
- description
- amount (number)
- type ("expense" or "income")

Rules:
- Only valid transactions
- Ignore summaries, balances
- Return only JSON
- If none, return []

Example:
[
  {
    "date": "2025-07-21",
    "description": "UPI Debit Paytm",
    "amount": 1500,
    "type": "expense"
  }
]
"#;

/// Statement extraction prompt with the document text embedded.
pub fn statement_prompt(text: &str) -> String {
    format!(
        "You are an expert financial data extraction tool. Extract all transactions.\n\n\
         Text:\n---\n{text}\n---\n\n{STATEMENT_RULES}"
    )
}
