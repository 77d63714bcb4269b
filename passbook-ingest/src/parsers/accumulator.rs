//! Description accumulator: the line-by-line state machine.
//!
//! A transaction's description routinely spans several physical lines, with
//! page footers in between. The accumulator keeps the most recent transaction
//! open, buffers its continuation lines, and finalizes it (merge + categorize)
//! when the next anchor arrives or input ends.
//!
//! A rejected anchor does not stop buffering: once any transaction exists,
//! the lines that follow are merged into the last finished one and its
//! category is recomputed.

use chrono::NaiveDate;
use passbook_core::{categorize, Transaction, TransactionType};
use rust_decimal::Decimal;
use tracing::trace;

use crate::fields::{parse_amount, parse_date};
use crate::parsers::anchor::{AnchorFields, AnchorPattern};

const UNKNOWN_DESCRIPTION: &str = "Unknown Transaction";

/// A transaction whose description may still grow.
#[derive(Debug, Clone, PartialEq)]
struct OpenTransaction {
    date: NaiveDate,
    fragment: String,
    amount: Decimal,
    kind: TransactionType,
}

impl OpenTransaction {
    /// Build from an anchor, or `None` when the date is invalid or neither
    /// amount is positive.
    fn from_anchor(fields: &AnchorFields<'_>) -> Option<Self> {
        let date = parse_date(fields.date)?;
        let debit = parse_amount(fields.debit);
        let credit = parse_amount(fields.credit);

        let (amount, kind) = if debit > Decimal::ZERO {
            (debit, TransactionType::Expense)
        } else if credit > Decimal::ZERO {
            (credit, TransactionType::Income)
        } else {
            return None;
        };

        let fragment = if fields.description.trim().is_empty() {
            UNKNOWN_DESCRIPTION.to_string()
        } else {
            fields.description.to_string()
        };

        Some(Self {
            date,
            fragment,
            amount,
            kind,
        })
    }

    fn finalize(self, owner_id: &str, continuation: &[String]) -> Transaction {
        let description = merge_description(&self.fragment, continuation);
        let category = categorize(
            Some(description.as_str()),
            self.kind == TransactionType::Expense,
        );

        Transaction::new(
            owner_id,
            self.date,
            description,
            self.amount,
            self.kind,
            category,
        )
    }
}

#[derive(Debug)]
enum State {
    /// Nothing produced yet, so lines are header noise
    Idle,
    /// Continuation lines accumulate for `open`
    Buffering {
        open: OpenTransaction,
        buffer: Vec<String>,
    },
    /// An anchor was rejected; lines still extend the last finished transaction
    Trailing { buffer: Vec<String> },
}

/// Consumes the lines of a transaction section and produces finalized
/// transactions in anchor order.
#[derive(Debug)]
pub struct DescriptionAccumulator<'p> {
    pattern: &'p AnchorPattern,
    owner_id: String,
    state: State,
    finished: Vec<Transaction>,
}

impl<'p> DescriptionAccumulator<'p> {
    pub fn new(pattern: &'p AnchorPattern, owner_id: impl Into<String>) -> Self {
        Self {
            pattern,
            owner_id: owner_id.into(),
            state: State::Idle,
            finished: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: &str) {
        match self.pattern.classify(line) {
            Some(fields) => self.on_anchor(&fields),
            None => self.on_continuation(line),
        }
    }

    /// End of input: close the last transaction and hand back everything.
    pub fn finish(mut self) -> Vec<Transaction> {
        self.finalize_open();
        self.finished
    }

    fn on_anchor(&mut self, fields: &AnchorFields<'_>) {
        self.finalize_open();

        match OpenTransaction::from_anchor(fields) {
            Some(open) => {
                self.state = State::Buffering {
                    open,
                    buffer: Vec::new(),
                };
            }
            None => {
                trace!(
                    date = fields.date,
                    debit = ?fields.debit,
                    credit = ?fields.credit,
                    "skipping anchor without valid date or positive amount"
                );
                if !self.finished.is_empty() {
                    self.state = State::Trailing { buffer: Vec::new() };
                }
            }
        }
    }

    fn on_continuation(&mut self, line: &str) {
        let buffer = match &mut self.state {
            State::Idle => return,
            State::Buffering { buffer, .. } | State::Trailing { buffer } => buffer,
        };
        if !self.pattern.is_noise(line) {
            buffer.push(line.trim().to_string());
        }
    }

    fn finalize_open(&mut self) {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => {}
            State::Buffering { open, buffer } => {
                self.finished.push(open.finalize(&self.owner_id, &buffer));
            }
            State::Trailing { buffer } if buffer.is_empty() => {}
            State::Trailing { buffer } => {
                if let Some(last) = self.finished.last_mut() {
                    last.description = merge_description(&last.description, &buffer);
                    last.category = categorize(Some(last.description.as_str()), last.is_expense());
                }
            }
        }
    }
}

fn merge_description(head: &str, continuation: &[String]) -> String {
    collapse_whitespace(&format!("{} {}", head, continuation.join(" ")))
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
