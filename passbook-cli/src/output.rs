//! Rendering of extraction results to stdout.

use anyhow::{Context, Result};
use clap::ValueEnum;
use passbook_core::Transaction;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

pub fn write_json<T: Serialize>(mut out: impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, value).context("serialize json")?;
    writeln!(out)?;
    Ok(())
}

/// One row per transaction, in statement order.
pub fn write_csv(out: impl Write, transactions: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["date", "type", "amount", "category", "description", "owner_id"])?;
    for tx in transactions {
        wtr.write_record([
            tx.date.format("%Y-%m-%d").to_string(),
            tx.kind.to_string(),
            tx.amount.to_string(),
            tx.category.to_string(),
            tx.description.clone(),
            tx.owner_id.clone(),
        ])?;
    }
    wtr.flush().context("flush csv")?;
    Ok(())
}
