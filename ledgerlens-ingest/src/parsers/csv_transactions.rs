//! Transactions CSV reader
//!
//! Expected header (any column order, names case-insensitive):
//!   date,description,debit,credit,balance[,category,payment_mode]
//!
//! Amounts may carry thousands separators ("1,250.00"); blank debit/credit
//! cells read as 0.

use anyhow::{Context, Result, bail};
use ledgerlens_core::Transaction;
use std::io::Read;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 5] = ["date", "description", "debit", "credit", "balance"];

fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return Some(0.0);
    }
    cleaned.parse().ok()
}

/// Parse a transactions CSV from any reader.
pub fn parse_transactions_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let mut required = [0usize; 5];
    for (slot, name) in required.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = match column(name) {
            Some(idx) => idx,
            None => bail!(
                "CSV header is missing '{name}' (expected {}; got {})",
                REQUIRED_COLUMNS.join(","),
                headers.join(",")
            ),
        };
    }
    let [date, description, debit, credit, balance] = required;
    let category = column("category");
    let payment_mode = column("payment_mode");

    let mut txns = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        // header is line 1
        let line = i + 2;
        let record = result.with_context(|| format!("reading CSV line {line}"))?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let field = |idx: usize| record.get(idx).unwrap_or("");
        let amount = |idx: usize, name: &str| {
            parse_amount(field(idx))
                .with_context(|| format!("line {line}: invalid {name} amount '{}'", field(idx)))
        };

        if field(balance).is_empty() {
            bail!("line {line}: balance is required");
        }

        let mut txn = Transaction::new(
            field(date),
            field(description),
            amount(debit, "debit")?,
            amount(credit, "credit")?,
            amount(balance, "balance")?,
        );
        if let Some(c) = category.map(field).filter(|c| !c.is_empty()) {
            txn = txn.with_category(c);
        }
        if let Some(m) = payment_mode.map(field).filter(|m| !m.is_empty()) {
            txn = txn.with_payment_mode(m);
        }
        txns.push(txn);
    }

    Ok(txns)
}

/// Read a transactions CSV file.
pub fn read_transactions_csv(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_transactions_csv(file).with_context(|| format!("parsing {}", path.display()))
}
