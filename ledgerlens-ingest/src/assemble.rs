//! Merge per-batch extraction results into a single statement.
//!
//! Header fields: the first batch that carries a real value wins.
//! Transactions: appended in batch order.

use ledgerlens_core::{BankStatement, Transaction};
use tracing::debug;

use crate::bank::{UNKNOWN, statement_bank_name};
use crate::types::ExtractedBatch;

/// Literal the extractor echoes back when it copies the schema instead of a value
const SCHEMA_PLACEHOLDER: &str = "string";

#[derive(Debug, Clone)]
pub struct StatementAssembler {
    bank_name: String,
    account_holder: String,
    account_number: String,
    ifsc: String,
    transactions: Vec<Transaction>,
    batches: usize,
}

fn real_value(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != SCHEMA_PLACEHOLDER)
}

fn fill(slot: &mut String, value: Option<&str>) {
    if *slot == UNKNOWN {
        if let Some(v) = real_value(value) {
            *slot = v.to_string();
        }
    }
}

impl StatementAssembler {
    /// `bank` is the detected bank text; it is normalized here.
    pub fn new(bank: &str) -> Self {
        Self {
            bank_name: statement_bank_name(bank),
            account_holder: UNKNOWN.to_string(),
            account_number: UNKNOWN.to_string(),
            ifsc: UNKNOWN.to_string(),
            transactions: Vec::new(),
            batches: 0,
        }
    }

    pub fn push(&mut self, batch: ExtractedBatch) -> &mut Self {
        fill(&mut self.account_holder, batch.account_holder.as_deref());
        fill(&mut self.account_number, batch.account_number.as_deref());
        fill(&mut self.ifsc, batch.ifsc.as_deref());

        self.batches += 1;
        debug!(
            batch = self.batches,
            rows = batch.transactions.len(),
            "merged extraction batch"
        );
        self.transactions.extend(batch.transactions);
        self
    }

    pub fn finish(self) -> BankStatement {
        BankStatement::new(self.bank_name, self.account_holder, self.account_number)
            .with_ifsc(self.ifsc)
            .with_transactions(self.transactions)
    }
}
