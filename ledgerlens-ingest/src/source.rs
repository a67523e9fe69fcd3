//! Statement sources: how a `BankStatement` reaches the analyzer.
//!
//! The analyzer only ever sees the loaded statement, never the source.

use anyhow::{Context, Result};
use ledgerlens_core::BankStatement;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assemble::StatementAssembler;
use crate::bank::statement_bank_name;
use crate::parsers::csv_transactions::read_transactions_csv;
use crate::parsers::extraction_json::parse_extraction_batch;
use crate::types::StatementHeader;

/// Anything that can produce a statement for analysis
pub trait StatementSource {
    fn load(&self) -> Result<BankStatement>;
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// A complete statement serialized as JSON
#[derive(Debug, Clone)]
pub struct JsonStatementFile {
    pub path: PathBuf,
}

impl JsonStatementFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatementSource for JsonStatementFile {
    fn load(&self) -> Result<BankStatement> {
        let text = read_text(&self.path)?;
        serde_json::from_str(&text).with_context(|| format!("parse {}", self.path.display()))
    }
}

/// A transactions CSV plus header fields supplied by the caller
#[derive(Debug, Clone)]
pub struct CsvStatementFile {
    pub path: PathBuf,
    pub header: StatementHeader,
}

impl CsvStatementFile {
    pub fn new(path: impl Into<PathBuf>, header: StatementHeader) -> Self {
        Self {
            path: path.into(),
            header,
        }
    }
}

impl StatementSource for CsvStatementFile {
    fn load(&self) -> Result<BankStatement> {
        let txns = read_transactions_csv(&self.path)?;
        let mut statement = BankStatement::new(
            statement_bank_name(&self.header.bank_name),
            self.header.account_holder.clone(),
            self.header.account_number.clone(),
        )
        .with_transactions(txns);
        statement.ifsc = self.header.ifsc.clone();
        Ok(statement)
    }
}

/// Several extraction batch files merged in order into one statement
#[derive(Debug, Clone)]
pub struct BatchedExtraction {
    pub bank: String,
    pub paths: Vec<PathBuf>,
}

impl BatchedExtraction {
    pub fn new(bank: impl Into<String>, paths: Vec<PathBuf>) -> Self {
        Self {
            bank: bank.into(),
            paths,
        }
    }
}

impl StatementSource for BatchedExtraction {
    fn load(&self) -> Result<BankStatement> {
        let mut assembler = StatementAssembler::new(&self.bank);
        for path in &self.paths {
            // unreadable files are errors; malformed JSON only drops the batch
            let text = read_text(path)?;
            assembler.push(parse_extraction_batch(&text));
        }
        Ok(assembler.finish())
    }
}

/// A statement already in memory (fixtures, upstream callers)
#[derive(Debug, Clone)]
pub struct InMemorySource(pub BankStatement);

impl StatementSource for InMemorySource {
    fn load(&self) -> Result<BankStatement> {
        Ok(self.0.clone())
    }
}
