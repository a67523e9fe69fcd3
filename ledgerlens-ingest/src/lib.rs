//! ledgerlens-ingest: statement sources, extraction batch assembly, bank names and CSV/JSON readers

pub mod assemble;
pub mod bank;
pub mod parsers;
pub mod source;
pub mod types;

pub use assemble::StatementAssembler;
pub use bank::{GENERIC_BANK, UNKNOWN, normalize_bank_name, statement_bank_name};
pub use source::{BatchedExtraction, CsvStatementFile, InMemorySource, JsonStatementFile, StatementSource};
pub use types::{ExtractedBatch, StatementHeader};
