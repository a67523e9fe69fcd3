use ledgerlens_core::Transaction;
use serde::{Deserialize, Serialize};

/// One extraction result covering a few statement pages.
///
/// Header fields are optional because most pages do not print them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedBatch {
    #[serde(default)]
    pub account_holder: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub ifsc: Option<String>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Header fields supplied alongside a bare transaction list (e.g. a CSV export)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementHeader {
    pub bank_name: String,
    pub account_holder: String,
    pub account_number: String,
    pub ifsc: Option<String>,
}
