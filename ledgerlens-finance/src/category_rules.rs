//! Deterministic keyword rules that label rows the extractor left as "Others".
//!
//! Only the categories the health ratios read are covered; anything else is
//! left alone. Explicit categories are never overwritten.

use anyhow::Result;
use ledgerlens_core::{BankStatement, LOAN_REPAYMENT, RENT_EMI, SALARY};
use regex::Regex;
use tracing::debug;

/// Keyword rules in priority order
pub struct CategoryRules {
    rules: Vec<(Regex, &'static str)>,
}

impl CategoryRules {
    pub fn new() -> Result<Self> {
        let rules = vec![
            (Regex::new(r"(?i)\b(SALARY|SAL\s*CR|PAYROLL)\b")?, SALARY),
            (Regex::new(r"(?i)\b(LOAN|LN\s*REPAY)")?, LOAN_REPAYMENT),
            (Regex::new(r"(?i)\b(EMI|RENT)\b")?, RENT_EMI),
        ];
        Ok(Self { rules })
    }

    /// Category suggested by the description, if any rule matches
    pub fn suggest(&self, description: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|(re, _)| re.is_match(description))
            .map(|(_, category)| *category)
    }

    /// Relabel uncategorized rows in place; returns how many changed.
    pub fn apply(&self, statement: &mut BankStatement) -> usize {
        let mut changed = 0;
        for txn in statement.transactions.iter_mut().filter(|t| t.is_uncategorized()) {
            if let Some(category) = self.suggest(&txn.description) {
                txn.category = category.to_string();
                changed += 1;
            }
        }
        debug!(changed, "keyword categorization applied");
        changed
    }
}
