//! Bank statement records and the derived summary types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category assigned when the extractor did not label a row
pub const DEFAULT_CATEGORY: &str = "Others";
/// Income category used by the health ratios
pub const SALARY: &str = "Salary";
/// EMI bucket for rent and instalments
pub const RENT_EMI: &str = "Rent / EMI";
/// EMI bucket for loan repayments
pub const LOAN_REPAYMENT: &str = "Loan Repayment";

fn default_label() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// One statement row: a balance observation plus a cash-flow delta
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Raw date as printed on the statement (layout varies by bank)
    pub date: String,
    pub description: String,
    /// Amount debited, 0 when the row is a credit
    #[serde(default)]
    pub debit: f64,
    /// Amount credited, 0 when the row is a debit
    #[serde(default)]
    pub credit: f64,
    /// Running balance after this row (may be negative)
    pub balance: f64,
    /// Main category (Salary, Rent / EMI, ...)
    #[serde(default = "default_label")]
    pub category: String,
    /// Payment rail (P2M, P2P, EMI, RTGS, ...)
    #[serde(default = "default_label")]
    pub payment_mode: String,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        debit: f64,
        credit: f64,
        balance: f64,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            debit,
            credit,
            balance,
            category: default_label(),
            payment_mode: default_label(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_payment_mode(mut self, payment_mode: impl Into<String>) -> Self {
        self.payment_mode = payment_mode.into();
        self
    }

    /// Amount attributed to the row's category.
    ///
    /// Credit wins when both sides are nonzero, so a reversal row that
    /// carries both only counts its credit.
    pub fn category_amount(&self) -> f64 {
        if self.credit > 0.0 {
            self.credit
        } else {
            self.debit
        }
    }

    /// True if the row has both a debit and a credit amount
    pub fn is_two_sided(&self) -> bool {
        self.credit > 0.0 && self.debit > 0.0
    }

    /// True if the row still carries the default category
    pub fn is_uncategorized(&self) -> bool {
        let c = self.category.trim();
        c.is_empty() || c == DEFAULT_CATEGORY
    }
}

/// Per-category aggregate
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryDetail {
    pub count: usize,
    pub total_amount: f64,
    pub average_amount: f64,
}

/// Lending-style ratios derived from the statement totals
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FinancialHealth {
    /// Total EMIs / income
    pub emi_to_income_ratio: f64,
    /// (credits - debits) / credits
    pub savings_ratio: f64,
    pub monthly_inflow: f64,
    pub monthly_outflow: f64,
}

/// Statement-level metrics, recomputed wholesale on every analysis run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatementSummary {
    /// Average bank balance (mean daily closing balance)
    pub average_bank_balance: f64,
    pub total_debits: f64,
    pub total_credits: f64,
    #[serde(default)]
    pub category_metrics: BTreeMap<String, CategoryDetail>,
    #[serde(default)]
    pub financial_health: Option<FinancialHealth>,
}

/// A bank statement: header fields, rows, and the summary once analysed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BankStatement {
    pub bank_name: String,
    pub account_holder: String,
    /// Masked account number (e.g. XXXXXX1234)
    pub account_number: String,
    /// Routing code (IFSC) or branch info
    #[serde(default, alias = "routing_code")]
    pub ifsc: Option<String>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub summary: Option<StatementSummary>,
}

impl BankStatement {
    pub fn new(
        bank_name: impl Into<String>,
        account_holder: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            bank_name: bank_name.into(),
            account_holder: account_holder.into(),
            account_number: account_number.into(),
            ifsc: None,
            transactions: Vec::new(),
            summary: None,
        }
    }

    pub fn with_ifsc(mut self, ifsc: impl Into<String>) -> Self {
        self.ifsc = Some(ifsc.into());
        self
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }
}

/// Sum of every row's debit
pub fn total_debits(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.debit).sum()
}

/// Sum of every row's credit
pub fn total_credits(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.credit).sum()
}
