//! Statement analyzer: totals, ABB, category metrics and health ratios,
//! assembled into a `StatementSummary` attached to the statement.

use anyhow::Result;
use chrono::NaiveDate;
use ledgerlens_core::{
    BankStatement, DEFAULT_TIMEZONE, NormalizedDate, StatementSummary, Transaction,
    normalize_date, round2, today_in, today_in_tz, total_credits, total_debits,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::abb::{BalanceObservation, average_daily_balance};
use crate::categories::category_metrics;
use crate::health::financial_health;

/// What to do with rows whose date matches no accepted layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnparseableDates {
    /// Date the row on the processing date (sorts after all real rows)
    #[default]
    #[serde(rename = "fallback")]
    Fallback,
    /// Leave the row out of the ABB series; totals and categories still count it
    #[serde(rename = "exclude")]
    Exclude,
}

/// A row whose date could not be parsed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnparseableDate {
    /// Position in the statement's transaction list
    pub index: usize,
    pub raw: String,
}

/// Data-quality findings from one analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataQuality {
    pub policy: UnparseableDates,
    pub unparseable_dates: Vec<UnparseableDate>,
    /// Rows carrying both a debit and a credit; only the credit reaches the category totals
    pub two_sided_rows: Vec<usize>,
}

impl DataQuality {
    pub fn is_clean(&self) -> bool {
        self.unparseable_dates.is_empty() && self.two_sided_rows.is_empty()
    }
}

/// Runs the statement analysis against a fixed processing date
#[derive(Debug, Clone, PartialEq)]
pub struct Analyzer {
    today: NaiveDate,
    unparseable_dates: UnparseableDates,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(today_in_tz(DEFAULT_TIMEZONE))
    }
}

impl Analyzer {
    /// `today` is substituted for unparseable dates under the fallback policy.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            unparseable_dates: UnparseableDates::default(),
        }
    }

    /// Analyzer whose processing date is today in an IANA timezone.
    pub fn for_timezone(tz: &str) -> Result<Self> {
        Ok(Self::new(today_in(tz)?))
    }

    pub fn with_unparseable_dates(mut self, policy: UnparseableDates) -> Self {
        self.unparseable_dates = policy;
        self
    }

    /// Dated balances for the ABB series, plus the rows whose date failed to parse.
    pub fn balance_observations(
        &self,
        transactions: &[Transaction],
    ) -> (Vec<BalanceObservation>, Vec<UnparseableDate>) {
        let mut observations = Vec::with_capacity(transactions.len());
        let mut unparseable = Vec::new();

        for (index, txn) in transactions.iter().enumerate() {
            let normalized = normalize_date(&txn.date, self.today);
            if let NormalizedDate::Fallback(_) = normalized {
                warn!(
                    index,
                    raw = %txn.date,
                    policy = ?self.unparseable_dates,
                    "unparseable transaction date"
                );
                unparseable.push(UnparseableDate {
                    index,
                    raw: txn.date.clone(),
                });
                if self.unparseable_dates == UnparseableDates::Exclude {
                    continue;
                }
            }
            observations.push(BalanceObservation::new(normalized.date(), txn.balance));
        }

        (observations, unparseable)
    }

    /// Compute a fresh summary for a list of rows.
    pub fn summarize(&self, transactions: &[Transaction]) -> (StatementSummary, DataQuality) {
        let total_debits = total_debits(transactions);
        let total_credits = total_credits(transactions);

        let (observations, unparseable_dates) = self.balance_observations(transactions);
        let abb = average_daily_balance(&observations);
        let metrics = category_metrics(transactions);
        let health = financial_health(total_debits, total_credits, &metrics);

        let two_sided_rows: Vec<usize> = transactions
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_two_sided())
            .map(|(i, _)| i)
            .collect();
        if !two_sided_rows.is_empty() {
            warn!(
                rows = two_sided_rows.len(),
                "rows with both debit and credit; category totals use the credit side"
            );
        }

        let summary = StatementSummary {
            average_bank_balance: round2(abb),
            total_debits: round2(total_debits),
            total_credits: round2(total_credits),
            category_metrics: metrics,
            financial_health: Some(health),
        };

        debug!(
            transactions = transactions.len(),
            abb = summary.average_bank_balance,
            categories = summary.category_metrics.len(),
            "statement summarized"
        );

        let quality = DataQuality {
            policy: self.unparseable_dates,
            unparseable_dates,
            two_sided_rows,
        };
        (summary, quality)
    }

    /// Attach a freshly computed summary to the statement, replacing any prior one.
    pub fn analyze(&self, statement: &mut BankStatement) -> DataQuality {
        let (summary, quality) = self.summarize(&statement.transactions);
        statement.summary = Some(summary);
        quality
    }
}

/// Analyze with default settings (processing date in Asia/Kolkata, fallback policy).
pub fn analyze_statement(mut statement: BankStatement) -> BankStatement {
    Analyzer::default().analyze(&mut statement);
    statement
}
