//! ledgerlens-finance: average bank balance, category metrics, health ratios and the statement analyzer

pub mod abb;
pub mod analyzer;
pub mod categories;
pub mod category_rules;
pub mod health;

pub use abb::{BalanceObservation, average_daily_balance, daily_closing_series};
pub use analyzer::{Analyzer, DataQuality, UnparseableDate, UnparseableDates, analyze_statement};
pub use categories::category_metrics;
pub use category_rules::CategoryRules;
pub use health::financial_health;
