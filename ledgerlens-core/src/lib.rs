//! ledgerlens-core: statement data model, date normalization and rounding helpers

pub mod dates;
pub mod money;
pub mod statement;

pub use dates::{
    DEFAULT_TIMEZONE, NormalizedDate, normalize_date, parse_statement_date, today_in, today_in_tz,
};
pub use money::round2;
pub use statement::{
    BankStatement, CategoryDetail, FinancialHealth, StatementSummary, Transaction,
    DEFAULT_CATEGORY, LOAN_REPAYMENT, RENT_EMI, SALARY, total_credits, total_debits,
};
