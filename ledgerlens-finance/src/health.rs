//! Lending / affordability ratios derived from statement totals.

use ledgerlens_core::{CategoryDetail, FinancialHealth, LOAN_REPAYMENT, RENT_EMI, SALARY, round2};
use std::collections::BTreeMap;

fn category_total(metrics: &BTreeMap<String, CategoryDetail>, name: &str) -> f64 {
    metrics.get(name).map(|d| d.total_amount).unwrap_or(0.0)
}

/// `numerator / denominator`, or 0.0 unless the denominator is positive.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        let r = numerator / denominator;
        if r.is_finite() { r } else { 0.0 }
    } else {
        0.0
    }
}

/// Income: tagged salary if any, otherwise every credit on the statement.
pub fn income(total_credits: f64, metrics: &BTreeMap<String, CategoryDetail>) -> f64 {
    let salary = category_total(metrics, SALARY);
    if salary == 0.0 { total_credits } else { salary }
}

/// EMI outflow: the rent/EMI and loan repayment buckets combined.
pub fn emis(metrics: &BTreeMap<String, CategoryDetail>) -> f64 {
    category_total(metrics, RENT_EMI) + category_total(metrics, LOAN_REPAYMENT)
}

/// Compute the health ratios. Degenerate statements degrade to 0.0 ratios.
pub fn financial_health(
    total_debits: f64,
    total_credits: f64,
    metrics: &BTreeMap<String, CategoryDetail>,
) -> FinancialHealth {
    let income = income(total_credits, metrics);
    let emis = emis(metrics);

    FinancialHealth {
        emi_to_income_ratio: round2(ratio(emis, income)),
        savings_ratio: round2(ratio(total_credits - total_debits, total_credits)),
        monthly_inflow: round2(total_credits),
        monthly_outflow: round2(total_debits),
    }
}
