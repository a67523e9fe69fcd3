//! Per-category count / total / average over a statement's rows.

use ledgerlens_core::{CategoryDetail, Transaction, round2};
use std::collections::BTreeMap;

/// Group rows by category label and aggregate their amounts.
///
/// Each row contributes its credit if nonzero, else its debit.
pub fn category_metrics(transactions: &[Transaction]) -> BTreeMap<String, CategoryDetail> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();

    for txn in transactions {
        groups
            .entry(txn.category.as_str())
            .or_default()
            .push(txn.category_amount());
    }

    groups
        .into_iter()
        .map(|(category, amounts)| {
            let total: f64 = amounts.iter().sum();
            let count = amounts.len();
            let average = if count > 0 { total / count as f64 } else { 0.0 };

            (
                category.to_string(),
                CategoryDetail {
                    count,
                    total_amount: round2(total),
                    average_amount: round2(average),
                },
            )
        })
        .collect()
}
