use ledgerlens_core::BankStatement;
use ledgerlens_finance::{DataQuality, UnparseableDates};

/// Human-readable analysis report for stdout.
pub fn render_report(statement: &BankStatement, quality: &DataQuality) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# {} | {} | {}\n\n",
        statement.bank_name, statement.account_holder, statement.account_number
    ));

    let Some(summary) = &statement.summary else {
        out.push_str("(not analysed)\n");
        return out;
    };

    out.push_str(&format!("Transactions:          {}\n", statement.transactions.len()));
    out.push_str(&format!("Average bank balance:  {:.2}\n", summary.average_bank_balance));
    out.push_str(&format!("Total credits:         {:.2}\n", summary.total_credits));
    out.push_str(&format!("Total debits:          {:.2}\n", summary.total_debits));

    if let Some(h) = &summary.financial_health {
        out.push_str(&format!("EMI / income:          {:.2}\n", h.emi_to_income_ratio));
        out.push_str(&format!("Savings ratio:         {:.2}\n", h.savings_ratio));
    }

    if !summary.category_metrics.is_empty() {
        out.push_str("\n## Categories\n\n");
        for (name, d) in &summary.category_metrics {
            out.push_str(&format!(
                "- {} | count={} | total={:.2} | avg={:.2}\n",
                name, d.count, d.total_amount, d.average_amount
            ));
        }
    }

    if !quality.is_clean() {
        out.push_str("\n## Warnings\n\n");
        if !quality.unparseable_dates.is_empty() {
            let action = match quality.policy {
                UnparseableDates::Fallback => "dated today in the balance series",
                UnparseableDates::Exclude => "left out of the balance series",
            };
            out.push_str(&format!(
                "- {} unparseable date(s), {}:\n",
                quality.unparseable_dates.len(),
                action
            ));
            for bad in &quality.unparseable_dates {
                out.push_str(&format!("    row {}: {:?}\n", bad.index + 1, bad.raw));
            }
        }
        if !quality.two_sided_rows.is_empty() {
            out.push_str(&format!(
                "- {} row(s) with both debit and credit; categories count the credit only\n",
                quality.two_sided_rows.len()
            ));
        }
    }

    out
}
