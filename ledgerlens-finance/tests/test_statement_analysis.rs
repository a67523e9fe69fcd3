use chrono::NaiveDate;
use ledgerlens_core::{BankStatement, Transaction};
use ledgerlens_finance::{Analyzer, CategoryRules, UnparseableDates, analyze_statement};

fn processing_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

fn salary_and_rent() -> BankStatement {
    BankStatement::new("HDFC", "Asha Rao", "XXXXXX1234")
        .with_ifsc("HDFC0000001")
        .with_transactions(vec![
            Transaction::new("2024-01-01", "NEFT ACME PAYROLL", 0.0, 1000.0, 1000.0)
                .with_category("Salary")
                .with_payment_mode("NEFT"),
            Transaction::new("2024-01-03", "ACH RENT", 200.0, 0.0, 800.0)
                .with_category("Rent / EMI")
                .with_payment_mode("EMI"),
        ])
}

#[test]
fn test_salary_and_rent_scenario() {
    let mut statement = salary_and_rent();
    let quality = Analyzer::new(processing_day()).analyze(&mut statement);
    assert!(quality.is_clean());

    let summary = statement.summary.expect("summary attached");
    assert_eq!(summary.average_bank_balance, 933.33);
    assert_eq!(summary.total_debits, 200.0);
    assert_eq!(summary.total_credits, 1000.0);

    let salary = &summary.category_metrics["Salary"];
    assert_eq!((salary.count, salary.total_amount, salary.average_amount), (1, 1000.0, 1000.0));
    let rent = &summary.category_metrics["Rent / EMI"];
    assert_eq!((rent.count, rent.total_amount, rent.average_amount), (1, 200.0, 200.0));

    let health = summary.financial_health.expect("health computed");
    assert_eq!(health.emi_to_income_ratio, 0.2);
    assert_eq!(health.savings_ratio, 0.8);
    assert_eq!(health.monthly_inflow, 1000.0);
    assert_eq!(health.monthly_outflow, 200.0);
}

#[test]
fn test_analysis_is_idempotent() {
    let analyzer = Analyzer::new(processing_day());
    let mut statement = salary_and_rent();
    analyzer.analyze(&mut statement);
    let first = statement.summary.clone();
    analyzer.analyze(&mut statement);
    assert_eq!(statement.summary, first);

    let a = serde_json::to_string(&first).unwrap();
    let b = serde_json::to_string(&statement.summary).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_mixed_date_layouts_sort_chronologically() {
    // listed out of order, each in a different layout
    let mut statement = BankStatement::new("SBI", "A", "XX9").with_transactions(vec![
        Transaction::new("03/01/2024", "c", 0.0, 0.0, 300.0),
        Transaction::new("2024-01-01", "a", 0.0, 0.0, 100.0),
        Transaction::new("02-01-2024", "b", 0.0, 0.0, 200.0),
    ]);
    let quality = Analyzer::new(processing_day()).analyze(&mut statement);
    assert!(quality.unparseable_dates.is_empty());
    // Jan 1 = 100, Jan 2 = 200, Jan 3 = 300
    assert_eq!(statement.summary.unwrap().average_bank_balance, 200.0);
}

#[test]
fn test_single_day_statement() {
    let mut statement = BankStatement::new("ICICI", "A", "XX2").with_transactions(vec![
        Transaction::new("05 Feb 2024", "a", 0.0, 500.0, 1500.0),
        Transaction::new("05 Feb 2024", "b", 120.25, 0.0, 1379.75),
    ]);
    Analyzer::new(processing_day()).analyze(&mut statement);
    assert_eq!(statement.summary.unwrap().average_bank_balance, 1379.75);
}

#[test]
fn test_endpoints_only_is_time_weighted() {
    let mut statement = BankStatement::new("AXIS", "A", "XX3").with_transactions(vec![
        Transaction::new("2024-03-01", "open", 0.0, 0.0, 2000.0),
        Transaction::new("2024-03-05", "close", 1000.0, 0.0, 1000.0),
    ]);
    Analyzer::new(processing_day()).analyze(&mut statement);
    // (2000 * 4 + 1000) / 5
    assert_eq!(statement.summary.unwrap().average_bank_balance, 1800.0);
}

#[test]
fn test_category_totals_match_flows() {
    let mut statement = BankStatement::new("HDFC", "A", "XX4").with_transactions(vec![
        Transaction::new("2024-01-01", "pay", 0.0, 5000.0, 5000.0).with_category("Salary"),
        Transaction::new("2024-01-02", "food", 250.0, 0.0, 4750.0).with_category("Food"),
        Transaction::new("2024-01-02", "food", 150.0, 0.0, 4600.0).with_category("Food"),
        Transaction::new("2024-01-04", "emi", 1200.0, 0.0, 3400.0).with_category("Loan Repayment"),
        Transaction::new("2024-01-05", "refund", 0.0, 100.0, 3500.0),
    ]);
    Analyzer::new(processing_day()).analyze(&mut statement);
    let summary = statement.summary.unwrap();

    let category_sum: f64 = summary.category_metrics.values().map(|d| d.total_amount).sum();
    assert_eq!(category_sum, summary.total_debits + summary.total_credits);
    assert_eq!(summary.category_metrics["Others"].count, 1);

    let health = summary.financial_health.unwrap();
    assert_eq!(health.emi_to_income_ratio, 0.24);
    assert_eq!(health.savings_ratio, 0.69);
}

#[test]
fn test_unparseable_dates_are_reported() {
    let mut statement = BankStatement::new("HDFC", "A", "XX5").with_transactions(vec![
        Transaction::new("2024-06-28", "a", 0.0, 100.0, 100.0),
        Transaction::new("28-06-24", "b", 0.0, 100.0, 200.0),
    ]);

    let quality = Analyzer::new(processing_day()).analyze(&mut statement);
    assert_eq!(quality.unparseable_dates.len(), 1);
    assert_eq!(quality.unparseable_dates[0].index, 1);
    assert_eq!(quality.unparseable_dates[0].raw, "28-06-24");
    // Jun 28 and 29 at 100, Jun 30 (processing day) at 200
    let fallback_abb = statement.summary.as_ref().unwrap().average_bank_balance;
    assert_eq!(fallback_abb, 133.33);

    let strict = Analyzer::new(processing_day()).with_unparseable_dates(UnparseableDates::Exclude);
    strict.analyze(&mut statement);
    assert_eq!(statement.summary.unwrap().average_bank_balance, 100.0);
}

#[test]
fn test_keyword_rules_feed_health_ratios() {
    let mut statement = BankStatement::new("SBI", "A", "XX6").with_transactions(vec![
        Transaction::new("2024-01-01", "BY TRANSFER SALARY JAN", 0.0, 2000.0, 2000.0),
        Transaction::new("2024-01-07", "NACH DR LOAN 8812", 500.0, 0.0, 1500.0),
    ]);
    let rules = CategoryRules::new().unwrap();
    assert_eq!(rules.apply(&mut statement), 2);

    Analyzer::new(processing_day()).analyze(&mut statement);
    let health = statement.summary.unwrap().financial_health.unwrap();
    assert_eq!(health.emi_to_income_ratio, 0.25);
}

#[test]
fn test_analyze_statement_returns_statement() {
    let statement = analyze_statement(salary_and_rent());
    assert_eq!(statement.bank_name, "HDFC");
    assert_eq!(statement.transactions.len(), 2);
    assert!(statement.summary.is_some());
}
