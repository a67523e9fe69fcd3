//! Average bank balance (ABB): the mean closing balance over every calendar
//! day of the statement, inclusive of both ends.
//!
//! Days without a transaction inherit the previous day's closing balance.

use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A dated running balance taken from one statement row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceObservation {
    pub date: NaiveDate,
    pub balance: f64,
}

impl BalanceObservation {
    pub fn new(date: NaiveDate, balance: f64) -> Self {
        Self { date, balance }
    }
}

/// Closing balance for every day from the earliest to the latest observation.
///
/// Observations may arrive in any order. Same-day rows keep their input order
/// and the last one is that day's closing balance.
pub fn daily_closing_series(observations: &[BalanceObservation]) -> Vec<(NaiveDate, f64)> {
    let mut sorted = observations.to_vec();
    // stable: same-day rows stay in statement order
    sorted.sort_by_key(|o| o.date);

    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return Vec::new();
    };
    let (start, end) = (first.date, last.date);

    let closing: BTreeMap<NaiveDate, f64> = sorted.iter().map(|o| (o.date, o.balance)).collect();

    let mut running = first.balance;
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| {
            if let Some(balance) = closing.get(&day) {
                running = *balance;
            }
            (day, running)
        })
        .collect()
}

/// Unrounded ABB; 0.0 when there are no observations.
pub fn average_daily_balance(observations: &[BalanceObservation]) -> f64 {
    let series = daily_closing_series(observations);
    if series.is_empty() {
        return 0.0;
    }
    let sum: f64 = series.iter().map(|(_, balance)| balance).sum();
    sum / series.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn obs(d: u32, balance: f64) -> BalanceObservation {
        BalanceObservation::new(ymd(2024, 1, d), balance)
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(average_daily_balance(&[]), 0.0);
        assert!(daily_closing_series(&[]).is_empty());
    }

    #[test]
    fn test_single_day_uses_last_row() {
        let rows = [obs(5, 100.0), obs(5, 250.0), obs(5, -40.0)];
        assert_eq!(average_daily_balance(&rows), -40.0);
    }

    #[test]
    fn test_carry_forward_between_endpoints() {
        // 10 days: 9 days at 500, last day at 1500
        let rows = [obs(1, 500.0), obs(10, 1500.0)];
        let expected = (500.0 * 9.0 + 1500.0) / 10.0;
        assert_eq!(average_daily_balance(&rows), expected);
    }

    #[test]
    fn test_unsorted_input() {
        let rows = [obs(3, 800.0), obs(1, 1000.0)];
        let series = daily_closing_series(&rows);
        assert_eq!(
            series,
            vec![(ymd(2024, 1, 1), 1000.0), (ymd(2024, 1, 2), 1000.0), (ymd(2024, 1, 3), 800.0)]
        );
        let abb = average_daily_balance(&rows);
        assert!((abb - 2800.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_day_ties_keep_input_order() {
        let rows = [obs(2, 10.0), obs(1, 1.0), obs(2, 20.0), obs(2, 15.0)];
        let series = daily_closing_series(&rows);
        assert_eq!(series[1], (ymd(2024, 1, 2), 15.0));
    }

    #[test]
    fn test_spans_month_boundary() {
        let rows = [
            BalanceObservation::new(ymd(2024, 1, 31), 100.0),
            BalanceObservation::new(ymd(2024, 2, 2), 400.0),
        ];
        let series = daily_closing_series(&rows);
        assert_eq!(series.len(), 3);
        assert_eq!(series[1], (ymd(2024, 2, 1), 100.0));
        assert_eq!(average_daily_balance(&rows), 200.0);
    }
}
