//! Rounding for reported amounts and ratios.

/// Round to 2 decimal places.
///
/// Rounds the exact binary value, ties to even: 0.125 -> 0.12, and 2.675
/// (stored as 2.67499...) -> 2.67. Scaling by 100 first would drift on both.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}
