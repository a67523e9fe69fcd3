//! Date normalization: bank statements print dates in several layouts.
//!
//! Accepted layouts, tried in order:
//!   2024-01-31   (ISO)
//!   31-01-2024
//!   31/01/2024
//!   31 Jan 2024
//!
//! Two-digit years are not supported and never match.

use anyhow::Result;
use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

/// strftime layouts in match priority order
pub const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%d %b %Y"];

/// Parse a statement date string, returning `None` if no layout matches.
pub fn parse_statement_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    // chrono's %Y happily reads "24" as year 24; require a four-digit year.
    DATE_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .find(|d| d.year() >= 1000)
}

/// Outcome of normalizing one raw date string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizedDate {
    /// The string matched one of the accepted layouts
    Parsed(NaiveDate),
    /// Nothing matched; carries the processing date substituted for it
    Fallback(NaiveDate),
}

impl NormalizedDate {
    pub fn date(&self) -> NaiveDate {
        match self {
            NormalizedDate::Parsed(d) | NormalizedDate::Fallback(d) => *d,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, NormalizedDate::Fallback(_))
    }
}

/// Normalize a raw date, substituting `today` when it cannot be parsed.
///
/// The substitution sorts unparseable rows after every historical row, so
/// callers should check [`NormalizedDate::is_fallback`] and report it.
pub fn normalize_date(raw: &str, today: NaiveDate) -> NormalizedDate {
    match parse_statement_date(raw) {
        Some(d) => NormalizedDate::Parsed(d),
        None => NormalizedDate::Fallback(today),
    }
}

/// Timezone that decides the processing date unless configured otherwise
pub const DEFAULT_TIMEZONE: Tz = Tz::Asia__Kolkata;

/// Current calendar date in `tz`.
pub fn today_in_tz(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Current calendar date in an IANA timezone like "Asia/Kolkata".
pub fn today_in(tz: &str) -> Result<NaiveDate> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;
    Ok(today_in_tz(tz))
}
