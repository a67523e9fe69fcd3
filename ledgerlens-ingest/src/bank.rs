//! Bank name normalization for whatever the detection step printed.

/// Placeholder used when a value was not found
pub const UNKNOWN: &str = "UNKNOWN";
/// Bank name used when detection failed
pub const GENERIC_BANK: &str = "Generic Bank";

const BANK_ALIASES: [(&str, &[&str]); 4] = [
    ("HDFC", &["HDFC", "HOUSING DEVELOPMENT FINANCE"]),
    ("ICICI", &["ICICI"]),
    ("SBI", &["SBI", "STATE BANK OF INDIA"]),
    ("AXIS", &["AXIS"]),
];

/// Map detected text to a standard bank name.
///
/// Known banks match by substring; anything else comes back upper-cased,
/// and empty text becomes `UNKNOWN`.
pub fn normalize_bank_name(detected: &str) -> String {
    let text = detected.trim().to_uppercase();
    if text.is_empty() {
        return UNKNOWN.to_string();
    }

    BANK_ALIASES
        .iter()
        .find(|(_, aliases)| aliases.iter().any(|alias| text.contains(alias)))
        .map(|(standard, _)| standard.to_string())
        .unwrap_or(text)
}

/// Bank name to record on a statement; `UNKNOWN` becomes `Generic Bank`.
pub fn statement_bank_name(detected: &str) -> String {
    let name = normalize_bank_name(detected);
    if name == UNKNOWN {
        tracing::warn!("bank could not be detected; using generic parsing");
        GENERIC_BANK.to_string()
    } else {
        name
    }
}
