//! Extraction batch JSON, as returned for a few statement pages at a time.

use anyhow::{Context, Result};
use tracing::warn;

use crate::types::ExtractedBatch;

/// Strict parse of one extraction batch.
pub fn try_parse_extraction_batch(text: &str) -> Result<ExtractedBatch> {
    serde_json::from_str(text).context("parsing extraction batch JSON")
}

/// Lenient parse: a malformed batch is logged and contributes nothing.
pub fn parse_extraction_batch(text: &str) -> ExtractedBatch {
    match try_parse_extraction_batch(text) {
        Ok(batch) => batch,
        Err(e) => {
            warn!(error = %format!("{e:#}"), "dropping malformed extraction batch");
            ExtractedBatch::default()
        }
    }
}
