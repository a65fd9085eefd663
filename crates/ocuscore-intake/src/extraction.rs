//! Report-extraction responses.

use ocuscore_core::models::extraction::ReportExtraction;
use tracing::{info, warn};

use crate::error::IntakeError;
use crate::json_span;

pub const UNPARSED_REPORT_NOTE: &str = "Could not parse report. Please enter data manually.";

/// Parse the extraction model's answer.
pub fn parse_extraction_response(text: &str) -> Result<ReportExtraction, IntakeError> {
    let json = json_span(text).ok_or(IntakeError::NoJson)?;
    let extraction: ReportExtraction =
        serde_json::from_str(json).map_err(|e| IntakeError::SchemaViolation(e.to_string()))?;
    info!(
        confidence = extraction.extraction_confidence,
        fields = extraction.updates().len(),
        "report extraction parsed"
    );
    Ok(extraction)
}

/// Like [`parse_extraction_response`], but an unreadable answer becomes an
/// empty extraction with zero confidence and a note asking for manual entry.
pub fn extraction_or_fallback(text: &str) -> ReportExtraction {
    parse_extraction_response(text).unwrap_or_else(|e| {
        warn!(error = %e, "report extraction unparseable");
        ReportExtraction {
            extraction_confidence: 0,
            extraction_notes: Some(UNPARSED_REPORT_NOTE.to_string()),
            ..Default::default()
        }
    })
}
