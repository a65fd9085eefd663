//! ocuscore-intake
//!
//! Boundary with the image-analysis and report-extraction collaborators.
//! Parses their responses into domain types and decides what a failure
//! means for scoring. No network I/O happens here.

pub mod analysis;
pub mod analyzer;
pub mod error;
pub mod extraction;
pub mod simulate;

/// The span from the first `{` to the last `}` of a model response.
///
/// Models often wrap JSON in Markdown fences or prose; this recovers the
/// object without trying to understand the surrounding text.
pub fn json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}
