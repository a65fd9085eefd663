//! Image-analysis responses.

use ocuscore_core::models::media::MediaAnalysis;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::IntakeError;
use crate::json_span;

pub const FALLBACK_CUE: &str = "AI analysis completed - manual review recommended";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    #[default]
    Routine,
    Important,
    Urgent,
}

/// The image-analysis collaborator's findings for one eye image.
///
/// Scores are 0–100. Models occasionally answer with fractional scores, so
/// they are kept as `f64` until converted into a [`MediaAnalysis`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysisResult {
    pub redness_score: f64,
    pub edema_score: f64,
    pub discharge_pattern_score: f64,
    /// 100 is perfectly clear.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corneal_clarity_score: Option<f64>,
    /// 100 is perfectly healed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wound_integrity_score: Option<f64>,
    pub overall_media_risk: f64,
    #[serde(default)]
    pub abnormal_cues: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_level: Option<UrgencyLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<f64>,
}

impl AiAnalysisResult {
    /// Conservative result used when the model's answer cannot be parsed.
    /// The raw answer is kept as the clinical summary for manual review.
    pub fn fallback(raw_response: &str) -> Self {
        Self {
            redness_score: 30.0,
            edema_score: 20.0,
            discharge_pattern_score: 15.0,
            corneal_clarity_score: Some(75.0),
            wound_integrity_score: Some(85.0),
            overall_media_risk: 25.0,
            abnormal_cues: vec![FALLBACK_CUE.to_string()],
            clinical_summary: Some(raw_response.to_string()),
            urgency_level: Some(UrgencyLevel::Routine),
            confidence_level: Some(60.0),
        }
    }

    /// The subset of findings that feeds risk scoring.
    pub fn to_media_analysis(&self) -> MediaAnalysis {
        MediaAnalysis {
            redness_score: score(self.redness_score),
            edema_score: score(self.edema_score),
            discharge_pattern_score: score(self.discharge_pattern_score),
            abnormal_cues: self.abnormal_cues.clone(),
            overall_media_risk: score(self.overall_media_risk),
        }
    }
}

impl From<AiAnalysisResult> for MediaAnalysis {
    fn from(result: AiAnalysisResult) -> Self {
        result.to_media_analysis()
    }
}

fn score(value: f64) -> u32 {
    value.clamp(0.0, 100.0).round() as u32
}

fn parse_strict(text: &str) -> Result<AiAnalysisResult, IntakeError> {
    let json = json_span(text).ok_or(IntakeError::NoJson)?;
    serde_json::from_str(json).map_err(|e| IntakeError::SchemaViolation(e.to_string()))
}

/// Parse the model's free-text answer into findings.
///
/// Never fails: an answer without a parseable JSON object yields
/// [`AiAnalysisResult::fallback`].
pub fn parse_analysis_response(text: &str) -> AiAnalysisResult {
    match parse_strict(text) {
        Ok(result) => {
            debug!(
                overall = result.overall_media_risk,
                cues = result.abnormal_cues.len(),
                "image analysis parsed"
            );
            result
        }
        Err(e) => {
            warn!(error = %e, "image analysis unparseable, using fallback");
            AiAnalysisResult::fallback(text)
        }
    }
}

/// Interpret the collaborator's reply body.
///
/// The reply is either an analysis object or `{"error": "..."}`.
pub fn analysis_from_reply(body: &str) -> Result<AiAnalysisResult, IntakeError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if let Some(message) = value.get("error") {
        let message = message
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| message.to_string());
        return Err(IntakeError::Collaborator(message));
    }
    serde_json::from_value(value).map_err(|e| IntakeError::SchemaViolation(e.to_string()))
}
