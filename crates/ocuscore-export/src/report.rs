use jiff::Timestamp;
use ocuscore_core::models::assessment::Assessment;
use ocuscore_core::models::media::MediaAnalysis;
use ocuscore_core::models::recommendation::CareRecommendation;
use ocuscore_core::models::risk::RiskAssessment;
use ocuscore_core::models::temporal::TemporalDataPoint;
use ocuscore_engine::Evaluation;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::ExportError;

/// Everything produced for one assessment, as handed to the clinical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalReport {
    pub report_id: Uuid,
    pub generated_at: Timestamp,
    pub assessment: Assessment,
    pub risk_assessment: RiskAssessment,
    /// Always serialized, as `null` when the assessment had no image.
    pub media_analysis: Option<MediaAnalysis>,
    pub recommendations: Vec<CareRecommendation>,
    pub projection: Vec<TemporalDataPoint>,
    pub explanation: String,
    pub patient_explanation: String,
    /// Whether a clinician reviewed and confirmed the assessment.
    pub human_confirmed: bool,
}

impl ClinicalReport {
    /// Assemble a report with a fresh id and the current time.
    pub fn new(assessment: Assessment, evaluation: Evaluation, human_confirmed: bool) -> Self {
        Self::with_metadata(
            Uuid::new_v4(),
            Timestamp::now(),
            assessment,
            evaluation,
            human_confirmed,
        )
    }

    pub fn with_metadata(
        report_id: Uuid,
        generated_at: Timestamp,
        assessment: Assessment,
        evaluation: Evaluation,
        human_confirmed: bool,
    ) -> Self {
        let media_analysis = assessment.media_analysis.clone();
        Self {
            report_id,
            generated_at,
            assessment,
            risk_assessment: evaluation.risk_assessment,
            media_analysis,
            recommendations: evaluation.recommendations,
            projection: evaluation.projection.to_vec(),
            explanation: evaluation.explanation,
            patient_explanation: evaluation.patient_explanation,
            human_confirmed,
        }
    }
}

/// Pretty-printed JSON export of a report.
pub fn to_json(report: &ClinicalReport) -> Result<String, ExportError> {
    let json = serde_json::to_string_pretty(report)?;
    info!(report_id = %report.report_id, bytes = json.len(), "report exported");
    Ok(json)
}
