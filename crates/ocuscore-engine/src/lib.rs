//! ocuscore-engine
//!
//! Post-operative complication risk scoring and decision support. Pure and
//! synchronous: every operation is a function of its inputs plus an injected
//! [`random::RandomSource`].

pub mod catalog;
pub mod explain;
pub mod projection;
pub mod random;
pub mod recommend;
pub mod scoring;
pub mod temporal;

use ocuscore_core::models::assessment::Assessment;
use ocuscore_core::models::recommendation::CareRecommendation;
use ocuscore_core::models::risk::RiskAssessment;
use ocuscore_core::models::temporal::TemporalDataPoint;
use serde::Serialize;
use tracing::info;

pub use explain::explain;
pub use projection::project;
pub use random::RandomSource;
pub use recommend::recommend;
pub use scoring::score;

/// Everything the engine derives from one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub risk_assessment: RiskAssessment,
    pub recommendations: Vec<CareRecommendation>,
    pub projection: [TemporalDataPoint; 5],
    /// Clinician-facing explanation.
    pub explanation: String,
    /// Plain-language explanation for the patient.
    pub patient_explanation: String,
}

/// Score an assessment and derive recommendations, explanations and the
/// projected trajectory.
///
/// The random source is consumed by scoring first, then by the projection.
pub fn evaluate<R: RandomSource + ?Sized>(assessment: &Assessment, rng: &mut R) -> Evaluation {
    let risk_assessment = score(assessment, rng);
    let recommendations = recommend(assessment, &risk_assessment);
    let projection = project(risk_assessment.overall_risk_score, rng);
    let explanation = explain(&risk_assessment, false);
    let patient_explanation = explain(&risk_assessment, true);

    info!(
        score = risk_assessment.overall_risk_score,
        category = risk_assessment.risk_category.as_str(),
        confidence = risk_assessment.confidence_level,
        recommendations = recommendations.len(),
        override_applied = risk_assessment.doctor_override_applied,
        "risk assessment computed"
    );

    Evaluation {
        risk_assessment,
        recommendations,
        projection,
        explanation,
        patient_explanation,
    }
}
