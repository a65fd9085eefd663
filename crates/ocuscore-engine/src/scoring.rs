//! Risk score aggregation.
//!
//! Points from the rule catalog are summed per stream, then adjusted in a
//! fixed order: media contribution, follow-up trend, compliance multiplier,
//! doctor override. The adjusted total is clamped to 5..=100.
//!
//! A media risk above 50 is part of the total and is also reported as its
//! own factor. The poor-compliance factor is derived from the
//! already-multiplied total and never feeds back into it.

use ocuscore_core::models::assessment::{
    Assessment, ComplianceScore, DoctorRiskOverride, FollowUpTrend,
};
use ocuscore_core::models::risk::{FollowUpPriority, RiskAssessment, RiskCategory, RiskFactor};
use tracing::debug;

use crate::catalog::{self, Stream};
use crate::random::RandomSource;
use crate::temporal::temporal_multiplier;

pub const MIN_SCORE: f64 = 5.0;
pub const MAX_SCORE: f64 = 100.0;

/// Number of factors reported in [`RiskAssessment::top_risk_factors`].
pub const TOP_FACTOR_COUNT: usize = 5;

const MEDIA_WEIGHT: f64 = 0.3;
const MEDIA_FACTOR_THRESHOLD: u32 = 50;
const IMPROVING_TREND_ADJUSTMENT: f64 = -5.0;
const WORSENING_TREND_ADJUSTMENT: f64 = 12.0;
const POOR_COMPLIANCE_FACTOR_SHARE: f64 = 0.35;
const OVERRIDE_INCREASE: f64 = 1.25;
const OVERRIDE_DECREASE: f64 = 0.75;
const CONFIDENCE_MIN: f64 = 75.0;
const CONFIDENCE_SPAN: f64 = 20.0;

pub const MEDIA_FACTOR_LABEL: &str = "Visual AI detected abnormalities";
pub const WORSENING_TREND_LABEL: &str = "Worsening follow-up trend";
pub const POOR_COMPLIANCE_LABEL: &str = "Poor patient compliance";

const POOR_COMPLIANCE_NOTE: &str =
    "Low compliance can worsen outcomes even in otherwise low-risk patients.";
const OVERRIDE_INCREASED_NOTE: &str = "Doctor override applied: risk increased.";
const OVERRIDE_DECREASED_NOTE: &str = "Doctor override applied: risk decreased.";

pub fn compliance_multiplier(compliance: ComplianceScore) -> f64 {
    match compliance {
        ComplianceScore::Good => 1.0,
        ComplianceScore::Moderate => 1.15,
        ComplianceScore::Poor => 1.35,
    }
}

/// Every intermediate value of one scoring pass, before clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub hours_since_surgery: f64,
    pub temporal_multiplier: f64,
    pub clinical_score: f64,
    pub behavioral_score: f64,
    pub media_contribution: f64,
    /// Total after trend, compliance and override, not yet clamped.
    pub unclamped_total: f64,
    /// Factors in the order their rules fired.
    pub factors: Vec<RiskFactor>,
    pub doctor_override_applied: bool,
    pub explanation_notes: Vec<String>,
}

impl ScoreBreakdown {
    /// The final integer score: clamped to 5..=100, then rounded.
    pub fn overall_score(&self) -> i64 {
        self.unclamped_total.clamp(MIN_SCORE, MAX_SCORE).round() as i64
    }

    /// Factors sorted by contribution, highest first, truncated to five.
    /// Equal contributions keep their firing order.
    pub fn top_factors(&self) -> Vec<RiskFactor> {
        let mut sorted = self.factors.clone();
        sorted.sort_by(|a, b| b.contribution.total_cmp(&a.contribution));
        sorted.truncate(TOP_FACTOR_COUNT);
        sorted
    }
}

/// Run every deterministic step of the scoring algorithm.
pub fn breakdown(assessment: &Assessment) -> ScoreBreakdown {
    let hours = assessment.hours_since_surgery();
    let multiplier = temporal_multiplier(hours);

    let mut clinical_score = 0.0;
    let mut behavioral_score = 0.0;
    let mut factors = Vec::new();
    let mut notes = Vec::new();

    for fired in catalog::evaluate(assessment, multiplier) {
        match fired.stream {
            Stream::Clinical => clinical_score += fired.points,
            Stream::Behavioral => behavioral_score += fired.points,
        }
        factors.push(RiskFactor::new(fired.label, fired.points));
    }

    let media_risk = assessment
        .media_analysis
        .as_ref()
        .map(|m| m.overall_media_risk)
        .unwrap_or(0);
    let media_contribution = f64::from(media_risk) * MEDIA_WEIGHT;
    if media_risk > MEDIA_FACTOR_THRESHOLD {
        factors.push(RiskFactor::new(MEDIA_FACTOR_LABEL, media_contribution));
    }

    let mut total = clinical_score + behavioral_score + media_contribution;

    match assessment.follow_up_trend {
        FollowUpTrend::Improving => total += IMPROVING_TREND_ADJUSTMENT,
        FollowUpTrend::Stable => {}
        FollowUpTrend::Worsening => {
            total += WORSENING_TREND_ADJUSTMENT;
            factors.push(RiskFactor::new(
                WORSENING_TREND_LABEL,
                WORSENING_TREND_ADJUSTMENT,
            ));
        }
    }

    total *= compliance_multiplier(assessment.compliance_score);
    if assessment.compliance_score == ComplianceScore::Poor {
        factors.push(RiskFactor::new(
            POOR_COMPLIANCE_LABEL,
            (total * POOR_COMPLIANCE_FACTOR_SHARE).round(),
        ));
        notes.push(POOR_COMPLIANCE_NOTE.to_string());
    }

    let time_context = assessment
        .time_since_surgery
        .map(|t| t.to_string())
        .unwrap_or_else(|| "2 days".to_string());
    notes.push(format!(
        "Findings interpreted in context of {time_context} post-surgery."
    ));

    let doctor_override_applied = match assessment.doctor_risk_override {
        DoctorRiskOverride::Accept => false,
        DoctorRiskOverride::Increase => {
            total *= OVERRIDE_INCREASE;
            notes.push(OVERRIDE_INCREASED_NOTE.to_string());
            true
        }
        DoctorRiskOverride::Decrease => {
            total *= OVERRIDE_DECREASE;
            notes.push(OVERRIDE_DECREASED_NOTE.to_string());
            true
        }
    };

    ScoreBreakdown {
        hours_since_surgery: hours,
        temporal_multiplier: multiplier,
        clinical_score,
        behavioral_score,
        media_contribution,
        unclamped_total: total,
        factors,
        doctor_override_applied,
        explanation_notes: notes,
    }
}

/// Score an assessment.
///
/// Deterministic apart from `confidence_level`, which is drawn from `rng`.
pub fn score<R: RandomSource + ?Sized>(assessment: &Assessment, rng: &mut R) -> RiskAssessment {
    let breakdown = breakdown(assessment);
    let overall = breakdown.overall_score();
    let category = RiskCategory::from_score(overall);
    let confidence = (CONFIDENCE_MIN + (rng.next_unit() * CONFIDENCE_SPAN).round()) as i64;

    debug!(
        hours = breakdown.hours_since_surgery,
        temporal_multiplier = breakdown.temporal_multiplier,
        clinical = breakdown.clinical_score,
        behavioral = breakdown.behavioral_score,
        media = breakdown.media_contribution,
        unclamped = breakdown.unclamped_total,
        fired = breakdown.factors.len(),
        "score breakdown"
    );

    RiskAssessment {
        overall_risk_score: overall,
        risk_category: category,
        confidence_level: confidence,
        clinical_contribution: breakdown.clinical_score.round() as i64,
        behavioral_contribution: breakdown.behavioral_score.round() as i64,
        media_contribution: breakdown.media_contribution.round() as i64,
        top_risk_factors: breakdown.top_factors(),
        follow_up_priority: FollowUpPriority::from_score(overall),
        doctor_override_applied: breakdown.doctor_override_applied,
        explanation_notes: breakdown.explanation_notes,
    }
}
