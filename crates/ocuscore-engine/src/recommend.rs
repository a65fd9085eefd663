//! Care recommendations.
//!
//! Recommendations are generated in a fixed order and the list is cut at
//! [`MAX_RECOMMENDATIONS`]. Later categories are dropped when earlier ones
//! already fill the list; the result is never re-sorted by priority.

use ocuscore_core::models::assessment::{
    Assessment, ComplianceScore, CornealEdemaSeverity, InflammationGrade, SurgeryComplexity,
};
use ocuscore_core::models::recommendation::{CareRecommendation, RecommendationPriority};
use ocuscore_core::models::risk::{RiskAssessment, RiskCategory};

pub const MAX_RECOMMENDATIONS: usize = 6;

fn item(
    category: &str,
    recommendation: &str,
    rationale: &str,
    priority: RecommendationPriority,
) -> CareRecommendation {
    CareRecommendation {
        category: category.to_string(),
        recommendation: recommendation.to_string(),
        rationale: rationale.to_string(),
        priority,
    }
}

fn high_risk_baseline() -> [CareRecommendation; 2] {
    [
        item(
            "Antibiotic Prophylaxis",
            "Consider broad-spectrum topical antibiotic therapy (e.g., fluoroquinolone class) to prevent endophthalmitis risk.",
            "Elevated risk profile warrants prophylactic antimicrobial coverage to prevent bacterial colonization.",
            RecommendationPriority::Urgent,
        ),
        item(
            "Follow-up Schedule",
            "Schedule daily follow-up examinations for the first 72 hours post-operatively.",
            "High-risk patients require close monitoring to detect early signs of complications.",
            RecommendationPriority::Urgent,
        ),
    ]
}

/// Recommendations triggered by one factor label, in a fixed order.
///
/// Matching is a case-sensitive substring test on the label, so a single
/// factor may trigger more than one recommendation.
fn for_factor(label: &str, category: RiskCategory) -> Vec<CareRecommendation> {
    let mut out = Vec::new();
    if label.contains("diabetes") {
        out.push(item(
            "Glycemic Optimization",
            "Coordinate with endocrinology for perioperative glycemic control optimization.",
            "Poor glycemic control significantly increases infection risk and impairs wound healing.",
            if category == RiskCategory::High {
                RecommendationPriority::Urgent
            } else {
                RecommendationPriority::Important
            },
        ));
    }
    if label.contains("pressure") || label.contains("IOP") {
        out.push(item(
            "IOP Management",
            "Initiate topical IOP-lowering agents (prostaglandin analog or beta-blocker class).",
            "Elevated intraocular pressure requires pharmacological management to prevent optic nerve damage.",
            RecommendationPriority::Urgent,
        ));
    }
    if label.contains("pain") {
        out.push(item(
            "Pain Management",
            "Prescribe topical NSAID drops for inflammation and pain control.",
            "Severe pain may indicate significant inflammation requiring anti-inflammatory intervention.",
            RecommendationPriority::Important,
        ));
    }
    if label.contains("discharge") || label.contains("redness") {
        out.push(item(
            "Anti-inflammatory Therapy",
            "Consider topical corticosteroid therapy to manage post-operative inflammation.",
            "Clinical signs suggest inflammatory response requiring targeted intervention.",
            RecommendationPriority::Important,
        ));
    }
    out
}

fn compliance_support() -> CareRecommendation {
    item(
        "Compliance Support",
        "Implement structured medication reminders and simplified drop regimen. Consider caregiver involvement.",
        "Poor compliance significantly increases complication risk and requires proactive intervention.",
        RecommendationPriority::Urgent,
    )
}

fn edema_management(severity: CornealEdemaSeverity) -> Option<CareRecommendation> {
    let (adjective, priority) = match severity {
        CornealEdemaSeverity::Severe => ("Severe", RecommendationPriority::Urgent),
        CornealEdemaSeverity::Moderate => ("Moderate", RecommendationPriority::Important),
        CornealEdemaSeverity::None | CornealEdemaSeverity::Mild => return None,
    };
    Some(CareRecommendation {
        category: "Corneal Edema Management".to_string(),
        recommendation: "Initiate hypertonic saline drops (5% NaCl) and consider topical corticosteroid to reduce corneal swelling.".to_string(),
        rationale: format!(
            "{adjective} corneal edema may delay visual recovery and requires active management."
        ),
        priority,
    })
}

fn inflammation_control(grade: InflammationGrade) -> Option<CareRecommendation> {
    let priority = match grade {
        InflammationGrade::ThreePlus => RecommendationPriority::Urgent,
        InflammationGrade::TwoPlus => RecommendationPriority::Important,
        InflammationGrade::Zero | InflammationGrade::OnePlus => return None,
    };
    Some(CareRecommendation {
        category: "Inflammation Control".to_string(),
        recommendation: format!(
            "Intensify topical corticosteroid regimen for grade {grade} anterior chamber inflammation. Consider hourly dosing."
        ),
        rationale: "Significant post-operative inflammation requires aggressive anti-inflammatory therapy to prevent complications.".to_string(),
        priority,
    })
}

fn lubrication() -> CareRecommendation {
    item(
        "Lubricating Therapy",
        "Prescribe preservative-free artificial tears for ocular surface protection.",
        "Post-operative ocular surface requires lubrication to promote healing and comfort.",
        RecommendationPriority::Routine,
    )
}

fn activity_restrictions() -> CareRecommendation {
    item(
        "Activity Restrictions",
        "Advise strict activity limitations: no heavy lifting, bending, or strenuous exercise for 2 weeks.",
        "Complex surgery requires extended healing time with minimized physical stress.",
        RecommendationPriority::Important,
    )
}

/// Build the prioritized care plan for a scored assessment.
pub fn recommend(assessment: &Assessment, risk: &RiskAssessment) -> Vec<CareRecommendation> {
    let mut out = Vec::new();

    if risk.risk_category == RiskCategory::High {
        out.extend(high_risk_baseline());
    }

    for factor in &risk.top_risk_factors {
        out.extend(for_factor(&factor.label, risk.risk_category));
    }

    if assessment.compliance_score == ComplianceScore::Poor {
        out.push(compliance_support());
    }

    if let Some(measurements) = &assessment.clinical_measurements {
        out.extend(edema_management(measurements.corneal_edema_severity));
        out.extend(inflammation_control(measurements.inflammation_grade));
    }

    out.push(lubrication());

    if assessment
        .surgery_details
        .as_ref()
        .is_some_and(|s| s.complexity == SurgeryComplexity::Complex)
    {
        out.push(activity_restrictions());
    }

    out.truncate(MAX_RECOMMENDATIONS);
    out
}
