use ocuscore_core::models::assessment::Assessment;
use ocuscore_core::models::recommendation::RecommendationPriority;
use ocuscore_core::models::risk::{FollowUpPriority, RiskCategory, RiskFactor};
use ocuscore_engine::evaluate;
use ocuscore_engine::random::FixedSequence;
use pretty_assertions::assert_eq;

const HIGH_RISK_CATARACT: &str = r#"{
    "demographics": { "age": 75, "gender": "female", "smokingStatus": "never" },
    "systemicHistory": { "diabetesControl": "poor", "diabetesDuration": 12 },
    "surgeryDetails": { "surgeryType": "cataract", "complexity": "routine" },
    "postOperativeSymptoms": { "painLevel": 8, "rednessLevel": 3 },
    "clinicalMeasurements": { "intraocularPressure": 26, "inflammationGrade": "0" },
    "complianceScore": "poor",
    "timeSinceSurgery": { "value": 1, "unit": "days" }
}"#;

#[test]
fn high_risk_cataract_end_to_end() {
    let assessment = Assessment::from_json(HIGH_RISK_CATARACT).unwrap();
    let evaluation = evaluate(&assessment, &mut FixedSequence::constant(0.5));
    let risk = &evaluation.risk_assessment;

    assert_eq!(risk.overall_risk_score, 92);
    assert_eq!(risk.risk_category, RiskCategory::High);
    assert_eq!(risk.follow_up_priority, FollowUpPriority::Urgent);
    assert_eq!(risk.confidence_level, 85);
    assert_eq!(risk.clinical_contribution, 68);
    assert_eq!(risk.behavioral_contribution, 0);
    assert_eq!(risk.media_contribution, 0);
    assert!(!risk.doctor_override_applied);
    assert_eq!(
        risk.top_risk_factors,
        vec![
            RiskFactor::new("Poor patient compliance", 32.0),
            RiskFactor::new("Poorly controlled diabetes", 20.0),
            RiskFactor::new("Elevated intraocular pressure", 18.0),
            RiskFactor::new("Advanced age (>70)", 15.0),
            RiskFactor::new("Severe post-operative pain", 15.0),
        ]
    );
    assert_eq!(
        risk.explanation_notes,
        vec![
            "Low compliance can worsen outcomes even in otherwise low-risk patients.".to_string(),
            "Findings interpreted in context of 1 days post-surgery.".to_string(),
        ]
    );

    let categories: Vec<_> = evaluation
        .recommendations
        .iter()
        .map(|r| (r.category.as_str(), r.priority))
        .collect();
    assert_eq!(
        categories,
        vec![
            ("Antibiotic Prophylaxis", RecommendationPriority::Urgent),
            ("Follow-up Schedule", RecommendationPriority::Urgent),
            ("Glycemic Optimization", RecommendationPriority::Urgent),
            ("IOP Management", RecommendationPriority::Urgent),
            ("Pain Management", RecommendationPriority::Important),
            ("Compliance Support", RecommendationPriority::Urgent),
        ]
    );

    let risks: Vec<_> = evaluation.projection.iter().map(|p| p.risk_score).collect();
    assert_eq!(risks, vec![92, 87, 74, 52, 26]);

    assert!(evaluation.explanation.starts_with(
        "Based on multimodal analysis integrating clinical parameters, behavioral risk factors, \
         and visual assessment data, this patient demonstrates a high-risk profile with an \
         aggregate complication probability of 92%."
    ));
    assert!(evaluation.patient_explanation.starts_with(
        "This patient has a higher than normal chance of developing complications after surgery."
    ));
}

#[test]
fn empty_assessment_is_low_risk() {
    let assessment = Assessment::from_json("{}").unwrap();
    let evaluation = evaluate(&assessment, &mut FixedSequence::constant(0.0));
    let risk = &evaluation.risk_assessment;

    assert_eq!(risk.overall_risk_score, 5);
    assert_eq!(risk.risk_category, RiskCategory::Low);
    assert_eq!(risk.confidence_level, 75);
    assert!(risk.top_risk_factors.is_empty());
    assert_eq!(
        risk.explanation_notes,
        vec!["Findings interpreted in context of 2 days post-surgery.".to_string()]
    );
    assert_eq!(evaluation.recommendations.len(), 1);
    assert_eq!(evaluation.recommendations[0].category, "Lubricating Therapy");
}

#[test]
fn early_symptoms_weigh_less() {
    let json = r#"{
        "postOperativeSymptoms": { "painLevel": 9, "rednessLevel": 8, "swellingLevel": 7 },
        "timeSinceSurgery": { "value": 6, "unit": "hours" }
    }"#;
    let early = Assessment::from_json(json).unwrap();
    let late = Assessment::from_json(&json.replace(r#""value": 6, "unit": "hours""#, r#""value": 10, "unit": "days""#))
        .unwrap();

    let early = evaluate(&early, &mut FixedSequence::constant(0.5));
    let late = evaluate(&late, &mut FixedSequence::constant(0.5));

    // 0.7 * (15 + 12 + 10) with each rule rounded: 11 + 8 + 7.
    assert_eq!(early.risk_assessment.overall_risk_score, 26);
    // 1.2 * (15 + 12 + 10): 18 + 14 + 12.
    assert_eq!(late.risk_assessment.overall_risk_score, 44);
    assert_eq!(late.risk_assessment.risk_category, RiskCategory::Medium);
}

#[test]
fn evaluation_serializes_in_camel_case() {
    let assessment = Assessment::from_json(HIGH_RISK_CATARACT).unwrap();
    let evaluation = evaluate(&assessment, &mut FixedSequence::constant(0.5));
    let json = serde_json::to_value(&evaluation).unwrap();

    assert_eq!(json["riskAssessment"]["overallRiskScore"], 92);
    assert_eq!(json["riskAssessment"]["riskCategory"], "high");
    assert_eq!(
        json["riskAssessment"]["topRiskFactors"][0]["factor"],
        "Poor patient compliance"
    );
    assert_eq!(json["projection"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["projection"][2]["day"], 3);
    assert_eq!(json["recommendations"][0]["priority"], "urgent");
}
