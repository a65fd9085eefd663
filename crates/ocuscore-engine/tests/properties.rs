use ocuscore_core::models::assessment::{
    Assessment, ClinicalMeasurements, ComplianceScore, CornealEdemaSeverity, Demographics,
    DiabetesControl, DoctorRiskOverride, FollowUpTrend, InflammationGrade, PostOperativeSymptoms,
    SmokingStatus, SystemicHistory, TimeSinceSurgery,
};
use ocuscore_core::models::media::MediaAnalysis;
use ocuscore_core::models::risk::RiskCategory;
use ocuscore_engine::projection::PROJECTION_DAYS;
use ocuscore_engine::random::RngSource;
use ocuscore_engine::recommend::MAX_RECOMMENDATIONS;
use ocuscore_engine::scoring::breakdown;
use ocuscore_engine::{evaluate, project};
use proptest::prelude::*;
use proptest::sample::select;

fn arb_patient() -> impl Strategy<Value = (Demographics, SystemicHistory)> {
    (
        -5.0f64..100.0,
        select(vec![SmokingStatus::Never, SmokingStatus::Former, SmokingStatus::Current]),
        select(vec![
            DiabetesControl::WellControlled,
            DiabetesControl::Moderate,
            DiabetesControl::Poor,
        ]),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(age, smoking_status, diabetes_control, immunocompromised, steroid_use)| {
            (
                Demographics {
                    age,
                    smoking_status,
                    ..Default::default()
                },
                SystemicHistory {
                    diabetes_control,
                    immunocompromised,
                    steroid_use,
                    ..Default::default()
                },
            )
        })
}

fn arb_findings() -> impl Strategy<Value = (PostOperativeSymptoms, ClinicalMeasurements)> {
    (
        0.0f64..=10.0,
        0.0f64..=10.0,
        0.0f64..=10.0,
        any::<bool>(),
        10.0f64..40.0,
        select(vec![
            InflammationGrade::Zero,
            InflammationGrade::OnePlus,
            InflammationGrade::TwoPlus,
            InflammationGrade::ThreePlus,
        ]),
        select(vec![
            CornealEdemaSeverity::None,
            CornealEdemaSeverity::Mild,
            CornealEdemaSeverity::Moderate,
            CornealEdemaSeverity::Severe,
        ]),
    )
        .prop_map(|(pain, redness, swelling, discharge, iop, inflammation, edema)| {
            (
                PostOperativeSymptoms {
                    pain_level: pain,
                    redness_level: redness,
                    swelling_level: swelling,
                    discharge,
                    ..Default::default()
                },
                ClinicalMeasurements {
                    intraocular_pressure: iop,
                    inflammation_grade: inflammation,
                    corneal_edema_severity: edema,
                    ..Default::default()
                },
            )
        })
}

fn arb_assessment() -> impl Strategy<Value = Assessment> {
    (
        proptest::option::of(arb_patient()),
        proptest::option::of(arb_findings()),
        proptest::option::of(0u32..=100),
        proptest::option::of(0.0f64..400.0),
        select(vec![
            ComplianceScore::Good,
            ComplianceScore::Moderate,
            ComplianceScore::Poor,
        ]),
        select(vec![
            FollowUpTrend::Improving,
            FollowUpTrend::Stable,
            FollowUpTrend::Worsening,
        ]),
        select(vec![
            DoctorRiskOverride::Accept,
            DoctorRiskOverride::Increase,
            DoctorRiskOverride::Decrease,
        ]),
    )
        .prop_map(
            |(patient, findings, media, hours, compliance, trend, doctor_override)| {
                let (demographics, systemic) = patient.unzip();
                let (symptoms, measurements) = findings.unzip();
                Assessment {
                    demographics,
                    systemic_history: systemic,
                    post_operative_symptoms: symptoms,
                    clinical_measurements: measurements,
                    media_analysis: media.map(|overall_media_risk| MediaAnalysis {
                        overall_media_risk,
                        ..Default::default()
                    }),
                    time_since_surgery: hours.map(TimeSinceSurgery::hours),
                    compliance_score: compliance,
                    follow_up_trend: trend,
                    doctor_risk_override: doctor_override,
                    ..Default::default()
                }
            },
        )
}

proptest! {
    #[test]
    fn score_stays_in_bounds(assessment in arb_assessment(), seed in any::<u64>()) {
        let evaluation = evaluate(&assessment, &mut RngSource::seeded(seed));
        let risk = &evaluation.risk_assessment;

        prop_assert!((5..=100).contains(&risk.overall_risk_score));
        prop_assert!((75..=95).contains(&risk.confidence_level));
        prop_assert_eq!(risk.risk_category, RiskCategory::from_score(risk.overall_risk_score));
        prop_assert!(risk.top_risk_factors.len() <= 5);
        prop_assert!(evaluation.recommendations.len() <= MAX_RECOMMENDATIONS);
        prop_assert!(evaluation
            .recommendations
            .iter()
            .any(|r| r.category == "Lubricating Therapy")
            || evaluation.recommendations.len() == MAX_RECOMMENDATIONS);
    }

    #[test]
    fn top_factors_are_descending(assessment in arb_assessment()) {
        let factors = breakdown(&assessment).top_factors();
        for pair in factors.windows(2) {
            prop_assert!(pair[0].contribution >= pair[1].contribution);
        }
    }

    #[test]
    fn worse_compliance_never_lowers_the_score(assessment in arb_assessment()) {
        let with = |compliance| {
            breakdown(&Assessment { compliance_score: compliance, ..assessment.clone() })
        };
        let good = with(ComplianceScore::Good);
        let moderate = with(ComplianceScore::Moderate);
        let poor = with(ComplianceScore::Poor);
        prop_assert!(good.overall_score() <= moderate.overall_score());
        prop_assert!(moderate.overall_score() <= poor.overall_score());
        if good.unclamped_total > 0.0 {
            prop_assert!(good.unclamped_total < moderate.unclamped_total);
            prop_assert!(moderate.unclamped_total < poor.unclamped_total);
        }
    }

    #[test]
    fn override_orders_scores(assessment in arb_assessment()) {
        let with = |doctor_risk_override| {
            breakdown(&Assessment { doctor_risk_override, ..assessment.clone() })
        };
        let decrease = with(DoctorRiskOverride::Decrease);
        let accept = with(DoctorRiskOverride::Accept);
        let increase = with(DoctorRiskOverride::Increase);
        prop_assert!(decrease.overall_score() <= accept.overall_score());
        prop_assert!(accept.overall_score() <= increase.overall_score());
        if accept.unclamped_total > 0.0 {
            prop_assert!(decrease.unclamped_total < accept.unclamped_total);
            prop_assert!(accept.unclamped_total < increase.unclamped_total);
        }
    }

    #[test]
    fn projection_has_five_bounded_days(base in 0i64..=100, seed in any::<u64>()) {
        let points = project(base, &mut RngSource::seeded(seed));
        let days: Vec<_> = points.iter().map(|p| p.day).collect();
        prop_assert_eq!(days, PROJECTION_DAYS.to_vec());
        for point in &points {
            prop_assert!((5..=95).contains(&point.risk_score));
            prop_assert!(point.clinical_contribution <= point.risk_score);
            prop_assert!(point.symptoms.pain_level <= 7.0);
        }
    }
}
