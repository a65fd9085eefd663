use ocuscore_core::models::assessment::{
    AnteriorChamberReaction, Assessment, ClinicalMeasurements, CornealClarity,
    CornealEdemaSeverity, InflammationGrade, WoundIntegrity,
};

use super::{Rule, Scaling, Section, Stream};

static RULES: [Rule<ClinicalMeasurements>; 11] = [
    Rule {
        id: "iop_elevated",
        label: "Elevated intraocular pressure",
        points: 18,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |m| m.intraocular_pressure > 25.0,
    },
    Rule {
        id: "iop_borderline",
        label: "Borderline IOP",
        points: 10,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |m| m.intraocular_pressure > 21.0 && m.intraocular_pressure <= 25.0,
    },
    Rule {
        id: "cornea_opaque",
        label: "Opaque cornea",
        points: 15,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |m| m.corneal_clarity == CornealClarity::Opaque,
    },
    Rule {
        id: "wound_concern",
        label: "Wound integrity concern",
        points: 20,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |m| m.wound_integrity == WoundIntegrity::Concern,
    },
    Rule {
        id: "anterior_chamber_reaction",
        label: "Significant anterior chamber reaction",
        points: 15,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |m| {
            matches!(
                m.anterior_chamber_reaction,
                AnteriorChamberReaction::Moderate | AnteriorChamberReaction::Severe
            )
        },
    },
    Rule {
        id: "inflammation_1",
        label: "Inflammation grade 1+",
        points: 5,
        stream: Stream::Clinical,
        scaling: Scaling::Temporal,
        applies: |m| m.inflammation_grade == InflammationGrade::OnePlus,
    },
    Rule {
        id: "inflammation_2",
        label: "Inflammation grade 2+",
        points: 12,
        stream: Stream::Clinical,
        scaling: Scaling::Temporal,
        applies: |m| m.inflammation_grade == InflammationGrade::TwoPlus,
    },
    Rule {
        id: "inflammation_3",
        label: "Inflammation grade 3+",
        points: 22,
        stream: Stream::Clinical,
        scaling: Scaling::Temporal,
        applies: |m| m.inflammation_grade == InflammationGrade::ThreePlus,
    },
    Rule {
        id: "edema_mild",
        label: "Corneal edema (mild)",
        points: 4,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |m| m.corneal_edema_severity == CornealEdemaSeverity::Mild,
    },
    Rule {
        id: "edema_moderate",
        label: "Corneal edema (moderate)",
        points: 12,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |m| m.corneal_edema_severity == CornealEdemaSeverity::Moderate,
    },
    Rule {
        id: "edema_severe",
        label: "Corneal edema (severe)",
        points: 20,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |m| m.corneal_edema_severity == CornealEdemaSeverity::Severe,
    },
];

impl Section for ClinicalMeasurements {
    const NAME: &'static str = "clinicalMeasurements";

    fn rules() -> &'static [Rule<Self>] {
        &RULES
    }

    fn of(assessment: &Assessment) -> Option<&Self> {
        assessment.clinical_measurements.as_ref()
    }
}
