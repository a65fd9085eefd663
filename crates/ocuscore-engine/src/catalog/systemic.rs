use ocuscore_core::models::assessment::{
    Assessment, DiabetesControl, HypertensionSeverity, SystemicHistory,
};

use super::{Rule, Scaling, Section, Stream};

static RULES: [Rule<SystemicHistory>; 5] = [
    Rule {
        id: "diabetes_poor",
        label: "Poorly controlled diabetes",
        points: 20,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |s| s.diabetes_control == DiabetesControl::Poor,
    },
    Rule {
        id: "diabetes_moderate",
        label: "Moderately controlled diabetes",
        points: 10,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |s| s.diabetes_control == DiabetesControl::Moderate,
    },
    Rule {
        id: "hypertension_severe",
        label: "Severe hypertension",
        points: 12,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |s| s.hypertension_severity == HypertensionSeverity::Severe,
    },
    Rule {
        id: "immunocompromised",
        label: "Immunocompromised status",
        points: 18,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |s| s.immunocompromised,
    },
    Rule {
        id: "steroid_use",
        label: "Long-term steroid use",
        points: 10,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |s| s.steroid_use,
    },
];

impl Section for SystemicHistory {
    const NAME: &'static str = "systemicHistory";

    fn rules() -> &'static [Rule<Self>] {
        &RULES
    }

    fn of(assessment: &Assessment) -> Option<&Self> {
        assessment.systemic_history.as_ref()
    }
}
