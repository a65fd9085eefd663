use ocuscore_core::models::assessment::{Assessment, Demographics, SmokingStatus};

use super::{Rule, Scaling, Section, Stream};

static RULES: [Rule<Demographics>; 3] = [
    Rule {
        id: "age_over_70",
        label: "Advanced age (>70)",
        points: 15,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |d| d.age > 70.0,
    },
    Rule {
        id: "age_60_to_70",
        label: "Age 60-70",
        points: 8,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |d| d.age > 60.0 && d.age <= 70.0,
    },
    Rule {
        id: "active_smoking",
        label: "Active smoking",
        points: 12,
        stream: Stream::Behavioral,
        scaling: Scaling::Fixed,
        applies: |d| d.smoking_status == SmokingStatus::Current,
    },
];

impl Section for Demographics {
    const NAME: &'static str = "demographics";

    fn rules() -> &'static [Rule<Self>] {
        &RULES
    }

    fn of(assessment: &Assessment) -> Option<&Self> {
        assessment.demographics.as_ref()
    }
}
