use ocuscore_core::models::assessment::{Assessment, OcularHistory};

use super::{Rule, Scaling, Section, Stream};

static RULES: [Rule<OcularHistory>; 2] = [
    Rule {
        id: "previous_complications",
        label: "Previous post-operative complications",
        points: 15,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |o| o.previous_complications,
    },
    Rule {
        id: "multiple_previous_surgeries",
        label: "Multiple previous eye surgeries",
        points: 8,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |o| o.previous_surgeries > 2.0,
    },
];

impl Section for OcularHistory {
    const NAME: &'static str = "ocularHistory";

    fn rules() -> &'static [Rule<Self>] {
        &RULES
    }

    fn of(assessment: &Assessment) -> Option<&Self> {
        assessment.ocular_history.as_ref()
    }
}
