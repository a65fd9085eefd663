use ocuscore_core::models::assessment::{Assessment, PostOperativeSymptoms};

use super::{Rule, Scaling, Section, Stream};

static RULES: [Rule<PostOperativeSymptoms>; 6] = [
    Rule {
        id: "pain_severe",
        label: "Severe post-operative pain",
        points: 15,
        stream: Stream::Clinical,
        scaling: Scaling::Temporal,
        applies: |s| s.pain_level > 7.0,
    },
    Rule {
        id: "pain_moderate",
        label: "Moderate post-operative pain",
        points: 8,
        stream: Stream::Clinical,
        scaling: Scaling::Temporal,
        applies: |s| s.pain_level > 4.0 && s.pain_level <= 7.0,
    },
    Rule {
        id: "redness_significant",
        label: "Significant ocular redness",
        points: 12,
        stream: Stream::Clinical,
        scaling: Scaling::Temporal,
        applies: |s| s.redness_level > 6.0,
    },
    Rule {
        id: "swelling_notable",
        label: "Notable periocular swelling",
        points: 10,
        stream: Stream::Clinical,
        scaling: Scaling::Temporal,
        applies: |s| s.swelling_level > 6.0,
    },
    Rule {
        id: "visual_blur",
        label: "Visual blur reported",
        points: 8,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |s| s.visual_blur,
    },
    Rule {
        id: "discharge",
        label: "Ocular discharge present",
        points: 12,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |s| s.discharge,
    },
];

impl Section for PostOperativeSymptoms {
    const NAME: &'static str = "postOperativeSymptoms";

    fn rules() -> &'static [Rule<Self>] {
        &RULES
    }

    fn of(assessment: &Assessment) -> Option<&Self> {
        assessment.post_operative_symptoms.as_ref()
    }
}
