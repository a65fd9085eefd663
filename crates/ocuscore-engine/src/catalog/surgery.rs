use ocuscore_core::models::assessment::{
    Assessment, IntraoperativeComplication, SurgeonExperience, SurgeryComplexity, SurgeryDetails,
};

use super::{Rule, Scaling, Section, Stream};

static RULES: [Rule<SurgeryDetails>; 5] = [
    Rule {
        id: "complex_procedure",
        label: "Complex surgical procedure",
        points: 15,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |s| s.complexity == SurgeryComplexity::Complex,
    },
    Rule {
        id: "posterior_capsule_rupture",
        label: "Posterior capsule rupture",
        points: 22,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |s| {
            s.intraoperative_complication_type == IntraoperativeComplication::PosteriorCapsuleRupture
        },
    },
    Rule {
        id: "vitreous_loss",
        label: "Vitreous loss during surgery",
        points: 25,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |s| s.intraoperative_complication_type == IntraoperativeComplication::VitreousLoss,
    },
    Rule {
        id: "zonular_weakness",
        label: "Zonular weakness",
        points: 15,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |s| {
            s.intraoperative_complication_type == IntraoperativeComplication::ZonularWeakness
        },
    },
    Rule {
        id: "junior_surgeon",
        label: "Junior surgeon",
        points: 5,
        stream: Stream::Clinical,
        scaling: Scaling::Fixed,
        applies: |s| s.surgeon_experience == SurgeonExperience::Junior,
    },
];

impl Section for SurgeryDetails {
    const NAME: &'static str = "surgeryDetails";

    fn rules() -> &'static [Rule<Self>] {
        &RULES
    }

    fn of(assessment: &Assessment) -> Option<&Self> {
        assessment.surgery_details.as_ref()
    }
}
