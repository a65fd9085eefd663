//! Clinician and patient-facing explanations of a risk assessment.

use ocuscore_core::models::risk::{RiskAssessment, RiskCategory};

/// How many factors either explanation mentions by name.
const NAMED_FACTOR_COUNT: usize = 3;

/// Render an explanation.
///
/// `simplified` selects plain patient-facing language; otherwise the text is
/// a clinician summary listing contributions. Explanation notes from scoring
/// are appended in both cases.
pub fn explain(risk: &RiskAssessment, simplified: bool) -> String {
    if simplified {
        patient_explanation(risk)
    } else {
        clinician_explanation(risk)
    }
}

fn patient_explanation(risk: &RiskAssessment) -> String {
    let risk_text = match risk.risk_category {
        RiskCategory::High => "higher than normal",
        RiskCategory::Medium => "moderate",
        RiskCategory::Low => "relatively low",
    };
    let main_factors = risk
        .top_risk_factors
        .iter()
        .take(NAMED_FACTOR_COUNT)
        .map(|f| f.label.to_lowercase())
        .collect::<Vec<_>>()
        .join(", ");
    let closing = if risk.risk_category == RiskCategory::High {
        "Close monitoring and preventive measures are recommended."
    } else {
        "Standard follow-up care is advised."
    };

    let mut text = format!(
        "This patient has a {risk_text} chance of developing complications after surgery. \
         The main concerns are: {main_factors}. {closing}"
    );
    if !risk.explanation_notes.is_empty() {
        text.push_str("\n\n");
        text.push_str(&risk.explanation_notes.join(" "));
    }
    text
}

fn clinician_explanation(risk: &RiskAssessment) -> String {
    let mut text = format!(
        "Based on multimodal analysis integrating clinical parameters, behavioral risk factors, \
         and visual assessment data, this patient demonstrates a {}-risk profile with an \
         aggregate complication probability of {}%.\n\n",
        risk.risk_category.as_str(),
        risk.overall_risk_score,
    );

    text.push_str("Primary Risk Contributors:\n");
    for (index, factor) in risk
        .top_risk_factors
        .iter()
        .take(NAMED_FACTOR_COUNT)
        .enumerate()
    {
        text.push_str(&format!(
            "{}. {} ({:.1}% contribution)\n",
            index + 1,
            factor.label,
            factor.contribution
        ));
    }

    text.push_str(&format!(
        "\nThe predictive model incorporates weighted contributions from clinical history ({}%), \
         behavioral factors ({}%), and media-derived indicators ({}%). ",
        risk.clinical_contribution, risk.behavioral_contribution, risk.media_contribution,
    ));
    text.push_str(match risk.risk_category {
        RiskCategory::High => {
            "Immediate clinical attention and enhanced monitoring protocols are strongly recommended."
        }
        RiskCategory::Medium => {
            "Vigilant observation with scheduled follow-ups is advised to monitor for early complication indicators."
        }
        RiskCategory::Low => {
            "Standard post-operative care protocols are appropriate for this risk profile."
        }
    });

    if !risk.explanation_notes.is_empty() {
        text.push_str("\n\n");
        text.push_str(&risk.explanation_notes.join("\n"));
    }
    text
}
