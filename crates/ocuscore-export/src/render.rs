use tera::{Context, Tera};
use tracing::debug;

use crate::error::ExportError;
use crate::report::ClinicalReport;

const TEMPLATE_NAME: &str = "summary.md";

/// Markdown clinical summary. The context is the report's JSON form, so
/// fields use their camelCase names.
pub const DEFAULT_SUMMARY_TEMPLATE: &str = r#"# Post-operative risk summary

Report `{{ reportId }}`, generated {{ generatedAt }}.

## Risk

- Overall risk score: **{{ riskAssessment.overallRiskScore }}** ({{ riskAssessment.riskCategory }})
- Follow-up priority: {{ riskAssessment.followUpPriority }}
- Confidence: {{ riskAssessment.confidenceLevel }}%
- Contributions: clinical {{ riskAssessment.clinicalContribution }}, behavioral {{ riskAssessment.behavioralContribution }}, media {{ riskAssessment.mediaContribution }}
{%- if riskAssessment.doctorOverrideApplied %}
- Doctor override applied
{%- endif %}

## Top risk factors
{% if riskAssessment.topRiskFactors | length > 0 %}
{% for f in riskAssessment.topRiskFactors -%}
{{ loop.index }}. {{ f.factor }} ({{ f.contribution | round(precision=1) }})
{% endfor -%}
{% else %}
No risk factors identified.
{% endif %}
## Recommendations

{% for r in recommendations -%}
- **{{ r.category }}** [{{ r.priority }}]: {{ r.recommendation }}
{% endfor %}
{%- if mediaAnalysis %}
## Image analysis

Overall media risk {{ mediaAnalysis.overallMediaRisk }} (redness {{ mediaAnalysis.rednessScore }}, edema {{ mediaAnalysis.edemaScore }}, discharge {{ mediaAnalysis.dischargePatternScore }}).
{% for cue in mediaAnalysis.abnormalCues -%}
- {{ cue }}
{% endfor %}
{%- endif %}
## Projected trajectory

| Day | Risk | Clinical | Media |
|---|---|---|---|
{% for p in projection -%}
| {{ p.day }} | {{ p.riskScore }} | {{ p.clinicalContribution }} | {{ p.mediaContribution }} |
{% endfor %}
## Explanation

{{ explanation }}

---
{% if humanConfirmed %}Reviewed and confirmed by the treating clinician.{% else %}Pending clinician review.{% endif %}
"#;

/// Render a report summary from a Tera template.
///
/// The report is serialized to JSON and its top-level fields become the
/// template variables.
pub fn render_summary(report: &ClinicalReport, template: &str) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, template)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(report)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(TEMPLATE_NAME, &context)?;
    debug!(report_id = %report.report_id, len = rendered.len(), "summary rendered");
    Ok(rendered)
}
