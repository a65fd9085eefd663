use std::io::Read;
use std::path::Path;

use ocuscore_core::models::assessment::Assessment;
use ocuscore_core::models::media::MediaAnalysis;
use ocuscore_engine::random::RngSource;
use ocuscore_engine::{catalog, evaluate};
use ocuscore_export::{ClinicalReport, DEFAULT_SUMMARY_TEMPLATE, render_summary, to_json};
use ocuscore_intake::analysis::{analysis_from_reply, parse_analysis_response};
use ocuscore_intake::analyzer::{MediaAnalyzer, SimulatedAnalyzer, media_or_absent};
use ocuscore_intake::error::IntakeError;
use ocuscore_intake::extraction::extraction_or_fallback;
use tracing::info;

use crate::cli::{OutputFormat, ScoreArgs};
use crate::config::OcuscoreConfig;

/// Read a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> eyre::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))
}

/// Media findings from a file holding either the collaborator's reply body
/// or the model's raw answer. An error reply means no media.
fn media_from_file(path: &Path) -> eyre::Result<Option<MediaAnalysis>> {
    let text = read_input(path)?;
    let result = match analysis_from_reply(&text) {
        Err(IntakeError::Serialization(_)) => Ok(parse_analysis_response(&text)),
        other => other,
    };
    Ok(media_or_absent(result))
}

/// Score one assessment and render it in the requested format.
pub fn run_score(args: &ScoreArgs, config: &OcuscoreConfig) -> eyre::Result<String> {
    let mut assessment = Assessment::from_json(&read_input(&args.assessment)?)?;

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    if let Some(path) = &args.extraction {
        let extraction = extraction_or_fallback(&read_input(path)?);
        let applied = assessment.merge_extraction(&extraction);
        info!(
            applied,
            confidence = extraction.extraction_confidence,
            "merged report extraction"
        );
    }

    if let Some(path) = &args.media {
        assessment.media_analysis = media_from_file(path)?;
    } else if args.simulate_media {
        let result = SimulatedAnalyzer::new(&mut rng).analyze(&[]);
        assessment.media_analysis = media_or_absent(result);
    }

    let evaluation = evaluate(&assessment, &mut rng);
    let format = args.format.unwrap_or(config.default_format);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&evaluation)?),
        OutputFormat::Report => {
            let report = ClinicalReport::new(assessment, evaluation, args.confirmed);
            Ok(to_json(&report)?)
        }
        OutputFormat::Markdown => {
            let mut report = ClinicalReport::new(assessment, evaluation, args.confirmed);
            if args.simplified || config.simplified {
                report.explanation = report.patient_explanation.clone();
            }
            let template = match args.template.as_ref().or(config.summary_template.as_ref()) {
                Some(path) => read_input(path)?,
                None => DEFAULT_SUMMARY_TEMPLATE.to_string(),
            };
            Ok(render_summary(&report, &template)?)
        }
    }
}

/// The rule catalog as JSON.
pub fn run_rules() -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(&catalog::all_rules())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const ASSESSMENT: &str = r#"{
        "demographics": { "age": 75 },
        "systemicHistory": { "diabetesControl": "poor" },
        "postOperativeSymptoms": { "painLevel": 8 },
        "clinicalMeasurements": { "intraocularPressure": 26 },
        "complianceScore": "poor",
        "timeSinceSurgery": { "value": 1, "unit": "days" }
    }"#;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn args(assessment: PathBuf) -> ScoreArgs {
        ScoreArgs {
            assessment,
            seed: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn json_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_score(
            &args(write(&dir, "a.json", ASSESSMENT)),
            &OcuscoreConfig::default(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["riskAssessment"]["overallRiskScore"], 92);
        assert_eq!(value["recommendations"].as_array().map(Vec::len), Some(6));
    }

    #[test]
    fn same_seed_same_output() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(write(&dir, "a.json", ASSESSMENT));
        let config = OcuscoreConfig::default();
        assert_eq!(
            run_score(&args, &config).unwrap(),
            run_score(&args, &config).unwrap()
        );
    }

    #[test]
    fn markdown_from_config_with_patient_language() {
        let dir = tempfile::tempdir().unwrap();
        let config = OcuscoreConfig {
            default_format: OutputFormat::Markdown,
            simplified: true,
            ..Default::default()
        };
        let out = run_score(&args(write(&dir, "a.json", ASSESSMENT)), &config).unwrap();
        assert!(out.contains("- Overall risk score: **92** (high)"));
        assert!(out.contains("This patient has a higher than normal chance"));
    }

    #[test]
    fn extraction_is_merged_before_scoring() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(write(&dir, "a.json", "{}"));
        args.extraction = Some(write(
            &dir,
            "x.txt",
            r#"{"systemicHistory": {"immunocompromised": true}, "extractionConfidence": 90}"#,
        ));
        let out = run_score(&args, &OcuscoreConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["riskAssessment"]["overallRiskScore"], 18);
    }

    #[test]
    fn media_file_accepts_raw_answer_and_error_reply() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(write(&dir, "a.json", "{}"));

        args.media = Some(write(
            &dir,
            "m.txt",
            "```json\n{\"rednessScore\": 60, \"edemaScore\": 60, \"dischargePatternScore\": 60, \
             \"overallMediaRisk\": 60, \"abnormalCues\": []}\n```",
        ));
        let out = run_score(&args, &OcuscoreConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["riskAssessment"]["overallRiskScore"], 18);

        args.media = Some(write(&dir, "e.json", r#"{"error": "No image provided"}"#));
        let out = run_score(&args, &OcuscoreConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["riskAssessment"]["overallRiskScore"], 5);
    }

    #[test]
    fn invalid_assessment_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(write(&dir, "a.json", r#"{"complianceScore": "sometimes"}"#));
        assert!(run_score(&args, &OcuscoreConfig::default()).is_err());
    }

    #[test]
    fn rules_list_every_catalog_entry() {
        let value: serde_json::Value = serde_json::from_str(&run_rules().unwrap()).unwrap();
        let rules = value.as_array().unwrap();
        assert_eq!(rules.len(), catalog::all_rules().len());
        assert_eq!(rules[0]["id"], "age_over_70");
        assert_eq!(rules[0]["section"], "demographics");
    }
}
