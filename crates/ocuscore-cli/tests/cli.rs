use assert_cmd::Command;

const ASSESSMENT: &str = r#"{
    "demographics": { "age": 75 },
    "systemicHistory": { "diabetesControl": "poor" },
    "postOperativeSymptoms": { "painLevel": 8 },
    "clinicalMeasurements": { "intraocularPressure": 26 },
    "complianceScore": "poor",
    "timeSinceSurgery": { "value": 1, "unit": "days" }
}"#;

fn ocuscore(config_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ocuscore"));
    // Point at an empty config so the user's own file never leaks in.
    let config = config_dir.path().join("config.json");
    std::fs::write(&config, r#"{"config_version": 1}"#).unwrap();
    cmd.env("OCUSCORE_CONFIG", config).env_remove("RUST_LOG");
    cmd
}

#[test]
fn scores_assessment_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let output = ocuscore(&dir)
        .args(["score", "-", "--seed", "3"])
        .write_stdin(ASSESSMENT)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["riskAssessment"]["overallRiskScore"], 92);
    assert_eq!(value["riskAssessment"]["riskCategory"], "high");
}

#[test]
fn writes_markdown_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("assessment.json");
    let out = dir.path().join("summary.md");
    std::fs::write(&input, ASSESSMENT).unwrap();

    ocuscore(&dir)
        .arg("score")
        .arg(&input)
        .args(["--format", "markdown", "--seed", "3", "--confirmed", "--output"])
        .arg(&out)
        .assert()
        .success();

    let summary = std::fs::read_to_string(out).unwrap();
    assert!(summary.contains("- Overall risk score: **92** (high)"));
    assert!(summary.contains("Reviewed and confirmed by the treating clinician."));
}

#[test]
fn lists_rules() {
    let dir = tempfile::tempdir().unwrap();
    let output = ocuscore(&dir).arg("rules").output().unwrap();
    assert!(output.status.success());
    let rules: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(rules.as_array().is_some_and(|r| r.len() > 30));
}

#[test]
fn rejects_malformed_assessment() {
    let dir = tempfile::tempdir().unwrap();
    ocuscore(&dir)
        .args(["score", "-"])
        .write_stdin("{ not json")
        .assert()
        .failure();
}
