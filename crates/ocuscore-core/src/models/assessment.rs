use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::media::MediaAnalysis;
use crate::error::CoreError;

/// Hours assumed when the assessment does not say how long ago surgery was.
pub const DEFAULT_HOURS_SINCE_SURGERY: f64 = 48.0;

/// A post-operative eye-surgery assessment as entered by the clinician.
///
/// Every section is optional. An absent section contributes nothing to the
/// risk score; a present section contributes only the fields that are set
/// to something other than their neutral default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Assessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographics: Option<Demographics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub systemic_history: Option<SystemicHistory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocular_history: Option<OcularHistory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surgery_details: Option<SurgeryDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_operative_symptoms: Option<PostOperativeSymptoms>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_measurements: Option<ClinicalMeasurements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_analysis: Option<MediaAnalysis>,
    /// Vitals captured alongside the assessment. Never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_inputs: Option<AdditionalInputs>,
    #[serde(default)]
    pub compliance_score: ComplianceScore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_since_surgery: Option<TimeSinceSurgery>,
    #[serde(default)]
    pub follow_up_trend: FollowUpTrend,
    #[serde(default)]
    pub doctor_risk_override: DoctorRiskOverride,
}

impl Assessment {
    /// Parse an assessment from the JSON shape used by the intake form.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Elapsed time since surgery in hours, 48 when unknown.
    pub fn hours_since_surgery(&self) -> f64 {
        self.time_since_surgery
            .map(|t| t.as_hours())
            .unwrap_or(DEFAULT_HOURS_SINCE_SURGERY)
    }

    /// Attach (or clear) the result of an image analysis.
    pub fn with_media_analysis(mut self, media: Option<MediaAnalysis>) -> Self {
        self.media_analysis = media;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Demographics {
    pub age: f64,
    pub gender: Gender,
    pub smoking_status: SmokingStatus,
    pub occupational_exposure: String,
    pub residence: Residence,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SmokingStatus {
    #[default]
    Never,
    Former,
    Current,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Residence {
    #[default]
    Urban,
    Rural,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SystemicHistory {
    /// Years since diabetes diagnosis.
    pub diabetes_duration: f64,
    pub diabetes_control: DiabetesControl,
    pub hypertension_severity: HypertensionSeverity,
    pub autoimmune: bool,
    pub immunocompromised: bool,
    pub steroid_use: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum DiabetesControl {
    #[default]
    WellControlled,
    Moderate,
    Poor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum HypertensionSeverity {
    #[default]
    None,
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct OcularHistory {
    pub previous_surgeries: f64,
    pub chronic_conditions: Vec<String>,
    pub previous_complications: bool,
    pub contact_lens_use: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SurgeryDetails {
    pub surgery_type: SurgeryType,
    pub complexity: SurgeryComplexity,
    /// Minutes.
    pub duration: f64,
    pub surgeon_experience: SurgeonExperience,
    pub intraoperative_complication_type: IntraoperativeComplication,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SurgeryType {
    #[default]
    Cataract,
    Lasik,
    Glaucoma,
    Retinal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SurgeryComplexity {
    #[default]
    Routine,
    Moderate,
    Complex,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SurgeonExperience {
    Junior,
    #[default]
    Experienced,
    Expert,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum IntraoperativeComplication {
    #[default]
    None,
    PosteriorCapsuleRupture,
    ZonularWeakness,
    VitreousLoss,
}

/// Patient-reported symptoms. Levels are on a 0–10 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PostOperativeSymptoms {
    pub pain_level: f64,
    pub redness_level: f64,
    pub swelling_level: f64,
    pub visual_blur: bool,
    pub discharge: bool,
    pub photophobia: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ClinicalMeasurements {
    /// mmHg.
    pub intraocular_pressure: f64,
    pub corneal_clarity: CornealClarity,
    pub wound_integrity: WoundIntegrity,
    pub anterior_chamber_reaction: AnteriorChamberReaction,
    pub inflammation_grade: InflammationGrade,
    pub corneal_edema_severity: CornealEdemaSeverity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum CornealClarity {
    #[default]
    Clear,
    MildHaze,
    ModerateHaze,
    Opaque,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum WoundIntegrity {
    #[default]
    Intact,
    MinorIssue,
    Concern,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum AnteriorChamberReaction {
    #[default]
    None,
    Trace,
    Mild,
    Moderate,
    Severe,
}

/// Anterior chamber inflammation grade (0 to 3+).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum InflammationGrade {
    #[default]
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1+")]
    OnePlus,
    #[serde(rename = "2+")]
    TwoPlus,
    #[serde(rename = "3+")]
    ThreePlus,
}

impl fmt::Display for InflammationGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InflammationGrade::Zero => "0",
            InflammationGrade::OnePlus => "1+",
            InflammationGrade::TwoPlus => "2+",
            InflammationGrade::ThreePlus => "3+",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum CornealEdemaSeverity {
    #[default]
    None,
    Mild,
    Moderate,
    Severe,
}

impl fmt::Display for CornealEdemaSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CornealEdemaSeverity::None => "none",
            CornealEdemaSeverity::Mild => "mild",
            CornealEdemaSeverity::Moderate => "moderate",
            CornealEdemaSeverity::Severe => "severe",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct AdditionalInputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure_systolic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure_diastolic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_sugar: Option<f64>,
}

/// Medication adherence category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ComplianceScore {
    #[default]
    Good,
    Moderate,
    Poor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum FollowUpTrend {
    Improving,
    #[default]
    Stable,
    Worsening,
}

/// Clinician directive applied to the computed score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum DoctorRiskOverride {
    #[default]
    Accept,
    Increase,
    Decrease,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimeSinceSurgery {
    pub value: f64,
    pub unit: TimeUnit,
}

impl TimeSinceSurgery {
    pub fn hours(value: f64) -> Self {
        Self {
            value,
            unit: TimeUnit::Hours,
        }
    }

    pub fn days(value: f64) -> Self {
        Self {
            value,
            unit: TimeUnit::Days,
        }
    }

    pub fn as_hours(&self) -> f64 {
        match self.unit {
            TimeUnit::Hours => self.value,
            TimeUnit::Days => self.value * 24.0,
        }
    }
}

impl fmt::Display for TimeSinceSurgery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum TimeUnit {
    Hours,
    Days,
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_time_defaults_to_two_days() {
        assert_eq!(Assessment::default().hours_since_surgery(), 48.0);
    }

    #[test]
    fn days_are_normalized_to_hours() {
        let assessment = Assessment {
            time_since_surgery: Some(TimeSinceSurgery::days(3.0)),
            ..Default::default()
        };
        assert_eq!(assessment.hours_since_surgery(), 72.0);
    }

    #[test]
    fn time_display_drops_integral_fraction() {
        assert_eq!(TimeSinceSurgery::days(1.0).to_string(), "1 days");
        assert_eq!(TimeSinceSurgery::hours(6.5).to_string(), "6.5 hours");
    }

    #[test]
    fn deserializes_wire_spellings() {
        let json = r#"{
            "systemicHistory": { "diabetesControl": "well-controlled" },
            "surgeryDetails": { "intraoperativeComplicationType": "posterior-capsule-rupture" },
            "clinicalMeasurements": { "inflammationGrade": "2+", "cornealClarity": "mild-haze" },
            "complianceScore": "poor",
            "timeSinceSurgery": { "value": 1, "unit": "days" }
        }"#;
        let assessment: Assessment = serde_json::from_str(json).unwrap();

        let systemic = assessment.systemic_history.as_ref().unwrap();
        assert_eq!(systemic.diabetes_control, DiabetesControl::WellControlled);
        assert!(!systemic.steroid_use);

        let surgery = assessment.surgery_details.as_ref().unwrap();
        assert_eq!(
            surgery.intraoperative_complication_type,
            IntraoperativeComplication::PosteriorCapsuleRupture
        );

        let clinical = assessment.clinical_measurements.as_ref().unwrap();
        assert_eq!(clinical.inflammation_grade, InflammationGrade::TwoPlus);
        assert_eq!(clinical.corneal_clarity, CornealClarity::MildHaze);

        assert_eq!(assessment.compliance_score, ComplianceScore::Poor);
        assert_eq!(assessment.follow_up_trend, FollowUpTrend::Stable);
        assert_eq!(assessment.doctor_risk_override, DoctorRiskOverride::Accept);
        assert!(assessment.demographics.is_none());
        assert_eq!(assessment.hours_since_surgery(), 24.0);
    }

    #[test]
    fn out_of_range_numbers_are_accepted() {
        let assessment = Assessment::from_json(
            r#"{
                "demographics": { "age": -3 },
                "ocularHistory": { "previousSurgeries": 1.5 },
                "postOperativeSymptoms": { "painLevel": 7.5, "rednessLevel": 11 }
            }"#,
        )
        .unwrap();
        assert_eq!(assessment.demographics.map(|d| d.age), Some(-3.0));
        assert_eq!(assessment.ocular_history.map(|o| o.previous_surgeries), Some(1.5));
        let symptoms = assessment.post_operative_symptoms.unwrap();
        assert_eq!(symptoms.pain_level, 7.5);
        assert_eq!(symptoms.redness_level, 11.0);
    }
}
