//! Typed, per-field edits to an [`Assessment`].
//!
//! Form steps and report extraction both mutate an assessment one field at a
//! time. Each section has its own field enum so an update can only ever name
//! a field that exists, with a value of the right type.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::assessment::{
    AdditionalInputs, AnteriorChamberReaction, Assessment, ClinicalMeasurements, ComplianceScore,
    CornealClarity, CornealEdemaSeverity, Demographics, DiabetesControl, DoctorRiskOverride,
    FollowUpTrend, Gender, HypertensionSeverity, InflammationGrade, IntraoperativeComplication,
    OcularHistory, PostOperativeSymptoms, Residence, SmokingStatus, SurgeonExperience,
    SurgeryComplexity, SurgeryDetails, SurgeryType, SystemicHistory, TimeSinceSurgery,
    WoundIntegrity,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "section", content = "update", rename_all = "camelCase")]
#[ts(export)]
pub enum FieldUpdate {
    Demographics(DemographicsField),
    SystemicHistory(SystemicHistoryField),
    OcularHistory(OcularHistoryField),
    SurgeryDetails(SurgeryDetailsField),
    PostOperativeSymptoms(SymptomField),
    ClinicalMeasurements(MeasurementField),
    AdditionalInputs(AdditionalInputField),
    ComplianceScore(ComplianceScore),
    TimeSinceSurgery(TimeSinceSurgery),
    FollowUpTrend(FollowUpTrend),
    DoctorRiskOverride(DoctorRiskOverride),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum DemographicsField {
    Age(f64),
    Gender(Gender),
    SmokingStatus(SmokingStatus),
    OccupationalExposure(String),
    Residence(Residence),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum SystemicHistoryField {
    DiabetesDuration(f64),
    DiabetesControl(DiabetesControl),
    HypertensionSeverity(HypertensionSeverity),
    Autoimmune(bool),
    Immunocompromised(bool),
    SteroidUse(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum OcularHistoryField {
    PreviousSurgeries(f64),
    ChronicConditions(Vec<String>),
    PreviousComplications(bool),
    ContactLensUse(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum SurgeryDetailsField {
    SurgeryType(SurgeryType),
    Complexity(SurgeryComplexity),
    Duration(f64),
    SurgeonExperience(SurgeonExperience),
    IntraoperativeComplicationType(IntraoperativeComplication),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum SymptomField {
    PainLevel(f64),
    RednessLevel(f64),
    SwellingLevel(f64),
    VisualBlur(bool),
    Discharge(bool),
    Photophobia(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum MeasurementField {
    IntraocularPressure(f64),
    CornealClarity(CornealClarity),
    WoundIntegrity(WoundIntegrity),
    AnteriorChamberReaction(AnteriorChamberReaction),
    InflammationGrade(InflammationGrade),
    CornealEdemaSeverity(CornealEdemaSeverity),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum AdditionalInputField {
    BloodPressureSystolic(f64),
    BloodPressureDiastolic(f64),
    BloodSugar(f64),
}

impl Assessment {
    /// Set one field, creating its section with neutral defaults if needed.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Demographics(field) => {
                let section = self.demographics.get_or_insert_with(Demographics::default);
                match field {
                    DemographicsField::Age(v) => section.age = v,
                    DemographicsField::Gender(v) => section.gender = v,
                    DemographicsField::SmokingStatus(v) => section.smoking_status = v,
                    DemographicsField::OccupationalExposure(v) => {
                        section.occupational_exposure = v
                    }
                    DemographicsField::Residence(v) => section.residence = v,
                }
            }
            FieldUpdate::SystemicHistory(field) => {
                let section = self
                    .systemic_history
                    .get_or_insert_with(SystemicHistory::default);
                match field {
                    SystemicHistoryField::DiabetesDuration(v) => section.diabetes_duration = v,
                    SystemicHistoryField::DiabetesControl(v) => section.diabetes_control = v,
                    SystemicHistoryField::HypertensionSeverity(v) => {
                        section.hypertension_severity = v
                    }
                    SystemicHistoryField::Autoimmune(v) => section.autoimmune = v,
                    SystemicHistoryField::Immunocompromised(v) => section.immunocompromised = v,
                    SystemicHistoryField::SteroidUse(v) => section.steroid_use = v,
                }
            }
            FieldUpdate::OcularHistory(field) => {
                let section = self.ocular_history.get_or_insert_with(OcularHistory::default);
                match field {
                    OcularHistoryField::PreviousSurgeries(v) => section.previous_surgeries = v,
                    OcularHistoryField::ChronicConditions(v) => section.chronic_conditions = v,
                    OcularHistoryField::PreviousComplications(v) => {
                        section.previous_complications = v
                    }
                    OcularHistoryField::ContactLensUse(v) => section.contact_lens_use = v,
                }
            }
            FieldUpdate::SurgeryDetails(field) => {
                let section = self.surgery_details.get_or_insert_with(SurgeryDetails::default);
                match field {
                    SurgeryDetailsField::SurgeryType(v) => section.surgery_type = v,
                    SurgeryDetailsField::Complexity(v) => section.complexity = v,
                    SurgeryDetailsField::Duration(v) => section.duration = v,
                    SurgeryDetailsField::SurgeonExperience(v) => section.surgeon_experience = v,
                    SurgeryDetailsField::IntraoperativeComplicationType(v) => {
                        section.intraoperative_complication_type = v
                    }
                }
            }
            FieldUpdate::PostOperativeSymptoms(field) => {
                let section = self
                    .post_operative_symptoms
                    .get_or_insert_with(PostOperativeSymptoms::default);
                match field {
                    SymptomField::PainLevel(v) => section.pain_level = v,
                    SymptomField::RednessLevel(v) => section.redness_level = v,
                    SymptomField::SwellingLevel(v) => section.swelling_level = v,
                    SymptomField::VisualBlur(v) => section.visual_blur = v,
                    SymptomField::Discharge(v) => section.discharge = v,
                    SymptomField::Photophobia(v) => section.photophobia = v,
                }
            }
            FieldUpdate::ClinicalMeasurements(field) => {
                let section = self
                    .clinical_measurements
                    .get_or_insert_with(ClinicalMeasurements::default);
                match field {
                    MeasurementField::IntraocularPressure(v) => section.intraocular_pressure = v,
                    MeasurementField::CornealClarity(v) => section.corneal_clarity = v,
                    MeasurementField::WoundIntegrity(v) => section.wound_integrity = v,
                    MeasurementField::AnteriorChamberReaction(v) => {
                        section.anterior_chamber_reaction = v
                    }
                    MeasurementField::InflammationGrade(v) => section.inflammation_grade = v,
                    MeasurementField::CornealEdemaSeverity(v) => {
                        section.corneal_edema_severity = v
                    }
                }
            }
            FieldUpdate::AdditionalInputs(field) => {
                let section = self
                    .additional_inputs
                    .get_or_insert_with(AdditionalInputs::default);
                match field {
                    AdditionalInputField::BloodPressureSystolic(v) => {
                        section.blood_pressure_systolic = Some(v)
                    }
                    AdditionalInputField::BloodPressureDiastolic(v) => {
                        section.blood_pressure_diastolic = Some(v)
                    }
                    AdditionalInputField::BloodSugar(v) => section.blood_sugar = Some(v),
                }
            }
            FieldUpdate::ComplianceScore(v) => self.compliance_score = v,
            FieldUpdate::TimeSinceSurgery(v) => self.time_since_surgery = Some(v),
            FieldUpdate::FollowUpTrend(v) => self.follow_up_trend = v,
            FieldUpdate::DoctorRiskOverride(v) => self.doctor_risk_override = v,
        }
    }

    pub fn apply_all(&mut self, updates: impl IntoIterator<Item = FieldUpdate>) {
        for update in updates {
            self.apply(update);
        }
    }
}
