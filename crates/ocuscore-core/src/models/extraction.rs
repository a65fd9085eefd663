use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::assessment::{
    AnteriorChamberReaction, Assessment, ComplianceScore, CornealClarity, CornealEdemaSeverity,
    DiabetesControl, FollowUpTrend, Gender, HypertensionSeverity, InflammationGrade,
    IntraoperativeComplication, Residence, SmokingStatus, SurgeonExperience, SurgeryComplexity,
    SurgeryType, TimeSinceSurgery, TimeUnit, WoundIntegrity,
};
use super::update::{
    AdditionalInputField, DemographicsField, FieldUpdate, MeasurementField, OcularHistoryField,
    SurgeryDetailsField, SymptomField, SystemicHistoryField,
};

/// Values read out of an uploaded post-operative report.
///
/// Mirrors the extraction collaborator's response: every value is nullable
/// and only non-null values are merged into an assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ReportExtraction {
    pub demographics: Option<ExtractedDemographics>,
    pub systemic_history: Option<ExtractedSystemicHistory>,
    pub ocular_history: Option<ExtractedOcularHistory>,
    pub surgery_details: Option<ExtractedSurgeryDetails>,
    pub post_operative_symptoms: Option<ExtractedSymptoms>,
    pub clinical_measurements: Option<ExtractedMeasurements>,
    pub additional_inputs: Option<ExtractedAdditionalInputs>,
    pub compliance_score: Option<ComplianceScore>,
    pub time_since_surgery: Option<ExtractedTimeSinceSurgery>,
    pub follow_up_trend: Option<FollowUpTrend>,
    /// 0–100, how much of the report could be read reliably.
    pub extraction_confidence: u32,
    pub extraction_notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ExtractedDemographics {
    pub age: Option<f64>,
    pub gender: Option<Gender>,
    pub smoking_status: Option<SmokingStatus>,
    pub residence: Option<Residence>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ExtractedSystemicHistory {
    pub diabetes_duration: Option<f64>,
    pub diabetes_control: Option<DiabetesControl>,
    pub hypertension_severity: Option<HypertensionSeverity>,
    pub autoimmune: Option<bool>,
    pub immunocompromised: Option<bool>,
    pub steroid_use: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ExtractedOcularHistory {
    pub previous_surgeries: Option<f64>,
    pub previous_complications: Option<bool>,
    pub contact_lens_use: Option<bool>,
    pub chronic_conditions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ExtractedSurgeryDetails {
    pub surgery_type: Option<SurgeryType>,
    pub complexity: Option<SurgeryComplexity>,
    pub duration: Option<f64>,
    pub surgeon_experience: Option<SurgeonExperience>,
    pub intraoperative_complication_type: Option<IntraoperativeComplication>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ExtractedSymptoms {
    pub pain_level: Option<f64>,
    pub redness_level: Option<f64>,
    pub swelling_level: Option<f64>,
    pub visual_blur: Option<bool>,
    pub discharge: Option<bool>,
    pub photophobia: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ExtractedMeasurements {
    pub intraocular_pressure: Option<f64>,
    pub corneal_clarity: Option<CornealClarity>,
    pub wound_integrity: Option<WoundIntegrity>,
    pub anterior_chamber_reaction: Option<AnteriorChamberReaction>,
    pub inflammation_grade: Option<InflammationGrade>,
    pub corneal_edema_severity: Option<CornealEdemaSeverity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ExtractedAdditionalInputs {
    pub blood_pressure_systolic: Option<f64>,
    pub blood_pressure_diastolic: Option<f64>,
    pub blood_sugar: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ExtractedTimeSinceSurgery {
    pub value: Option<f64>,
    pub unit: Option<TimeUnit>,
}

impl ReportExtraction {
    /// Every non-null extracted value as a typed field update.
    pub fn updates(&self) -> Vec<FieldUpdate> {
        let mut updates = Vec::new();

        if let Some(d) = &self.demographics {
            push(&mut updates, d.age, |v| FieldUpdate::Demographics(DemographicsField::Age(v)));
            push(&mut updates, d.gender, |v| {
                FieldUpdate::Demographics(DemographicsField::Gender(v))
            });
            push(&mut updates, d.smoking_status, |v| {
                FieldUpdate::Demographics(DemographicsField::SmokingStatus(v))
            });
            push(&mut updates, d.residence, |v| {
                FieldUpdate::Demographics(DemographicsField::Residence(v))
            });
        }

        if let Some(s) = &self.systemic_history {
            use SystemicHistoryField as F;
            let wrap = FieldUpdate::SystemicHistory;
            push(&mut updates, s.diabetes_duration, |v| wrap(F::DiabetesDuration(v)));
            push(&mut updates, s.diabetes_control, |v| wrap(F::DiabetesControl(v)));
            push(&mut updates, s.hypertension_severity, |v| {
                wrap(F::HypertensionSeverity(v))
            });
            push(&mut updates, s.autoimmune, |v| wrap(F::Autoimmune(v)));
            push(&mut updates, s.immunocompromised, |v| wrap(F::Immunocompromised(v)));
            push(&mut updates, s.steroid_use, |v| wrap(F::SteroidUse(v)));
        }

        if let Some(o) = &self.ocular_history {
            use OcularHistoryField as F;
            let wrap = FieldUpdate::OcularHistory;
            push(&mut updates, o.previous_surgeries, |v| wrap(F::PreviousSurgeries(v)));
            push(&mut updates, o.previous_complications, |v| {
                wrap(F::PreviousComplications(v))
            });
            push(&mut updates, o.contact_lens_use, |v| wrap(F::ContactLensUse(v)));
            push(&mut updates, o.chronic_conditions.clone(), |v| {
                wrap(F::ChronicConditions(v))
            });
        }

        if let Some(s) = &self.surgery_details {
            use SurgeryDetailsField as F;
            let wrap = FieldUpdate::SurgeryDetails;
            push(&mut updates, s.surgery_type, |v| wrap(F::SurgeryType(v)));
            push(&mut updates, s.complexity, |v| wrap(F::Complexity(v)));
            push(&mut updates, s.duration, |v| wrap(F::Duration(v)));
            push(&mut updates, s.surgeon_experience, |v| wrap(F::SurgeonExperience(v)));
            push(&mut updates, s.intraoperative_complication_type, |v| {
                wrap(F::IntraoperativeComplicationType(v))
            });
        }

        if let Some(s) = &self.post_operative_symptoms {
            use SymptomField as F;
            let wrap = FieldUpdate::PostOperativeSymptoms;
            push(&mut updates, s.pain_level, |v| wrap(F::PainLevel(v)));
            push(&mut updates, s.redness_level, |v| wrap(F::RednessLevel(v)));
            push(&mut updates, s.swelling_level, |v| wrap(F::SwellingLevel(v)));
            push(&mut updates, s.visual_blur, |v| wrap(F::VisualBlur(v)));
            push(&mut updates, s.discharge, |v| wrap(F::Discharge(v)));
            push(&mut updates, s.photophobia, |v| wrap(F::Photophobia(v)));
        }

        if let Some(m) = &self.clinical_measurements {
            use MeasurementField as F;
            let wrap = FieldUpdate::ClinicalMeasurements;
            push(&mut updates, m.intraocular_pressure, |v| {
                wrap(F::IntraocularPressure(v))
            });
            push(&mut updates, m.corneal_clarity, |v| wrap(F::CornealClarity(v)));
            push(&mut updates, m.wound_integrity, |v| wrap(F::WoundIntegrity(v)));
            push(&mut updates, m.anterior_chamber_reaction, |v| {
                wrap(F::AnteriorChamberReaction(v))
            });
            push(&mut updates, m.inflammation_grade, |v| wrap(F::InflammationGrade(v)));
            push(&mut updates, m.corneal_edema_severity, |v| {
                wrap(F::CornealEdemaSeverity(v))
            });
        }

        if let Some(a) = &self.additional_inputs {
            use AdditionalInputField as F;
            let wrap = FieldUpdate::AdditionalInputs;
            push(&mut updates, a.blood_pressure_systolic, |v| {
                wrap(F::BloodPressureSystolic(v))
            });
            push(&mut updates, a.blood_pressure_diastolic, |v| {
                wrap(F::BloodPressureDiastolic(v))
            });
            push(&mut updates, a.blood_sugar, |v| wrap(F::BloodSugar(v)));
        }

        push(&mut updates, self.compliance_score, FieldUpdate::ComplianceScore);
        push(&mut updates, self.follow_up_trend, FieldUpdate::FollowUpTrend);

        // Only a complete value/unit pair is usable.
        if let Some(ExtractedTimeSinceSurgery {
            value: Some(value),
            unit: Some(unit),
        }) = self.time_since_surgery
        {
            updates.push(FieldUpdate::TimeSinceSurgery(TimeSinceSurgery { value, unit }));
        }

        updates
    }
}

fn push<T>(updates: &mut Vec<FieldUpdate>, value: Option<T>, wrap: impl FnOnce(T) -> FieldUpdate) {
    if let Some(v) = value {
        updates.push(wrap(v));
    }
}

impl Assessment {
    /// Merge extracted report values: non-null extracted values win, every
    /// other field keeps its current value. Returns the number of fields set.
    pub fn merge_extraction(&mut self, extraction: &ReportExtraction) -> usize {
        let updates = extraction.updates();
        let count = updates.len();
        self.apply_all(updates);
        count
    }
}
