use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Scores below this are low risk.
pub const MEDIUM_RISK_THRESHOLD: i64 = 30;
/// Scores at or above this are high risk.
pub const HIGH_RISK_THRESHOLD: i64 = 60;

/// One fired scoring rule and the points it added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskFactor {
    #[serde(rename = "factor")]
    pub label: String,
    pub contribution: f64,
}

impl RiskFactor {
    pub fn new(label: impl Into<String>, contribution: f64) -> Self {
        Self {
            label: label.into(),
            contribution,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    pub fn from_score(score: i64) -> Self {
        if score < MEDIUM_RISK_THRESHOLD {
            RiskCategory::Low
        } else if score < HIGH_RISK_THRESHOLD {
            RiskCategory::Medium
        } else {
            RiskCategory::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "low",
            RiskCategory::Medium => "medium",
            RiskCategory::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FollowUpPriority {
    Routine,
    Early,
    Urgent,
}

impl FollowUpPriority {
    pub fn from_score(score: i64) -> Self {
        match RiskCategory::from_score(score) {
            RiskCategory::Low => FollowUpPriority::Routine,
            RiskCategory::Medium => FollowUpPriority::Early,
            RiskCategory::High => FollowUpPriority::Urgent,
        }
    }
}

/// The outcome of one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskAssessment {
    /// Clamped to 5..=100.
    pub overall_risk_score: i64,
    pub risk_category: RiskCategory,
    /// 75..=95.
    pub confidence_level: i64,
    pub clinical_contribution: i64,
    pub behavioral_contribution: i64,
    pub media_contribution: i64,
    /// At most five, highest contribution first.
    pub top_risk_factors: Vec<RiskFactor>,
    pub follow_up_priority: FollowUpPriority,
    pub doctor_override_applied: bool,
    pub explanation_notes: Vec<String>,
}
