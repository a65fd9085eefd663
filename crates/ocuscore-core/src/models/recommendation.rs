use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecommendationPriority {
    Routine,
    Important,
    Urgent,
}

/// A single care action suggested to the clinician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CareRecommendation {
    pub category: String,
    pub recommendation: String,
    pub rationale: String,
    pub priority: RecommendationPriority,
}
