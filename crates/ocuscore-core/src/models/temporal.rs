use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::assessment::PostOperativeSymptoms;

/// Projected risk on one follow-up day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TemporalDataPoint {
    /// Days after the assessment: 0, 1, 3, 7 or 14.
    pub day: u32,
    /// 5..=95.
    pub risk_score: i64,
    pub clinical_contribution: i64,
    pub media_contribution: i64,
    pub symptoms: PostOperativeSymptoms,
}
