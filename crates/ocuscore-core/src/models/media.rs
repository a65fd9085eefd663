use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Visual findings derived from a post-operative eye image.
///
/// Produced by the image-analysis collaborator; scores are 0–100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MediaAnalysis {
    pub redness_score: u32,
    pub edema_score: u32,
    pub discharge_pattern_score: u32,
    #[serde(default)]
    pub abnormal_cues: Vec<String>,
    pub overall_media_risk: u32,
}
