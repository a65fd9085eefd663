//! The seam between scoring and whatever produces image findings.

use ocuscore_core::models::media::MediaAnalysis;
use ocuscore_engine::RandomSource;
use tracing::warn;

use crate::analysis::AiAnalysisResult;
use crate::error::IntakeError;
use crate::simulate::simulate_media_analysis;

/// Something that can turn an eye image into findings.
pub trait MediaAnalyzer {
    fn analyze(&mut self, image: &[u8]) -> Result<AiAnalysisResult, IntakeError>;
}

/// Convert an analysis outcome into the assessment's media section.
///
/// A failed analysis never blocks scoring: it is logged and the assessment
/// is scored without media.
pub fn media_or_absent(result: Result<AiAnalysisResult, IntakeError>) -> Option<MediaAnalysis> {
    match result {
        Ok(analysis) => Some(analysis.into()),
        Err(e) => {
            warn!(error = %e, "image analysis failed, scoring without media");
            None
        }
    }
}

/// Analyzer that ignores the image and returns simulated findings.
pub struct SimulatedAnalyzer<R> {
    rng: R,
}

impl<R: RandomSource> SimulatedAnalyzer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> MediaAnalyzer for SimulatedAnalyzer<R> {
    fn analyze(&mut self, _image: &[u8]) -> Result<AiAnalysisResult, IntakeError> {
        let media = simulate_media_analysis(&mut self.rng);
        Ok(AiAnalysisResult {
            redness_score: f64::from(media.redness_score),
            edema_score: f64::from(media.edema_score),
            discharge_pattern_score: f64::from(media.discharge_pattern_score),
            corneal_clarity_score: None,
            wound_integrity_score: None,
            overall_media_risk: f64::from(media.overall_media_risk),
            abnormal_cues: media.abnormal_cues,
            clinical_summary: None,
            urgency_level: None,
            confidence_level: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocuscore_engine::random::FixedSequence;

    struct Unavailable;

    impl MediaAnalyzer for Unavailable {
        fn analyze(&mut self, _image: &[u8]) -> Result<AiAnalysisResult, IntakeError> {
            Err(IntakeError::Collaborator("AI service not configured".to_string()))
        }
    }

    #[test]
    fn failure_means_absent() {
        assert_eq!(media_or_absent(Unavailable.analyze(b"jpeg")), None);
    }

    #[test]
    fn success_is_converted() {
        let media = media_or_absent(Ok(AiAnalysisResult::fallback("raw"))).unwrap();
        assert_eq!(media.overall_media_risk, 25);
        assert_eq!(media.redness_score, 30);
    }

    #[test]
    fn simulated_analyzer_matches_simulation() {
        let mut analyzer = SimulatedAnalyzer::new(FixedSequence::constant(0.5));
        let media = media_or_absent(analyzer.analyze(&[])).unwrap();
        assert_eq!(
            media,
            simulate_media_analysis(&mut FixedSequence::constant(0.5))
        );
    }
}
