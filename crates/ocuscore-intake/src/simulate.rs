//! Demo image analysis that needs no collaborator.

use ocuscore_core::models::media::MediaAnalysis;
use ocuscore_engine::RandomSource;

const CONJUNCTIVAL_INJECTION: &str = "Significant conjunctival injection detected";
const PERIORBITAL_EDEMA: &str = "Periorbital edema identified";
const DISCHARGE_FLAGGED: &str = "Discharge pattern analysis flagged";
const CHAMBER_CLOUDINESS: &str = "Anterior chamber cloudiness detected";
const WOUND_IRREGULARITY: &str = "Wound edge irregularity noted";

fn draw(rng: &mut (impl RandomSource + ?Sized), base: f64, span: f64) -> u32 {
    (base + rng.next_unit() * span).round() as u32
}

/// Plausible random findings, for demonstrations without image analysis.
///
/// Consumes five samples: redness, edema, discharge, then one each for the
/// two purely random cues.
pub fn simulate_media_analysis<R: RandomSource + ?Sized>(rng: &mut R) -> MediaAnalysis {
    let redness_score = draw(rng, 20.0, 60.0);
    let edema_score = draw(rng, 15.0, 50.0);
    let discharge_pattern_score = draw(rng, 10.0, 40.0);

    let mut abnormal_cues = Vec::new();
    if redness_score > 50 {
        abnormal_cues.push(CONJUNCTIVAL_INJECTION.to_string());
    }
    if edema_score > 40 {
        abnormal_cues.push(PERIORBITAL_EDEMA.to_string());
    }
    if discharge_pattern_score > 30 {
        abnormal_cues.push(DISCHARGE_FLAGGED.to_string());
    }
    if rng.next_unit() > 0.6 {
        abnormal_cues.push(CHAMBER_CLOUDINESS.to_string());
    }
    if rng.next_unit() > 0.7 {
        abnormal_cues.push(WOUND_IRREGULARITY.to_string());
    }

    let mean = f64::from(redness_score + edema_score + discharge_pattern_score) / 3.0;
    MediaAnalysis {
        redness_score,
        edema_score,
        discharge_pattern_score,
        abnormal_cues,
        overall_media_risk: mean.round() as u32,
    }
}
