//! Forward risk trajectory over the first two weeks of follow-up.
//!
//! The projection is a fixed decay with bounded noise, not a fitted model.
//! Each day's risk decays from the previous day's unrounded value, so
//! rounding never accumulates across steps.

use ocuscore_core::models::assessment::PostOperativeSymptoms;
use ocuscore_core::models::temporal::TemporalDataPoint;

use crate::random::RandomSource;

pub const PROJECTION_DAYS: [u32; 5] = [0, 1, 3, 7, 14];
const DECAY: [f64; 5] = [1.0, 0.95, 0.85, 0.7, 0.5];

const MIN_PROJECTED: f64 = 5.0;
const MAX_PROJECTED: f64 = 95.0;
const VARIANCE: f64 = 5.0;

fn symptom_level(baseline: f64, modifier: f64, rng: &mut (impl RandomSource + ?Sized)) -> f64 {
    (baseline * modifier + rng.uniform(0.0, 2.0)).round().max(0.0)
}

/// Project `base_risk` across days 0, 1, 3, 7 and 14.
///
/// Draws six samples per day from `rng`, in order: variance, clinical share,
/// media share, pain, redness, swelling.
pub fn project<R: RandomSource + ?Sized>(base_risk: i64, rng: &mut R) -> [TemporalDataPoint; 5] {
    let mut current = base_risk as f64;
    let mut points = [TemporalDataPoint {
        day: 0,
        risk_score: 0,
        clinical_contribution: 0,
        media_contribution: 0,
        symptoms: PostOperativeSymptoms::default(),
    }; 5];

    for (point, (&day, &modifier)) in points.iter_mut().zip(PROJECTION_DAYS.iter().zip(&DECAY)) {
        let variance = rng.uniform(-VARIANCE, VARIANCE);
        let risk = (current * modifier + variance).clamp(MIN_PROJECTED, MAX_PROJECTED);
        let clinical = (risk * rng.uniform(0.5, 0.8)).round() as i64;
        let media = (risk * rng.uniform(0.1, 0.3)).round() as i64;

        let symptoms = PostOperativeSymptoms {
            pain_level: symptom_level(5.0, modifier, rng),
            redness_level: symptom_level(6.0, modifier, rng),
            swelling_level: symptom_level(4.0, modifier, rng),
            visual_blur: day < 3,
            discharge: day < 2,
            photophobia: day < 7,
        };

        *point = TemporalDataPoint {
            day,
            risk_score: risk.round() as i64,
            clinical_contribution: clinical,
            media_contribution: media,
            symptoms,
        };
        current = risk;
    }

    points
}
