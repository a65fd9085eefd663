//! The static table of scoring rules.
//!
//! Each assessment section owns an ordered list of rules. A rule is a
//! predicate over the section plus the points and label it contributes when
//! it fires. Rule order within a section is significant: it is the order in
//! which factors are reported, which breaks ties in the top-factor ranking.

pub mod demographics;
pub mod measurements;
pub mod ocular;
pub mod surgery;
pub mod symptoms;
pub mod systemic;

use ocuscore_core::models::assessment::{
    Assessment, ClinicalMeasurements, Demographics, OcularHistory, PostOperativeSymptoms,
    SurgeryDetails, SystemicHistory,
};
use serde::Serialize;

/// Which running total a rule's points feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stream {
    Clinical,
    Behavioral,
}

/// Whether a rule's points depend on time since surgery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scaling {
    Fixed,
    /// Multiplied by the temporal multiplier and rounded.
    Temporal,
}

/// One row of the catalog, bound to the section type it reads.
pub struct Rule<S> {
    pub id: &'static str,
    pub label: &'static str,
    pub points: u32,
    pub stream: Stream,
    pub scaling: Scaling,
    pub applies: fn(&S) -> bool,
}

impl<S> Rule<S> {
    /// Points this rule contributes under the given temporal multiplier.
    pub fn weighted_points(&self, temporal_multiplier: f64) -> f64 {
        match self.scaling {
            Scaling::Fixed => f64::from(self.points),
            Scaling::Temporal => (f64::from(self.points) * temporal_multiplier).round(),
        }
    }

    fn describe(&self, section: &'static str) -> RuleDescriptor {
        RuleDescriptor {
            section,
            id: self.id,
            label: self.label,
            points: self.points,
            stream: self.stream,
            scaling: self.scaling,
        }
    }
}

/// A rule that fired for a particular assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct FiredRule {
    pub id: &'static str,
    pub label: &'static str,
    pub points: f64,
    pub stream: Stream,
}

/// Serializable view of a rule, for listing the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct RuleDescriptor {
    pub section: &'static str,
    pub id: &'static str,
    pub label: &'static str,
    pub points: u32,
    pub stream: Stream,
    pub scaling: Scaling,
}

/// An assessment section that carries scoring rules.
pub trait Section: Sized + 'static {
    /// Section name as it appears in the assessment JSON.
    const NAME: &'static str;

    fn rules() -> &'static [Rule<Self>];

    fn of(assessment: &Assessment) -> Option<&Self>;
}

fn fire<S: Section>(assessment: &Assessment, temporal_multiplier: f64, out: &mut Vec<FiredRule>) {
    let Some(section) = S::of(assessment) else {
        return;
    };
    for rule in S::rules() {
        if !(rule.applies)(section) {
            continue;
        }
        let points = rule.weighted_points(temporal_multiplier);
        if points > 0.0 {
            out.push(FiredRule {
                id: rule.id,
                label: rule.label,
                points,
                stream: rule.stream,
            });
        }
    }
}

/// Evaluate every section's rules against an assessment, in catalog order.
pub fn evaluate(assessment: &Assessment, temporal_multiplier: f64) -> Vec<FiredRule> {
    let mut fired = Vec::new();
    fire::<Demographics>(assessment, temporal_multiplier, &mut fired);
    fire::<SystemicHistory>(assessment, temporal_multiplier, &mut fired);
    fire::<OcularHistory>(assessment, temporal_multiplier, &mut fired);
    fire::<SurgeryDetails>(assessment, temporal_multiplier, &mut fired);
    fire::<PostOperativeSymptoms>(assessment, temporal_multiplier, &mut fired);
    fire::<ClinicalMeasurements>(assessment, temporal_multiplier, &mut fired);
    fired
}

fn describe_section<S: Section>(out: &mut Vec<RuleDescriptor>) {
    out.extend(S::rules().iter().map(|r| r.describe(S::NAME)));
}

/// Every rule in the catalog, in evaluation order.
pub fn all_rules() -> Vec<RuleDescriptor> {
    let mut rules = Vec::new();
    describe_section::<Demographics>(&mut rules);
    describe_section::<SystemicHistory>(&mut rules);
    describe_section::<OcularHistory>(&mut rules);
    describe_section::<SurgeryDetails>(&mut rules);
    describe_section::<PostOperativeSymptoms>(&mut rules);
    describe_section::<ClinicalMeasurements>(&mut rules);
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rule_ids_are_unique() {
        let rules = all_rules();
        let ids: HashSet<_> = rules.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), rules.len());
    }

    #[test]
    fn only_symptom_and_inflammation_rules_scale_with_time() {
        for rule in all_rules() {
            let temporal = rule.scaling == Scaling::Temporal;
            let expected = rule.id.starts_with("pain_")
                || rule.id == "redness_significant"
                || rule.id == "swelling_notable"
                || rule.id.starts_with("inflammation_");
            assert_eq!(temporal, expected, "{}", rule.id);
        }
    }

    #[test]
    fn empty_assessment_fires_nothing() {
        assert!(evaluate(&Assessment::default(), 1.0).is_empty());
    }
}
