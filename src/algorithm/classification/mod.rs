//! Malnutrition risk classification
//!
//! A simple, auditable weighted-sum rule: MUAC, meal frequency, diet
//! diversity, illness and immunization each contribute points, and the total
//! selects one of four categories. It is a placeholder heuristic, not a
//! validated clinical instrument.

pub mod rules;
pub mod scorer;

pub use rules::ScoreBreakdown;
pub use scorer::{RiskScorer, RuleBasedScorer};

use crate::models::{Category, Measurement};

/// Classify a measurement with the default cut-offs
#[must_use]
pub fn classify(measurement: &Measurement) -> Category {
    RuleBasedScorer::default().classify(measurement)
}

/// Per-rule points for a measurement with the default cut-offs
#[must_use]
pub fn score(measurement: &Measurement) -> ScoreBreakdown {
    RuleBasedScorer::default().score(measurement)
}
