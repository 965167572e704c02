//! Risk scorers
//!
//! The classifier sits behind the `RiskScorer` trait so a different model
//! can replace the point rules without touching aggregation or reporting.

use crate::config::ScoringThresholds;
use crate::models::{Category, Measurement};

use super::rules::{ScoreBreakdown, score_with};

/// Maps a child's measurement to a risk category
pub trait RiskScorer {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Classify one measurement. Must be pure and total.
    fn classify(&self, measurement: &Measurement) -> Category;
}

/// Weighted-sum rule scorer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RuleBasedScorer {
    thresholds: ScoringThresholds,
}

impl RuleBasedScorer {
    /// Create a scorer with custom cut-offs
    #[must_use]
    pub const fn new(thresholds: ScoringThresholds) -> Self {
        Self { thresholds }
    }

    /// The cut-offs this scorer applies
    #[must_use]
    pub const fn thresholds(&self) -> &ScoringThresholds {
        &self.thresholds
    }

    /// Points per rule for a measurement
    #[must_use]
    pub fn score(&self, measurement: &Measurement) -> ScoreBreakdown {
        score_with(measurement, &self.thresholds)
    }
}

impl RiskScorer for RuleBasedScorer {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn classify(&self, measurement: &Measurement) -> Category {
        let breakdown = self.score(measurement);
        let category = Category::from_score(breakdown.total(), &self.thresholds);
        log::debug!(
            "Scored {} points (muac {}, meals {}, diet {}, illness {}, immunization {}) -> {}",
            breakdown.total(),
            breakdown.muac,
            breakdown.meals,
            breakdown.diet,
            breakdown.illness,
            breakdown.immunization,
            category
        );
        category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_thresholds_shift_bands() {
        let lenient = RuleBasedScorer::new(ScoringThresholds {
            borderline_score: 3,
            ..Default::default()
        });
        let measurement = Measurement {
            age_months: 30.0,
            weight: 12.0,
            height: 88.0,
            muac: 13.0,
            illness: true,
            immunized: true,
            meals_per_day: 4.0,
            diet_groups: 6.0,
        };

        assert_eq!(RuleBasedScorer::default().classify(&measurement), Category::Borderline);
        assert_eq!(lenient.classify(&measurement), Category::Nourished);
        assert_eq!(lenient.score(&measurement).total(), 2);
    }
}
