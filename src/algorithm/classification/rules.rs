//! Additive point rules for malnutrition risk
//!
//! Each rule turns one reading into points, higher meaning worse. Any
//! comparison against a NaN reading is false, so an absent reading scores the
//! lowest band of its rule.

use serde::Serialize;

use crate::config::ScoringThresholds;
use crate::models::Measurement;

/// Points contributed by each rule for one measurement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// Mid-upper arm circumference (0-3)
    pub muac: u8,
    /// Meal frequency (0-2)
    pub meals: u8,
    /// Diet diversity (0-2)
    pub diet: u8,
    /// Recent illness (0-1)
    pub illness: u8,
    /// Missing immunization (0-1)
    pub immunization: u8,
}

impl ScoreBreakdown {
    /// Highest score any measurement can reach
    pub const MAX_TOTAL: u8 = 9;

    /// Sum of all rule points
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.muac + self.meals + self.diet + self.illness + self.immunization
    }
}

/// Points for mid-upper arm circumference
#[must_use]
pub fn muac_points(muac: f64, thresholds: &ScoringThresholds) -> u8 {
    if muac < thresholds.muac_severe {
        3
    } else if muac < thresholds.muac_moderate {
        2
    } else if muac < thresholds.muac_mild {
        1
    } else {
        0
    }
}

/// Points for meals per day
///
/// Only an exact match of the adequate count scores the middle band, so a
/// fractional count above the low band scores nothing.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn meal_points(meals_per_day: f64, thresholds: &ScoringThresholds) -> u8 {
    if meals_per_day <= thresholds.meals_low {
        2
    } else if meals_per_day == thresholds.meals_adequate {
        1
    } else {
        0
    }
}

/// Points for the number of food groups eaten
#[must_use]
pub fn diet_points(diet_groups: f64, thresholds: &ScoringThresholds) -> u8 {
    if diet_groups <= thresholds.diet_low {
        2
    } else if diet_groups <= thresholds.diet_limited {
        1
    } else {
        0
    }
}

/// Score a measurement rule by rule
#[must_use]
pub fn score_with(measurement: &Measurement, thresholds: &ScoringThresholds) -> ScoreBreakdown {
    ScoreBreakdown {
        muac: muac_points(measurement.muac, thresholds),
        meals: meal_points(measurement.meals_per_day, thresholds),
        diet: diet_points(measurement.diet_groups, thresholds),
        illness: u8::from(measurement.illness),
        immunization: u8::from(!measurement.immunized),
    }
}
