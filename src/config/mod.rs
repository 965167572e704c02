//! Configuration for screening sessions
//!
//! This module defines the scoring cut-offs, the policy applied to raw form
//! input, and the options used when building reports.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cut-offs used by the rule-based scorer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringThresholds {
    /// MUAC below this (cm) scores 3 points
    pub muac_severe: f64,
    /// MUAC below this (cm) scores 2 points
    pub muac_moderate: f64,
    /// MUAC below this (cm) scores 1 point
    pub muac_mild: f64,
    /// Meals per day at or below this score 2 points
    pub meals_low: f64,
    /// Meals per day equal to this score 1 point
    pub meals_adequate: f64,
    /// Food groups at or below this score 2 points
    pub diet_low: f64,
    /// Food groups at or below this score 1 point
    pub diet_limited: f64,
    /// Minimum total score for `Severely Malnourished`
    pub severe_score: u8,
    /// Minimum total score for `At Risk`
    pub at_risk_score: u8,
    /// Minimum total score for `Borderline`
    pub borderline_score: u8,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            muac_severe: 11.5,
            muac_moderate: 12.5,
            muac_mild: 13.5,
            meals_low: 2.0,
            meals_adequate: 3.0,
            diet_low: 2.0,
            diet_limited: 4.0,
            severe_score: 6,
            at_risk_score: 4,
            borderline_score: 2,
        }
    }
}

/// How unparseable numeric form input is handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Reject the submission with `InvalidMeasurement` before scoring
    #[default]
    Strict,
    /// Treat the reading as absent signal: it becomes NaN and every
    /// threshold comparison involving it is false
    Permissive,
}

impl fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputPolicy::Strict => f.write_str("strict"),
            InputPolicy::Permissive => f.write_str("permissive"),
        }
    }
}

/// Options for derived views and rendered reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Catalog entries shown per recommended food category
    pub foods_per_category: usize,
    /// Decimal places for adverse percentages in the hotspot table
    pub percent_precision: usize,
    /// Width in characters of the longest console chart bar
    pub chart_bar_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            foods_per_category: 3,
            percent_precision: 1,
            chart_bar_width: 30,
        }
    }
}

/// Configuration for a screening session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Cut-offs for the rule-based scorer
    pub scoring: ScoringThresholds,
    /// Handling of unparseable form input
    pub input_policy: InputPolicy,
    /// Report options
    pub report: ReportConfig,
}

impl fmt::Display for ScreeningConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.scoring;
        writeln!(f, "Screening Configuration:")?;
        writeln!(
            f,
            "  MUAC Cut-offs (cm): {} / {} / {}",
            s.muac_severe, s.muac_moderate, s.muac_mild
        )?;
        writeln!(
            f,
            "  Meal Bands: <= {} / == {}",
            s.meals_low, s.meals_adequate
        )?;
        writeln!(f, "  Diet Bands: <= {} / <= {}", s.diet_low, s.diet_limited)?;
        writeln!(
            f,
            "  Score Bands: {} / {} / {}",
            s.borderline_score, s.at_risk_score, s.severe_score
        )?;
        writeln!(f, "  Input Policy: {}", self.input_policy)?;
        writeln!(f, "  Foods per Category: {}", self.report.foods_per_category)?;
        Ok(())
    }
}
