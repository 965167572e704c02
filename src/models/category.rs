//! Malnutrition risk category
//!
//! The four-level classification assigned to every screened child. Categories
//! are totally ordered by severity, so `Nourished < Borderline < AtRisk <
//! SeverelyMalnourished` holds for the derived `Ord`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ScoringThresholds;
use crate::error::ScreeningError;

/// Discrete malnutrition risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No sign of malnutrition
    #[serde(rename = "Nourished")]
    Nourished,
    /// Some warning signs, preventive care advised
    #[serde(rename = "Borderline")]
    Borderline,
    /// Signs of malnutrition, close monitoring required
    #[serde(rename = "At Risk")]
    AtRisk,
    /// Immediate intervention required
    #[serde(rename = "Severely Malnourished")]
    SeverelyMalnourished,
}

impl Category {
    /// All categories in ascending order of severity
    pub const ALL: [Category; 4] = [
        Category::Nourished,
        Category::Borderline,
        Category::AtRisk,
        Category::SeverelyMalnourished,
    ];

    /// Display label used in forms, tables and lookup keys
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Nourished => "Nourished",
            Category::Borderline => "Borderline",
            Category::AtRisk => "At Risk",
            Category::SeverelyMalnourished => "Severely Malnourished",
        }
    }

    /// Severity rank, 0 for `Nourished` up to 3 for `SeverelyMalnourished`
    #[must_use]
    pub const fn severity_rank(self) -> u8 {
        match self {
            Category::Nourished => 0,
            Category::Borderline => 1,
            Category::AtRisk => 2,
            Category::SeverelyMalnourished => 3,
        }
    }

    /// Whether this category counts towards a ward's adverse share
    #[must_use]
    pub const fn is_adverse(self) -> bool {
        !matches!(self, Category::Nourished)
    }

    /// Map a total point score to a category, checking the highest band first
    #[must_use]
    pub fn from_score(score: u8, thresholds: &ScoringThresholds) -> Self {
        if score >= thresholds.severe_score {
            Category::SeverelyMalnourished
        } else if score >= thresholds.at_risk_score {
            Category::AtRisk
        } else if score >= thresholds.borderline_score {
            Category::Borderline
        } else {
            Category::Nourished
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ScreeningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == s.trim())
            .ok_or_else(|| ScreeningError::UnknownCategory(s.to_string()))
    }
}
