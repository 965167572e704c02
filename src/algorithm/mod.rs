//! Screening algorithms
//!
//! Classification of individual children and aggregation of the results
//! into ward-level statistics.

pub mod aggregation;
pub mod classification;

pub use aggregation::{ChartSeries, WardAggregator, WardSummary};
pub use classification::{RiskScorer, RuleBasedScorer, ScoreBreakdown, classify, score};
