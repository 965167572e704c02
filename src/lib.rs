//! A Rust library for rule-based child malnutrition screening: classify a
//! child from anthropometric and dietary readings, record the result against
//! a ward, and derive ward-level hotspot rankings, chart data and food
//! guidance.

pub mod algorithm;
pub mod config;
pub mod demo;
pub mod error;
pub mod input;
pub mod loader;
pub mod models;
pub mod recommendation;
pub mod report;
pub mod session;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{InputPolicy, ReportConfig, ScoringThresholds, ScreeningConfig};
pub use error::{Result, ScreeningError};
pub use models::{Category, Measurement, Observation, Submission, WardId};

// Scoring and aggregation
pub use algorithm::{
    ChartSeries, RiskScorer, RuleBasedScorer, ScoreBreakdown, WardAggregator, WardSummary,
    classify, score,
};

// Recommendations
pub use recommendation::{
    FoodItem, FoodMatch, FoodTag, MealPlan, RecommendationProfile, Recommendations, Urgency,
    foods_by_category, generate_recommendations, meal_plan, recommend, search_food,
};

// Input, sessions and loading
pub use input::SurveyForm;
pub use loader::load_forms;
pub use session::{Dashboard, ScreeningApp, ScreeningOutcome, ScreeningSession};
