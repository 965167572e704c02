//! Screening session
//!
//! Owns the observations of one session and wires each submission through
//! classification, recording and the derived views.

use serde::Serialize;

use crate::algorithm::{RiskScorer, RuleBasedScorer, WardAggregator, WardSummary};
use crate::config::{InputPolicy, ScreeningConfig};
use crate::error::Result;
use crate::input::SurveyForm;
use crate::models::{Category, Submission, WardId};
use crate::recommendation::{MealPlan, Recommendations, generate_recommendations, meal_plan};
use crate::report::{ChartData, ChildStatusView, HotspotRow, hotspot_rows};

/// What the survey page shows after one submission
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningOutcome {
    /// Ward the child was recorded in
    pub ward: WardId,
    /// Status banner
    pub status: ChildStatusView,
    /// Guidance card for the child's category
    pub recommendations: Recommendations,
    /// Daily meal plan for the child's category
    pub meal_plan: &'static MealPlan,
}

impl ScreeningOutcome {
    /// Category assigned to the child
    #[must_use]
    pub const fn category(&self) -> Category {
        self.status.category
    }
}

/// Ward-level views, rebuilt on request
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// Input for the ward bar chart
    pub chart: ChartData,
    /// Ranked ward summaries
    pub summaries: Vec<WardSummary>,
    /// Display rows for `summaries`, same order
    pub hotspots: Vec<HotspotRow>,
}

/// One screening session
#[derive(Debug)]
pub struct ScreeningSession<S = RuleBasedScorer> {
    config: ScreeningConfig,
    scorer: S,
    aggregator: WardAggregator,
}

impl ScreeningSession<RuleBasedScorer> {
    /// Create a session scoring with the configured cut-offs
    #[must_use]
    pub fn new(config: ScreeningConfig) -> Self {
        let scorer = RuleBasedScorer::new(config.scoring);
        Self::with_scorer(config, scorer)
    }
}

impl Default for ScreeningSession<RuleBasedScorer> {
    fn default() -> Self {
        Self::new(ScreeningConfig::default())
    }
}

impl<S: RiskScorer> ScreeningSession<S> {
    /// Create a session with a custom scorer
    #[must_use]
    pub fn with_scorer(config: ScreeningConfig, scorer: S) -> Self {
        log::debug!("Starting screening session with {} scorer", scorer.name());
        Self {
            config,
            scorer,
            aggregator: WardAggregator::new(),
        }
    }

    /// Session configuration
    #[must_use]
    pub const fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    /// Observations recorded so far
    #[must_use]
    pub const fn aggregator(&self) -> &WardAggregator {
        &self.aggregator
    }

    /// Read a raw form and submit it
    pub fn submit_form(&mut self, form: &SurveyForm) -> Result<ScreeningOutcome> {
        let submission = form.read(self.config.input_policy)?;
        self.submit(&submission)
    }

    /// Classify a child, record the result and build the outcome views
    ///
    /// Under the strict policy a non-finite reading is rejected before
    /// scoring and nothing is recorded.
    pub fn submit(&mut self, submission: &Submission) -> Result<ScreeningOutcome> {
        if self.config.input_policy == InputPolicy::Strict {
            submission.measurement.validate()?;
        }

        let category = self.scorer.classify(&submission.measurement);
        self.aggregator.record(submission.ward, category);
        log::info!(
            "Child {} in ward {} classified as {category}",
            submission.child_id,
            submission.ward
        );

        Ok(ScreeningOutcome {
            ward: submission.ward,
            status: ChildStatusView::new(&submission.child_id, category),
            recommendations: generate_recommendations(
                category,
                self.config.report.foods_per_category,
            ),
            meal_plan: meal_plan(category),
        })
    }

    /// Rebuild the chart data and hotspot table from all observations
    #[must_use]
    pub fn dashboard(&self) -> Dashboard {
        let series = self.aggregator.chart_series();
        let summaries = self.aggregator.hotspot_table();
        let hotspots = hotspot_rows(&summaries, self.config.report.percent_precision);

        Dashboard {
            chart: ChartData::from(&series),
            summaries,
            hotspots,
        }
    }
}
