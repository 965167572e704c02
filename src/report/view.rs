//! Presentation view models
//!
//! Plain structured output for a rendering adapter: a status label with a
//! style tag, labeled chart series, and preformatted table rows. Nothing
//! here knows how it will be drawn.

use serde::Serialize;

use crate::algorithm::{ChartSeries, WardSummary};
use crate::models::Category;

/// Dataset label of the nourished series
pub const NOURISHED_SERIES: &str = "Nourished";
/// Dataset label of the adverse series
pub const ADVERSE_SERIES: &str = "At Risk / Malnourished";

/// Style tag for a child's status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusStyle {
    /// Nothing classified yet
    Neutral,
    Good,
    Risk,
    Bad,
}

impl StatusStyle {
    /// Style for a classified child
    #[must_use]
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::Nourished => StatusStyle::Good,
            Category::Borderline | Category::AtRisk => StatusStyle::Risk,
            Category::SeverelyMalnourished => StatusStyle::Bad,
        }
    }

    /// CSS class name of the style
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            StatusStyle::Neutral => "neutral",
            StatusStyle::Good => "good",
            StatusStyle::Risk => "risk",
            StatusStyle::Bad => "bad",
        }
    }
}

/// Status banner for the child just screened
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildStatusView {
    /// Identifier as entered on the form
    pub child_id: String,
    /// Assigned risk category
    pub category: Category,
    /// Banner style for the category
    pub style: StatusStyle,
    /// Sentence shown in the banner
    pub message: String,
}

impl ChildStatusView {
    /// Build the banner for a classified child
    #[must_use]
    pub fn new(child_id: &str, category: Category) -> Self {
        Self {
            child_id: child_id.to_string(),
            category,
            style: StatusStyle::for_category(category),
            message: format!("Child {child_id} is classified as: {category}"),
        }
    }
}

/// Everything the bar chart widget needs for one update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    /// Names of the two datasets, nourished first
    pub series_labels: [&'static str; 2],
    /// One label per ward, ascending
    pub ward_labels: Vec<String>,
    /// Nourished counts aligned with `ward_labels`
    pub nourished: Vec<usize>,
    /// Adverse counts aligned with `ward_labels`
    pub adverse: Vec<usize>,
    /// Horizontal axis title
    pub x_axis_title: &'static str,
    /// Vertical axis title
    pub y_axis_title: &'static str,
}

impl From<&ChartSeries> for ChartData {
    fn from(series: &ChartSeries) -> Self {
        Self {
            series_labels: [NOURISHED_SERIES, ADVERSE_SERIES],
            ward_labels: series.wards.iter().map(ToString::to_string).collect(),
            nourished: series.nourished_counts.clone(),
            adverse: series.adverse_counts.clone(),
            x_axis_title: "Ward",
            y_axis_title: "Number of children",
        }
    }
}

/// One display row of the hotspot table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotspotRow {
    /// Ward number
    pub ward: String,
    /// Children screened in the ward
    pub total: String,
    /// Adverse share with a `%` suffix
    pub percent: String,
}

impl HotspotRow {
    /// Format a summary with `precision` decimal places
    #[must_use]
    pub fn from_summary(summary: &WardSummary, precision: usize) -> Self {
        Self {
            ward: summary.ward.to_string(),
            total: summary.total.to_string(),
            percent: format!("{:.precision$}%", summary.adverse_percent),
        }
    }
}

/// Display rows for a ranked hotspot table, keeping its order
#[must_use]
pub fn hotspot_rows(summaries: &[WardSummary], precision: usize) -> Vec<HotspotRow> {
    summaries
        .iter()
        .map(|summary| HotspotRow::from_summary(summary, precision))
        .collect()
}
