//! Console rendering
//!
//! Turns view models into plain text for the terminal.

use std::fmt::Write;

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::models::Category;
use crate::recommendation::{MealPlan, Recommendations};

use super::view::{ChartData, ChildStatusView, HotspotRow};

/// Render the status banner
#[must_use]
pub fn render_child_status(view: &ChildStatusView) -> String {
    format!("[{}] {}", view.style.css_class(), view.message)
}

/// Render the ward chart as paired horizontal bars
///
/// The longest bar is `bar_width` characters; other bars are scaled to it.
#[must_use]
pub fn render_chart(chart: &ChartData, bar_width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} by {}", chart.y_axis_title, chart.x_axis_title);

    if chart.ward_labels.is_empty() {
        out.push_str("  (no observations)\n");
        return out;
    }

    let max = chart
        .nourished
        .iter()
        .chain(&chart.adverse)
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);
    let label_width = chart.ward_labels.iter().map(String::len).max().unwrap_or(0);
    let series_width = chart.series_labels.iter().map(|label| label.len()).max().unwrap_or(0);
    let bar = |count: usize, glyph: char| -> String {
        std::iter::repeat_n(glyph, count * bar_width / max).collect()
    };

    let [nourished_label, adverse_label] = chart.series_labels;
    for ((ward, &nourished), &adverse) in chart
        .ward_labels
        .iter()
        .zip(&chart.nourished)
        .zip(&chart.adverse)
    {
        let rows = [(nourished_label, nourished, '#'), (adverse_label, adverse, '!')];
        for (series, count, glyph) in rows {
            let _ = writeln!(
                out,
                "  {ward:>label_width$} {series:<series_width$} |{} {count}",
                bar(count, glyph)
            );
        }
    }
    out
}

/// Render the hotspot table, highest adverse share first
#[must_use]
pub fn render_hotspot_table(rows: &[HotspotRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<8}{:>8}{:>12}", "Ward", "Total", "At Risk %");
    for row in rows {
        let _ = writeln!(out, "{:<8}{:>8}{:>12}", row.ward, row.total, row.percent);
    }
    out
}

/// Render a recommendation card, optionally with the follow-up date
#[must_use]
pub fn render_recommendations(recs: &Recommendations, visit_date: Option<NaiveDate>) -> String {
    let profile = &recs.profile;
    let mut out = String::new();
    let _ = writeln!(out, "{}", profile.priority);
    let _ = writeln!(out, "  {}", profile.description);
    let _ = writeln!(out, "  Urgency: {}", profile.urgency);
    let _ = writeln!(out, "  Meals: {}", profile.meal_frequency);
    let _ = writeln!(out, "  Supplementation: {}", profile.supplementation);

    match visit_date.and_then(|date| profile.follow_up_date(date)) {
        Some(due) => {
            let _ = writeln!(out, "  Follow up in {} days ({due})", profile.follow_up_days);
        }
        None => {
            let _ = writeln!(out, "  Follow up in {} days", profile.follow_up_days);
        }
    }

    out.push_str("  Recommended foods:\n");
    for food in &recs.foods {
        let _ = writeln!(
            out,
            "    {} {} - {} ({}, {})",
            food.icon, food.name, food.quantity, food.nutritional_value, food.cost
        );
    }
    out
}

/// Render a daily meal plan
#[must_use]
pub fn render_meal_plan(plan: &MealPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Breakfast:   {}", plan.breakfast);
    let _ = writeln!(out, "  Mid-morning: {}", plan.mid_morning);
    let _ = writeln!(out, "  Lunch:       {}", plan.lunch);
    let _ = writeln!(out, "  Afternoon:   {}", plan.afternoon);
    let _ = writeln!(out, "  Dinner:      {}", plan.dinner);
    let _ = writeln!(out, "  Notes:       {}", plan.notes);
    out
}

/// Render the session-wide category distribution
#[must_use]
pub fn render_session_summary(counts: &FxHashMap<Category, usize>) -> String {
    let total: usize = counts.values().sum();
    let mut out = String::new();
    out.push_str("Screening Summary:\n");
    let _ = writeln!(out, "  Total Children: {total}");
    for category in Category::ALL {
        let count = counts.get(&category).copied().unwrap_or(0);
        let percentage = if total > 0 {
            (count as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        let _ = writeln!(out, "  {category}: {count} ({percentage:.1}%)");
    }
    out
}
