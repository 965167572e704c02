//! Ward statistics derived from observations
//!
//! Every function here is a pure function of an observation slice: the same
//! slice always yields the same chart series and hotspot table.

use std::collections::BTreeMap;

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::models::{Category, Observation, WardId};

/// Nourished/adverse counts for one ward
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct WardTally {
    nourished: usize,
    adverse: usize,
}

/// Per-ward adverse share, one row of the hotspot table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WardSummary {
    /// Ward identifier
    pub ward: WardId,
    /// Children classified `Nourished`
    pub nourished_count: usize,
    /// Children in any other category
    pub adverse_count: usize,
    /// All children screened in the ward
    pub total: usize,
    /// `100 * adverse_count / total`, 0 for an empty ward
    pub adverse_percent: f64,
}

impl WardSummary {
    fn from_tally(ward: WardId, tally: WardTally) -> Self {
        let total = tally.nourished + tally.adverse;
        let adverse_percent = if total == 0 {
            0.0
        } else {
            (tally.adverse as f64 / total as f64) * 100.0
        };

        Self {
            ward,
            nourished_count: tally.nourished,
            adverse_count: tally.adverse,
            total,
            adverse_percent,
        }
    }
}

/// Grouped counts for the ward bar chart
///
/// The three vectors are aligned: index `i` of each count vector belongs to
/// `wards[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    /// Wards with at least one observation, ascending
    pub wards: Vec<WardId>,
    /// `Nourished` children per ward
    pub nourished_counts: Vec<usize>,
    /// Non-nourished children per ward
    pub adverse_counts: Vec<usize>,
}

impl ChartSeries {
    /// Whether the series has no wards
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wards.is_empty()
    }
}

/// Group observations by ward in ascending ward order
fn tally_by_ward(observations: &[Observation]) -> BTreeMap<WardId, WardTally> {
    observations
        .iter()
        .fold(BTreeMap::new(), |mut tallies, observation| {
            let tally: &mut WardTally = tallies.entry(observation.ward).or_default();
            if observation.status.is_adverse() {
                tally.adverse += 1;
            } else {
                tally.nourished += 1;
            }
            tallies
        })
}

/// Build the chart series for a set of observations
#[must_use]
pub fn chart_series(observations: &[Observation]) -> ChartSeries {
    let tallies = tally_by_ward(observations);

    let mut series = ChartSeries {
        wards: Vec::with_capacity(tallies.len()),
        nourished_counts: Vec::with_capacity(tallies.len()),
        adverse_counts: Vec::with_capacity(tallies.len()),
    };
    for (ward, tally) in tallies {
        series.wards.push(ward);
        series.nourished_counts.push(tally.nourished);
        series.adverse_counts.push(tally.adverse);
    }
    series
}

/// Rank wards by adverse share, highest first
///
/// Ties keep ascending ward order.
#[must_use]
pub fn hotspot_table(observations: &[Observation]) -> Vec<WardSummary> {
    tally_by_ward(observations)
        .into_iter()
        .map(|(ward, tally)| WardSummary::from_tally(ward, tally))
        .sorted_by(|a, b| b.adverse_percent.total_cmp(&a.adverse_percent))
        .collect()
}

/// Summary for a single ward, if it has any observations
#[must_use]
pub fn ward_summary(observations: &[Observation], ward: WardId) -> Option<WardSummary> {
    tally_by_ward(observations)
        .remove(&ward)
        .map(|tally| WardSummary::from_tally(ward, tally))
}

/// Session-wide count per category; unseen categories map to zero
#[must_use]
pub fn category_counts(observations: &[Observation]) -> FxHashMap<Category, usize> {
    let mut counts: FxHashMap<Category, usize> =
        Category::ALL.into_iter().map(|category| (category, 0)).collect();
    for observation in observations {
        *counts.entry(observation.status).or_insert(0) += 1;
    }
    counts
}
