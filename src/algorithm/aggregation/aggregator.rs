//! Append-only store of ward observations

use rustc_hash::FxHashMap;

use crate::models::{Category, Observation, WardId};

use super::statistics::{self, ChartSeries, WardSummary};

/// Holds the observations recorded during one screening session
///
/// Observations can only be appended. Every view is recomputed from the full
/// list on each call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WardAggregator {
    observations: Vec<Observation>,
}

impl WardAggregator {
    /// Create an empty aggregator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classified child against a ward
    pub fn record(&mut self, ward: WardId, status: Category) {
        log::debug!("Recording {status} in ward {ward}");
        self.observations.push(Observation::new(ward, status));
    }

    /// All observations in recording order
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Number of recorded observations
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether nothing has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Nourished and adverse counts per ward, wards ascending
    #[must_use]
    pub fn chart_series(&self) -> ChartSeries {
        statistics::chart_series(&self.observations)
    }

    /// Wards ranked by adverse percentage, highest first
    #[must_use]
    pub fn hotspot_table(&self) -> Vec<WardSummary> {
        statistics::hotspot_table(&self.observations)
    }

    /// Summary for one ward
    #[must_use]
    pub fn ward_summary(&self, ward: WardId) -> Option<WardSummary> {
        statistics::ward_summary(&self.observations, ward)
    }

    /// Count of children per category across all wards
    #[must_use]
    pub fn category_counts(&self) -> FxHashMap<Category, usize> {
        statistics::category_counts(&self.observations)
    }
}

impl Extend<Observation> for WardAggregator {
    fn extend<T: IntoIterator<Item = Observation>>(&mut self, iter: T) {
        for observation in iter {
            self.record(observation.ward, observation.status);
        }
    }
}
