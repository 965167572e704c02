//! Ward-level aggregation
//!
//! This module turns the stream of classified children into the two views
//! the dashboard shows: grouped counts for the ward chart and the hotspot
//! table ranked by adverse share.

pub mod aggregator;
pub mod statistics;

pub use aggregator::WardAggregator;
pub use statistics::{ChartSeries, WardSummary};
