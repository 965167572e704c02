//! Reporting for screening sessions
//!
//! `view` builds pure view models from the aggregator's output; `console`
//! renders them as text.

pub mod console;
pub mod view;

pub use view::{
    ADVERSE_SERIES, ChartData, ChildStatusView, HotspotRow, NOURISHED_SERIES, StatusStyle,
    hotspot_rows,
};
