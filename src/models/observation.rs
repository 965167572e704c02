//! Ward observations and submissions

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::measurement::Measurement;

/// Identifier of a ward, the unit of aggregate reporting
pub type WardId = u32;

/// One classified child recorded against a ward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Ward the child was screened in
    pub ward: WardId,
    /// Category assigned by the classifier
    pub status: Category,
}

impl Observation {
    /// Create a new observation
    #[must_use]
    pub const fn new(ward: WardId, status: Category) -> Self {
        Self { ward, status }
    }
}

/// A survey form after its fields have been read into typed values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Ward the child was screened in
    pub ward: WardId,
    /// Free-text child identifier, only used for display
    pub child_id: String,
    /// Readings to classify
    pub measurement: Measurement,
}
