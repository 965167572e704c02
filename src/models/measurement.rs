//! Child measurement model
//!
//! A `Measurement` holds the anthropometric and dietary readings taken for a
//! single child. It is consumed once by the classifier and never stored.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScreeningError};

/// Anthropometric and dietary readings for one child
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Age in months
    pub age_months: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Height in centimetres
    pub height: f64,
    /// Mid-upper arm circumference in centimetres
    pub muac: f64,
    /// Whether the child had a recent illness
    pub illness: bool,
    /// Whether the child's immunizations are up to date
    pub immunized: bool,
    /// Number of meals eaten per day
    pub meals_per_day: f64,
    /// Number of food groups in the child's diet
    pub diet_groups: f64,
}

impl Measurement {
    /// Check that every numeric reading is a finite number
    ///
    /// Non-finite readings are what an unparseable form field turns into
    /// under the permissive input policy.
    pub fn validate(&self) -> Result<()> {
        let readings = [
            ("ageMonths", self.age_months),
            ("weight", self.weight),
            ("height", self.height),
            ("muac", self.muac),
            ("mealsPerDay", self.meals_per_day),
            ("dietGroups", self.diet_groups),
        ];

        match readings.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, value)) => Err(ScreeningError::InvalidMeasurement {
                field,
                value: value.to_string(),
            }),
            None => Ok(()),
        }
    }
}
