#![allow(dead_code)]

use nutri_screen::{Measurement, SurveyForm};

/// A child with no risk signal at all (score 0)
#[must_use]
pub fn healthy_measurement() -> Measurement {
    Measurement {
        age_months: 30.0,
        weight: 12.5,
        height: 90.0,
        muac: 14.2,
        illness: false,
        immunized: true,
        meals_per_day: 4.0,
        diet_groups: 6.0,
    }
}

/// A child with every risk signal present (score 9)
#[must_use]
pub fn worst_measurement() -> Measurement {
    Measurement {
        age_months: 14.0,
        weight: 6.8,
        height: 71.0,
        muac: 10.9,
        illness: true,
        immunized: false,
        meals_per_day: 1.0,
        diet_groups: 1.0,
    }
}

/// A filled-in survey form for a healthy child in `ward`
#[must_use]
pub fn healthy_form(ward: u32, child_id: &str) -> SurveyForm {
    SurveyForm {
        ward_no: ward.to_string(),
        child_id: child_id.to_string(),
        age_months: "30".to_string(),
        weight: "12.5".to_string(),
        height: "90".to_string(),
        muac: "14.2".to_string(),
        illness: "no".to_string(),
        immunized: "yes".to_string(),
        meals_per_day: "4".to_string(),
        diet_groups: "6".to_string(),
    }
}

/// A filled-in survey form for a severely malnourished child in `ward`
#[must_use]
pub fn severe_form(ward: u32, child_id: &str) -> SurveyForm {
    SurveyForm {
        muac: "10.9".to_string(),
        illness: "yes".to_string(),
        immunized: "no".to_string(),
        meals_per_day: "1".to_string(),
        diet_groups: "1".to_string(),
        ..healthy_form(ward, child_id)
    }
}
