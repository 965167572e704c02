//! Raw survey form
//!
//! `SurveyForm` mirrors the survey page: every field is the string the user
//! typed or selected. Reading it yields a typed `Submission`.

use serde::{Deserialize, Serialize};

use crate::config::InputPolicy;
use crate::error::Result;
use crate::models::{Measurement, Submission};

use super::conversions::{parse_flag, parse_number, parse_ward};

/// Survey form fields as entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyForm {
    /// Ward number, a non-negative integer
    pub ward_no: String,
    /// Child identifier, trimmed on read
    pub child_id: String,
    /// Age in months
    pub age_months: String,
    /// Weight in kilograms
    pub weight: String,
    /// Height in centimetres
    pub height: String,
    /// Mid-upper arm circumference in centimetres
    pub muac: String,
    /// "yes" or "no"
    pub illness: String,
    /// "yes" or "no"
    pub immunized: String,
    /// Meals eaten per day
    pub meals_per_day: String,
    /// Food groups eaten in the last day
    pub diet_groups: String,
}

impl SurveyForm {
    /// Read the form into a typed submission
    ///
    /// The ward number must always parse. Numeric readings and yes/no answers
    /// follow `policy`; an unanswered illness question counts as no illness
    /// and an unanswered immunization question as immunized, so neither adds
    /// points.
    pub fn read(&self, policy: InputPolicy) -> Result<Submission> {
        let ward = parse_ward(&self.ward_no)?;

        let measurement = Measurement {
            age_months: parse_number("ageMonths", &self.age_months, policy)?,
            weight: parse_number("weight", &self.weight, policy)?,
            height: parse_number("height", &self.height, policy)?,
            muac: parse_number("muac", &self.muac, policy)?,
            illness: parse_flag("illness", &self.illness, policy)?.unwrap_or(false),
            immunized: parse_flag("immunized", &self.immunized, policy)?.unwrap_or(true),
            meals_per_day: parse_number("mealsPerDay", &self.meals_per_day, policy)?,
            diet_groups: parse_number("dietGroups", &self.diet_groups, policy)?,
        };

        Ok(Submission {
            ward,
            child_id: self.child_id.trim().to_string(),
            measurement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScreeningError;

    fn form() -> SurveyForm {
        SurveyForm {
            ward_no: "4".to_string(),
            child_id: " C-101 ".to_string(),
            age_months: "18".to_string(),
            weight: "9.4".to_string(),
            height: "76".to_string(),
            muac: "12.1".to_string(),
            illness: "yes".to_string(),
            immunized: "no".to_string(),
            meals_per_day: "3".to_string(),
            diet_groups: "4".to_string(),
        }
    }

    #[test]
    fn test_read_complete_form() {
        let submission = form().read(InputPolicy::Strict).unwrap();
        assert_eq!(submission.ward, 4);
        assert_eq!(submission.child_id, "C-101");
        assert_eq!(submission.measurement.muac, 12.1);
        assert!(submission.measurement.illness);
        assert!(!submission.measurement.immunized);
    }

    #[test]
    fn test_strict_rejects_blank_muac() {
        let blank = SurveyForm {
            muac: String::new(),
            ..form()
        };
        assert!(matches!(
            blank.read(InputPolicy::Strict),
            Err(ScreeningError::InvalidMeasurement { field: "muac", .. })
        ));
    }

    #[test]
    fn test_permissive_reads_blank_fields() {
        let blank = SurveyForm {
            muac: String::new(),
            immunized: String::new(),
            ..form()
        };
        let submission = blank.read(InputPolicy::Permissive).unwrap();
        assert!(submission.measurement.muac.is_nan());
        assert!(submission.measurement.immunized);
    }

    #[test]
    fn test_permissive_reads_leading_number() {
        let with_unit = SurveyForm {
            muac: "11.2cm".to_string(),
            ..form()
        };
        let submission = with_unit.read(InputPolicy::Permissive).unwrap();
        assert_eq!(submission.measurement.muac, 11.2);
    }

    #[test]
    fn test_permissive_flags_are_case_sensitive() {
        let shouted = SurveyForm {
            illness: "YES".to_string(),
            immunized: "NO".to_string(),
            ..form()
        };
        let submission = shouted.read(InputPolicy::Permissive).unwrap();
        assert!(!submission.measurement.illness);
        assert!(submission.measurement.immunized);

        let strict = shouted.read(InputPolicy::Strict).unwrap();
        assert!(strict.measurement.illness);
        assert!(!strict.measurement.immunized);
    }

    #[test]
    fn test_ward_always_required() {
        let no_ward = SurveyForm {
            ward_no: "abc".to_string(),
            ..form()
        };
        assert!(matches!(
            no_ward.read(InputPolicy::Permissive),
            Err(ScreeningError::InvalidWard(_))
        ));
    }
}
