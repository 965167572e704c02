//! Survey form input
//!
//! Reads the raw strings supplied by the survey page into typed submissions
//! under the configured `InputPolicy`.

pub mod conversions;
pub mod form;

pub use form::SurveyForm;
