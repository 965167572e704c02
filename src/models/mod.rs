//! Domain models for malnutrition screening
//!
//! This module contains the category enumeration, the per-child measurement
//! record and the ward observations that make up a screening session.

pub mod category;
pub mod measurement;
pub mod observation;

pub use category::Category;
pub use measurement::Measurement;
pub use observation::{Observation, Submission, WardId};
