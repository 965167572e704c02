//! Survey form loading utilities

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::error::Result;
use crate::input::SurveyForm;
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Read a JSON array of survey forms
///
/// Each element uses the survey page's field names (`wardNo`, `childId`,
/// `mealsPerDay`, ...). Missing fields read as empty strings.
pub fn load_forms(path: &Path) -> Result<Vec<SurveyForm>> {
    let subject = path.display().to_string();
    if !path.is_file() {
        log_warning("Survey file not found", Some(&subject));
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Survey file not found: {subject}"),
        )
        .into());
    }

    log_operation_start("Loading survey forms from", &subject);
    let start = Instant::now();

    let reader = BufReader::new(File::open(path)?);
    let forms: Vec<SurveyForm> = serde_json::from_reader(reader)?;

    log_operation_complete("loaded", &subject, forms.len(), Some(start.elapsed()));
    Ok(forms)
}
