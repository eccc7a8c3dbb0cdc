//! Course input file handling.
//!
//! The pipeline is driven by a small JSON file describing the topic,
//! language, and target audience. Field names are kept in Indonesian for
//! compatibility with existing input files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoursegenError, Result};
use crate::lang::{VALID_AUDIENCES, VALID_LANGUAGES};

/// Parsed course input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseInput {
    /// Course topic (free text, must be non-empty).
    pub topik: String,
    /// Language code, one of [`VALID_LANGUAGES`].
    pub bahasa: String,
    /// Audience level, one of [`VALID_AUDIENCES`].
    pub audience: String,
}

impl CourseInput {
    /// Validate field values after deserialization.
    pub fn validate(&self) -> Result<()> {
        if self.topik.trim().is_empty() {
            return Err(CoursegenError::validation(
                "input field 'topik' must be a non-empty string",
            ));
        }
        if !VALID_LANGUAGES.contains(&self.bahasa.as_str()) {
            return Err(CoursegenError::validation(format!(
                "input field 'bahasa' must be one of {:?}, got '{}'",
                VALID_LANGUAGES, self.bahasa
            )));
        }
        if !VALID_AUDIENCES.contains(&self.audience.as_str()) {
            return Err(CoursegenError::validation(format!(
                "input field 'audience' must be one of {:?}, got '{}'",
                VALID_AUDIENCES, self.audience
            )));
        }
        Ok(())
    }
}

/// Read and validate a course input file.
pub fn read_input(path: &Path) -> Result<CourseInput> {
    let raw = std::fs::read_to_string(path).map_err(|e| CoursegenError::io(path, e))?;
    let input: CourseInput = serde_json::from_str(&raw)
        .map_err(|e| CoursegenError::parse(format!("invalid input file {}: {e}", path.display())))?;
    input.validate()?;
    Ok(input)
}
