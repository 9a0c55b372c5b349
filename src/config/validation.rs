use std::path::Path;
use crate::error::{Result, CombineError};

/// Centralized configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a separator is usable
    pub fn validate_separator(separator: &str, field_name: &str) -> Result<()> {
        if separator.is_empty() {
            return Err(CombineError::Validation(format!(
                "{} must not be empty",
                field_name
            )));
        }
        Ok(())
    }

    /// Validate the output path names a file that could be written
    pub fn validate_output_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(CombineError::Validation(
                "Output path must not be empty".to_string(),
            ));
        }

        if path.is_dir() {
            return Err(CombineError::Validation(format!(
                "Output path is a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }
}
