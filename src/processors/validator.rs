use crate::config::ValidationConfig;
use crate::models::{
    AppError, ErrorKind, FileData, NormalizedRowData, ProcessedRowData, Seniority,
    ValidationResult,
};
use crate::utils::header::contains_all_headers;

use super::normalizer;

/// Row, column, header and field checks for an uploaded file.
///
/// Every check is pure and depends only on the configuration, so one
/// validator can be shared by all parsers and concurrent parses.
#[derive(Debug, Clone, Default)]
pub struct FileValidator {
    config: ValidationConfig,
}

impl FileValidator {
    /// Builds a validator after checking the config with [`ValidationConfig::validate`].
    pub fn new(config: ValidationConfig) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Zero rows is `EMPTY`; any count outside `minRows..=maxRows` is `INVALID_ROWS`.
    pub fn validate_row_count(&self, row_count: usize) -> ValidationResult {
        if row_count == 0 {
            return ValidationResult::invalid(ErrorKind::Empty);
        }
        if row_count > self.config.max_rows || row_count < self.config.min_rows {
            return ValidationResult::invalid(ErrorKind::InvalidRows);
        }
        ValidationResult::valid()
    }

    /// A headerless row must have exactly one cell per required column.
    pub fn validate_column_count(&self, column_count: usize) -> ValidationResult {
        if column_count != self.config.required_columns.len() {
            return ValidationResult::invalid(ErrorKind::InvalidColumns);
        }
        ValidationResult::valid()
    }

    /// Headers pass when every required column appears, ignoring case and
    /// surrounding whitespace. Extra columns are allowed.
    pub fn validate_headers(&self, headers: &[String]) -> ValidationResult {
        if !contains_all_headers(headers, &self.config.required_columns) {
            return ValidationResult::invalid(ErrorKind::InvalidColumns);
        }
        ValidationResult::valid()
    }

    /// Checks all three fields and collects every failure, in field order.
    pub fn validate_row_data(&self, data: &ProcessedRowData) -> ValidationResult {
        self.validate_normalized(&self.normalize_row_data(data))
    }

    /// Same checks as [`Self::validate_row_data`] on already normalized values.
    pub fn validate_normalized(&self, data: &NormalizedRowData) -> ValidationResult {
        let mut errors = Vec::new();

        if !self.is_valid_seniority(&data.seniority) {
            errors.push(ErrorKind::InvalidSeniority);
        }
        if !is_valid_years_of_experience(data.years_of_experience) {
            errors.push(ErrorKind::InvalidExperience);
        }
        if data.availability.is_none() {
            errors.push(ErrorKind::InvalidAvailability);
        }

        ValidationResult::from_errors(errors)
    }

    /// Coerces raw cells into comparable values. Never fails.
    pub fn normalize_row_data(&self, data: &ProcessedRowData) -> NormalizedRowData {
        normalizer::normalize_row_data(data)
    }

    /// Normalizes, validates, and builds the record. Fails with the first
    /// detected error while keeping the full list on the error value.
    pub fn validate_and_convert(&self, data: &ProcessedRowData) -> Result<FileData, AppError> {
        let normalized = self.normalize_row_data(data);
        self.validate_normalized(&normalized).into_result()?;

        match (
            Seniority::from_normalized(&normalized.seniority),
            normalized
                .years_of_experience
                .and_then(|years| u32::try_from(years).ok()),
            normalized.availability,
        ) {
            (Some(seniority), Some(years_of_experience), Some(availability)) => Ok(FileData {
                seniority,
                years_of_experience,
                availability,
            }),
            _ => Err(AppError::read("validated row could not be converted")),
        }
    }

    fn is_valid_seniority(&self, normalized: &str) -> bool {
        self.config
            .supported_seniority_values
            .iter()
            .any(|value| value.trim().to_lowercase() == normalized)
    }
}

fn is_valid_years_of_experience(years: Option<i64>) -> bool {
    matches!(years, Some(n) if n >= 0 && u32::try_from(n).is_ok())
}
