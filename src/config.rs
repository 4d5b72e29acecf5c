//! Validation configuration.
//!
//! The defaults describe the candidate upload format: three named columns,
//! one data row with an optional header row, and the two seniority levels.
//! A JSON file with the same camelCase keys can override them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{AppError, Seniority};

pub const EXCEL_FILE_TYPES: &[&str] = &[".xlsx", ".xls"];
pub const CSV_FILE_TYPES: &[&str] = &[".csv"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationConfig {
    /// Field names in positional order: seniority, years of experience, availability.
    pub required_columns: Vec<String>,
    pub min_rows: usize,
    /// Header row plus data row.
    pub max_rows: usize,
    pub supported_seniority_values: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            required_columns: vec![
                "seniority".to_string(),
                "yearsOfExperience".to_string(),
                "availability".to_string(),
            ],
            min_rows: 1,
            max_rows: 2,
            supported_seniority_values: vec!["junior".to_string(), "senior".to_string()],
        }
    }
}

impl ValidationConfig {
    /// Parses a JSON override; missing keys keep their defaults.
    pub fn from_json_str(content: &str) -> Result<Self, AppError> {
        let config: ValidationConfig = serde_json::from_str(content)
            .map_err(|err| AppError::config(format!("failed to parse config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub async fn load(path: &Path) -> Result<Self, AppError> {
        let content = tokio::fs::read_to_string(path).await.map_err(|err| {
            AppError::config(format!("failed to read {}: {err}", path.display()))
        })?;
        let config = Self::from_json_str(&content)?;
        debug!("Loaded validation config from {}", path.display());
        Ok(config)
    }

    /// Fails with `AppError::Config` when the parsers could not work with this config.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.required_columns.len() != 3 {
            return Err(AppError::config(format!(
                "requiredColumns must name exactly 3 fields, got {}",
                self.required_columns.len()
            )));
        }
        if self.required_columns.iter().any(|c| c.trim().is_empty()) {
            return Err(AppError::config("requiredColumns contains an empty name"));
        }
        if self.min_rows == 0 || self.min_rows > self.max_rows {
            return Err(AppError::config(format!(
                "row bounds must satisfy 1 <= minRows <= maxRows (got {}..{})",
                self.min_rows, self.max_rows
            )));
        }
        if self.supported_seniority_values.is_empty() {
            return Err(AppError::config("supportedSeniorityValues is empty"));
        }
        if let Some(unknown) = self
            .supported_seniority_values
            .iter()
            .find(|v| Seniority::from_normalized(&v.trim().to_lowercase()).is_none())
        {
            return Err(AppError::config(format!(
                "unknown seniority value: {unknown}"
            )));
        }
        Ok(())
    }

    /// Configured name of the seniority column. Empty when `requiredColumns` is too short.
    pub fn seniority_column(&self) -> &str {
        self.column(0)
    }

    pub fn experience_column(&self) -> &str {
        self.column(1)
    }

    pub fn availability_column(&self) -> &str {
        self.column(2)
    }

    fn column(&self, position: usize) -> &str {
        self.required_columns
            .get(position)
            .map(String::as_str)
            .unwrap_or_default()
    }
}
