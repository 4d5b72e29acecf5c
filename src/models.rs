use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Junior,
    Senior,
}

impl Seniority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Junior => "junior",
            Seniority::Senior => "senior",
        }
    }

    /// Exact match against the normalized (trimmed, lowercase) form.
    pub fn from_normalized(value: &str) -> Option<Self> {
        match value {
            "junior" => Some(Seniority::Junior),
            "senior" => Some(Seniority::Senior),
            _ => None,
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The validated record extracted from an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    pub seniority: Seniority,
    pub years_of_experience: u32,
    pub availability: bool,
}

/// A single cell as read from the source, before any coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Text form used for header names and seniority values.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(text) => text.clone(),
            CellValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 {
                    format!("{:.0}", n)
                } else {
                    n.to_string()
                }
            }
            CellValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// The three logical fields as extracted from headers or positions, not yet coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedRowData {
    pub seniority: CellValue,
    pub years_of_experience: CellValue,
    pub availability: CellValue,
}

/// Output of normalization. `None` marks a value that could not be coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRowData {
    pub seniority: String,
    pub years_of_experience: Option<i64>,
    pub availability: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ErrorKind>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn invalid(kind: ErrorKind) -> Self {
        Self::from_errors(vec![kind])
    }

    /// Valid exactly when `errors` is empty.
    pub fn from_errors(errors: Vec<ErrorKind>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn first_error(&self) -> Option<ErrorKind> {
        self.errors.first().copied()
    }

    /// Converts a failed result into the error surfaced by the parsers.
    pub fn into_result(self) -> Result<(), AppError> {
        match self.first_error() {
            Some(kind) => Err(AppError::Invalid {
                kind,
                errors: self.errors,
            }),
            None => Ok(()),
        }
    }
}

/// Stable error classification. `Display` yields the translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    #[error("candidateForm.errors.fileEmpty")]
    Empty,
    #[error("candidateForm.errors.fileInvalidRows")]
    InvalidRows,
    #[error("candidateForm.errors.fileInvalidColumns")]
    InvalidColumns,
    #[error("candidateForm.errors.fileInvalidSeniority")]
    InvalidSeniority,
    #[error("candidateForm.errors.fileInvalidExperience")]
    InvalidExperience,
    #[error("candidateForm.errors.fileInvalidAvailability")]
    InvalidAvailability,
    #[error("candidateForm.errors.fileReadError")]
    ReadError,
    #[error("candidateForm.errors.fileInvalidFormat")]
    InvalidFormat,
    #[error("candidateForm.errors.fileColumnMismatch")]
    ColumnMismatch,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 9] = [
        ErrorKind::Empty,
        ErrorKind::InvalidRows,
        ErrorKind::InvalidColumns,
        ErrorKind::InvalidSeniority,
        ErrorKind::InvalidExperience,
        ErrorKind::InvalidAvailability,
        ErrorKind::ReadError,
        ErrorKind::InvalidFormat,
        ErrorKind::ColumnMismatch,
    ];

    /// Short machine code, e.g. `INVALID_ROWS`.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Empty => "EMPTY",
            ErrorKind::InvalidRows => "INVALID_ROWS",
            ErrorKind::InvalidColumns => "INVALID_COLUMNS",
            ErrorKind::InvalidSeniority => "INVALID_SENIORITY",
            ErrorKind::InvalidExperience => "INVALID_EXPERIENCE",
            ErrorKind::InvalidAvailability => "INVALID_AVAILABILITY",
            ErrorKind::ReadError => "READ_ERROR",
            ErrorKind::InvalidFormat => "INVALID_FORMAT",
            ErrorKind::ColumnMismatch => "COLUMN_MISMATCH",
        }
    }

    pub fn translation_key(&self) -> &'static str {
        match self {
            ErrorKind::Empty => "candidateForm.errors.fileEmpty",
            ErrorKind::InvalidRows => "candidateForm.errors.fileInvalidRows",
            ErrorKind::InvalidColumns => "candidateForm.errors.fileInvalidColumns",
            ErrorKind::InvalidSeniority => "candidateForm.errors.fileInvalidSeniority",
            ErrorKind::InvalidExperience => "candidateForm.errors.fileInvalidExperience",
            ErrorKind::InvalidAvailability => "candidateForm.errors.fileInvalidAvailability",
            ErrorKind::ReadError => "candidateForm.errors.fileReadError",
            ErrorKind::InvalidFormat => "candidateForm.errors.fileInvalidFormat",
            ErrorKind::ColumnMismatch => "candidateForm.errors.fileColumnMismatch",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Validation failure; `kind` is the first entry of `errors`.
    #[error("{kind}")]
    Invalid {
        kind: ErrorKind,
        errors: Vec<ErrorKind>,
    },

    #[error("{}", ErrorKind::ReadError)]
    Read { reason: String },

    #[error("{}", ErrorKind::InvalidFormat)]
    Unsupported { file_name: String },

    /// Export format other than CSV or JSON.
    #[error("{}", ErrorKind::InvalidFormat)]
    UnsupportedExport { format: String },

    #[error("invalid validation config: {message}")]
    Config { message: String },
}

impl AppError {
    pub fn invalid(kind: ErrorKind) -> Self {
        AppError::Invalid {
            kind,
            errors: vec![kind],
        }
    }

    pub fn read(reason: impl Into<String>) -> Self {
        AppError::Read {
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        AppError::Config {
            message: message.into(),
        }
    }

    /// Kind shown to the user. Read and config failures both surface as `READ_ERROR`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Invalid { kind, .. } => *kind,
            AppError::Read { .. } | AppError::Config { .. } => ErrorKind::ReadError,
            AppError::Unsupported { .. } | AppError::UnsupportedExport { .. } => {
                ErrorKind::InvalidFormat
            }
        }
    }

    /// Every detected error, in detection order.
    pub fn errors(&self) -> Vec<ErrorKind> {
        match self {
            AppError::Invalid { errors, .. } => errors.clone(),
            other => vec![other.kind()],
        }
    }

    pub fn translation_key(&self) -> &'static str {
        self.kind().translation_key()
    }
}
