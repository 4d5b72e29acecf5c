//! Candidate file intake.
//!
//! Reads an uploaded CSV or Excel file holding one candidate row
//! (seniority, years of experience, availability), optionally under a
//! header row, and returns either the validated record or a stable error
//! key for the UI to translate.

pub mod config;
pub mod exporters;
pub mod matchers;
pub mod models;
pub mod parsers;
pub mod processors;
pub mod storage;
pub mod utils;

use tracing_subscriber::EnvFilter;

use config::ValidationConfig;
use models::{AppError, ErrorKind, FileData};
use parsers::ParserRegistry;
use storage::FileSource;

/// Parses an upload with the default validation rules.
pub async fn parse_file(file: &dyn FileSource) -> Result<FileData, AppError> {
    ParserRegistry::default().parse(file).await
}

/// Parses an upload with custom validation rules.
/// An invalid config fails with `AppError::Config` before the file is read.
pub async fn parse_file_with_config(
    file: &dyn FileSource,
    config: ValidationConfig,
) -> Result<FileData, AppError> {
    ParserRegistry::new(config)?.parse(file).await
}

/// Extensions accepted for upload, in parser order.
pub fn supported_file_types() -> Vec<&'static str> {
    ParserRegistry::default().supported_types()
}

/// Whether the file name has an extension a parser accepts (case-insensitive).
pub fn is_file_supported(file_name: &str) -> bool {
    ParserRegistry::default().is_supported(file_name)
}

/// Error kind for a free-text message from outside this crate.
pub fn classify_error_message(message: &str) -> ErrorKind {
    matchers::classify_error_message(message)
}

/// Serializes a record as "CSV" (upload template) or "JSON", using the default columns.
pub fn export_file_data(data: &FileData, format: &str) -> Result<String, AppError> {
    exporters::export_file_data(data, format, &ValidationConfig::default())
}

/// Installs a fmt subscriber filtered by `RUST_LOG`.
/// Default: warn for dependencies, info for this crate.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,candidate_intake_lib=info")),
        )
        .try_init();
}
