pub mod csv;

use crate::config::ValidationConfig;
use crate::models::{AppError, FileData};

/// Serializes a record in the requested format.
///
/// "CSV" produces an upload template (header + one row); "JSON" produces the
/// camelCase object handed to the submission layer.
pub fn export_file_data(
    data: &FileData,
    format: &str,
    config: &ValidationConfig,
) -> Result<String, AppError> {
    match format.to_uppercase().as_str() {
        "CSV" => csv::export_csv(data, config),
        "JSON" => serde_json::to_string(data)
            .map_err(|e| AppError::read(format!("JSON serialization error: {}", e))),
        _ => Err(AppError::UnsupportedExport {
            format: format.to_string(),
        }),
    }
}
