use csv::WriterBuilder;

use crate::config::ValidationConfig;
use crate::models::{AppError, FileData};

/// CSV export: header row named after the configured columns, then the record.
/// The output is a valid upload for the same configuration.
pub fn export_csv(data: &FileData, config: &ValidationConfig) -> Result<String, AppError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(&config.required_columns)
        .map_err(|e| AppError::read(format!("CSV write error: {}", e)))?;

    writer
        .write_record([
            data.seniority.as_str().to_string(),
            data.years_of_experience.to_string(),
            data.availability.to_string(),
        ])
        .map_err(|e| AppError::read(format!("CSV write error: {}", e)))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::read(format!("CSV buffer error: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| AppError::read(format!("UTF-8 conversion error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Seniority;
    use crate::parsers::parse_csv_content;
    use crate::processors::FileValidator;

    #[test]
    fn test_export_csv_layout() {
        let data = FileData {
            seniority: Seniority::Senior,
            years_of_experience: 8,
            availability: false,
        };
        let csv = export_csv(&data, &ValidationConfig::default()).unwrap();
        assert_eq!(csv, "seniority,yearsOfExperience,availability\nsenior,8,false\n");
    }

    #[test]
    fn test_exported_template_is_a_valid_upload() {
        let data = FileData {
            seniority: Seniority::Junior,
            years_of_experience: 0,
            availability: true,
        };
        let config = ValidationConfig::default();
        let csv = export_csv(&data, &config).unwrap();
        let parsed = parse_csv_content(&FileValidator::new(config).unwrap(), &csv).unwrap();
        assert_eq!(parsed, data);
    }
}
