use tracing::debug;

use crate::models::{AppError, CellValue, ErrorKind, FileData, ProcessedRowData};
use crate::processors::FileValidator;
use crate::utils::header::header_index;

/// Builds the record from tokenized rows (delimited-text layout rules).
///
/// One row is positional data. Two rows are header + data when the first
/// row names every required field; otherwise the first row is read as data.
pub fn build_file_data(
    validator: &FileValidator,
    rows: &[Vec<CellValue>],
) -> Result<FileData, AppError> {
    validator.validate_row_count(rows.len()).into_result()?;

    let processed = match rows {
        [header, data] => extract_with_possible_headers(validator, header, data)?,
        [data, ..] => extract_without_headers(validator, data)?,
        [] => return Err(AppError::invalid(ErrorKind::Empty)),
    };

    validator.validate_and_convert(&processed)
}

/// Maps the second row by header name when the first row is a header,
/// otherwise reads the first row positionally.
pub fn extract_with_possible_headers(
    validator: &FileValidator,
    first_row: &[CellValue],
    second_row: &[CellValue],
) -> Result<ProcessedRowData, AppError> {
    let headers: Vec<String> = first_row.iter().map(CellValue::to_text).collect();

    if !validator.validate_headers(&headers).is_valid {
        debug!("First row is not a header row, reading it as data");
        return extract_without_headers(validator, first_row);
    }

    debug!("Header row detected: {:?}", headers);
    let config = validator.config();
    let cell_for = |name: &str| {
        header_index(&headers, name)
            .and_then(|idx| second_row.get(idx))
            .cloned()
            .unwrap_or(CellValue::Empty)
    };

    Ok(ProcessedRowData {
        seniority: cell_for(config.seniority_column()),
        years_of_experience: cell_for(config.experience_column()),
        availability: cell_for(config.availability_column()),
    })
}

/// Positional mapping: seniority, years of experience, availability.
pub fn extract_without_headers(
    validator: &FileValidator,
    row: &[CellValue],
) -> Result<ProcessedRowData, AppError> {
    validator.validate_column_count(row.len()).into_result()?;

    match row {
        [seniority, years_of_experience, availability] => Ok(ProcessedRowData {
            seniority: seniority.clone(),
            years_of_experience: years_of_experience.clone(),
            availability: availability.clone(),
        }),
        _ => Err(AppError::invalid(ErrorKind::InvalidColumns)),
    }
}
