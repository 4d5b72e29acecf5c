use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use calamine::{open_workbook_auto_from_rs, DataType, Reader};
use tracing::{debug, warn};

use crate::config::EXCEL_FILE_TYPES;
use crate::models::{AppError, CellValue, ErrorKind, FileData, ProcessedRowData};
use crate::processors::FileValidator;
use crate::storage::FileSource;

use super::{extract_without_headers, FileParser};

#[derive(Debug, Clone)]
pub struct ExcelFileParser {
    validator: Arc<FileValidator>,
}

impl ExcelFileParser {
    pub fn new(validator: Arc<FileValidator>) -> Self {
        Self { validator }
    }
}

#[async_trait]
impl FileParser for ExcelFileParser {
    fn supported_types(&self) -> &'static [&'static str] {
        EXCEL_FILE_TYPES
    }

    async fn parse(&self, file: &dyn FileSource) -> Result<FileData, AppError> {
        let bytes = file.read_bytes().await.map_err(|err| {
            warn!("Failed to read Excel file {}: {}", file.name(), err);
            AppError::read(format!("failed to read {}: {err}", file.name()))
        })?;

        let sheet = read_first_sheet(bytes)?;
        build_file_data_from_sheet(&self.validator, &sheet)
    }
}

/// First worksheet in two views: positional rows, and objects keyed by
/// the first row's values (one per following row).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetView {
    pub rows: Vec<Vec<CellValue>>,
    pub keyed: Vec<HashMap<String, CellValue>>,
}

impl SheetView {
    /// Trailing empty cells are dropped, then blank rows outside the used
    /// block. Interior blank rows stay in the positional view and count as
    /// rows. The keyed view skips them.
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let mut rows: Vec<Vec<CellValue>> = rows.into_iter().map(trim_trailing_empty).collect();
        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }
        let leading = rows.iter().take_while(|row| row.is_empty()).count();
        rows.drain(..leading);

        let keyed = match rows.split_first() {
            Some((header, data_rows)) => {
                let keys: Vec<String> = header.iter().map(CellValue::to_text).collect();
                data_rows
                    .iter()
                    .filter(|row| !row.is_empty())
                    .map(|row| keyed_row(&keys, row))
                    .collect()
            }
            None => Vec::new(),
        };

        Self { rows, keyed }
    }
}

fn keyed_row(keys: &[String], row: &[CellValue]) -> HashMap<String, CellValue> {
    let mut object = HashMap::new();
    for (key, cell) in keys.iter().zip(row) {
        if key.is_empty() || cell.is_empty() {
            continue;
        }
        object.entry(key.clone()).or_insert_with(|| cell.clone());
    }
    object
}

fn trim_trailing_empty(mut row: Vec<CellValue>) -> Vec<CellValue> {
    while row.last().is_some_and(CellValue::is_empty) {
        row.pop();
    }
    row
}

/// Opens a workbook from memory (format sniffed from the bytes) and reads the
/// sheet at position 0. Any failure is a read error.
pub fn read_first_sheet(bytes: Vec<u8>) -> Result<SheetView, AppError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|err| AppError::read(format!("failed to open workbook: {err}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::read("workbook has no worksheets"))?
        .map_err(|err| AppError::read(format!("failed to read worksheet: {err}")))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(data_type_to_cell).collect())
        .collect();

    Ok(SheetView::from_rows(rows))
}

fn data_type_to_cell(cell: &DataType) -> CellValue {
    match cell {
        DataType::Empty => CellValue::Empty,
        DataType::String(s) => CellValue::Text(s.clone()),
        DataType::Float(f) => CellValue::Number(*f),
        DataType::Int(v) => CellValue::Number(*v as f64),
        DataType::Bool(v) => CellValue::Bool(*v),
        DataType::Error(_) => CellValue::Empty,
        _ => CellValue::Text(cell.to_string()),
    }
}

/// The keyed view wins when its first object carries every required field
/// under its exact name; otherwise the first row is read positionally.
pub fn build_file_data_from_sheet(
    validator: &FileValidator,
    sheet: &SheetView,
) -> Result<FileData, AppError> {
    validator.validate_row_count(sheet.rows.len()).into_result()?;

    let config = validator.config();
    let keyed = sheet.keyed.first().and_then(|object| {
        Some(ProcessedRowData {
            seniority: object.get(config.seniority_column())?.clone(),
            years_of_experience: object.get(config.experience_column())?.clone(),
            availability: object.get(config.availability_column())?.clone(),
        })
    });

    let processed = match keyed {
        Some(processed) => {
            debug!("Using header-keyed sheet view");
            processed
        }
        None => {
            debug!("Using positional sheet view");
            let first_row = sheet
                .rows
                .first()
                .ok_or_else(|| AppError::invalid(ErrorKind::Empty))?;
            extract_without_headers(validator, first_row)?
        }
    };

    validator.validate_and_convert(&processed)
}
