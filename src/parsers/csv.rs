use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::CSV_FILE_TYPES;
use crate::models::{AppError, CellValue, FileData};
use crate::processors::FileValidator;
use crate::storage::FileSource;
use crate::utils::text::{is_blank_line, split_csv_line};

use super::{build_file_data, FileParser};

#[derive(Debug, Clone)]
pub struct CsvFileParser {
    validator: Arc<FileValidator>,
}

impl CsvFileParser {
    pub fn new(validator: Arc<FileValidator>) -> Self {
        Self { validator }
    }
}

#[async_trait]
impl FileParser for CsvFileParser {
    fn supported_types(&self) -> &'static [&'static str] {
        CSV_FILE_TYPES
    }

    async fn parse(&self, file: &dyn FileSource) -> Result<FileData, AppError> {
        let content = file.read_text().await.map_err(|err| {
            warn!("Failed to read CSV file {}: {}", file.name(), err);
            AppError::read(format!("failed to read {}: {err}", file.name()))
        })?;

        parse_csv_content(&self.validator, &content)
    }
}

/// Splits text into rows of cells, dropping lines that are blank after trimming.
pub fn tokenize_csv(content: &str) -> Vec<Vec<String>> {
    content
        .split('\n')
        .filter(|line| !is_blank_line(line))
        .map(split_csv_line)
        .collect()
}

/// Tokenizes already-decoded text and builds the record.
pub fn parse_csv_content(validator: &FileValidator, content: &str) -> Result<FileData, AppError> {
    let rows: Vec<Vec<CellValue>> = tokenize_csv(content)
        .into_iter()
        .map(|row| row.into_iter().map(CellValue::Text).collect())
        .collect();
    debug!("Tokenized CSV into {} rows", rows.len());

    build_file_data(validator, &rows)
}
