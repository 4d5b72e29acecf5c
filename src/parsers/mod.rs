mod builder;
mod csv;
mod excel;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::ValidationConfig;
use crate::models::{AppError, FileData};
use crate::processors::FileValidator;
use crate::storage::FileSource;

pub use self::builder::{build_file_data, extract_with_possible_headers, extract_without_headers};
pub use self::csv::{parse_csv_content, tokenize_csv, CsvFileParser};
pub use self::excel::{build_file_data_from_sheet, read_first_sheet, ExcelFileParser, SheetView};

/// A format-specific parser, chosen by file name.
#[async_trait]
pub trait FileParser: Send + Sync {
    /// Lowercase extensions including the dot, e.g. ".csv".
    fn supported_types(&self) -> &'static [&'static str];

    fn can_parse(&self, file_name: &str) -> bool {
        let name = file_name.to_lowercase();
        self.supported_types().iter().any(|ext| name.ends_with(ext))
    }

    async fn parse(&self, file: &dyn FileSource) -> Result<FileData, AppError>;
}

/// Ordered parser list; the first parser accepting the file name wins.
pub struct ParserRegistry {
    parsers: Vec<Box<dyn FileParser>>,
}

impl ParserRegistry {
    /// Registers the Excel then CSV parsers around one shared validator.
    /// Fails when the config does not pass [`ValidationConfig::validate`].
    pub fn new(config: ValidationConfig) -> Result<Self, AppError> {
        let validator = FileValidator::new(config)?;
        Ok(Self::with_validator(Arc::new(validator)))
    }

    fn with_validator(validator: Arc<FileValidator>) -> Self {
        Self {
            parsers: vec![
                Box::new(ExcelFileParser::new(Arc::clone(&validator))),
                Box::new(CsvFileParser::new(validator)),
            ],
        }
    }

    /// First registered parser whose extensions match `file_name`.
    pub fn select_parser(&self, file_name: &str) -> Option<&dyn FileParser> {
        self.parsers
            .iter()
            .find(|parser| parser.can_parse(file_name))
            .map(|parser| &**parser)
    }

    /// Extensions of every registered parser, in registration order.
    pub fn supported_types(&self) -> Vec<&'static str> {
        self.parsers
            .iter()
            .flat_map(|parser| parser.supported_types().iter().copied())
            .collect()
    }

    pub fn is_supported(&self, file_name: &str) -> bool {
        self.select_parser(file_name).is_some()
    }

    /// Picks a parser by name and runs it. Unsupported names fail before any read.
    pub async fn parse(&self, file: &dyn FileSource) -> Result<FileData, AppError> {
        let parser = self.select_parser(file.name()).ok_or_else(|| {
            warn!("Unsupported file type: {}", file.name());
            AppError::Unsupported {
                file_name: file.name().to_string(),
            }
        })?;

        match parser.parse(file).await {
            Ok(data) => {
                info!("Parsed candidate file {}", file.name());
                Ok(data)
            }
            Err(err) => {
                warn!("Rejected candidate file {}: {:?}", file.name(), err);
                Err(err)
            }
        }
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_validator(Arc::new(FileValidator::default()))
    }
}
