use std::fs;
use std::path::PathBuf;

use candidate_intake_lib::config::ValidationConfig;
use candidate_intake_lib::models::{AppError, ErrorKind, FileData, Seniority};
use candidate_intake_lib::storage::{DiskFile, MemoryFile};
use candidate_intake_lib::{
    classify_error_message, export_file_data, init_logging, is_file_supported, parse_file,
    parse_file_with_config, supported_file_types,
};

fn csv_file(content: &str) -> MemoryFile {
    MemoryFile::from_text("candidate.csv", content)
}

async fn parse_error(content: &str) -> AppError {
    parse_file(&csv_file(content)).await.unwrap_err()
}

fn fixture(name: &str) -> DiskFile {
    DiskFile::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name))
}

#[tokio::test]
async fn test_csv_with_header_round_trip() {
    init_logging();
    let data = parse_file(&csv_file(
        "seniority,yearsOfExperience,availability\njunior,3,true",
    ))
    .await
    .unwrap();

    assert_eq!(
        data,
        FileData {
            seniority: Seniority::Junior,
            years_of_experience: 3,
            availability: true,
        }
    );
}

#[tokio::test]
async fn test_csv_without_header_round_trip() {
    let data = parse_file(&csv_file("senior,7,false")).await.unwrap();

    assert_eq!(
        data,
        FileData {
            seniority: Seniority::Senior,
            years_of_experience: 7,
            availability: false,
        }
    );
}

#[tokio::test]
async fn test_error_keys_for_each_failure() {
    let cases = [
        ("", ErrorKind::Empty),
        ("a,b,c\nd,e,f\ng,h,i", ErrorKind::InvalidRows),
        ("junior,3", ErrorKind::InvalidColumns),
        ("junior,3,true,extra", ErrorKind::InvalidColumns),
        ("middle,3,true", ErrorKind::InvalidSeniority),
        ("junior,invalid,true", ErrorKind::InvalidExperience),
        ("junior,-1,true", ErrorKind::InvalidExperience),
        ("junior,3,maybe", ErrorKind::InvalidAvailability),
        ("junior,3,1", ErrorKind::InvalidAvailability),
        ("junior,3,", ErrorKind::InvalidAvailability),
    ];

    for (content, expected) in cases {
        let err = parse_error(content).await;
        assert_eq!(err.kind(), expected, "content: {content:?}");
        assert_eq!(err.to_string(), expected.translation_key());
    }
}

#[tokio::test]
async fn test_seniority_is_normalized() {
    let data = parse_file(&csv_file("Senior ,  4  , TRUE")).await.unwrap();
    assert_eq!(data.seniority, Seniority::Senior);
    assert_eq!(data.years_of_experience, 4);
    assert!(data.availability);
}

#[tokio::test]
async fn test_unsupported_extension() {
    assert!(!is_file_supported("test.txt"));
    assert_eq!(supported_file_types(), vec![".xlsx", ".xls", ".csv"]);

    let err = parse_file(&MemoryFile::from_text("test.txt", "junior,3,true"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unsupported { .. }));
    assert_eq!(err.to_string(), "candidateForm.errors.fileInvalidFormat");
}

#[tokio::test]
async fn test_parse_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("CANDIDATE.CSV");
    fs::write(&path, "\u{FEFF}seniority,yearsOfExperience,availability\r\nsenior,12,false\r\n").unwrap();

    let data = parse_file(&DiskFile::new(&path)).await.unwrap();
    assert_eq!(data.seniority, Seniority::Senior);
    assert_eq!(data.years_of_experience, 12);
    assert!(!data.availability);
}

#[tokio::test]
async fn test_workbook_with_header_uses_first_sheet() {
    let data = parse_file(&fixture("candidate_with_header.xlsx")).await.unwrap();
    assert_eq!(
        data,
        FileData {
            seniority: Seniority::Senior,
            years_of_experience: 8,
            availability: false,
        }
    );
}

#[tokio::test]
async fn test_workbook_without_header() {
    let data = parse_file(&fixture("candidate_positional.xlsx")).await.unwrap();
    assert_eq!(data.seniority, Seniority::Junior);
    assert_eq!(data.years_of_experience, 3);
    assert!(data.availability);
}

#[tokio::test]
async fn test_workbook_blank_row_between_header_and_data() {
    let err = parse_file(&fixture("candidate_blank_row.xlsx")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRows);
}

#[tokio::test]
async fn test_missing_disk_file_is_read_error() {
    let err = parse_file(&DiskFile::new("/nonexistent/candidate.xlsx"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ReadError);
}

#[tokio::test]
async fn test_custom_config() {
    let config = ValidationConfig::from_json_str(r#"{"supportedSeniorityValues": ["senior"]}"#).unwrap();
    let err = parse_file_with_config(&csv_file("junior,1,true"), config.clone())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSeniority);

    let data = parse_file_with_config(&csv_file("senior,1,true"), config)
        .await
        .unwrap();
    assert_eq!(data.seniority, Seniority::Senior);

    let bad = ValidationConfig {
        max_rows: 0,
        ..ValidationConfig::default()
    };
    assert!(matches!(
        parse_file_with_config(&csv_file("senior,1,true"), bad).await,
        Err(AppError::Config { .. })
    ));

    let no_columns = ValidationConfig {
        required_columns: vec![],
        ..ValidationConfig::default()
    };
    assert!(matches!(
        parse_file_with_config(&csv_file("x,y\njunior,1"), no_columns).await,
        Err(AppError::Config { .. })
    ));
}

#[tokio::test]
async fn test_exported_csv_parses_back() {
    let data = FileData {
        seniority: Seniority::Senior,
        years_of_experience: 8,
        availability: false,
    };
    let csv = export_file_data(&data, "CSV").unwrap();
    let parsed = parse_file(&csv_file(&csv)).await.unwrap();
    assert_eq!(parsed, data);

    assert_eq!(
        export_file_data(&data, "yaml").unwrap_err(),
        AppError::UnsupportedExport {
            format: "yaml".to_string()
        }
    );
}

#[tokio::test]
async fn test_concurrent_parses_are_independent() {
    let valid = csv_file("junior,2,true");
    let invalid = csv_file("junior,2");
    let (a, b, c) = tokio::join!(parse_file(&valid), parse_file(&invalid), parse_file(&valid));

    assert_eq!(a.unwrap(), c.unwrap());
    assert_eq!(b.unwrap_err().kind(), ErrorKind::InvalidColumns);
}

#[test]
fn test_classify_error_message() {
    assert_eq!(
        classify_error_message("candidateForm.errors.fileInvalidAvailability"),
        ErrorKind::InvalidAvailability
    );
    assert_eq!(classify_error_message("Error al leer el archivo"), ErrorKind::ReadError);
    assert_eq!(classify_error_message("unexpected"), ErrorKind::ReadError);
}
