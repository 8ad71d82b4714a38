//! Integration tests for error handling and edge cases.

use pdfmerge::PdfMergeError;

use crate::common::{Workspace, write_pdf};

#[tokio::test]
async fn test_error_missing_input_dir() {
    let ws = Workspace::new();
    let mut config = ws.config.clone();
    config.input_dir = ws.root.path().join("does_not_exist");

    let err = pdfmerge::run(&config).await.unwrap_err();

    assert!(matches!(err, PdfMergeError::InputDirNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(!ws.output_dir().exists());
}

#[tokio::test]
async fn test_error_input_is_a_file() {
    let ws = Workspace::new();
    let mut config = ws.config.clone();
    config.input_dir = write_pdf(ws.input_dir(), "a.pdf", &["a.1"]);

    let err = pdfmerge::run(&config).await.unwrap_err();
    assert!(matches!(err, PdfMergeError::NotADirectory { .. }));
}

#[tokio::test]
async fn test_error_corrupt_pdf_creates_no_output() {
    let ws = Workspace::new();
    write_pdf(ws.input_dir(), "a.pdf", &["a.1"]);
    std::fs::write(ws.input_dir().join("b.pdf"), b"garbage, not a pdf").unwrap();
    write_pdf(ws.input_dir(), "c.pdf", &["c.1"]);

    let err = pdfmerge::run(&ws.config).await.unwrap_err();

    assert!(err.is_malformed_pdf(), "unexpected error: {err}");
    assert_eq!(err.exit_code(), 3);
    assert!(ws.output_files().is_empty());
}

#[tokio::test]
async fn test_error_empty_pdf_file() {
    let ws = Workspace::new();
    std::fs::File::create(ws.input_dir().join("empty.pdf")).unwrap();

    let err = pdfmerge::run(&ws.config).await.unwrap_err();

    assert!(err.is_malformed_pdf(), "unexpected error: {err}");
    assert!(ws.output_files().is_empty());
}

#[tokio::test]
async fn test_error_output_dir_is_a_file() {
    let ws = Workspace::new();
    write_pdf(ws.input_dir(), "a.pdf", &["a.1"]);
    std::fs::write(ws.output_dir(), b"in the way").unwrap();

    let err = pdfmerge::run(&ws.config).await.unwrap_err();

    assert!(matches!(err, PdfMergeError::OutputDirNotAccessible { .. }));
    assert_eq!(err.exit_code(), 5);
}

#[tokio::test]
async fn test_error_invalid_output_file_name() {
    let mut ws = Workspace::new();
    ws.config.output_file = "../escape.pdf".to_string();

    let err = pdfmerge::run(&ws.config).await.unwrap_err();

    assert!(matches!(err, PdfMergeError::InvalidFileName { .. }));
    assert!(!ws.root.path().join("escape.pdf").exists());
}
