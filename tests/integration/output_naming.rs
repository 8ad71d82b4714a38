//! Integration tests for collision-free output names.

use pdfmerge::naming::resolve_output_path;

use crate::common::{Workspace, page_labels, write_pdf};

#[tokio::test]
async fn test_first_run_uses_requested_name() {
    let ws = Workspace::new();
    write_pdf(ws.input_dir(), "a.pdf", &["a.1"]);

    let report = pdfmerge::run(&ws.config).await.unwrap();

    assert_eq!(report.output_path, ws.output_dir().join("merged_pdfs.pdf"));
}

#[tokio::test]
async fn test_existing_outputs_are_skipped() {
    let mut ws = Workspace::new();
    ws.config.output_file = "out.pdf".to_string();
    write_pdf(ws.input_dir(), "a.pdf", &["a.1"]);
    std::fs::create_dir(ws.output_dir()).unwrap();
    std::fs::write(ws.output_dir().join("out.pdf"), b"old").unwrap();
    std::fs::write(ws.output_dir().join("out_0.pdf"), b"older").unwrap();

    let report = pdfmerge::run(&ws.config).await.unwrap();

    assert_eq!(report.output_path, ws.output_dir().join("out_1.pdf"));
    assert_eq!(std::fs::read(ws.output_dir().join("out.pdf")).unwrap(), b"old");
    assert_eq!(std::fs::read(ws.output_dir().join("out_0.pdf")).unwrap(), b"older");
    assert_eq!(page_labels(&report.output_path), vec!["a.1"]);
}

#[tokio::test]
async fn test_numbered_request_is_incremented() {
    let mut ws = Workspace::new();
    ws.config.output_file = "name_3.pdf".to_string();
    std::fs::create_dir(ws.output_dir()).unwrap();
    std::fs::write(ws.output_dir().join("name_3.pdf"), b"taken").unwrap();

    let report = pdfmerge::run(&ws.config).await.unwrap();

    assert_eq!(report.output_path, ws.output_dir().join("name_4.pdf"));
}

#[tokio::test]
async fn test_repeated_runs_never_overwrite() {
    let ws = Workspace::new();
    write_pdf(ws.input_dir(), "a.pdf", &["a.1"]);

    for _ in 0..3 {
        pdfmerge::run(&ws.config).await.unwrap();
    }

    assert_eq!(
        ws.output_files(),
        vec!["merged_pdfs.pdf", "merged_pdfs_0.pdf", "merged_pdfs_1.pdf"]
    );
}

#[tokio::test]
async fn test_non_numeric_suffix_gets_a_number() {
    let mut ws = Workspace::new();
    ws.config.output_file = "merged_pdfs_final.pdf".to_string();
    std::fs::create_dir(ws.output_dir()).unwrap();
    std::fs::write(ws.output_dir().join("merged_pdfs_final.pdf"), b"taken").unwrap();

    let first = pdfmerge::run(&ws.config).await.unwrap();
    let second = pdfmerge::run(&ws.config).await.unwrap();

    assert_eq!(first.output_path, ws.output_dir().join("merged_pdfs_final_0.pdf"));
    assert_eq!(second.output_path, ws.output_dir().join("merged_pdfs_final_1.pdf"));
}

#[test]
fn test_resolve_does_not_create_files() {
    let ws = Workspace::new();
    std::fs::create_dir(ws.output_dir()).unwrap();

    let first = resolve_output_path(ws.output_dir(), "out.pdf").unwrap();
    let second = resolve_output_path(ws.output_dir(), "out.pdf").unwrap();

    assert_eq!(first, second);
    assert_eq!(first, ws.output_dir().join("out.pdf"));
    assert!(ws.output_files().is_empty());
}
