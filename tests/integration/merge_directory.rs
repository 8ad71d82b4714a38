//! Integration tests for merging a directory.

use pdfmerge::merge::merge_directory;

use crate::common::{Workspace, page_count, page_labels, write_pdf};

#[tokio::test]
async fn test_merge_two_pdfs_in_name_order() {
    let ws = Workspace::new();
    write_pdf(ws.input_dir(), "b.pdf", &["b.1", "b.2"]);
    write_pdf(ws.input_dir(), "a.pdf", &["a.1"]);

    let report = pdfmerge::run(&ws.config).await.unwrap();

    assert_eq!(report.merge.files_merged, 2);
    assert_eq!(report.merge.total_pages, 3);
    assert_eq!(page_labels(&report.output_path), vec!["a.1", "b.1", "b.2"]);
}

#[tokio::test]
async fn test_merge_many_single_page_pdfs() {
    let ws = Workspace::new();
    let names: Vec<String> = (0..12).map(|i| format!("scan{i:02}.pdf")).collect();
    for name in &names {
        write_pdf(ws.input_dir(), name, &[name.as_str()]);
    }

    let report = pdfmerge::run(&ws.config).await.unwrap();

    assert_eq!(page_count(&report.output_path), names.len());
    assert_eq!(page_labels(&report.output_path), names);
    assert_eq!(report.merged_files.len(), names.len());
}

#[tokio::test]
async fn test_merge_empty_directory_writes_zero_pages() {
    let ws = Workspace::new();

    let report = pdfmerge::run(&ws.config).await.unwrap();

    assert_eq!(report.merge.files_merged, 0);
    assert!(report.output_path.exists());
    assert_eq!(page_count(&report.output_path), 0);
}

#[tokio::test]
async fn test_merge_ignores_other_files() {
    let ws = Workspace::new();
    write_pdf(ws.input_dir(), "keep.pdf", &["keep"]);
    write_pdf(ws.input_dir(), "upper.PDF", &["upper"]);
    std::fs::write(ws.input_dir().join("notes.txt"), b"not a pdf").unwrap();
    let nested = ws.input_dir().join("nested");
    std::fs::create_dir(&nested).unwrap();
    write_pdf(&nested, "deep.pdf", &["deep"]);

    let report = pdfmerge::run(&ws.config).await.unwrap();

    assert_eq!(page_labels(&report.output_path), vec!["keep"]);
}

#[tokio::test]
async fn test_merge_preserves_inherited_resources() {
    let ws = Workspace::new();
    write_pdf(ws.input_dir(), "a.pdf", &["a.1"]);

    let report = pdfmerge::run(&ws.config).await.unwrap();

    let doc = lopdf::Document::load(&report.output_path).unwrap();
    let page_id = *doc.get_pages().values().next().unwrap();
    let page = doc.get_dictionary(page_id).unwrap();
    assert!(page.has(b"Resources"));
    assert!(page.has(b"MediaBox"));
}

#[tokio::test]
async fn test_merge_directory_keeps_document_in_memory() {
    let ws = Workspace::new();
    write_pdf(ws.input_dir(), "a.pdf", &["a.1", "a.2"]);

    let result = merge_directory(ws.input_dir()).await.unwrap();

    assert_eq!(result.statistics.total_pages, 2);
    assert!(ws.output_files().is_empty());
}

#[tokio::test]
async fn test_merge_to_explicit_path() {
    let ws = Workspace::new();
    write_pdf(ws.input_dir(), "a.pdf", &["a.1"]);
    write_pdf(ws.input_dir(), "b.pdf", &["b.1"]);
    let output = ws.root.path().join("combined.pdf");

    let report = pdfmerge::merge(ws.input_dir(), &output).await.unwrap();

    assert_eq!(report.output_path, output);
    assert_eq!(page_labels(&output), vec!["a.1", "b.1"]);
}
