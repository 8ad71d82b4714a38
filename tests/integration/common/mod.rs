//! Shared helpers for the integration tests.
//!
//! PDFs are generated on the fly with `lopdf`. Every page carries a label
//! under a custom key so the page order of a merged file can be checked.

#![allow(dead_code)]

use lopdf::{Document, Object, Stream, dictionary};
use pdfmerge::config::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Custom page key holding the test label.
pub const LABEL_KEY: &[u8] = b"PdfMergeLabel";

/// Write a PDF with one page per label to `dir/name`.
pub fn write_pdf(dir: &Path, name: &str, labels: &[&str]) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids = Vec::new();
    for label in labels {
        let text = format!("BT /F1 24 Tf 72 720 Td ({label}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, text.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "PdfMergeLabel" => Object::string_literal(*label),
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}

/// Page labels of the PDF at `path`, in page order.
pub fn page_labels(path: &Path) -> Vec<String> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let page = doc.get_dictionary(page_id).unwrap();
            match page.get(LABEL_KEY).unwrap() {
                Object::String(bytes, _) => String::from_utf8(bytes.clone()).unwrap(),
                other => panic!("unexpected label object: {other:?}"),
            }
        })
        .collect()
}

/// Number of pages of the PDF at `path`.
pub fn page_count(path: &Path) -> usize {
    Document::load(path).unwrap().get_pages().len()
}

/// A scratch directory with an empty `files_to_merge` input directory.
pub struct Workspace {
    pub root: TempDir,
    pub config: Config,
}

impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        let config = Config::with_base_dir(root.path());
        std::fs::create_dir(&config.input_dir).unwrap();
        Self { root, config }
    }

    pub fn input_dir(&self) -> &Path {
        &self.config.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    /// File names in the output directory, sorted.
    pub fn output_files(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.output_dir()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
