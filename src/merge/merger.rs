//! Core PDF merging implementation.
//!
//! Every source document is renumbered into its own block of object ids and
//! copied into a fresh document. Its pages are then hung under a single new
//! `Pages` node in input order. The source catalogs and page tree nodes are
//! left unreferenced and pruned at the end.

use lopdf::{Document, Object, ObjectId, dictionary};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::io::PdfReader;
use crate::merge::pages;
use crate::utils::{collect_pdf_paths, format_file_size};

/// PDF version of a merge with no inputs.
pub const DEFAULT_PDF_VERSION: &str = "1.5";

/// Statistics about a merge operation.
#[derive(Debug, Clone)]
pub struct MergeStatistics {
    /// Number of PDFs merged.
    pub files_merged: usize,

    /// Total number of pages in merged document.
    pub total_pages: usize,

    /// Total time taken for the merge, loading included.
    pub merge_time: Duration,

    /// Time taken to load all PDFs.
    pub load_time: Duration,

    /// Total size of input files.
    pub input_size: u64,
}

impl MergeStatistics {
    /// Format input size as human-readable string.
    pub fn format_input_size(&self) -> String {
        format_file_size(self.input_size)
    }
}

/// Result of a merge operation.
#[derive(Debug)]
pub struct MergeResult {
    /// The merged PDF document.
    pub document: Document,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,

    /// Paths of files that were merged, in merge order.
    pub merged_files: Vec<PathBuf>,
}

/// Merges the PDFs of a directory into one document.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    reader: PdfReader,
}

impl Merger {
    /// Create a new merger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge every `*.pdf` file directly inside `input_dir`.
    ///
    /// Files are merged in the order [`collect_pdf_paths`] returns them. An
    /// empty directory yields a document with zero pages.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is missing or unreadable, or if any
    /// matched file cannot be loaded. Nothing is merged in that case.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfmerge::merge::Merger;
    /// # use std::path::Path;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = Merger::new()
    ///     .merge_directory(Path::new("files_to_merge"))
    ///     .await?;
    /// println!("Merged {} files into {} pages",
    ///          result.statistics.files_merged,
    ///          result.statistics.total_pages);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn merge_directory(&self, input_dir: &Path) -> Result<MergeResult> {
        let merge_start = Instant::now();
        info!("Merging PDFs in directory: {}", input_dir.display());

        self.reader.check_input_dir(input_dir).await?;
        let paths = collect_pdf_paths(input_dir)?;

        if paths.is_empty() {
            warn!(
                "No PDF files found in {}; the merged document will have no pages",
                input_dir.display()
            );
        } else {
            let names: Vec<_> = paths
                .iter()
                .filter_map(|path| path.file_name())
                .map(|name| name.to_string_lossy())
                .collect();
            debug!(files = ?names, "Found {} PDF file(s)", paths.len());
        }

        let load_start = Instant::now();
        let loaded_pdfs = self.reader.load_sequential(&paths).await?;
        let load_time = load_start.elapsed();

        let input_size = loaded_pdfs.iter().map(|pdf| pdf.file_size).sum();
        let mut merged_files = Vec::with_capacity(loaded_pdfs.len());
        let mut documents = Vec::with_capacity(loaded_pdfs.len());
        for loaded in loaded_pdfs {
            debug!(
                "Loaded {} ({} pages)",
                loaded.path.display(),
                loaded.page_count
            );
            merged_files.push(loaded.path);
            documents.push(loaded.document);
        }

        let document = merge_documents(documents)?;

        let statistics = MergeStatistics {
            files_merged: merged_files.len(),
            total_pages: pages::page_count(&document),
            merge_time: merge_start.elapsed(),
            load_time,
            input_size,
        };

        info!(
            "Merged {} file(s) into {} page(s)",
            statistics.files_merged, statistics.total_pages
        );

        Ok(MergeResult {
            document,
            statistics,
            merged_files,
        })
    }
}

/// Concatenate the pages of `documents` into a new document.
///
/// Pages keep their order: all pages of the first document, then all pages
/// of the second, and so on. The result uses the highest PDF version among
/// the inputs, or [`DEFAULT_PDF_VERSION`] when there are none.
///
/// # Errors
///
/// Returns [`PdfMergeError::MergeFailed`](crate::PdfMergeError::MergeFailed)
/// if a page object of an input is not a dictionary.
pub fn merge_documents<I>(documents: I) -> Result<Document>
where
    I: IntoIterator<Item = Document>,
{
    let mut merged = Document::with_version(DEFAULT_PDF_VERSION);
    let mut version: Option<String> = None;
    let mut page_ids: Vec<ObjectId> = Vec::new();
    let mut max_id = 1;

    for mut doc in documents {
        if version.as_ref().is_none_or(|current| doc.version > *current) {
            version = Some(doc.version.clone());
        }

        // Give every document its own id range.
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        let doc_pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
        for &page_id in &doc_pages {
            pages::materialize_inherited_attributes(&mut doc, page_id)?;
        }

        page_ids.extend(doc_pages);
        merged.objects.extend(doc.objects);
    }

    if let Some(version) = version {
        merged.version = version;
    }
    merged.max_id = max_id - 1;

    let pages_id = merged.new_object_id();
    let catalog_id = merged.new_object_id();

    merged
        .objects
        .insert(pages_id, Object::Dictionary(pages::pages_node(&page_ids)));
    merged.objects.insert(
        catalog_id,
        Object::Dictionary(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        }),
    );
    merged.trailer.set("Root", catalog_id);

    pages::reparent_pages(&mut merged, &page_ids, pages_id)?;

    let pruned = merged.prune_objects();
    debug!("Pruned {} unreferenced object(s)", pruned.len());

    Ok(merged)
}
