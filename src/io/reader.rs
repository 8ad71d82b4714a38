//! PDF reading and input directory checks.
//!
//! Files are loaded one after another in the order given and the first
//! failure stops the load: a merge never continues past a broken input.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::io::reader::PdfReader;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let paths = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let loaded = reader.load_sequential(&paths).await?;
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfMergeError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to read and parse the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

/// Loads PDFs from disk.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Make sure `path` is a directory that can be listed.
    ///
    /// # Errors
    ///
    /// - [`PdfMergeError::InputDirNotFound`] if nothing exists at `path`.
    /// - [`PdfMergeError::NotADirectory`] if `path` is a file.
    /// - [`PdfMergeError::InputDirNotAccessible`] if it cannot be read.
    pub async fn check_input_dir(&self, path: &Path) -> Result<()> {
        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(PdfMergeError::input_dir_not_found(path.to_path_buf()));
            }
            Err(source) => {
                return Err(PdfMergeError::InputDirNotAccessible {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        if !metadata.is_dir() {
            return Err(PdfMergeError::not_a_directory(path.to_path_buf()));
        }

        tokio::fs::read_dir(path)
            .await
            .map_err(|source| PdfMergeError::InputDirNotAccessible {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(())
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// - [`PdfMergeError::FailedToReadPdf`] if the file cannot be read.
    /// - [`PdfMergeError::EncryptedPdf`] if the PDF is password protected.
    /// - [`PdfMergeError::FailedToLoadPdf`] if the bytes are not a valid PDF.
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let start = Instant::now();

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| PdfMergeError::FailedToReadPdf {
                path: path.to_path_buf(),
                source,
            })?;

        let document = Document::load_mem(&bytes).map_err(|e| {
            let err_msg = e.to_string();
            if err_msg.contains("encrypt") || err_msg.contains("password") {
                PdfMergeError::encrypted_pdf(path.to_path_buf())
            } else {
                PdfMergeError::failed_to_load_pdf(path.to_path_buf(), err_msg)
            }
        })?;

        Ok(LoadedPdf {
            page_count: document.get_pages().len(),
            document,
            path: path.to_path_buf(),
            load_time: start.elapsed(),
            file_size: bytes.len() as u64,
        })
    }

    /// Load multiple PDF documents in order, stopping at the first failure.
    pub async fn load_sequential(&self, paths: &[PathBuf]) -> Result<Vec<LoadedPdf>> {
        let mut loaded = Vec::with_capacity(paths.len());

        for path in paths {
            loaded.push(self.load(path).await?);
        }

        Ok(loaded)
    }
}
