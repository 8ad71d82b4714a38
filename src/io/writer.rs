//! PDF writing.
//!
//! The writer only ever creates new files. The document is serialized into
//! memory first, so a serialization failure never touches the disk; if the
//! disk write itself fails, the half-written file is removed again.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::io::writer::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # async fn example(mut doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! writer.save_new(&mut doc, Path::new("output.pdf")).await?;
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::error::{PdfMergeError, Result};
use crate::naming::ClaimedOutput;
use crate::utils::format_file_size;

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Compress content streams before writing.
    pub compress: bool,

    /// Renumber objects so ids are dense.
    pub renumber: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            compress: true,
            renumber: true,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to serialize and write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,

    /// Whether compression was applied.
    pub compressed: bool,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Write `doc` to `path`, which must not exist yet.
    ///
    /// # Errors
    ///
    /// - [`PdfMergeError::OutputExists`] if `path` already exists.
    /// - [`PdfMergeError::FailedToCreateOutput`] if the parent directory is
    ///   missing or not writable.
    /// - [`PdfMergeError::FailedToWrite`] if serialization or the write fails.
    pub async fn save_new(&self, doc: &mut Document, path: &Path) -> Result<WriteStatistics> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await
            .map_err(|source| {
                if source.kind() == ErrorKind::AlreadyExists {
                    PdfMergeError::output_exists(path.to_path_buf())
                } else {
                    PdfMergeError::FailedToCreateOutput {
                        path: path.to_path_buf(),
                        source,
                    }
                }
            })?;

        self.write_into(doc, file, path.to_path_buf()).await
    }

    /// Write `doc` into a file previously claimed by the path resolver.
    pub async fn write_claimed(
        &self,
        doc: &mut Document,
        claimed: ClaimedOutput,
    ) -> Result<WriteStatistics> {
        self.write_into(doc, claimed.file, claimed.path).await
    }

    async fn write_into(
        &self,
        doc: &mut Document,
        mut file: File,
        path: PathBuf,
    ) -> Result<WriteStatistics> {
        let start = Instant::now();

        let buffer = match self.serialize(doc) {
            Ok(buffer) => buffer,
            Err(source) => {
                drop(file);
                discard(&path).await;
                return Err(PdfMergeError::FailedToWrite { path, source });
            }
        };

        if let Err(source) = write_all(&mut file, &buffer).await {
            drop(file);
            discard(&path).await;
            return Err(PdfMergeError::FailedToWrite { path, source });
        }

        let stats = WriteStatistics {
            write_time: start.elapsed(),
            file_size: buffer.len() as u64,
            output_path: path,
            compressed: self.options.compress,
        };

        info!(
            "Merged PDF written to: {} ({})",
            stats.output_path.display(),
            stats.format_file_size()
        );

        Ok(stats)
    }

    fn serialize(&self, doc: &mut Document) -> std::io::Result<Vec<u8>> {
        if self.options.compress {
            doc.compress();
        }

        if self.options.renumber {
            doc.renumber_objects();
        }

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).map_err(std::io::Error::other)?;
        Ok(buffer)
    }
}

async fn write_all(file: &mut File, buffer: &[u8]) -> std::io::Result<()> {
    file.write_all(buffer).await?;
    file.flush().await?;
    file.sync_all().await
}

/// Remove a partially written output file.
async fn discard(path: &Path) {
    if let Err(err) = tokio::fs::remove_file(path).await {
        debug!(path = %path.display(), error = %err, "could not remove partial output");
    }
}
