//! pdfmerge - Merge every PDF in a directory into one document.
//!
//! The library scans a directory for `*.pdf` files, concatenates their pages
//! in file name order and writes the result to a new file. An existing file is
//! never overwritten: when the requested output name is taken, a numeric
//! suffix is added or incremented until a free name is found.
//!
//! # Examples
//!
//! ## Run a configured merge
//!
//! ```no_run
//! use pdfmerge::config::Config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::with_base_dir(".");
//! let report = pdfmerge::run(&config).await?;
//! println!(
//!     "Wrote {} pages to {}",
//!     report.merge.total_pages,
//!     report.output_path.display()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pdfmerge::io::PdfWriter;
//! use pdfmerge::merge::Merger;
//! use pdfmerge::naming::PathResolver;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut result = Merger::new().merge_directory(Path::new("scans")).await?;
//! let claimed = PathResolver::new("merged_files").claim("scans.pdf").await?;
//! PdfWriter::new().write_claimed(&mut result.document, claimed).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod merge;
pub mod naming;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{PdfMergeError, Result};

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::io::{PdfWriter, WriteStatistics};
use crate::merge::{MergeStatistics, Merger};
use crate::naming::PathResolver;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Outcome of a successful merge.
#[derive(Debug, Clone)]
pub struct MergeReport {
    /// Path of the written PDF.
    pub output_path: PathBuf,

    /// Source files in merge order.
    pub merged_files: Vec<PathBuf>,

    /// Merge statistics.
    pub merge: MergeStatistics,

    /// Write statistics.
    pub write: WriteStatistics,
}

/// Merge the PDFs in `input_dir` into a new file at `output_path`.
///
/// `output_path` is used as is: its parent directory must exist and the file
/// itself must not.
///
/// # Errors
///
/// Any input, PDF or output error of the merge. If an input cannot be loaded,
/// no output file is created.
pub async fn merge(input_dir: &Path, output_path: &Path) -> Result<MergeReport> {
    let mut result = Merger::new().merge_directory(input_dir).await?;
    let write = PdfWriter::new()
        .save_new(&mut result.document, output_path)
        .await?;

    Ok(MergeReport {
        output_path: write.output_path.clone(),
        merged_files: result.merged_files,
        merge: result.statistics,
        write,
    })
}

/// Run a merge as configured.
///
/// Creates the output directory if needed, claims the first free name
/// derived from `config.output_file` and writes the merged PDF there.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the output directory
/// cannot be created, or the merge or write fails.
pub async fn run(config: &Config) -> Result<MergeReport> {
    config.validate()?;

    // Load everything before the output directory or file is touched.
    let mut result = Merger::new().merge_directory(&config.input_dir).await?;

    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .map_err(|source| PdfMergeError::OutputDirNotAccessible {
            path: config.output_dir.clone(),
            source,
        })?;

    let claimed = PathResolver::new(&config.output_dir)
        .claim(&config.output_file)
        .await?;
    debug!("Claimed output file {}", claimed.path.display());

    let write = PdfWriter::new()
        .write_claimed(&mut result.document, claimed)
        .await?;

    Ok(MergeReport {
        output_path: write.output_path.clone(),
        merged_files: result.merged_files,
        merge: result.statistics,
        write,
    })
}
