//! Utilities for input discovery and reporting.

use crate::{Result, error::PdfMergeError};
use std::path::{Path, PathBuf};

/// File name pattern of the PDFs picked up from the input directory.
pub const PDF_PATTERN: &str = "*.pdf";

/// List the PDFs directly inside `dir`.
///
/// Matches [`PDF_PATTERN`] case-sensitively, so `a.PDF` is ignored. Hidden
/// files and anything that is not a regular file (a directory called
/// `old.pdf`, for instance) are skipped. Paths come back in the order the
/// glob walk yields them, which is sorted by file name.
///
/// Errors:
/// - [`PdfMergeError::InvalidConfig`] if `dir` is not valid UTF-8.
/// - [`PdfMergeError::InputDirNotAccessible`] if the directory cannot be read.
pub fn collect_pdf_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let dir_str = dir.to_str().ok_or_else(|| {
        PdfMergeError::invalid_config(format!(
            "Input directory is not valid UTF-8: {}",
            dir.display()
        ))
    })?;

    let pattern = PathBuf::from(glob::Pattern::escape(dir_str)).join(PDF_PATTERN);
    let pattern = pattern.to_string_lossy();

    let options = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let paths = glob::glob_with(&pattern, options)
        .map_err(|err| PdfMergeError::invalid_config(err.to_string()))?;

    let mut resolved_paths = Vec::new();
    for entry in paths {
        let path = entry.map_err(|err| PdfMergeError::InputDirNotAccessible {
            path: err.path().to_path_buf(),
            source: err.into_error(),
        })?;

        if path.is_file() {
            resolved_paths.push(path);
        }
    }

    Ok(resolved_paths)
}

/// Format file size as human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
