//! PDF merging.
//!
//! [`Merger`] turns a directory of PDFs into one in-memory document;
//! [`pages`] holds the page tree helpers it relies on.

pub mod merger;
pub mod pages;

pub use merger::{DEFAULT_PDF_VERSION, MergeResult, MergeStatistics, Merger, merge_documents};

use crate::error::Result;
use std::path::Path;

/// Merge every PDF directly inside `input_dir`.
///
/// Convenience function for [`Merger::merge_directory`].
///
/// # Errors
///
/// Returns an error if the directory cannot be read or any PDF fails to load.
pub async fn merge_directory(input_dir: &Path) -> Result<MergeResult> {
    Merger::new().merge_directory(input_dir).await
}
