//! Output file naming.
//!
//! Merged files are never written over existing ones. Instead the requested
//! name is turned into a sequence of candidates (`out.pdf`, `out_0.pdf`,
//! `out_1.pdf`, ...) and the first one that is free in the output directory
//! is used.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::naming::resolve_output_path;
//! use std::path::Path;
//!
//! let path = resolve_output_path(Path::new("merged_files"), "merged_pdfs.pdf")?;
//! println!("Next merge goes to {}", path.display());
//! # Ok::<(), pdfmerge::PdfMergeError>(())
//! ```

pub mod candidate;
pub mod resolver;

pub use candidate::{FileNameCandidate, SUFFIX_DELIMITER};
pub use resolver::{ClaimedOutput, DEFAULT_MAX_ATTEMPTS, PathResolver};

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Resolve a path inside `output_dir` that does not exist yet.
///
/// Convenience function for [`PathResolver::resolve`].
///
/// # Errors
///
/// Returns an error if `base_file_name` is not a plain file name or if the
/// output directory cannot be inspected.
pub fn resolve_output_path(output_dir: &Path, base_file_name: &str) -> Result<PathBuf> {
    PathResolver::new(output_dir).resolve(base_file_name)
}
