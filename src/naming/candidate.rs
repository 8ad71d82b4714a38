//! Output file name candidates.
//!
//! A candidate splits a file name into a stem, an optional numeric suffix and
//! an extension, so the resolver can bump the suffix without re-parsing
//! strings on every step:
//!
//! ```text
//! report_final_3.pdf  ->  stem "report_final", suffix Some(3), extension ".pdf"
//! report_final.pdf    ->  stem "report_final", suffix None,    extension ".pdf"
//! ```
//!
//! A trailing `_<segment>` only counts as a suffix when the segment is made of
//! ASCII digits. Anything else stays part of the stem, so successive names
//! for `report_final.pdf` are `report_final_0.pdf`, `report_final_1.pdf`, ...

use std::fmt;
use std::path::{Path, is_separator};

use crate::error::{PdfMergeError, Result};

/// Character separating the stem from the numeric suffix.
pub const SUFFIX_DELIMITER: char = '_';

/// A parsed output file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileNameCandidate {
    stem: String,
    suffix: Option<u64>,
    extension: String,
}

impl FileNameCandidate {
    /// Parse a bare file name (no directory components).
    ///
    /// # Errors
    ///
    /// Returns [`PdfMergeError::InvalidFileName`] if the name is empty, is
    /// `.` or `..`, or contains a path separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfmerge::naming::FileNameCandidate;
    ///
    /// let candidate = FileNameCandidate::parse("name_3.pdf").unwrap();
    /// assert_eq!(candidate.stem(), "name");
    /// assert_eq!(candidate.suffix(), Some(3));
    /// assert_eq!(candidate.extension(), ".pdf");
    /// ```
    pub fn parse(file_name: &str) -> Result<Self> {
        if file_name.is_empty() {
            return Err(PdfMergeError::invalid_file_name(file_name, "name is empty"));
        }

        if file_name.chars().any(is_separator) {
            return Err(PdfMergeError::invalid_file_name(
                file_name,
                "name must not contain a path separator",
            ));
        }

        let path = Path::new(file_name);
        if path.file_name().and_then(|name| name.to_str()) != Some(file_name) {
            return Err(PdfMergeError::invalid_file_name(
                file_name,
                "name does not refer to a file",
            ));
        }

        let full_stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(file_name);
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();

        let (stem, suffix) = split_suffix(full_stem);

        Ok(Self {
            stem: stem.to_string(),
            suffix,
            extension,
        })
    }

    /// Stem without the numeric suffix.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Numeric suffix, if the name carries one.
    pub fn suffix(&self) -> Option<u64> {
        self.suffix
    }

    /// Extension including the leading dot, or an empty string.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The candidate that follows this one.
    ///
    /// A name without suffix gets suffix `0`; otherwise the suffix is
    /// incremented. Returns `None` when the suffix cannot be incremented.
    pub fn next(&self) -> Option<Self> {
        let suffix = match self.suffix {
            None => 0,
            Some(n) => n.checked_add(1)?,
        };

        Some(Self {
            stem: self.stem.clone(),
            suffix: Some(suffix),
            extension: self.extension.clone(),
        })
    }

    /// Render the candidate back into a file name.
    pub fn file_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FileNameCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suffix {
            Some(n) => write!(f, "{}{SUFFIX_DELIMITER}{n}{}", self.stem, self.extension),
            None => write!(f, "{}{}", self.stem, self.extension),
        }
    }
}

/// Split `stem` on its last delimiter if the right-hand side is a number.
fn split_suffix(stem: &str) -> (&str, Option<u64>) {
    let Some((head, tail)) = stem.rsplit_once(SUFFIX_DELIMITER) else {
        return (stem, None);
    };

    if head.is_empty() || tail.is_empty() || !tail.bytes().all(|b| b.is_ascii_digit()) {
        return (stem, None);
    }

    match tail.parse::<u64>() {
        Ok(n) => (head, Some(n)),
        // Too many digits for u64: keep them as part of the stem.
        Err(_) => (stem, None),
    }
}
