//! Collision-free output paths.
//!
//! [`PathResolver::resolve`] walks the candidate sequence of a base file name
//! until it finds a path that does not exist. [`PathResolver::claim`] goes
//! one step further and creates that file with create-new semantics, so two
//! processes sharing an output directory can never end up with the same file:
//! whoever loses the race moves on to the next candidate.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};
use tracing::{debug, warn};

use crate::error::{PdfMergeError, Result};
use crate::naming::FileNameCandidate;

/// Default number of lost create races tolerated by [`PathResolver::claim`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 16;

/// An output file that was created exclusively for this process.
#[derive(Debug)]
pub struct ClaimedOutput {
    /// Path of the created file.
    pub path: PathBuf,

    /// Handle opened for writing.
    pub file: File,
}

/// Resolves base file names to free paths inside one output directory.
#[derive(Debug, Clone)]
pub struct PathResolver {
    output_dir: PathBuf,
    max_attempts: usize,
}

impl PathResolver {
    /// Create a resolver for `output_dir`.
    ///
    /// The directory does not need to exist for [`resolve`](Self::resolve);
    /// [`claim`](Self::claim) fails if it is missing.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Set how many lost create races [`claim`](Self::claim) tolerates.
    ///
    /// Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Directory this resolver places files in.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Maximum number of lost create races.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Find the first candidate path for `base_file_name` that does not exist.
    ///
    /// Calling this twice without creating files in between returns the same
    /// path. Nothing is created, so the result may be taken by another
    /// process before it is used; see [`claim`](Self::claim).
    ///
    /// # Errors
    ///
    /// - [`PdfMergeError::InvalidFileName`] if the base name is unusable.
    /// - [`PdfMergeError::OutputDirNotAccessible`] if existence cannot be
    ///   checked.
    /// - [`PdfMergeError::NameSpaceExhausted`] if the suffix overflows.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pdfmerge::naming::PathResolver;
    ///
    /// let resolver = PathResolver::new("merged_files");
    /// let path = resolver.resolve("merged_pdfs.pdf")?;
    /// println!("Would write to {}", path.display());
    /// # Ok::<(), pdfmerge::PdfMergeError>(())
    /// ```
    pub fn resolve(&self, base_file_name: &str) -> Result<PathBuf> {
        let candidate = FileNameCandidate::parse(base_file_name)?;
        let (_, path) = self.first_free(candidate, base_file_name)?;
        Ok(path)
    }

    /// Resolve a free path for `base_file_name` and create it exclusively.
    ///
    /// If another process creates the resolved file between the existence
    /// check and the create, resolution continues with the next candidate.
    ///
    /// # Errors
    ///
    /// Everything [`resolve`](Self::resolve) returns, plus:
    /// - [`PdfMergeError::NameConflict`] after `max_attempts` lost races.
    /// - [`PdfMergeError::FailedToCreateOutput`] if the file cannot be
    ///   created for any other reason (missing directory, permissions).
    pub async fn claim(&self, base_file_name: &str) -> Result<ClaimedOutput> {
        let mut candidate = FileNameCandidate::parse(base_file_name)?;

        for attempt in 1..=self.max_attempts {
            let (free, path) = self.first_free(candidate, base_file_name)?;

            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => {
                    debug!(path = %path.display(), attempt, "claimed output file");
                    return Ok(ClaimedOutput { path, file });
                }
                Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                    warn!(
                        path = %path.display(),
                        attempt,
                        "output name was taken before it could be created, trying the next one"
                    );
                    candidate = successor(&free, base_file_name)?;
                }
                Err(source) => {
                    return Err(PdfMergeError::FailedToCreateOutput { path, source });
                }
            }
        }

        Err(PdfMergeError::NameConflict {
            dir: self.output_dir.clone(),
            file_name: base_file_name.to_string(),
            attempts: self.max_attempts,
        })
    }

    /// Advance from `candidate` until its path does not exist.
    fn first_free(
        &self,
        mut candidate: FileNameCandidate,
        base_file_name: &str,
    ) -> Result<(FileNameCandidate, PathBuf)> {
        loop {
            let path = self.output_dir.join(candidate.file_name());

            let exists =
                path.try_exists()
                    .map_err(|source| PdfMergeError::OutputDirNotAccessible {
                        path: self.output_dir.clone(),
                        source,
                    })?;

            if !exists {
                return Ok((candidate, path));
            }

            debug!(path = %path.display(), "output path already exists");
            candidate = successor(&candidate, base_file_name)?;
        }
    }
}

fn successor(candidate: &FileNameCandidate, base_file_name: &str) -> Result<FileNameCandidate> {
    candidate
        .next()
        .ok_or_else(|| PdfMergeError::NameSpaceExhausted {
            file_name: base_file_name.to_string(),
        })
}
