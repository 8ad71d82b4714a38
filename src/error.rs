//! Error types for pdfmerge.
//!
//! Errors fall into three groups that mirror what can go wrong in a merge:
//!
//! - **Input errors**: the input directory is missing or unreadable, or a
//!   matched file cannot be read.
//! - **PDF errors**: a matched file is not a valid (or is an encrypted) PDF.
//! - **Output errors**: the output directory or the resolved output file
//!   cannot be created or written, or no free output name could be claimed.
//!
//! None of these are recovered from inside the library; they propagate to
//! the binary, which logs them and exits with [`PdfMergeError::exit_code`].

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfmerge operations.
pub type Result<T> = std::result::Result<T, PdfMergeError>;

/// Main error type for pdfmerge operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfMergeError {
    /// Input directory does not exist.
    #[error("Input directory not found: {}", path.display())]
    InputDirNotFound {
        /// Path of the missing directory.
        path: PathBuf,
    },

    /// Input path exists but is not a directory.
    #[error("Not a directory: {}", path.display())]
    NotADirectory {
        /// Offending path.
        path: PathBuf,
    },

    /// Input directory exists but cannot be listed.
    #[error("Cannot read input directory: {}\n  Reason: {source}", path.display())]
    InputDirNotAccessible {
        /// Path of the directory.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A matched PDF file could not be read from disk.
    #[error("Failed to read PDF: {}\n  Reason: {source}", path.display())]
    FailedToReadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A matched file could not be parsed as a PDF.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// A matched PDF is encrypted and cannot be merged.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// The output directory could not be inspected or created.
    #[error("Cannot use output directory: {}\n  Reason: {source}", path.display())]
    OutputDirNotAccessible {
        /// Path of the output directory.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The output file already exists.
    #[error("Output file already exists: {}", path.display())]
    OutputExists {
        /// Path to the existing file.
        path: PathBuf,
    },

    /// Every claimed output name was taken by someone else first.
    #[error(
        "Could not claim a free output name for '{file_name}' in {} after {attempts} attempt(s)",
        dir.display()
    )]
    NameConflict {
        /// Output directory.
        dir: PathBuf,
        /// Requested base file name.
        file_name: String,
        /// Number of conflicting create attempts.
        attempts: usize,
    },

    /// The numeric suffix cannot be incremented any further.
    #[error("No free output name left for '{file_name}': numeric suffix overflowed")]
    NameSpaceExhausted {
        /// Requested base file name.
        file_name: String,
    },

    /// Failed to create the output file.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write to the output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The requested output file name cannot be used.
    #[error("Invalid output file name '{name}': {reason}")]
    InvalidFileName {
        /// Name as given by the caller.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// The page tree of the merged document could not be built.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

impl PdfMergeError {
    /// Create an InputDirNotFound error.
    pub fn input_dir_not_found(path: PathBuf) -> Self {
        Self::InputDirNotFound { path }
    }

    /// Create a NotADirectory error.
    pub fn not_a_directory(path: PathBuf) -> Self {
        Self::NotADirectory { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: PathBuf) -> Self {
        Self::OutputExists { path }
    }

    /// Create an InvalidFileName error.
    pub fn invalid_file_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFileName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by an input file that is not a usable PDF.
    pub fn is_malformed_pdf(&self) -> bool {
        matches!(
            self,
            Self::FailedToLoadPdf { .. } | Self::EncryptedPdf { .. }
        )
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputDirNotFound { .. } => 2,
            Self::NotADirectory { .. } => 2,
            Self::InputDirNotAccessible { .. } => 2,
            Self::FailedToReadPdf { .. } => 2,
            Self::FailedToLoadPdf { .. } => 3,
            Self::EncryptedPdf { .. } => 3,
            Self::OutputExists { .. } => 4,
            Self::NameConflict { .. } => 4,
            Self::NameSpaceExhausted { .. } => 4,
            Self::OutputDirNotAccessible { .. } => 5,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::Io { .. } => 5,
            Self::MergeFailed { .. } => 6,
            Self::InvalidFileName { .. } => 1,
            Self::InvalidConfig { .. } => 1,
        }
    }
}
