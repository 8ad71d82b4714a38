//! Configuration module for pdfmerge.
//!
//! This module turns the parsed CLI arguments into a validated configuration.
//! Directories left unset on the command line default to folders next to the
//! running executable, so the tool can be dropped into a folder and run
//! without arguments.

use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

use crate::cli::Cli;
use crate::error::{PdfMergeError, Result};
use crate::naming::FileNameCandidate;

/// Default name of the input directory, relative to the base directory.
pub const DEFAULT_INPUT_DIR_NAME: &str = "files_to_merge";

/// Default name of the output directory, relative to the base directory.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "merged_files";

/// Default file name of the merged PDF.
pub const DEFAULT_OUTPUT_FILE: &str = "merged_pdfs.pdf";

/// Log file name, created in the working directory.
pub const LOG_FILE_NAME: &str = "pdfmerge.log";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log file path.
    pub file: PathBuf,

    /// Most verbose level that is recorded.
    pub level: LevelFilter,

    /// Also log to standard output.
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(LOG_FILE_NAME),
            level: LevelFilter::DEBUG,
            stdout: true,
        }
    }
}

/// Validated configuration for one merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory whose `*.pdf` files are merged.
    pub input_dir: PathBuf,

    /// Directory that receives the merged PDF.
    pub output_dir: PathBuf,

    /// Requested file name of the merged PDF.
    ///
    /// The actual name may carry a numeric suffix if this one is taken.
    pub output_file: String,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Configuration with the default directories under `base_dir`.
    pub fn with_base_dir(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        Self {
            input_dir: base_dir.join(DEFAULT_INPUT_DIR_NAME),
            output_dir: base_dir.join(DEFAULT_OUTPUT_DIR_NAME),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMergeError::InvalidFileName`] if `output_file` is not a
    /// plain file name, or [`PdfMergeError::InvalidConfig`] if a directory is
    /// empty.
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(PdfMergeError::invalid_config("Input directory must not be empty"));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(PdfMergeError::invalid_config("Output directory must not be empty"));
        }

        FileNameCandidate::parse(&self.output_file)?;

        Ok(())
    }
}

impl TryFrom<&Cli> for Config {
    type Error = PdfMergeError;

    fn try_from(cli: &Cli) -> Result<Self> {
        let defaults = Config::with_base_dir(default_base_dir());

        let config = Self {
            input_dir: cli.input_dir.clone().unwrap_or(defaults.input_dir),
            output_dir: cli.output_dir.clone().unwrap_or(defaults.output_dir),
            output_file: cli.output_file.clone(),
            logging: defaults.logging,
        };

        config.validate()?;
        Ok(config)
    }
}

/// Directory of the running executable, or the working directory if that
/// cannot be determined.
pub fn default_base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
