//! CLI argument parsing for pdfmerge.
//!
//! This module only defines the command-line surface with `clap`. Turning the
//! parsed arguments into a usable [`Config`](crate::config::Config), including
//! the executable-relative directory defaults, happens in the config module.
//!
//! The file is also compiled by the build script to render the man page, so
//! it must not depend on anything else in the crate.

use clap::Parser;
use std::path::PathBuf;

/// Merge every PDF in a directory into one file.
///
/// All `*.pdf` files directly inside the input directory are concatenated in
/// directory listing order. The result is never written over an existing
/// file: if the output name is taken, a numeric suffix is added or bumped
/// (`merged_pdfs.pdf`, `merged_pdfs_0.pdf`, `merged_pdfs_1.pdf`, ...).
#[derive(Parser, Debug)]
#[command(name = "pdfmerge")]
#[command(version)]
#[command(about = "Merge every PDF in a directory into one file", long_about = None)]
pub struct Cli {
    /// Directory containing the PDFs to merge
    ///
    /// Only files ending in `.pdf` (lowercase) directly inside this directory
    /// are merged. Defaults to `files_to_merge` next to the executable.
    #[arg(short = 'i', long = "input_dir", value_name = "DIR")]
    #[arg(env = "PDFMERGE_INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory where the merged PDF is placed
    ///
    /// Created if missing. Defaults to `merged_files` next to the executable.
    #[arg(short = 'o', long = "output_dir", value_name = "DIR")]
    #[arg(env = "PDFMERGE_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// File name of the merged PDF
    ///
    /// If a file with this name already exists in the output directory, a
    /// numeric suffix is appended or incremented instead of overwriting it.
    #[arg(short = 'f', long = "output_file", value_name = "NAME")]
    #[arg(env = "PDFMERGE_OUTPUT_FILE", default_value = "merged_pdfs.pdf")]
    pub output_file: String,
}
