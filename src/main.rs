use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tracing::{error, info};

use pdfmerge::cli::Cli;
use pdfmerge::config::Config;
use pdfmerge::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::try_from(&cli).context("Invalid configuration")?;

    let logger = logging::init(&config.logging).context("Failed to initialize logging")?;

    info!("{} {}", pdfmerge::NAME, pdfmerge::VERSION);

    match pdfmerge::run(&config).await {
        Ok(report) => {
            info!(
                "Done: {} file(s), {} page(s), {} in, {} out",
                report.merge.files_merged,
                report.merge.total_pages,
                report.merge.format_input_size(),
                report.write.format_file_size()
            );
            Ok(())
        }
        Err(err) => {
            error!("{err}");
            let code = err.exit_code();
            drop(logger);
            process::exit(code);
        }
    }
}
