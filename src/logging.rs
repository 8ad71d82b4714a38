//! Logging setup.
//!
//! Log records go to standard output and to a plain-text log file. The
//! subscriber is installed as the *default for the current thread* and is
//! removed again when the returned [`Logger`] is dropped, so two invocations
//! in one process (tests, for instance) never share logging state.

use anyhow::Context;
use std::path::Path;
use tracing::info;
use tracing::subscriber::DefaultGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config::LoggingConfig;

/// Keeps logging active for as long as it is alive.
#[must_use = "logging stops when the Logger is dropped"]
#[derive(Debug)]
pub struct Logger {
    _guard: DefaultGuard,
}

/// Install the console and file loggers described by `config`.
///
/// # Errors
///
/// Fails if the log file cannot be opened for appending.
pub fn init(config: &LoggingConfig) -> anyhow::Result<Logger> {
    let file_name = config
        .file
        .file_name()
        .with_context(|| format!("Log file has no file name: {}", config.file.display()))?;
    let dir = match config.file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("Failed to open log file {}", config.file.display()))?;

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(file_appender)
        .with_filter(config.level);

    let stdout_layer = config.stdout.then(|| {
        fmt::layer()
            .with_target(false)
            .with_filter(config.level)
    });

    let subscriber = tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer);
    let guard = tracing::subscriber::set_default(subscriber);

    info!("Logging to {}", config.file.display());
    Ok(Logger { _guard: guard })
}
