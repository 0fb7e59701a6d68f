use crate::error::{BioscopeError, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default log directory: `~/.bioscope/logs`, falling back to the working directory.
pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bioscope/logs")
}

/// Fails with [`BioscopeError::Config`] when `log_dir` cannot be created or
/// opened for writing.
pub fn init_logging(component: &str, log_dir: &Path, to_stderr: bool) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir).map_err(|e| {
        BioscopeError::Config(format!(
            "cannot create log directory {}: {}",
            log_dir.display(),
            e
        ))
    })?;

    // Daily files prefixed with the component, e.g. cli.2026-10-16
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(component)
        .build(log_dir)
        .map_err(|e| {
            BioscopeError::Config(format!(
                "cannot open log file in {}: {}",
                log_dir.display(),
                e
            ))
        })?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    // stdout carries the tag listing, so the console layer always goes to stderr
    if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        let _ = registry.with(stderr_layer).try_init();
    } else {
        let _ = registry.try_init();
    }

    Ok(guard)
}
