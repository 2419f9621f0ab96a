//! Tracing bootstrap.
//!
//! Logs go to a daily rolling file under `~/.config/maeum/logs/` so the
//! interactive prompt stays clean.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use maeum_infrastructure::MaeumPaths;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_FILE_PREFIX: &str = "maeum.log";

/// Picks the log filter: `RUST_LOG`, then the configured level, then `info`.
///
/// Blank or unparsable directives fall through to the next source.
pub fn env_filter(rust_log: Option<&str>, configured: Option<&str>) -> EnvFilter {
    [rust_log, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Non-blocking writer onto the daily rolling file in `log_dir`.
///
/// Lines still queued are written when the guard is dropped.
pub fn file_writer(log_dir: &Path) -> (NonBlocking, WorkerGuard) {
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    tracing_appender::non_blocking(appender)
}

/// Installs the global subscriber.
///
/// Keep the returned guard alive until exit; dropping it flushes the file.
pub fn init(configured: Option<&str>) -> Result<WorkerGuard> {
    let log_dir = MaeumPaths::ensure_log_dir().context("Failed to create log directory")?;
    let (writer, guard) = file_writer(&log_dir);

    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(rust_log.as_deref(), configured))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(guard)
}
