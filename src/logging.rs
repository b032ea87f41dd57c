//! Logging setup
//!
//! The chat owns stdout, so log records go to a daily rolling file instead.
//! The filter comes from `RUST_LOG` and defaults to `yatra_sevak=info`.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::core::{ChatError, ChatResult};

pub const DEFAULT_LOG_FILTER: &str = "yatra_sevak=info";

const LOG_FILE_PREFIX: &str = "yatra-sevak.log";

/// Install the global subscriber writing into `log_dir`
///
/// Keep the returned guard alive for the lifetime of the program; dropping it
/// flushes and stops the background writer.
pub fn init_logging(log_dir: impl AsRef<Path>) -> ChatResult<WorkerGuard> {
    let log_dir = log_dir.as_ref();
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| ChatError::invalid_config(format!("Failed to install logger: {}", e)))?;

    tracing::info!("Logging to {:?}", log_dir);

    Ok(guard)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
