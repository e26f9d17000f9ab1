//! Logging Setup
//!
//! `tracing` subscriber with an env filter, local-time console output and a
//! daily rolling log file.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::{Error, Result};
use crate::fs::get_or_create_log_dir;

const LOG_FILE_PREFIX: &str = "sysclean.log";

/// Install the global subscriber
///
/// `RUST_LOG` overrides the default `info` level. The returned guard flushes
/// the file writer on drop and must be held for the life of the process.
pub fn init() -> Result<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let timer = LocalTime::new(time::macros::format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
    ));

    let log_dir = get_or_create_log_dir()?;
    let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_timer(timer.clone()).with_target(false))
        .with(
            fmt::layer()
                .with_timer(timer)
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .try_init()
        .map_err(|e| Error::Invalid {
            message: format!("Logging already initialized: {e}"),
        })?;

    tracing::info!(dir = ?log_dir, "Logging initialized");
    Ok(guard)
}
