//! SysClean - Main Entry Point
//!
//! Desktop cleaner for caches, trash, logs, large files and system services

use sysclean::app::application::run_app;

fn main() -> anyhow::Result<()> {
    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = sysclean_core::logging::init()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting SysClean...");

    // Run the GPUI application
    run_app();
    Ok(())
}
