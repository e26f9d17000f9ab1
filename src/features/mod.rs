//! Features - Vertical Feature Slices
//!
//! Each feature pairs a page with a controller that drives its view in
//! `sysclean-core`. Pages are created lazily by the workspace.

pub mod cleaner;
pub mod dashboard;
pub mod large_files;
pub mod list_sync;
pub mod preview;
pub mod settings;
pub mod system;
