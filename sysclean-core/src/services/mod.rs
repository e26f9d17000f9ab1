//! Service Layer
//!
//! Backend capabilities the views call into. Every call returns a
//! `'static` boxed future so it can be driven on the tokio runtime and its
//! result handed back to the UI thread.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      Services                        │
//! │  ┌───────────────┐ ┌─────────────┐ ┌──────────────┐  │
//! │  │ SystemService │ │ FileService │ │ReleaseService│  │
//! │  │ (inventory)   │ │ (preview)   │ │ (updates)    │  │
//! │  └───────────────┘ └─────────────┘ └──────────────┘  │
//! └──────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ Result<T>
//! ┌──────────────────────────────────────────────────────┐
//! │                 View controllers                     │
//! └──────────────────────────────────────────────────────┘
//! ```

mod memory;
mod releases;
mod runtime;

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::domain::{CacheFile, LargeFile, LogFile, Release, ScanSummary, ServiceItem, TrashFile};
use crate::error::Result;
use crate::preview::FilePreview;

pub use memory::{Inventory, MemoryBackend};
pub use releases::{GITHUB_API, GithubReleases, release_tag};
pub use runtime::run_in_tokio;

/// Future returned by every service call
pub type ServiceFuture<T> = BoxFuture<'static, Result<T>>;

/// System inventory, cleanup and service control
pub trait SystemService: Send + Sync + 'static {
    fn cache_files(&self) -> ServiceFuture<Vec<CacheFile>>;
    fn trash_files(&self) -> ServiceFuture<Vec<TrashFile>>;
    fn log_files(&self) -> ServiceFuture<Vec<LogFile>>;
    fn large_files(&self) -> ServiceFuture<Vec<LargeFile>>;

    fn cache_summary(&self) -> ServiceFuture<ScanSummary>;
    fn trash_summary(&self) -> ServiceFuture<ScanSummary>;
    fn log_summary(&self) -> ServiceFuture<ScanSummary>;
    fn large_files_summary(&self) -> ServiceFuture<ScanSummary>;

    /// Remove the given cache entries by path
    fn clear_cache_files(&self, paths: Vec<String>) -> ServiceFuture<()>;
    fn clear_trash_files(&self, paths: Vec<String>) -> ServiceFuture<()>;
    fn clear_log_files(&self, paths: Vec<String>) -> ServiceFuture<()>;
    fn clear_large_files(&self, paths: Vec<String>) -> ServiceFuture<()>;

    fn clear_cache(&self) -> ServiceFuture<()>;
    fn clear_trash(&self) -> ServiceFuture<()>;
    fn clear_logs(&self) -> ServiceFuture<()>;
    fn clear_large_files_all(&self) -> ServiceFuture<()>;

    /// Every known service
    fn all_services(&self) -> ServiceFuture<Vec<ServiceItem>>;
    /// Services that are currently running
    fn running_services(&self) -> ServiceFuture<Vec<ServiceItem>>;

    fn start_service(&self, name: String) -> ServiceFuture<()>;
    fn stop_service(&self, name: String) -> ServiceFuture<()>;
    /// Enable a service and start it now
    fn enable_service(&self, name: String) -> ServiceFuture<()>;
    fn stop_services(&self, names: Vec<String>) -> ServiceFuture<()>;
    fn enable_services(&self, names: Vec<String>) -> ServiceFuture<()>;
}

/// File preview and external opening
pub trait FileService: Send + Sync + 'static {
    fn preview_file(&self, path: String) -> ServiceFuture<FilePreview>;
    /// Open `path` with `command`, or the system default handler when `None`
    fn open_file(&self, path: String, command: Option<String>) -> ServiceFuture<()>;
}

/// Published releases of the application
pub trait ReleaseService: Send + Sync + 'static {
    fn latest_release(&self) -> ServiceFuture<Release>;
    /// Release tagged with `version` (a leading `v` is added when missing)
    fn release_for(&self, version: String) -> ServiceFuture<Release>;
}

/// Everything the views need, shared across pages
#[derive(Clone)]
pub struct Services {
    pub system: Arc<dyn SystemService>,
    pub files: Arc<dyn FileService>,
    pub releases: Arc<dyn ReleaseService>,
}

impl Services {
    pub fn new(
        system: Arc<dyn SystemService>,
        files: Arc<dyn FileService>,
        releases: Arc<dyn ReleaseService>,
    ) -> Self {
        Self {
            system,
            files,
            releases,
        }
    }

    /// One in-memory backend serving both system and file calls
    pub fn in_memory(backend: MemoryBackend, releases: Arc<dyn ReleaseService>) -> Self {
        let backend = Arc::new(backend);
        Self {
            system: backend.clone(),
            files: backend,
            releases,
        }
    }
}
