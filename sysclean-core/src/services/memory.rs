//! In-Memory Backend
//!
//! Serves the system and file services from an inventory held in memory,
//! optionally loaded from a JSON snapshot. Open requests are recorded rather
//! than executed.

use std::collections::HashMap;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::domain::files::{FileRow, file_name};
use crate::domain::{CacheFile, LargeFile, LogFile, ScanSummary, ServiceItem, TrashFile};
use crate::error::{Error, Result};
use crate::preview::{FilePreview, OpenRequest};
use crate::services::{FileService, ServiceFuture, SystemService};

/// Everything the backend knows about
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Inventory {
    pub services: Vec<ServiceItem>,
    pub cache_files: Vec<CacheFile>,
    pub trash_files: Vec<TrashFile>,
    pub log_files: Vec<LogFile>,
    pub large_files: Vec<LargeFile>,
    /// Stored previews, looked up by path
    pub previews: Vec<FilePreview>,
}

impl Inventory {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot file written by [`Inventory::save`] or by hand
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!(path = ?path, "Loading inventory snapshot");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Small built-in inventory used when no snapshot is configured
    pub fn sample() -> Self {
        const MB: u64 = 1024 * 1024;

        let service = |name: &str, description: &str, running: bool| {
            let mut item = ServiceItem {
                name: name.to_string(),
                description: Some(description.to_string()),
                load: Some("loaded".to_string()),
                active: String::new(),
                status: String::new(),
                is_running: running,
            };
            set_running(&mut item, running);
            item
        };

        Self {
            services: vec![
                service("cron.service", "Regular background program processing daemon", true),
                service("cups.service", "CUPS Scheduler", false),
                service("bluetooth.service", "Bluetooth service", true),
                service("ssh.service", "OpenBSD Secure Shell server", true),
                service("snapd.service", "Snap Daemon", false),
            ],
            cache_files: vec![
                CacheFile {
                    path: "/home/user/.cache/thumbnails/large".into(),
                    size: 182 * MB,
                    modified: "2025-05-02 10:14".into(),
                },
                CacheFile {
                    path: "/home/user/.cache/pip/http".into(),
                    size: 96 * MB,
                    modified: "2025-04-28 18:02".into(),
                },
                CacheFile {
                    path: "/home/user/.cache/mozilla/firefox".into(),
                    size: 341 * MB,
                    modified: "2025-05-03 08:41".into(),
                },
            ],
            trash_files: vec![TrashFile {
                name: "old-report.pdf".into(),
                path: "/home/user/Documents/old-report.pdf".into(),
                size: 3 * MB,
                deleted_date: "2025-04-30T16:20:00".into(),
            }],
            log_files: vec![
                LogFile {
                    path: "/var/log/syslog.1".into(),
                    size: 48 * MB,
                    modified: "2025-05-01 00:00".into(),
                },
                LogFile {
                    path: "/var/log/journal/system@0001.journal".into(),
                    size: 128 * MB,
                    modified: "2025-05-03 07:55".into(),
                },
            ],
            large_files: vec![LargeFile {
                name: "ubuntu-24.04-desktop-amd64.iso".into(),
                path: "/home/user/Downloads/ubuntu-24.04-desktop-amd64.iso".into(),
                size: 5900 * MB,
                modified: "2025-03-12 21:33".into(),
            }],
            previews: vec![FilePreview {
                name: "syslog.1".into(),
                path: "/var/log/syslog.1".into(),
                kind: crate::preview::PreviewKind::Text,
                content: Some("May  1 00:00:01 host systemd[1]: Starting Rotate log files...".into()),
                ..Default::default()
            }],
        }
    }

    fn knows_path(&self, path: &str) -> bool {
        self.cache_files.iter().any(|f| f.path == path)
            || self.trash_files.iter().any(|f| f.path == path)
            || self.log_files.iter().any(|f| f.path == path)
            || self.large_files.iter().any(|f| f.path == path)
    }

    fn service_mut(&mut self, name: &str) -> Result<&mut ServiceItem> {
        self.services
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::service(format!("Unit {name} not found")))
    }

    fn ensure_services(&self, names: &[String]) -> Result<()> {
        let missing: Vec<&str> = names
            .iter()
            .filter(|n| !self.services.iter().any(|s| &s.name == *n))
            .map(String::as_str)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::service(format!("Units not found: {}", missing.join(", "))))
        }
    }
}

fn remove_paths<R: FileRow>(rows: &mut Vec<R>, paths: &[String]) -> usize {
    let doomed: AHashSet<&str> = paths.iter().map(String::as_str).collect();
    let before = rows.len();
    rows.retain(|row| !doomed.contains(row.path()));
    before - rows.len()
}

fn summarize<R: FileRow>(rows: &[R]) -> ScanSummary {
    ScanSummary::of(rows.iter().map(FileRow::size))
}

fn set_running(service: &mut ServiceItem, running: bool) {
    service.is_running = running;
    if running {
        service.active = "active".to_string();
        service.status = "running".to_string();
    } else {
        service.active = "inactive".to_string();
        service.status = "dead".to_string();
    }
}

#[derive(Debug, Default)]
struct BackendState {
    inventory: Inventory,
    /// Operation name to the message it fails with
    failures: HashMap<&'static str, String>,
    opened: Vec<OpenRequest>,
}

impl BackendState {
    fn check(&self, operation: &'static str) -> Result<()> {
        match self.failures.get(operation) {
            Some(message) => Err(Error::service(message.clone())),
            None => Ok(()),
        }
    }
}

/// In-memory implementation of [`SystemService`] and [`FileService`]
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<BackendState>>,
    latency: Option<Duration>,
}

impl MemoryBackend {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            state: Arc::new(Mutex::new(BackendState {
                inventory,
                ..Default::default()
            })),
            latency: None,
        }
    }

    /// Delay every call, to make loading states visible
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make `operation` (a [`SystemService`]/[`FileService`] method name) fail
    pub async fn fail_on(&self, operation: &'static str, message: impl Into<String>) {
        self.state.lock().await.failures.insert(operation, message.into());
    }

    pub async fn clear_failures(&self) {
        self.state.lock().await.failures.clear();
    }

    pub async fn inventory(&self) -> Inventory {
        self.state.lock().await.inventory.clone()
    }

    /// Open requests received so far
    pub async fn opened(&self) -> Vec<OpenRequest> {
        self.state.lock().await.opened.clone()
    }

    fn call<T, F>(&self, operation: &'static str, f: F) -> ServiceFuture<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut BackendState) -> Result<T> + Send + 'static,
    {
        let state = self.state.clone();
        let latency = self.latency;
        Box::pin(delayed(latency, async move {
            let mut state = state.lock().await;
            state.check(operation)?;
            f(&mut *state)
        }))
    }
}

async fn delayed<T>(latency: Option<Duration>, fut: impl Future<Output = T>) -> T {
    if let Some(latency) = latency {
        tokio::time::sleep(latency).await;
    }
    fut.await
}

impl SystemService for MemoryBackend {
    fn cache_files(&self) -> ServiceFuture<Vec<CacheFile>> {
        self.call("cache_files", |s| Ok(s.inventory.cache_files.clone()))
    }

    fn trash_files(&self) -> ServiceFuture<Vec<TrashFile>> {
        self.call("trash_files", |s| Ok(s.inventory.trash_files.clone()))
    }

    fn log_files(&self) -> ServiceFuture<Vec<LogFile>> {
        self.call("log_files", |s| Ok(s.inventory.log_files.clone()))
    }

    fn large_files(&self) -> ServiceFuture<Vec<LargeFile>> {
        self.call("large_files", |s| Ok(s.inventory.large_files.clone()))
    }

    fn cache_summary(&self) -> ServiceFuture<ScanSummary> {
        self.call("cache_summary", |s| Ok(summarize(&s.inventory.cache_files)))
    }

    fn trash_summary(&self) -> ServiceFuture<ScanSummary> {
        self.call("trash_summary", |s| Ok(summarize(&s.inventory.trash_files)))
    }

    fn log_summary(&self) -> ServiceFuture<ScanSummary> {
        self.call("log_summary", |s| Ok(summarize(&s.inventory.log_files)))
    }

    fn large_files_summary(&self) -> ServiceFuture<ScanSummary> {
        self.call("large_files_summary", |s| Ok(summarize(&s.inventory.large_files)))
    }

    fn clear_cache_files(&self, paths: Vec<String>) -> ServiceFuture<()> {
        self.call("clear_cache_files", move |s| {
            let removed = remove_paths(&mut s.inventory.cache_files, &paths);
            tracing::info!(removed, "Cleared cache files");
            Ok(())
        })
    }

    fn clear_trash_files(&self, paths: Vec<String>) -> ServiceFuture<()> {
        self.call("clear_trash_files", move |s| {
            let removed = remove_paths(&mut s.inventory.trash_files, &paths);
            tracing::info!(removed, "Cleared trash items");
            Ok(())
        })
    }

    fn clear_log_files(&self, paths: Vec<String>) -> ServiceFuture<()> {
        self.call("clear_log_files", move |s| {
            let removed = remove_paths(&mut s.inventory.log_files, &paths);
            tracing::info!(removed, "Cleared log files");
            Ok(())
        })
    }

    fn clear_large_files(&self, paths: Vec<String>) -> ServiceFuture<()> {
        self.call("clear_large_files", move |s| {
            let removed = remove_paths(&mut s.inventory.large_files, &paths);
            tracing::info!(removed, "Deleted large files");
            Ok(())
        })
    }

    fn clear_cache(&self) -> ServiceFuture<()> {
        self.call("clear_cache", |s| {
            s.inventory.cache_files.clear();
            Ok(())
        })
    }

    fn clear_trash(&self) -> ServiceFuture<()> {
        self.call("clear_trash", |s| {
            s.inventory.trash_files.clear();
            Ok(())
        })
    }

    fn clear_logs(&self) -> ServiceFuture<()> {
        self.call("clear_logs", |s| {
            s.inventory.log_files.clear();
            Ok(())
        })
    }

    fn clear_large_files_all(&self) -> ServiceFuture<()> {
        self.call("clear_large_files_all", |s| {
            s.inventory.large_files.clear();
            Ok(())
        })
    }

    fn all_services(&self) -> ServiceFuture<Vec<ServiceItem>> {
        self.call("all_services", |s| Ok(s.inventory.services.clone()))
    }

    fn running_services(&self) -> ServiceFuture<Vec<ServiceItem>> {
        self.call("running_services", |s| {
            Ok(s.inventory
                .services
                .iter()
                .filter(|svc| svc.is_running)
                .cloned()
                .collect())
        })
    }

    fn start_service(&self, name: String) -> ServiceFuture<()> {
        self.call("start_service", move |s| {
            set_running(s.inventory.service_mut(&name)?, true);
            tracing::info!("Started service {}", name);
            Ok(())
        })
    }

    fn stop_service(&self, name: String) -> ServiceFuture<()> {
        self.call("stop_service", move |s| {
            set_running(s.inventory.service_mut(&name)?, false);
            tracing::info!("Stopped service {}", name);
            Ok(())
        })
    }

    fn enable_service(&self, name: String) -> ServiceFuture<()> {
        self.call("enable_service", move |s| {
            let service = s.inventory.service_mut(&name)?;
            service.load = Some("loaded".to_string());
            set_running(service, true);
            tracing::info!("Enabled service {}", name);
            Ok(())
        })
    }

    fn stop_services(&self, names: Vec<String>) -> ServiceFuture<()> {
        self.call("stop_services", move |s| {
            s.inventory.ensure_services(&names)?;
            for name in &names {
                set_running(s.inventory.service_mut(name)?, false);
            }
            tracing::info!(count = names.len(), "Stopped services");
            Ok(())
        })
    }

    fn enable_services(&self, names: Vec<String>) -> ServiceFuture<()> {
        self.call("enable_services", move |s| {
            s.inventory.ensure_services(&names)?;
            for name in &names {
                let service = s.inventory.service_mut(name)?;
                service.load = Some("loaded".to_string());
                set_running(service, true);
            }
            tracing::info!(count = names.len(), "Enabled services");
            Ok(())
        })
    }
}

impl FileService for MemoryBackend {
    fn preview_file(&self, path: String) -> ServiceFuture<FilePreview> {
        self.call("preview_file", move |s| {
            if let Some(preview) = s.inventory.previews.iter().find(|p| p.path == path) {
                return Ok(preview.clone());
            }
            if s.inventory.knows_path(&path) {
                let name = file_name(&path).to_string();
                return Ok(FilePreview::loading(name, path));
            }
            Err(Error::NotFound { path })
        })
    }

    fn open_file(&self, path: String, command: Option<String>) -> ServiceFuture<()> {
        self.call("open_file", move |s| {
            if path.is_empty() {
                return Err(Error::Invalid {
                    message: "Path is empty".to_string(),
                });
            }
            tracing::info!(path = %path, command = ?command, "Open requested");
            s.opened.push(OpenRequest { path, command });
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::PreviewKind;

    fn service(name: &str, running: bool) -> ServiceItem {
        ServiceItem {
            name: name.to_string(),
            description: None,
            load: Some("loaded".to_string()),
            active: if running { "active" } else { "inactive" }.to_string(),
            status: if running { "running" } else { "dead" }.to_string(),
            is_running: running,
        }
    }

    fn backend() -> MemoryBackend {
        MemoryBackend::new(Inventory {
            services: vec![service("cron", true), service("cups", false)],
            cache_files: vec![
                CacheFile { path: "/c/a".into(), size: 100, modified: "2025-01-01".into() },
                CacheFile { path: "/c/b".into(), size: 50, modified: "2025-01-02".into() },
            ],
            previews: vec![FilePreview {
                name: "a".into(),
                path: "/c/a".into(),
                kind: PreviewKind::Text,
                content: Some("cached".into()),
                ..Default::default()
            }],
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn summaries_follow_the_inventory() {
        let backend = backend();
        let summary = backend.cache_summary().await.unwrap();
        assert_eq!(summary, ScanSummary { total_size: 150, file_count: 2 });

        backend.clear_cache_files(vec!["/c/a".into(), "/nope".into()]).await.unwrap();
        assert_eq!(backend.cache_summary().await.unwrap().total_size, 50);

        backend.clear_cache().await.unwrap();
        assert!(backend.cache_files().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn service_lifecycle() {
        let backend = backend();
        backend.start_service("cups".into()).await.unwrap();
        assert_eq!(backend.running_services().await.unwrap().len(), 2);

        backend.stop_services(vec!["cron".into(), "cups".into()]).await.unwrap();
        assert!(backend.running_services().await.unwrap().is_empty());

        let err = backend.enable_services(vec!["cron".into(), "ghost".into()]).await.unwrap_err();
        assert_eq!(err.to_string(), "Units not found: ghost");
        // nothing applied when one name is unknown
        assert!(backend.running_services().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn injected_failures_surface_as_service_errors() {
        let backend = backend();
        backend.fail_on("trash_files", "permission denied").await;
        let err = backend.trash_files().await.unwrap_err();
        assert_eq!(err.to_string(), "permission denied");

        backend.clear_failures().await;
        assert!(backend.trash_files().await.is_ok());
    }

    #[tokio::test]
    async fn previews_and_open_requests() {
        let backend = backend();
        let stored = backend.preview_file("/c/a".into()).await.unwrap();
        assert_eq!(stored.content.as_deref(), Some("cached"));

        let known = backend.preview_file("/c/b".into()).await.unwrap();
        assert_eq!(known.kind, PreviewKind::Unknown);
        assert_eq!(known.name, "b");

        assert!(matches!(
            backend.preview_file("/missing".into()).await,
            Err(Error::NotFound { .. })
        ));

        backend.open_file("/c/a".into(), Some("code".into())).await.unwrap();
        assert!(backend.open_file(String::new(), None).await.is_err());
        assert_eq!(
            backend.opened().await,
            vec![OpenRequest { path: "/c/a".into(), command: Some("code".into()) }]
        );
    }

    #[test]
    fn snapshot_json_uses_camel_case_lists() {
        let json = r#"{
            "services": [{"name":"ssh","active":"active","status":"running","isRunning":true}],
            "largeFiles": [{"name":"iso","path":"/d/iso","size":4096,"modified":"2025-02-02"}]
        }"#;
        let inventory = Inventory::from_json(json).unwrap();
        assert_eq!(inventory.services.len(), 1);
        assert_eq!(inventory.large_files[0].size, 4096);
        assert!(inventory.cache_files.is_empty());
    }

    #[test]
    fn snapshot_round_trips_through_a_file() {
        let dir = std::env::temp_dir().join(format!("sysclean-snapshot-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("inventory.json");

        let inventory = Inventory {
            services: vec![service("cron", true)],
            ..Default::default()
        };
        inventory.save(&path).unwrap();
        assert_eq!(Inventory::load(&path).unwrap(), inventory);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
