//! Dashboard - Junk Overview, Scan and Clean All

use std::sync::Arc;

use crate::domain::ScanSummary;
use crate::error::Result;
use crate::services::SystemService;
use crate::views::{LoadTicket, LoadTracker};

const MB: u64 = 1024 * 1024;
const GB: u64 = 1024 * MB;

/// Above this much junk the system is critical
pub const CRITICAL_THRESHOLD: u64 = 2 * GB;
/// Above this much junk the system needs attention
pub const ATTENTION_THRESHOLD: u64 = 500 * MB;

/// Progress added per scan tick while waiting for the summaries
pub const SCAN_STEP: f32 = 5.0;
/// Progress never passes this until the scan completes
pub const SCAN_HOLD: f32 = 90.0;
/// Interval between scan ticks, in milliseconds
pub const SCAN_TICK_MS: u64 = 100;
/// How long a finished scan stays at 100%, in milliseconds
pub const SCAN_LINGER_MS: u64 = 500;

/// Overall verdict derived from the total junk size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    Healthy,
    NeedsAttention,
    Critical,
}

impl SystemStatus {
    pub fn from_junk(total: u64) -> Self {
        if total > CRITICAL_THRESHOLD {
            SystemStatus::Critical
        } else if total > ATTENTION_THRESHOLD {
            SystemStatus::NeedsAttention
        } else {
            SystemStatus::Healthy
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SystemStatus::Healthy => "Healthy",
            SystemStatus::NeedsAttention => "Needs Attention",
            SystemStatus::Critical => "Critical",
        }
    }

    pub fn health_score(self) -> u8 {
        match self {
            SystemStatus::Healthy => 95,
            SystemStatus::NeedsAttention => 65,
            SystemStatus::Critical => 40,
        }
    }
}

/// The four category summaries, each fetched independently
#[derive(Debug)]
pub struct Summaries {
    pub cache: Result<ScanSummary>,
    pub trash: Result<ScanSummary>,
    pub logs: Result<ScanSummary>,
    pub large_files: Result<ScanSummary>,
}

/// Fetch every summary in parallel; one failure does not affect the others
pub async fn fetch_summaries(system: Arc<dyn SystemService>) -> Summaries {
    let (cache, trash, logs, large_files) = futures::join!(
        system.cache_summary(),
        system.trash_summary(),
        system.log_summary(),
        system.large_files_summary(),
    );
    Summaries {
        cache,
        trash,
        logs,
        large_files,
    }
}

/// Clear every category in parallel
pub async fn clear_everything(system: Arc<dyn SystemService>) -> Result<()> {
    futures::try_join!(
        system.clear_cache(),
        system.clear_trash(),
        system.clear_logs(),
        system.clear_large_files_all(),
    )?;
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    cache_size: u64,
    trash_size: u64,
    log_size: u64,
    large_file_size: u64,
    scanning: bool,
    cleaning: bool,
    scan_progress: f32,
    tracker: LoadTracker,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn cache_size(&self) -> u64 {
        self.cache_size
    }

    pub fn trash_size(&self) -> u64 {
        self.trash_size
    }

    pub fn log_size(&self) -> u64 {
        self.log_size
    }

    pub fn large_file_size(&self) -> u64 {
        self.large_file_size
    }

    pub fn total_junk(&self) -> u64 {
        self.cache_size + self.trash_size + self.log_size + self.large_file_size
    }

    pub fn status(&self) -> SystemStatus {
        SystemStatus::from_junk(self.total_junk())
    }

    pub fn health_score(&self) -> u8 {
        self.status().health_score()
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    pub fn is_cleaning(&self) -> bool {
        self.cleaning
    }

    pub fn is_refreshing(&self) -> bool {
        self.tracker.is_loading()
    }

    /// Scan progress in percent
    pub fn scan_progress(&self) -> f32 {
        self.scan_progress
    }

    // ==================== Refresh ====================

    pub fn begin_refresh(&mut self) -> LoadTicket {
        self.tracker.begin()
    }

    /// Apply whichever summaries arrived; failures are logged and leave the old value
    pub fn finish_refresh(&mut self, ticket: LoadTicket, summaries: Summaries) -> bool {
        if !self.tracker.finish(ticket) {
            return false;
        }
        apply(&mut self.cache_size, "cache", summaries.cache);
        apply(&mut self.trash_size, "trash", summaries.trash);
        apply(&mut self.log_size, "logs", summaries.logs);
        apply(&mut self.large_file_size, "large files", summaries.large_files);
        true
    }

    pub async fn refresh(&mut self, system: Arc<dyn SystemService>) {
        let ticket = self.begin_refresh();
        let summaries = fetch_summaries(system).await;
        self.finish_refresh(ticket, summaries);
    }

    // ==================== Scan ====================

    /// Start a scan; `None` while one is already running
    pub fn start_scan(&mut self) -> Option<LoadTicket> {
        if self.scanning {
            return None;
        }
        self.scanning = true;
        self.scan_progress = 0.0;
        Some(self.begin_refresh())
    }

    /// Advance the simulated progress while summaries are outstanding
    pub fn tick_scan(&mut self) {
        if self.scanning && self.scan_progress < SCAN_HOLD {
            self.scan_progress = (self.scan_progress + SCAN_STEP).min(SCAN_HOLD);
        }
    }

    /// Summaries are in: jump to 100%
    pub fn finish_scan(&mut self, ticket: LoadTicket, summaries: Summaries) {
        self.finish_refresh(ticket, summaries);
        self.scan_progress = 100.0;
    }

    /// Leave the completed state after it has been shown
    pub fn end_scan(&mut self) {
        self.scanning = false;
    }

    pub async fn scan(&mut self, system: Arc<dyn SystemService>) {
        let Some(ticket) = self.start_scan() else {
            return;
        };
        let summaries = fetch_summaries(system).await;
        self.finish_scan(ticket, summaries);
        self.end_scan();
    }

    // ==================== Clean all ====================

    /// Start cleaning; `false` while cleaning or when there is nothing to clean
    pub fn begin_clean(&mut self) -> bool {
        if self.cleaning || self.total_junk() == 0 {
            return false;
        }
        self.cleaning = true;
        true
    }

    /// Record the clean result, returning whether the summaries should be refreshed
    pub fn finish_clean(&mut self, result: Result<()>) -> bool {
        self.cleaning = false;
        match result {
            Ok(()) => {
                self.cache_size = 0;
                self.trash_size = 0;
                self.log_size = 0;
                self.large_file_size = 0;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to clean system");
                false
            }
        }
    }

    pub async fn clean_all(&mut self, system: Arc<dyn SystemService>) {
        if !self.begin_clean() {
            return;
        }
        let result = clear_everything(system.clone()).await;
        if self.finish_clean(result) {
            self.refresh(system).await;
        }
    }
}

fn apply(slot: &mut u64, category: &str, summary: Result<ScanSummary>) {
    match summary {
        Ok(summary) => *slot = summary.total_size,
        Err(e) => tracing::error!(error = %e, category, "Failed to load summary"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CacheFile, LargeFile, LogFile, TrashFile};
    use crate::services::{Inventory, MemoryBackend};

    fn backend() -> MemoryBackend {
        MemoryBackend::new(Inventory {
            cache_files: vec![CacheFile {
                path: "/c".into(),
                size: 300 * MB,
                modified: String::new(),
            }],
            trash_files: vec![TrashFile {
                name: "t".into(),
                path: "/t".into(),
                size: 100 * MB,
                deleted_date: String::new(),
            }],
            log_files: vec![LogFile {
                path: "/l".into(),
                size: 150 * MB,
                modified: String::new(),
            }],
            large_files: vec![LargeFile {
                name: "big".into(),
                path: "/big".into(),
                size: 2 * GB,
                modified: String::new(),
            }],
            ..Default::default()
        })
    }

    #[test]
    fn status_thresholds_are_exclusive() {
        assert_eq!(SystemStatus::from_junk(ATTENTION_THRESHOLD), SystemStatus::Healthy);
        assert_eq!(SystemStatus::from_junk(ATTENTION_THRESHOLD + 1), SystemStatus::NeedsAttention);
        assert_eq!(SystemStatus::from_junk(CRITICAL_THRESHOLD), SystemStatus::NeedsAttention);
        assert_eq!(SystemStatus::from_junk(CRITICAL_THRESHOLD + 1), SystemStatus::Critical);
        assert_eq!(SystemStatus::Critical.health_score(), 40);
        assert_eq!(SystemStatus::NeedsAttention.label(), "Needs Attention");
    }

    #[tokio::test]
    async fn refresh_sums_every_category() {
        let backend = Arc::new(backend());
        let mut view = DashboardView::new();
        view.refresh(backend).await;

        assert_eq!(view.total_junk(), 550 * MB + 2 * GB);
        assert_eq!(view.status(), SystemStatus::Critical);
        assert_eq!(view.health_score(), 40);
        assert!(!view.is_refreshing());
    }

    #[tokio::test]
    async fn one_failing_summary_keeps_the_rest() {
        let backend = backend();
        backend.fail_on("trash_summary", "trash unavailable").await;
        let mut view = DashboardView::new();
        view.refresh(Arc::new(backend)).await;

        assert_eq!(view.trash_size(), 0);
        assert_eq!(view.cache_size(), 300 * MB);
        assert_eq!(view.large_file_size(), 2 * GB);
    }

    #[test]
    fn scan_progress_holds_until_done() {
        let mut view = DashboardView::new();
        let ticket = view.start_scan().unwrap();
        assert!(view.start_scan().is_none());

        for _ in 0..100 {
            view.tick_scan();
        }
        assert_eq!(view.scan_progress(), SCAN_HOLD);

        view.finish_scan(
            ticket,
            Summaries {
                cache: Ok(ScanSummary { total_size: 10, file_count: 1 }),
                trash: Ok(ScanSummary::default()),
                logs: Ok(ScanSummary::default()),
                large_files: Ok(ScanSummary::default()),
            },
        );
        assert_eq!(view.scan_progress(), 100.0);
        assert!(view.is_scanning());
        view.end_scan();
        assert!(!view.is_scanning());
        assert_eq!(view.total_junk(), 10);
    }

    #[tokio::test]
    async fn clean_all_empties_everything() {
        let backend = Arc::new(backend());
        let mut view = DashboardView::new();

        // nothing known yet, nothing to clean
        view.clean_all(backend.clone()).await;
        assert_eq!(backend.inventory().await.cache_files.len(), 1);

        view.refresh(backend.clone()).await;
        view.clean_all(backend.clone()).await;
        assert_eq!(view.total_junk(), 0);
        assert!(!view.is_cleaning());
        let inventory = backend.inventory().await;
        assert!(inventory.cache_files.is_empty() && inventory.large_files.is_empty());
    }

    #[tokio::test]
    async fn failed_clean_keeps_sizes() {
        let backend = backend();
        backend.fail_on("clear_logs", "busy").await;
        let backend = Arc::new(backend);
        let mut view = DashboardView::new();
        view.refresh(backend.clone()).await;
        let before = view.total_junk();

        view.clean_all(backend).await;
        assert_eq!(view.total_junk(), before);
        assert!(!view.is_cleaning());
    }
}
