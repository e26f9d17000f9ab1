//! Cleaner - Cache, Trash and Log Tabs
//!
//! Each tab keeps its own rows, filtered rows and selection. A tab is
//! loaded the first time it is shown and again after every clear.

use std::sync::Arc;

use crate::domain::files::{FileRow, total_size};
use crate::domain::{CacheFile, LogFile, TrashFile};
use crate::error::Result;
use crate::services::SystemService;
use crate::table::{Column, TableOptions};
use crate::views::{Confirmation, ListState, LoadTicket, LoadTracker, PreviewSession};

const SIZE_WIDTH: f32 = 128.0;
const NAME_WIDTH: f32 = 256.0;
const MODIFIED_WIDTH: f32 = 192.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Cache,
    Trash,
    Logs,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Cache, Tab::Trash, Tab::Logs];

    /// Lower-case name used in prompts and logs
    pub fn key(self) -> &'static str {
        match self {
            Tab::Cache => "cache",
            Tab::Trash => "trash",
            Tab::Logs => "logs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Cache => "Cache",
            Tab::Trash => "Trash",
            Tab::Logs => "Logs",
        }
    }

    fn index(self) -> usize {
        match self {
            Tab::Cache => 0,
            Tab::Trash => 1,
            Tab::Logs => 2,
        }
    }

    pub fn columns(self) -> Vec<Column> {
        let size = Column::new("size", "Size")
            .align_right()
            .fixed_width(SIZE_WIDTH)
            .sortable();
        match self {
            Tab::Cache => vec![Column::new("path", "Path").sortable(), size],
            Tab::Trash => vec![
                Column::new("name", "Name").fixed_width(NAME_WIDTH).sortable(),
                Column::new("path", "Original Path").sortable(),
                size,
            ],
            Tab::Logs => vec![
                Column::new("path", "Path").sortable(),
                size,
                Column::new("modified", "Modified")
                    .fixed_width(MODIFIED_WIDTH)
                    .sortable(),
            ],
        }
    }

    pub fn search_fields(self) -> Vec<&'static str> {
        match self {
            Tab::Trash => vec!["name", "path"],
            Tab::Cache | Tab::Logs => vec!["path"],
        }
    }

    pub fn options(self) -> TableOptions {
        TableOptions::selectable("Clear Selected").with_preview()
    }
}

/// Rows fetched for one tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabRows {
    Cache(Vec<CacheFile>),
    Trash(Vec<TrashFile>),
    Logs(Vec<LogFile>),
}

pub async fn fetch_tab(system: Arc<dyn SystemService>, tab: Tab) -> Result<TabRows> {
    Ok(match tab {
        Tab::Cache => TabRows::Cache(system.cache_files().await?),
        Tab::Trash => TabRows::Trash(system.trash_files().await?),
        Tab::Logs => TabRows::Logs(system.log_files().await?),
    })
}

/// Remove the given paths from one tab's category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearFiles {
    pub tab: Tab,
    pub paths: Vec<String>,
}

pub async fn clear_files(system: Arc<dyn SystemService>, action: ClearFiles) -> Result<()> {
    match action.tab {
        Tab::Cache => system.clear_cache_files(action.paths).await,
        Tab::Trash => system.clear_trash_files(action.paths).await,
        Tab::Logs => system.clear_log_files(action.paths).await,
    }
}

#[derive(Debug, Clone, Default)]
pub struct CleanerView {
    active: Tab,
    cache: ListState<CacheFile>,
    trash: ListState<TrashFile>,
    logs: ListState<LogFile>,
    loads: [LoadTracker; 3],
    clearing: bool,
    alert: Option<String>,
    preview: PreviewSession,
}

impl CleanerView {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn active_tab(&self) -> Tab {
        self.active
    }

    pub fn cache(&self) -> &ListState<CacheFile> {
        &self.cache
    }

    pub fn trash(&self) -> &ListState<TrashFile> {
        &self.trash
    }

    pub fn logs(&self) -> &ListState<LogFile> {
        &self.logs
    }

    pub fn cache_mut(&mut self) -> &mut ListState<CacheFile> {
        &mut self.cache
    }

    pub fn trash_mut(&mut self) -> &mut ListState<TrashFile> {
        &mut self.trash
    }

    pub fn logs_mut(&mut self) -> &mut ListState<LogFile> {
        &mut self.logs
    }

    pub fn cache_size(&self) -> u64 {
        total_size(self.cache.data())
    }

    pub fn trash_size(&self) -> u64 {
        total_size(self.trash.data())
    }

    pub fn log_size(&self) -> u64 {
        total_size(self.logs.data())
    }

    pub fn total_junk(&self) -> u64 {
        self.cache_size() + self.trash_size() + self.log_size()
    }

    /// Loading or clearing the active tab
    pub fn is_loading(&self) -> bool {
        self.clearing || self.loads[self.active.index()].is_loading()
    }

    pub fn selected(&self, tab: Tab) -> &[String] {
        match tab {
            Tab::Cache => self.cache.selected(),
            Tab::Trash => self.trash.selected(),
            Tab::Logs => self.logs.selected(),
        }
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn set_alert(&mut self, message: Option<String>) {
        self.alert = message;
    }

    pub fn preview(&self) -> &PreviewSession {
        &self.preview
    }

    pub fn preview_mut(&mut self) -> &mut PreviewSession {
        &mut self.preview
    }

    fn is_loaded(&self, tab: Tab) -> bool {
        match tab {
            Tab::Cache => self.cache.is_loaded(),
            Tab::Trash => self.trash.is_loaded(),
            Tab::Logs => self.logs.is_loaded(),
        }
    }

    fn invalidate(&mut self, tab: Tab) {
        match tab {
            Tab::Cache => self.cache.invalidate(),
            Tab::Trash => self.trash.invalidate(),
            Tab::Logs => self.logs.invalidate(),
        }
    }

    // ==================== Loading ====================

    /// Switch tabs; returns a ticket when the new tab still has to be loaded
    pub fn select_tab(&mut self, tab: Tab) -> Option<LoadTicket> {
        self.active = tab;
        self.begin_load(tab, false)
    }

    /// Start loading `tab` unless it already holds rows; `force` drops them first
    pub fn begin_load(&mut self, tab: Tab, force: bool) -> Option<LoadTicket> {
        if force {
            self.invalidate(tab);
        } else if self.is_loaded(tab) {
            return None;
        }
        Some(self.loads[tab.index()].begin())
    }

    pub fn finish_load(&mut self, tab: Tab, ticket: LoadTicket, result: Result<TabRows>) -> bool {
        if !self.loads[tab.index()].finish(ticket) {
            return false;
        }
        match result {
            Ok(TabRows::Cache(rows)) => self.cache.set_data(rows),
            Ok(TabRows::Trash(rows)) => self.trash.set_data(rows),
            Ok(TabRows::Logs(rows)) => self.logs.set_data(rows),
            Err(e) => {
                tracing::error!(error = %e, tab = tab.key(), "Failed to load tab data");
                return false;
            }
        }
        true
    }

    pub async fn load(&mut self, system: Arc<dyn SystemService>, tab: Tab, force: bool) {
        let Some(ticket) = self.begin_load(tab, force) else {
            return;
        };
        let result = fetch_tab(system, tab).await;
        self.finish_load(tab, ticket, result);
    }

    // ==================== Clearing ====================

    /// Prompt for clearing the active tab's selection; `None` when nothing is selected
    pub fn request_clear(&self) -> Option<Confirmation<ClearFiles>> {
        let tab = self.active;
        let paths = self.selected(tab).to_vec();
        if paths.is_empty() {
            return None;
        }
        let message = format!("Clear {} {} item(s)?", paths.len(), tab.key());
        Some(Confirmation::new(message, ClearFiles { tab, paths }))
    }

    /// The user accepted the prompt; returns the action to run
    pub fn confirm(&mut self, confirmation: Confirmation<ClearFiles>) -> ClearFiles {
        self.clearing = true;
        confirmation.action
    }

    /// Apply the clear result; returns the reload ticket of the cleared tab on success
    pub fn finish_clear(&mut self, tab: Tab, result: Result<()>) -> Option<LoadTicket> {
        self.clearing = false;
        match result {
            Ok(()) => {
                match tab {
                    Tab::Cache => self.cache.clear_selection(),
                    Tab::Trash => self.trash.clear_selection(),
                    Tab::Logs => self.logs.clear_selection(),
                }
                self.begin_load(tab, true)
            }
            Err(e) => {
                tracing::error!(error = %e, tab = tab.key(), "Failed to clear files");
                self.alert = Some(format!("Failed to clear files: {e}"));
                None
            }
        }
    }

    pub async fn clear(&mut self, system: Arc<dyn SystemService>, confirmation: Confirmation<ClearFiles>) {
        let action = self.confirm(confirmation);
        let tab = action.tab;
        let result = clear_files(system.clone(), action).await;
        if let Some(ticket) = self.finish_clear(tab, result) {
            let rows = fetch_tab(system, tab).await;
            self.finish_load(tab, ticket, rows);
        }
    }

    // ==================== Preview ====================

    /// Open the preview for a row of the active tab
    pub fn begin_preview(&mut self, path: &str) -> Option<LoadTicket> {
        let key = path.to_string();
        let name = match self.active {
            Tab::Cache => self.cache.find(&key).map(FileRow::display_name),
            Tab::Trash => self.trash.find(&key).map(FileRow::display_name),
            Tab::Logs => self.logs.find(&key).map(FileRow::display_name),
        }?
        .to_string();
        Some(self.preview.begin(&name, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{FileService, Inventory, MemoryBackend};

    fn inventory() -> Inventory {
        Inventory {
            cache_files: vec![
                CacheFile { path: "/c/a".into(), size: 10, modified: String::new() },
                CacheFile { path: "/c/b".into(), size: 20, modified: String::new() },
            ],
            trash_files: vec![TrashFile {
                name: "old.txt".into(),
                path: "/home/old.txt".into(),
                size: 5,
                deleted_date: String::new(),
            }],
            log_files: vec![LogFile { path: "/var/log/x".into(), size: 7, modified: String::new() }],
            ..Default::default()
        }
    }

    #[test]
    fn tabs_describe_their_tables() {
        assert_eq!(Tab::Trash.columns()[1].label, "Original Path");
        assert_eq!(Tab::Logs.columns().len(), 3);
        assert_eq!(Tab::Trash.search_fields(), vec!["name", "path"]);
        assert_eq!(Tab::Cache.search_fields(), vec!["path"]);
        let options = Tab::Logs.options();
        assert_eq!(options.selected_action_text, "Clear Selected");
        assert!(options.show_preview_button);
    }

    #[tokio::test]
    async fn tabs_load_lazily() {
        let backend = Arc::new(MemoryBackend::new(inventory()));
        let mut view = CleanerView::new();
        view.load(backend.clone(), Tab::Cache, false).await;
        assert_eq!(view.cache().data().len(), 2);

        // already loaded, no ticket
        assert!(view.select_tab(Tab::Cache).is_none());
        let ticket = view.select_tab(Tab::Trash).unwrap();
        assert!(view.is_loading());
        let rows = fetch_tab(backend, Tab::Trash).await;
        assert!(view.finish_load(Tab::Trash, ticket, rows));
        assert_eq!(view.total_junk(), 35);
    }

    #[tokio::test]
    async fn failed_loads_are_only_logged() {
        let backend = MemoryBackend::new(inventory());
        backend.fail_on("log_files", "denied").await;
        let mut view = CleanerView::new();
        view.load(Arc::new(backend), Tab::Logs, false).await;
        assert!(!view.logs().is_loaded());
        assert!(view.alert().is_none());
    }

    #[tokio::test]
    async fn clearing_the_selection_reloads_the_tab() {
        let backend = Arc::new(MemoryBackend::new(inventory()));
        let mut view = CleanerView::new();
        view.load(backend.clone(), Tab::Cache, false).await;
        assert!(view.request_clear().is_none());

        view.cache_mut().set_selection(vec!["/c/a".into()]);
        let confirmation = view.request_clear().unwrap();
        assert_eq!(confirmation.message, "Clear 1 cache item(s)?");

        view.clear(backend.clone(), confirmation).await;
        assert!(view.selected(Tab::Cache).is_empty());
        assert_eq!(view.cache().data().len(), 1);
        assert_eq!(view.cache_size(), 20);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn clear_failures_raise_an_alert() {
        let backend = MemoryBackend::new(inventory());
        backend.fail_on("clear_trash_files", "trash is locked").await;
        let backend = Arc::new(backend);
        let mut view = CleanerView::new();
        view.select_tab(Tab::Trash);
        view.load(backend.clone(), Tab::Trash, true).await;
        view.trash_mut().set_selection(vec!["/home/old.txt".into()]);

        let confirmation = view.request_clear().unwrap();
        assert_eq!(confirmation.message, "Clear 1 trash item(s)?");
        view.clear(backend, confirmation).await;
        assert_eq!(view.alert(), Some("Failed to clear files: trash is locked"));
        assert_eq!(view.selected(Tab::Trash), ["/home/old.txt".to_string()]);
    }

    #[tokio::test]
    async fn preview_uses_the_row_name() {
        let backend = Arc::new(MemoryBackend::new(inventory()));
        let mut view = CleanerView::new();
        view.select_tab(Tab::Trash);
        view.load(backend.clone(), Tab::Trash, false).await;

        assert!(view.begin_preview("/unknown").is_none());
        let ticket = view.begin_preview("/home/old.txt").unwrap();
        assert_eq!(view.preview().panel().map(|p| p.header().name.as_str()), Some("old.txt"));

        let result = backend.preview_file("/home/old.txt".into()).await;
        view.preview_mut().finish(ticket, result);
        assert!(view.preview().panel().is_some_and(|p| !p.is_loading()));
    }
}
