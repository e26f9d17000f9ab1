//! Large Files - Files Above the Size Threshold

use std::sync::Arc;

use crate::domain::LargeFile;
use crate::domain::files::total_size;
use crate::error::Result;
use crate::services::SystemService;
use crate::table::{Column, TableOptions};
use crate::views::{Confirmation, ListState, LoadTicket, LoadTracker, PreviewSession};

pub const SEARCH_FIELDS: [&str; 2] = ["name", "path"];

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").fixed_width(256.0).sortable(),
        Column::new("path", "Path").sortable(),
        Column::new("size", "Size").align_right().fixed_width(128.0).sortable(),
        Column::new("modified", "Modified").fixed_width(192.0).sortable(),
    ]
}

pub fn options() -> TableOptions {
    TableOptions::selectable("Delete Selected").with_preview()
}

/// Delete the given large files by path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFiles {
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LargeFilesView {
    files: ListState<LargeFile>,
    tracker: LoadTracker,
    deleting: bool,
    alert: Option<String>,
    preview: PreviewSession,
}

impl LargeFilesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &ListState<LargeFile> {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut ListState<LargeFile> {
        &mut self.files
    }

    pub fn total_size(&self) -> u64 {
        total_size(self.files.data())
    }

    pub fn is_loading(&self) -> bool {
        self.deleting || self.tracker.is_loading()
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn set_alert(&mut self, message: Option<String>) {
        self.alert = message;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn preview(&self) -> &PreviewSession {
        &self.preview
    }

    pub fn preview_mut(&mut self) -> &mut PreviewSession {
        &mut self.preview
    }

    /// Large files are always fetched again; there is no lazy path
    pub fn begin_load(&mut self) -> LoadTicket {
        self.tracker.begin()
    }

    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<LargeFile>>) -> bool {
        if !self.tracker.finish(ticket) {
            return false;
        }
        match result {
            Ok(files) => {
                self.files.set_data(files);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load large files");
                false
            }
        }
    }

    pub async fn load(&mut self, system: Arc<dyn SystemService>) {
        let ticket = self.begin_load();
        let result = system.large_files().await;
        self.finish_load(ticket, result);
    }

    pub fn request_delete(&self) -> Option<Confirmation<DeleteFiles>> {
        let paths = self.files.selected().to_vec();
        if paths.is_empty() {
            return None;
        }
        let message = format!("Clear {} large file(s)?", paths.len());
        Some(Confirmation::new(message, DeleteFiles { paths }))
    }

    pub fn confirm(&mut self, confirmation: Confirmation<DeleteFiles>) -> DeleteFiles {
        self.deleting = true;
        confirmation.action
    }

    /// Apply the delete result; returns a reload ticket on success
    pub fn finish_delete(&mut self, result: Result<()>) -> Option<LoadTicket> {
        self.deleting = false;
        match result {
            Ok(()) => {
                self.files.clear_selection();
                Some(self.begin_load())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to delete large files");
                self.alert = Some(format!("Failed to clear files: {e}"));
                None
            }
        }
    }

    pub async fn delete(&mut self, system: Arc<dyn SystemService>, confirmation: Confirmation<DeleteFiles>) {
        let action = self.confirm(confirmation);
        let result = system.clear_large_files(action.paths).await;
        if let Some(ticket) = self.finish_delete(result) {
            let files = system.large_files().await;
            self.finish_load(ticket, files);
        }
    }

    pub fn begin_preview(&mut self, path: &str) -> Option<LoadTicket> {
        let name = self.files.find(&path.to_string())?.name.clone();
        Some(self.preview.begin(&name, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{Inventory, MemoryBackend};

    const GB: u64 = 1024 * 1024 * 1024;

    fn backend() -> Arc<MemoryBackend> {
        let file = |name: &str, size: u64| LargeFile {
            name: name.to_string(),
            path: format!("/data/{name}"),
            size,
            modified: "2025-01-01".to_string(),
        };
        Arc::new(MemoryBackend::new(Inventory {
            large_files: vec![file("a.iso", 4 * GB), file("b.mkv", 2 * GB)],
            ..Default::default()
        }))
    }

    #[test]
    fn table_layout() {
        let columns = columns();
        assert_eq!(columns.iter().map(|c| c.key).collect::<Vec<_>>(), ["name", "path", "size", "modified"]);
        assert_eq!(options().selected_action_text, "Delete Selected");
    }

    #[tokio::test]
    async fn delete_reloads_and_resets_selection() {
        let backend = backend();
        let mut view = LargeFilesView::new();
        view.load(backend.clone()).await;
        assert_eq!(view.total_size(), 6 * GB);

        view.files_mut().set_selection(vec!["/data/a.iso".into()]);
        let confirmation = view.request_delete().unwrap();
        assert_eq!(confirmation.message, "Clear 1 large file(s)?");
        view.delete(backend, confirmation).await;

        assert_eq!(view.total_size(), 2 * GB);
        assert!(view.files().selected().is_empty());
        assert!(view.request_delete().is_none());
    }

    #[tokio::test]
    async fn failed_delete_alerts_and_keeps_rows() {
        let backend = backend();
        backend.fail_on("clear_large_files", "read-only filesystem").await;
        let mut view = LargeFilesView::new();
        view.load(backend.clone()).await;
        view.files_mut().set_selection(vec!["/data/b.mkv".into()]);

        let confirmation = view.request_delete().unwrap();
        view.delete(backend, confirmation).await;
        assert_eq!(view.alert(), Some("Failed to clear files: read-only filesystem"));
        assert_eq!(view.files().data().len(), 2);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn preview_opens_under_the_file_name() {
        let backend = backend();
        let mut view = LargeFilesView::new();
        view.load(backend).await;
        view.begin_preview("/data/b.mkv").unwrap();
        assert_eq!(view.preview().panel().map(|p| p.header().name.as_str()), Some("b.mkv"));
    }
}
