//! Preview Session
//!
//! Drives the preview panel of a page: one fetch at a time, the latest
//! request wins, closing drops whatever is in flight.

use std::sync::Arc;

use crate::error::Result;
use crate::preview::{FilePreview, OpenRequest, PreviewPanel};
use crate::services::FileService;
use crate::views::{LoadTicket, LoadTracker};

const PREVIEW_FALLBACK_ERROR: &str = "Unable to preview file";

#[derive(Debug, Clone, Default)]
pub struct PreviewSession {
    panel: Option<PreviewPanel>,
    tracker: LoadTracker,
}

impl PreviewSession {
    pub fn panel(&self) -> Option<&PreviewPanel> {
        self.panel.as_ref()
    }

    pub fn panel_mut(&mut self) -> Option<&mut PreviewPanel> {
        self.panel.as_mut()
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_some()
    }

    /// Open the panel in its loading state for `path`
    pub fn begin(&mut self, name: &str, path: &str) -> LoadTicket {
        self.panel = Some(PreviewPanel::for_file(name, path));
        self.tracker.begin()
    }

    /// Show the fetched preview, or the failure in its place
    pub fn finish(&mut self, ticket: LoadTicket, result: Result<FilePreview>) {
        if !self.tracker.finish(ticket) {
            return;
        }
        let Some(panel) = self.panel.as_mut() else {
            return;
        };
        let file = match result {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(error = %e, "Preview failed");
                let target = panel.header();
                let message = e.to_string();
                let message = if message.is_empty() {
                    PREVIEW_FALLBACK_ERROR.to_string()
                } else {
                    message
                };
                FilePreview::failed(target.name.clone(), target.path.clone(), message)
            }
        };
        panel.set_file(file);
    }

    pub fn close(&mut self) {
        self.panel = None;
        self.tracker.cancel();
    }
}

/// Hand an open request to the backend; requests without a path are ignored
pub async fn open_file(files: Arc<dyn FileService>, request: OpenRequest) -> Result<()> {
    if request.path.is_empty() {
        return Ok(());
    }
    files.open_file(request.path, request.command).await
}

/// Alert text for a failed open, if it failed
pub fn open_failure(result: Result<()>) -> Option<String> {
    match result {
        Ok(()) => None,
        Err(e) => {
            tracing::error!(error = %e, "Failed to open file");
            Some(format!("Failed to open file: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::preview::{PreviewKind, PreviewState};

    fn text(path: &str) -> FilePreview {
        FilePreview {
            name: path.trim_start_matches('/').to_string(),
            path: path.to_string(),
            kind: PreviewKind::Text,
            content: Some("body".into()),
            ..Default::default()
        }
    }

    #[test]
    fn latest_request_wins() {
        let mut session = PreviewSession::default();
        let first = session.begin("a", "/a");
        let second = session.begin("b", "/b");

        session.finish(first, Ok(text("/a")));
        assert!(session.panel().is_some_and(PreviewPanel::is_loading));

        session.finish(second, Ok(text("/b")));
        assert_eq!(session.panel().and_then(|p| p.file()).map(|f| f.path.as_str()), Some("/b"));
    }

    #[test]
    fn failures_become_error_previews() {
        let mut session = PreviewSession::default();
        let ticket = session.begin("b", "/b");
        session.finish(ticket, Err(Error::NotFound { path: "/b".into() }));

        let panel = session.panel().unwrap();
        match panel.state() {
            PreviewState::Failed(file) => {
                assert_eq!(file.name, "b");
                assert_eq!(file.error.as_deref(), Some("File not found: /b"));
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[tokio::test]
    async fn open_failures_become_alerts() {
        use crate::services::{Inventory, MemoryBackend};

        let backend = Arc::new(MemoryBackend::new(Inventory::default()));
        let request = OpenRequest { path: "/a".into(), command: None };
        assert_eq!(open_failure(open_file(backend.clone(), request.clone()).await), None);

        let empty = OpenRequest { path: String::new(), command: None };
        assert_eq!(open_failure(open_file(backend.clone(), empty).await), None);
        assert_eq!(backend.opened().await, vec![request.clone()]);

        backend.fail_on("open_file", "no handler").await;
        assert_eq!(
            open_failure(open_file(backend, request).await).as_deref(),
            Some("Failed to open file: no handler")
        );
    }

    #[test]
    fn closing_discards_the_fetch() {
        let mut session = PreviewSession::default();
        let ticket = session.begin("a", "/a");
        session.close();
        session.finish(ticket, Ok(text("/a")));
        assert!(!session.is_open());
    }
}
