//! Preview Glue
//!
//! Pages with a preview panel share the same flow: fetch the preview of a
//! row, react to panel events and report failed opens as an alert.

use std::sync::Arc;

use gpui::{App, AppContext, Entity};
use sysclean_core::preview::OpenRequest;
use sysclean_core::services::FileService;
use sysclean_core::views::{
    CleanerView, LargeFilesView, LoadTicket, PreviewSession, open_failure, open_file,
};

use crate::app::tasks::spawn_service;
use crate::components::composite::file_preview::PreviewEvent;

/// A view owning a [`PreviewSession`]
pub trait PreviewHost: 'static {
    fn session(&self) -> &PreviewSession;
    fn session_mut(&mut self) -> &mut PreviewSession;
    /// Open the panel for the row at `path`; `None` if no such row exists
    fn begin_preview(&mut self, path: &str) -> Option<LoadTicket>;
    fn set_alert(&mut self, message: Option<String>);
}

impl PreviewHost for CleanerView {
    fn session(&self) -> &PreviewSession {
        self.preview()
    }

    fn session_mut(&mut self) -> &mut PreviewSession {
        self.preview_mut()
    }

    fn begin_preview(&mut self, path: &str) -> Option<LoadTicket> {
        CleanerView::begin_preview(self, path)
    }

    fn set_alert(&mut self, message: Option<String>) {
        CleanerView::set_alert(self, message);
    }
}

impl PreviewHost for LargeFilesView {
    fn session(&self) -> &PreviewSession {
        self.preview()
    }

    fn session_mut(&mut self) -> &mut PreviewSession {
        self.preview_mut()
    }

    fn begin_preview(&mut self, path: &str) -> Option<LoadTicket> {
        LargeFilesView::begin_preview(self, path)
    }

    fn set_alert(&mut self, message: Option<String>) {
        LargeFilesView::set_alert(self, message);
    }
}

/// Open the preview panel for `path` and fetch its content
pub fn show<V: PreviewHost>(view: &Entity<V>, files: Arc<dyn FileService>, path: String, cx: &mut App) {
    let ticket = view.update(cx, |view, cx| {
        let ticket = view.begin_preview(&path);
        cx.notify();
        ticket
    });
    let Some(ticket) = ticket else {
        tracing::debug!(path = %path, "Preview requested for an unknown row");
        return;
    };

    let view = view.clone();
    spawn_service(cx, async move { files.preview_file(path).await }, move |result, cx| {
        view.update(cx, |view, cx| {
            view.session_mut().finish(ticket, result);
            cx.notify();
        });
    });
}

/// Apply a panel event; open requests go to the file service
pub fn handle_event<V: PreviewHost>(
    view: &Entity<V>,
    files: Arc<dyn FileService>,
    event: &PreviewEvent,
    cx: &mut App,
) {
    let request = view.update(cx, |view, cx| {
        cx.notify();
        let session = view.session_mut();
        if let PreviewEvent::Close = event {
            session.close();
            return None;
        }
        let panel = session.panel_mut()?;
        match event {
            PreviewEvent::Close => None,
            PreviewEvent::ToggleOpenWith => {
                panel.toggle_open_with();
                None
            }
            PreviewEvent::OpenWith(command) => panel.open_with(command.as_deref()),
            PreviewEvent::OpenCustom(command) => {
                panel.set_custom_command(command.clone());
                panel.open_custom()
            }
        }
    });

    if let Some(request) = request {
        open(view, files, request, cx);
    }
}

fn open<V: PreviewHost>(view: &Entity<V>, files: Arc<dyn FileService>, request: OpenRequest, cx: &mut App) {
    tracing::info!(path = %request.path, command = ?request.command, "Opening file");
    let view = view.clone();
    spawn_service(cx, open_file(files, request), move |result, cx| {
        if let Some(message) = open_failure(result) {
            view.update(cx, |view, cx| {
                view.set_alert(Some(message));
                cx.notify();
            });
        }
    });
}
