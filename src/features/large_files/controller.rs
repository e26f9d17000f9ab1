//! Large Files Controller
//!
//! Loads the large file list, deletes the selection and drives the preview.

use gpui::{App, AppContext, Entity};
use sysclean_core::domain::LargeFile;
use sysclean_core::services::Services;
use sysclean_core::views::large_files::DeleteFiles;
use sysclean_core::views::{Confirmation, LargeFilesView, LoadTicket};

use crate::app::tasks::spawn_service;
use crate::components::composite::file_preview::PreviewEvent;
use crate::features::preview;

/// Large files page controller
#[derive(Clone)]
pub struct LargeFilesController {
    view: Entity<LargeFilesView>,
    services: Services,
}

impl LargeFilesController {
    pub fn new(view: Entity<LargeFilesView>, services: Services) -> Self {
        Self { view, services }
    }

    /// Fetch the list again; there is no cached path
    pub fn load(&self, cx: &mut App) {
        let ticket = self.view.update(cx, |view, cx| {
            let ticket = view.begin_load();
            cx.notify();
            ticket
        });
        self.fetch(ticket, cx);
    }

    fn fetch(&self, ticket: LoadTicket, cx: &mut App) {
        let system = self.services.system.clone();
        let view = self.view.clone();
        spawn_service(cx, async move { system.large_files().await }, move |result, cx| {
            view.update(cx, |view, cx| {
                if view.finish_load(ticket, result) {
                    tracing::info!(files = view.files().data().len(), "Large files loaded");
                }
                cx.notify();
            });
        });
    }

    pub fn set_selection(&self, keys: Vec<String>, cx: &mut App) {
        self.view.update(cx, |view, cx| {
            view.files_mut().set_selection(keys);
            cx.notify();
        });
    }

    pub fn set_filtered(&self, rows: Vec<LargeFile>, cx: &mut App) {
        self.view.update(cx, |view, cx| {
            view.files_mut().set_filtered(rows);
            cx.notify();
        });
    }

    pub fn request_delete(&self, cx: &App) -> Option<Confirmation<DeleteFiles>> {
        self.view.read(cx).request_delete()
    }

    /// Delete the confirmed files, then reload
    pub fn delete(&self, confirmation: Confirmation<DeleteFiles>, cx: &mut App) {
        let action = self.view.update(cx, |view, cx| {
            let action = view.confirm(confirmation);
            cx.notify();
            action
        });
        tracing::info!(files = action.paths.len(), "Deleting large files");

        let system = self.services.system.clone();
        let this = self.clone();
        spawn_service(
            cx,
            async move { system.clear_large_files(action.paths).await },
            move |result, cx| {
                let reload = this.view.update(cx, |view, cx| {
                    let ticket = view.finish_delete(result);
                    cx.notify();
                    ticket
                });
                if let Some(ticket) = reload {
                    this.fetch(ticket, cx);
                }
            },
        );
    }

    pub fn dismiss_alert(&self, cx: &mut App) {
        self.view.update(cx, |view, cx| {
            view.dismiss_alert();
            cx.notify();
        });
    }

    pub fn preview(&self, path: String, cx: &mut App) {
        preview::show(&self.view, self.services.files.clone(), path, cx);
    }

    pub fn handle_preview(&self, event: &PreviewEvent, cx: &mut App) {
        preview::handle_event(&self.view, self.services.files.clone(), event, cx);
    }
}
