//! Cleaner Controller
//!
//! Lazy per-tab loading, clearing the selection of the active tab and the
//! preview panel.

use gpui::{App, AppContext, Entity};
use sysclean_core::services::Services;
use sysclean_core::views::cleaner::{ClearFiles, TabRows, clear_files, fetch_tab};
use sysclean_core::views::{CleanerView, Confirmation, LoadTicket, Tab};

use crate::app::tasks::spawn_service;
use crate::components::composite::file_preview::PreviewEvent;
use crate::features::preview;

/// Cleaner page controller
#[derive(Clone)]
pub struct CleanerController {
    view: Entity<CleanerView>,
    services: Services,
}

impl CleanerController {
    pub fn new(view: Entity<CleanerView>, services: Services) -> Self {
        Self { view, services }
    }

    /// Show `tab`, loading it the first time
    pub fn select_tab(&self, tab: Tab, cx: &mut App) {
        let ticket = self.view.update(cx, |view, cx| {
            let ticket = view.select_tab(tab);
            cx.notify();
            ticket
        });
        if let Some(ticket) = ticket {
            self.fetch(tab, ticket, cx);
        }
    }

    /// Load `tab`; `force` drops the rows it already has
    pub fn load(&self, tab: Tab, force: bool, cx: &mut App) {
        let ticket = self.view.update(cx, |view, cx| {
            let ticket = view.begin_load(tab, force);
            cx.notify();
            ticket
        });
        if let Some(ticket) = ticket {
            self.fetch(tab, ticket, cx);
        }
    }

    fn fetch(&self, tab: Tab, ticket: LoadTicket, cx: &mut App) {
        let system = self.services.system.clone();
        let view = self.view.clone();
        spawn_service(cx, fetch_tab(system, tab), move |result, cx| {
            view.update(cx, |view, cx| {
                if view.finish_load(tab, ticket, result) {
                    tracing::info!(tab = tab.key(), "Cleaner tab loaded");
                }
                cx.notify();
            });
        });
    }

    pub fn set_selection(&self, tab: Tab, keys: Vec<String>, cx: &mut App) {
        self.view.update(cx, |view, cx| {
            match tab {
                Tab::Cache => view.cache_mut().set_selection(keys),
                Tab::Trash => view.trash_mut().set_selection(keys),
                Tab::Logs => view.logs_mut().set_selection(keys),
            }
            cx.notify();
        });
    }

    pub fn set_filtered(&self, rows: TabRows, cx: &mut App) {
        self.view.update(cx, |view, cx| {
            match rows {
                TabRows::Cache(rows) => view.cache_mut().set_filtered(rows),
                TabRows::Trash(rows) => view.trash_mut().set_filtered(rows),
                TabRows::Logs(rows) => view.logs_mut().set_filtered(rows),
            }
            cx.notify();
        });
    }

    pub fn request_clear(&self, cx: &App) -> Option<Confirmation<ClearFiles>> {
        self.view.read(cx).request_clear()
    }

    /// Clear the confirmed paths, then reload the tab they came from
    pub fn clear(&self, confirmation: Confirmation<ClearFiles>, cx: &mut App) {
        let action = self.view.update(cx, |view, cx| {
            let action = view.confirm(confirmation);
            cx.notify();
            action
        });
        let tab = action.tab;
        tracing::info!(tab = tab.key(), files = action.paths.len(), "Clearing files");

        let system = self.services.system.clone();
        let this = self.clone();
        spawn_service(cx, clear_files(system, action), move |result, cx| {
            let reload = this.view.update(cx, |view, cx| {
                let ticket = view.finish_clear(tab, result);
                cx.notify();
                ticket
            });
            if let Some(ticket) = reload {
                this.fetch(tab, ticket, cx);
            }
        });
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
