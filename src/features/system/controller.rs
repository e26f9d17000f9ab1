//! System Controller
//!
//! Loads the service list and runs confirmed start / stop actions.

use gpui::{App, AppContext, Entity};
use sysclean_core::domain::ServiceItem;
use sysclean_core::services::Services;
use sysclean_core::views::system::execute;
use sysclean_core::views::{Confirmation, LoadTicket, SystemAction, SystemView};

use crate::app::tasks::spawn_service;

/// System page controller
#[derive(Clone)]
pub struct SystemController {
    view: Entity<SystemView>,
    services: Services,
}

impl SystemController {
    pub fn new(view: Entity<SystemView>, services: Services) -> Self {
        Self { view, services }
    }

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
        spawn_service(cx, async move { system.all_services().await }, move |result, cx| {
            view.update(cx, |view, cx| {
                if view.finish_load(ticket, result) {
                    tracing::info!(services = view.total(), "Services loaded");
                }
                cx.notify();
            });
        });
    }

    pub fn set_selection(&self, keys: Vec<String>, cx: &mut App) {
        self.view.update(cx, |view, cx| {
            view.services_mut().set_selection(keys);
            cx.notify();
        });
    }

    pub fn clear_selection(&self, cx: &mut App) {
        self.view.update(cx, |view, cx| {
            view.services_mut().clear_selection();
            cx.notify();
        });
    }

    pub fn set_filtered(&self, rows: Vec<ServiceItem>, cx: &mut App) {
        self.view.update(cx, |view, cx| {
            view.services_mut().set_filtered(rows);
            cx.notify();
        });
    }

    pub fn request_stop(&self, cx: &App) -> Option<Confirmation<SystemAction>> {
        self.view.read(cx).request_stop()
    }

    pub fn request_start_selected(&self, cx: &App) -> Option<Confirmation<SystemAction>> {
        self.view.read(cx).request_start_selected()
    }

    pub fn request_start(&self, name: &str, cx: &App) -> Confirmation<SystemAction> {
        self.view.read(cx).request_start(name)
    }

    /// Execute a confirmed action, then reload on success
    pub fn run(&self, confirmation: Confirmation<SystemAction>, cx: &mut App) {
        let action = self.view.update(cx, |view, cx| {
            let action = view.confirm(confirmation);
            cx.notify();
            action
        });
        tracing::info!(action = ?action, "Running service action");

        let system = self.services.system.clone();
        let this = self.clone();
        spawn_service(cx, execute(system, action.clone()), move |result, cx| {
            let reload = this.view.update(cx, |view, cx| {
                let ticket = view.finish_action(&action, result);
                cx.notify();
                ticket
            });
            if let Some(ticket) = reload {
                this.fetch(ticket, cx);
            }
        });
    }

    pub fn dismiss_alert(&self, cx: &mut App) {
        self.view.update(cx, |view, cx| {
            view.dismiss_alert();
            cx.notify();
        });
    }
}
