//! System - Service Control
//!
//! Lists every known service, keyed by name, and starts or stops them in
//! bulk or one at a time.

use std::sync::Arc;

use crate::domain::ServiceItem;
use crate::error::Result;
use crate::services::SystemService;
use crate::table::{Column, TableOptions};
use crate::views::{Confirmation, ListState, LoadTicket, LoadTracker};

pub const SEARCH_FIELDS: [&str; 3] = ["name", "description", "status"];

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("active", "Active").fixed_width(128.0).sortable(),
        Column::new("status", "Status").align_right().fixed_width(128.0).sortable(),
    ]
}

pub fn stop_options() -> TableOptions {
    TableOptions::selectable("Stop Selected")
}

pub fn start_options() -> TableOptions {
    TableOptions::selectable("Start Selected")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemAction {
    /// Stop the selected services
    Stop(Vec<String>),
    /// Enable and start the selected services
    Enable(Vec<String>),
    /// Start a single service
    Start(String),
}

impl SystemAction {
    /// Whether the selection is reset after success
    fn clears_selection(&self) -> bool {
        !matches!(self, SystemAction::Start(_))
    }

    fn failure(&self) -> &'static str {
        match self {
            SystemAction::Stop(_) => "Failed to stop services",
            SystemAction::Enable(_) => "Failed to start services",
            SystemAction::Start(_) => "Failed to start service",
        }
    }
}

pub async fn execute(system: Arc<dyn SystemService>, action: SystemAction) -> Result<()> {
    match action {
        SystemAction::Stop(names) => system.stop_services(names).await,
        SystemAction::Enable(names) => system.enable_services(names).await,
        SystemAction::Start(name) => system.start_service(name).await,
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemView {
    services: ListState<ServiceItem>,
    tracker: LoadTracker,
    busy: bool,
    alert: Option<String>,
}

impl SystemView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn services(&self) -> &ListState<ServiceItem> {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut ListState<ServiceItem> {
        &mut self.services
    }

    pub fn total(&self) -> usize {
        self.services.data().len()
    }

    pub fn running(&self) -> usize {
        self.services.data().iter().filter(|s| s.is_running).count()
    }

    pub fn stopped(&self) -> usize {
        self.total() - self.running()
    }

    pub fn is_loading(&self) -> bool {
        self.busy || self.tracker.is_loading()
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.tracker.begin()
    }

    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<ServiceItem>>) -> bool {
        if !self.tracker.finish(ticket) {
            return false;
        }
        match result {
            Ok(services) => {
                self.services.set_data(services);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load system services");
                false
            }
        }
    }

    pub async fn load(&mut self, system: Arc<dyn SystemService>) {
        let ticket = self.begin_load();
        let result = system.all_services().await;
        self.finish_load(ticket, result);
    }

    // ==================== Prompts ====================

    pub fn request_stop(&self) -> Option<Confirmation<SystemAction>> {
        let names = self.services.selected().to_vec();
        if names.is_empty() {
            return None;
        }
        let message = format!("Stop {} service(s)?", names.len());
        Some(Confirmation::new(message, SystemAction::Stop(names)))
    }

    pub fn request_start_selected(&self) -> Option<Confirmation<SystemAction>> {
        let names = self.services.selected().to_vec();
        if names.is_empty() {
            return None;
        }
        let message = format!("Start {} service(s)?", names.len());
        Some(Confirmation::new(message, SystemAction::Enable(names)))
    }

    pub fn request_start(&self, name: &str) -> Confirmation<SystemAction> {
        Confirmation::new(format!("Start {name}?"), SystemAction::Start(name.to_string()))
    }

    // ==================== Actions ====================

    pub fn confirm(&mut self, confirmation: Confirmation<SystemAction>) -> SystemAction {
        self.busy = true;
        confirmation.action
    }

    /// Apply the action result; returns a reload ticket on success
    pub fn finish_action(&mut self, action: &SystemAction, result: Result<()>) -> Option<LoadTicket> {
        self.busy = false;
        match result {
            Ok(()) => {
                if action.clears_selection() {
                    self.services.clear_selection();
                }
                Some(self.begin_load())
            }
            Err(e) => {
                let failure = action.failure();
                tracing::error!(error = %e, "{}", failure);
                self.alert = Some(format!("{failure}: {e}"));
                None
            }
        }
    }

    pub async fn run(&mut self, system: Arc<dyn SystemService>, confirmation: Confirmation<SystemAction>) {
        let action = self.confirm(confirmation);
        let result = execute(system.clone(), action.clone()).await;
        if let Some(ticket) = self.finish_action(&action, result) {
            let services = system.all_services().await;
            self.finish_load(ticket, services);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{Inventory, MemoryBackend};

    fn service(name: &str, running: bool) -> ServiceItem {
        ServiceItem {
            name: name.to_string(),
            description: None,
            load: Some("loaded".into()),
            active: if running { "active" } else { "inactive" }.into(),
            status: if running { "running" } else { "dead" }.into(),
            is_running: running,
        }
    }

    fn backend() -> Arc<MemoryBackend> {
        Arc::new(MemoryBackend::new(Inventory {
            services: vec![service("cron", true), service("cups", false), service("ssh", true)],
            ..Default::default()
        }))
    }

    #[tokio::test]
    async fn counts_follow_the_loaded_services() {
        let mut view = SystemView::new();
        view.load(backend()).await;
        assert_eq!((view.total(), view.running(), view.stopped()), (3, 2, 1));
    }

    #[tokio::test]
    async fn stop_selected_then_reload() {
        let backend = backend();
        let mut view = SystemView::new();
        view.load(backend.clone()).await;
        assert!(view.request_stop().is_none());

        view.services_mut().set_selection(vec!["cron".into(), "ssh".into()]);
        let confirmation = view.request_stop().unwrap();
        assert_eq!(confirmation.message, "Stop 2 service(s)?");
        view.run(backend, confirmation).await;

        assert_eq!(view.running(), 0);
        assert!(view.services().selected().is_empty());
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn start_one_keeps_the_selection() {
        let backend = backend();
        let mut view = SystemView::new();
        view.load(backend.clone()).await;
        view.services_mut().set_selection(vec!["cron".into()]);

        let confirmation = view.request_start("cups");
        assert_eq!(confirmation.message, "Start cups?");
        view.run(backend, confirmation).await;
        assert_eq!(view.running(), 3);
        assert_eq!(view.services().selected(), ["cron".to_string()]);
    }

    #[tokio::test]
    async fn enable_failure_alerts() {
        let backend = backend();
        let mut view = SystemView::new();
        view.load(backend.clone()).await;
        view.services_mut().set_selection(vec!["cups".into()]);
        backend.fail_on("enable_services", "access denied").await;

        let confirmation = view.request_start_selected().unwrap();
        assert_eq!(confirmation.message, "Start 1 service(s)?");
        view.run(backend, confirmation).await;
        assert_eq!(view.alert(), Some("Failed to start services: access denied"));
        assert_eq!(view.stopped(), 1);
    }
}
