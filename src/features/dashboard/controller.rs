//! Dashboard Controller
//!
//! Summary refresh, the scan with its progress ticker and clean all.

use std::time::Duration;

use gpui::{App, AppContext, Entity};
use sysclean_core::services::Services;
use sysclean_core::views::DashboardView;
use sysclean_core::views::dashboard::{
    SCAN_LINGER_MS, SCAN_TICK_MS, clear_everything, fetch_summaries,
};

use crate::app::tasks::{after, spawn_service};

/// Dashboard page controller
#[derive(Clone)]
pub struct DashboardController {
    view: Entity<DashboardView>,
    services: Services,
}

impl DashboardController {
    pub fn new(view: Entity<DashboardView>, services: Services) -> Self {
        Self { view, services }
    }

    pub fn refresh(&self, cx: &mut App) {
        let ticket = self.view.update(cx, |view, cx| {
            let ticket = view.begin_refresh();
            cx.notify();
            ticket
        });

        let view = self.view.clone();
        spawn_service(cx, fetch_summaries(self.services.system.clone()), move |summaries, cx| {
            view.update(cx, |view, cx| {
                view.finish_refresh(ticket, summaries);
                cx.notify();
            });
        });
    }

    /// Run a scan; ignored while one is in progress
    pub fn scan(&self, cx: &mut App) {
        let ticket = self.view.update(cx, |view, cx| {
            let ticket = view.start_scan();
            cx.notify();
            ticket
        });
        let Some(ticket) = ticket else {
            return;
        };
        tracing::info!("Scan started");
        self.schedule_tick(cx);

        let view = self.view.clone();
        spawn_service(cx, fetch_summaries(self.services.system.clone()), move |summaries, cx| {
            view.update(cx, |view, cx| {
                view.finish_scan(ticket, summaries);
                cx.notify();
            });
            tracing::info!("Scan finished");
            after(cx, Duration::from_millis(SCAN_LINGER_MS), move |cx| {
                view.update(cx, |view, cx| {
                    view.end_scan();
                    cx.notify();
                });
            });
        });
    }

    fn schedule_tick(&self, cx: &mut App) {
        let this = self.clone();
        after(cx, Duration::from_millis(SCAN_TICK_MS), move |cx| {
            let ticking = this.view.update(cx, |view, cx| {
                if !view.is_scanning() || view.scan_progress() >= 100.0 {
                    return false;
                }
                view.tick_scan();
                cx.notify();
                true
            });
            if ticking {
                this.schedule_tick(cx);
            }
        });
    }

    /// Clear every category, then refresh the summaries
    pub fn clean_all(&self, cx: &mut App) {
        let started = self.view.update(cx, |view, cx| {
            let started = view.begin_clean();
            cx.notify();
            started
        });
        if !started {
            return;
        }
        tracing::info!("Cleaning all categories");

        let this = self.clone();
        spawn_service(cx, clear_everything(self.services.system.clone()), move |result, cx| {
            let refresh = this.view.update(cx, |view, cx| {
                let refresh = view.finish_clean(result);
                cx.notify();
                refresh
            });
            if refresh {
                this.refresh(cx);
            }
        });
    }
}
