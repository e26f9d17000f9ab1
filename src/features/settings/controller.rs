//! Settings Controller
//!
//! Preference toggles, the update check and the release date of the running
//! version. Every change is written back to the settings file.

use std::time::Duration;

use gpui::{App, AppContext, Entity};
use sysclean_core::services::Services;
use sysclean_core::views::SettingsView;
use sysclean_core::views::settings::{UPDATE_VERDICT_DELAY_MS, VERSION, today};

use crate::app::store::update_app_state_and_save;
use crate::app::tasks::{after, spawn_service};

/// Settings page controller
#[derive(Clone)]
pub struct SettingsController {
    view: Entity<SettingsView>,
    services: Services,
}

impl SettingsController {
    pub fn new(view: Entity<SettingsView>, services: Services) -> Self {
        Self { view, services }
    }

    pub fn toggle_deep_scan(&self, cx: &mut App) {
        self.view.update(cx, |view, cx| {
            view.toggle_deep_scan();
            cx.notify();
        });
        self.save(cx);
    }

    pub fn toggle_auto_clean(&self, cx: &mut App) {
        self.view.update(cx, |view, cx| {
            view.toggle_auto_clean();
            cx.notify();
        });
        self.save(cx);
    }

    fn save(&self, cx: &mut App) {
        let snapshot = self.view.read(cx).clone();
        update_app_state_and_save(cx, "save_settings", move |state, _| {
            snapshot.apply_to(state.settings_mut());
        });
    }

    /// Ask for the latest release; the verdict is shown after a short delay
    pub fn check_update(&self, cx: &mut App) {
        let ticket = self.view.update(cx, |view, cx| {
            let ticket = view.begin_check_update(today());
            cx.notify();
            ticket
        });
        let Some(ticket) = ticket else {
            return;
        };
        self.save(cx);

        let releases = self.services.releases.clone();
        let this = self.clone();
        spawn_service(cx, async move { releases.latest_release().await }, move |result, cx| {
            after(cx, Duration::from_millis(UPDATE_VERDICT_DELAY_MS), move |cx| {
                this.view.update(cx, |view, cx| {
                    view.finish_check_update(ticket, result);
                    cx.notify();
                });
            });
        });
    }

    /// Record when the running version was published
    pub fn fetch_release_date(&self, cx: &mut App) {
        let releases = self.services.releases.clone();
        let this = self.clone();
        spawn_service(
            cx,
            async move { releases.release_for(VERSION.to_string()).await },
            move |result, cx| {
                this.view.update(cx, |view, cx| {
                    view.finish_release_date(result);
                    cx.notify();
                });
                this.save(cx);
            },
        );
    }

    pub fn dismiss_alert(&self, cx: &mut App) {
        self.view.update(cx, |view, cx| {
            view.dismiss_alert();
            cx.notify();
        });
    }
}
