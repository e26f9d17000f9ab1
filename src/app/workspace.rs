//! Workspace - Main Shell
//!
//! Holds the sidebar and the content area. Pages are created the first time
//! their route is visited and kept afterwards, so a page keeps its loaded
//! rows, selection and search when the user navigates away and back.

use gpui::{
    AnyElement, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription, Window,
    div, prelude::*,
};
use gpui_component::{ActiveTheme, h_flex};
use sysclean_core::navigation::Route;

use crate::app::store::AppStore;
use crate::components::layout::sidebar::Sidebar;
use crate::features::cleaner::page::CleanerPage;
use crate::features::dashboard::page::DashboardPage;
use crate::features::large_files::page::LargeFilesPage;
use crate::features::settings::page::SettingsPage;
use crate::features::system::page::SystemPage;

/// Main workspace containing the application layout
pub struct Workspace {
    route: Route,
    sidebar: Entity<Sidebar>,
    dashboard_page: Option<Entity<DashboardPage>>,
    system_page: Option<Entity<SystemPage>>,
    cleaner_page: Option<Entity<CleanerPage>>,
    large_files_page: Option<Entity<LargeFilesPage>>,
    settings_page: Option<Entity<SettingsPage>>,
    _subscriptions: Vec<Subscription>,
}

impl Workspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<AppStore>().clone();
        let route = store.read(cx).route();
        let sidebar = cx.new(|cx| Sidebar::new(window, cx));

        let mut subscriptions = Vec::new();
        subscriptions.push(cx.observe(&store.app_state(), |this, model, cx| {
            let route = model.read(cx).route();
            if this.route != route {
                this.route = route;
                cx.notify();
            }
        }));

        Self {
            route,
            sidebar,
            dashboard_page: None,
            system_page: None,
            cleaner_page: None,
            large_files_page: None,
            settings_page: None,
            _subscriptions: subscriptions,
        }
    }

    /// Get or create the page for the current route
    fn current_page(&mut self, window: &mut Window, cx: &mut Context<Self>) -> AnyElement {
        match self.route {
            Route::Dashboard => self
                .dashboard_page
                .get_or_insert_with(|| cx.new(|cx| DashboardPage::new(window, cx)))
                .clone()
                .into_any_element(),
            Route::System => self
                .system_page
                .get_or_insert_with(|| cx.new(|cx| SystemPage::new(window, cx)))
                .clone()
                .into_any_element(),
            Route::Cleaner => self
                .cleaner_page
                .get_or_insert_with(|| cx.new(|cx| CleanerPage::new(window, cx)))
                .clone()
                .into_any_element(),
            Route::LargeFiles => self
                .large_files_page
                .get_or_insert_with(|| cx.new(|cx| LargeFilesPage::new(window, cx)))
                .clone()
                .into_any_element(),
            Route::Settings => self
                .settings_page
                .get_or_insert_with(|| cx.new(|cx| SettingsPage::new(window, cx)))
                .clone()
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let content = self.current_page(window, cx);

        h_flex()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.sidebar.clone())
            .child(
                div()
                    .flex_1()
                    .h_full()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(content),
            )
    }
}
