//! Application Store
//!
//! Persisted settings, the active route and the backend services, reachable
//! from any view through `cx.global::<AppStore>()`.

use gpui::{App, AppContext, Context, Entity, Global};
use gpui_component::ThemeMode;
use sysclean_core::navigation::{Route, SidebarState};
use sysclean_core::services::Services;
use sysclean_core::settings::AppSettings;
use tracing::{error, info};

/// Settings plus window-only navigation state
#[derive(Debug, Clone)]
pub struct AppState {
    settings: AppSettings,
    route: Route,
    sidebar: SidebarState,
}

impl AppState {
    pub fn new(settings: AppSettings) -> Self {
        let sidebar = SidebarState::new(settings.sidebar_collapsed);
        Self {
            settings,
            route: Route::default(),
            sidebar,
        }
    }

    // ==================== Getters ====================

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn is_sidebar_collapsed(&self) -> bool {
        self.sidebar.is_collapsed()
    }

    pub fn theme_mode(&self) -> ThemeMode {
        if self.settings.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    // ==================== Setters ====================

    pub fn go_to(&mut self, route: Route, cx: &mut Context<Self>) {
        if self.route != route {
            self.route = route;
            cx.notify();
        }
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.settings.dark_mode = mode.is_dark();
    }

    pub fn toggle_sidebar(&mut self) {
        self.settings.sidebar_collapsed = self.sidebar.toggle();
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.settings.page_size = size;
    }

    pub fn settings_mut(&mut self) -> &mut AppSettings {
        &mut self.settings
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<AppStore>()`
#[derive(Clone)]
pub struct AppStore {
    app_state: Entity<AppState>,
    services: Services,
}

impl AppStore {
    pub fn new(app_state: Entity<AppState>, services: Services) -> Self {
        Self {
            app_state,
            services,
        }
    }

    pub fn app_state(&self) -> Entity<AppState> {
        self.app_state.clone()
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn read<'a>(&self, cx: &'a App) -> &'a AppState {
        self.app_state.read(cx)
    }

    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut AppState, &mut Context<AppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for AppStore {}

// ==================== Persistence ====================

/// Update the app state and save the settings to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut AppState, &App) + 'static,
{
    let store = cx.global::<AppStore>().clone();

    cx.spawn(async move |cx| {
        let settings = store.update(cx, |state, cx| {
            mutation(state, cx);
            cx.notify();
            state.settings().clone()
        });

        if let Ok(settings) = settings {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = settings.save() {
                        error!(error = %e, action = action_name, "Failed to save settings");
                    } else {
                        info!(action = action_name, "Settings saved");
                    }
                })
                .await;
        }

        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}
