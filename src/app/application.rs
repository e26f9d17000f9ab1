//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::path::Path;
use std::sync::Arc;

use gpui::{
    AnyView, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use gpui_component::{Root, Theme, ThemeMode};
use sysclean_core::services::{GithubReleases, Inventory, MemoryBackend, Services};
use sysclean_core::settings::AppSettings;
use sysclean_core::views::settings::PRODUCT_NAME;
use tracing::{error, info, warn};

use crate::app::actions::{NavAction, Quit, ThemeAction, ToggleSidebar, new_key_bindings};
use crate::app::store::{AppState, AppStore, update_app_state_and_save};
use crate::app::workspace::Workspace;
use crate::assets::Assets;

/// Environment variable naming a JSON inventory snapshot to serve
pub const SNAPSHOT_ENV: &str = "SYSCLEAN_SNAPSHOT";

const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;
const MIN_WINDOW_WIDTH: f32 = 960.0;
const MIN_WINDOW_HEIGHT: f32 = 640.0;

/// Inventory from the snapshot named by [`SNAPSHOT_ENV`], or the built-in sample
fn load_inventory() -> Inventory {
    let Some(path) = std::env::var_os(SNAPSHOT_ENV) else {
        return Inventory::sample();
    };
    match Inventory::load(Path::new(&path)) {
        Ok(inventory) => inventory,
        Err(e) => {
            warn!(error = %e, "Failed to load inventory snapshot, using the sample");
            Inventory::sample()
        }
    }
}

fn build_services(settings: &AppSettings) -> sysclean_core::Result<Services> {
    let releases = GithubReleases::new(settings.update_repo.clone())?;
    Ok(Services::in_memory(
        MemoryBackend::new(load_inventory()),
        Arc::new(releases),
    ))
}

fn apply_theme(mode: ThemeMode, cx: &mut App) {
    Theme::change(mode, None, cx);
    cx.refresh_windows();
}

/// Run the SysClean application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);

        cx.bind_keys(new_key_bindings());
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let settings = AppSettings::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load settings, using defaults");
            AppSettings::default()
        });

        let services = match build_services(&settings) {
            Ok(services) => services,
            Err(e) => {
                error!(error = %e, "Failed to initialize services");
                cx.quit();
                return;
            }
        };

        let app_state = AppState::new(settings);
        apply_theme(app_state.theme_mode(), cx);
        let app_state = cx.new(|_| app_state);
        cx.set_global(AppStore::new(app_state, services));

        cx.on_action(|action: &ThemeAction, cx: &mut App| {
            let mode = match action {
                ThemeAction::Light => ThemeMode::Light,
                ThemeAction::Dark => ThemeMode::Dark,
            };
            apply_theme(mode, cx);
            update_app_state_and_save(cx, "set_theme", move |state, _| state.set_theme(mode));
        });
        cx.on_action(|_: &ToggleSidebar, cx: &mut App| {
            update_app_state_and_save(cx, "toggle_sidebar", |state, _| state.toggle_sidebar());
        });
        cx.on_action(|action: &NavAction, cx: &mut App| {
            let route = action.route();
            cx.global::<AppStore>()
                .clone()
                .update(cx, |state, cx| state.go_to(route, cx));
        });

        let bounds = Bounds::centered(
            None,
            size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(PRODUCT_NAME)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let workspace = cx.new(|cx| Workspace::new(window, cx));
            cx.new(|cx| Root::new(AnyView::from(workspace), window, cx))
        });
        match opened {
            Ok(_) => info!("Main window opened"),
            Err(e) => {
                error!(error = %e, "Failed to open main window");
                cx.quit();
                return;
            }
        }

        cx.activate(true);
    });
}
