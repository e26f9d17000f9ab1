//! Keyboard Actions and Shortcuts
//!
//! Application-level actions and their global key bindings.

use gpui::{Action, KeyBinding, actions};
use schemars::JsonSchema;
use serde::Deserialize;
use sysclean_core::navigation::Route;

actions!(sysclean, [Quit, ToggleSidebar]);

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
}

/// Navigation actions, one per sidebar route
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum NavAction {
    Dashboard,
    System,
    Cleaner,
    LargeFiles,
    Settings,
}

impl NavAction {
    pub fn route(self) -> Route {
        match self {
            NavAction::Dashboard => Route::Dashboard,
            NavAction::System => Route::System,
            NavAction::Cleaner => Route::Cleaner,
            NavAction::LargeFiles => Route::LargeFiles,
            NavAction::Settings => Route::Settings,
        }
    }
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", Quit, None),
        KeyBinding::new("secondary-b", ToggleSidebar, None),
        // Navigation
        KeyBinding::new("secondary-1", NavAction::Dashboard, None),
        KeyBinding::new("secondary-2", NavAction::System, None),
        KeyBinding::new("secondary-3", NavAction::Cleaner, None),
        KeyBinding::new("secondary-4", NavAction::LargeFiles, None),
        KeyBinding::new("secondary-,", NavAction::Settings, None),
    ]
}
