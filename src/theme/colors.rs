//! Colors - Semantic Colors for SysClean
//!
//! Maps domain states onto the active gpui-component theme so both light and
//! dark mode stay consistent.

use gpui::{App, Hsla};
use gpui_component::{ActiveTheme, Colorize};
use sysclean_core::views::SystemStatus;

pub struct SysColors;

impl SysColors {
    /// Foreground for the dashboard health status
    pub fn status(status: SystemStatus, cx: &App) -> Hsla {
        match status {
            SystemStatus::Healthy => cx.theme().success,
            SystemStatus::NeedsAttention => cx.theme().warning,
            SystemStatus::Critical => cx.theme().danger,
        }
    }

    /// Tinted background behind a status badge
    pub fn status_bg(status: SystemStatus, cx: &App) -> Hsla {
        Self::status(status, cx).opacity(0.15)
    }

    /// Foreground for a service row state
    pub fn service_state(is_running: bool, cx: &App) -> Hsla {
        if is_running {
            cx.theme().success
        } else {
            cx.theme().muted_foreground
        }
    }

    /// Alternating row background
    pub fn row_stripe(index: usize, cx: &App) -> Hsla {
        if index % 2 == 0 {
            cx.theme().background
        } else if cx.theme().is_dark() {
            cx.theme().background.lighten(0.3)
        } else {
            cx.theme().background.darken(0.01)
        }
    }

    /// Backdrop behind modal dialogs
    pub fn backdrop() -> Hsla {
        gpui::black().opacity(0.5)
    }
}
