//! Navigation - Routes and Sidebar State

/// Top-level pages reachable from the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Dashboard,
    System,
    Cleaner,
    LargeFiles,
    Settings,
}

impl Route {
    /// Sidebar order
    pub const ALL: [Route; 5] = [
        Route::Dashboard,
        Route::System,
        Route::Cleaner,
        Route::LargeFiles,
        Route::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::System => "System",
            Route::Cleaner => "Cleaner",
            Route::LargeFiles => "Large Files",
            Route::Settings => "Settings",
        }
    }

    /// Icon asset name (`icons/<name>.svg`)
    pub fn icon(self) -> &'static str {
        match self {
            Route::Dashboard => "layout-dashboard",
            Route::System => "cpu",
            Route::Cleaner => "brush-cleaning",
            Route::LargeFiles => "hard-drive",
            Route::Settings => "settings",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    collapsed: bool,
}

impl SidebarState {
    pub fn new(collapsed: bool) -> Self {
        Self { collapsed }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flip between the full and the icon-only sidebar, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_in_sidebar_order() {
        let labels: Vec<_> = Route::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(labels, ["Dashboard", "System", "Cleaner", "Large Files", "Settings"]);
        assert_eq!(Route::default(), Route::Dashboard);
    }

    #[test]
    fn sidebar_toggles() {
        let mut sidebar = SidebarState::new(false);
        assert!(sidebar.toggle());
        assert!(sidebar.is_collapsed());
        assert!(!sidebar.toggle());
    }
}
