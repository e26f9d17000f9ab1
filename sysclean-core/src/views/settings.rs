//! Settings - Preferences, Product Info and Update Check

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::Utc;

use crate::domain::Release;
use crate::error::{Error, Result};
use crate::format::format_date;
use crate::services::ReleaseService;
use crate::settings::AppSettings;
use crate::views::{LoadTicket, LoadTracker};

pub const PRODUCT_NAME: &str = "SysClean";
pub const COMPANY_NAME: &str = "Sysclean Contributors";
pub const YEAR_CREATED: &str = "2025";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pause before the update verdict is shown, in milliseconds
pub const UPDATE_VERDICT_DELAY_MS: u64 = 1000;

pub fn parse_version(version: &str) -> Result<semver::Version> {
    let trimmed = version.trim().trim_start_matches(['v', 'V']);
    semver::Version::parse(trimmed).map_err(|source| Error::Version {
        version: version.to_string(),
        source,
    })
}

/// Whether `latest` is a newer version than `current`
///
/// Both are compared as semver when they parse; otherwise dot-separated
/// numeric components are compared, with missing or non-numeric parts as 0.
pub fn is_newer(latest: &str, current: &str) -> bool {
    if let (Ok(latest), Ok(current)) = (parse_version(latest), parse_version(current)) {
        return latest > current;
    }
    compare_components(latest, current) == Ordering::Greater
}

fn compare_components(a: &str, b: &str) -> Ordering {
    let parts = |v: &str| -> Vec<u64> {
        v.trim()
            .trim_start_matches(['v', 'V'])
            .split('.')
            .map(|part| part.parse().unwrap_or(0))
            .collect()
    };
    let (a, b) = (parts(a), parts(b));
    for i in 0..a.len().max(b.len()) {
        let (x, y) = (a.get(i).copied().unwrap_or(0), b.get(i).copied().unwrap_or(0));
        match x.cmp(&y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Today as `YYYY-MM-DD`
pub fn today() -> String {
    format_date(&Utc::now())
}

#[derive(Debug, Clone, Default)]
pub struct SettingsView {
    settings: AppSettings,
    checking: bool,
    update_available: bool,
    latest_version: Option<String>,
    alert: Option<String>,
    tracker: LoadTracker,
}

impl SettingsView {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    // ==================== Getters ====================

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Copy the preferences this page owns onto the persisted settings
    pub fn apply_to(&self, settings: &mut AppSettings) {
        settings.deep_scan = self.settings.deep_scan;
        settings.auto_clean = self.settings.auto_clean;
        settings.date_version = self.settings.date_version.clone();
        settings.date_check = self.settings.date_check.clone();
    }

    pub fn deep_scan(&self) -> bool {
        self.settings.deep_scan
    }

    pub fn auto_clean(&self) -> bool {
        self.settings.auto_clean
    }

    pub fn version(&self) -> &'static str {
        VERSION
    }

    pub fn date_version(&self) -> &str {
        AppSettings::date_label(self.settings.date_version.as_deref())
    }

    pub fn date_check(&self) -> &str {
        AppSettings::date_label(self.settings.date_check.as_deref())
    }

    pub fn is_checking(&self) -> bool {
        self.checking
    }

    pub fn is_update_available(&self) -> bool {
        self.update_available
    }

    pub fn latest_version(&self) -> Option<&str> {
        self.latest_version.as_deref()
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    // ==================== Toggles ====================

    pub fn toggle_deep_scan(&mut self) {
        self.settings.deep_scan = !self.settings.deep_scan;
    }

    pub fn toggle_auto_clean(&mut self) {
        self.settings.auto_clean = !self.settings.auto_clean;
    }

    // ==================== Update check ====================

    /// Start an update check on `today`; `None` while one is running
    pub fn begin_check_update(&mut self, today: String) -> Option<LoadTicket> {
        if self.checking {
            return None;
        }
        self.checking = true;
        self.settings.date_check = Some(today);
        Some(self.tracker.begin())
    }

    pub fn finish_check_update(&mut self, ticket: LoadTicket, result: Result<Release>) {
        if !self.tracker.finish(ticket) {
            return;
        }
        self.checking = false;
        match result {
            Ok(release) if release.tag_name.is_empty() => {}
            Ok(release) => {
                let tag = release.tag_name;
                if is_newer(&tag, VERSION) {
                    tracing::info!(latest = %tag, current = VERSION, "Update available");
                    self.update_available = true;
                    self.alert = Some(format!("A new version {tag} is available!"));
                    self.latest_version = Some(tag);
                } else {
                    self.alert = Some("You have the latest version!".to_string());
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Update check failed");
                self.alert = Some("Failed to check for updates".to_string());
            }
        }
    }

    pub async fn check_update(&mut self, releases: Arc<dyn ReleaseService>) {
        let Some(ticket) = self.begin_check_update(today()) else {
            return;
        };
        let result = releases.latest_release().await;
        self.finish_check_update(ticket, result);
    }

    /// Record the publish date of the running version; failures are ignored
    pub fn finish_release_date(&mut self, result: Result<Release>) {
        match result {
            Ok(release) => {
                if let Some(date) = release.published_date() {
                    self.settings.date_version = Some(date);
                }
            }
            Err(e) => tracing::debug!(error = %e, "Release date unavailable"),
        }
    }

    pub async fn fetch_release_date(&mut self, releases: Arc<dyn ReleaseService>) {
        let result = releases.release_for(VERSION.to_string()).await;
        self.finish_release_date(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceFuture;

    struct FixedReleases(Option<Release>);

    impl ReleaseService for FixedReleases {
        fn latest_release(&self) -> ServiceFuture<Release> {
            let release = self.0.clone();
            Box::pin(async move { release.ok_or_else(|| Error::service("offline")) })
        }

        fn release_for(&self, _version: String) -> ServiceFuture<Release> {
            self.latest_release()
        }
    }

    fn release(tag: &str) -> Release {
        Release {
            tag_name: tag.to_string(),
            published_at: Some("2025-02-03T10:00:00Z".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn version_comparison() {
        assert!(is_newer("v1.2.0", "1.1.9"));
        assert!(!is_newer("v1.2.0", "1.2.0"));
        assert!(!is_newer("1.0.0", "1.0.1"));
        // not semver, numeric components
        assert!(is_newer("v2.1", "2.0.5"));
        assert!(!is_newer("1.2", "1.2.0"));
        assert!(is_newer("1.x.1", "0.9"));
        assert!(parse_version("latest").is_err());
    }

    #[tokio::test]
    async fn newer_release_is_announced() {
        let mut view = SettingsView::new(AppSettings::default());
        assert_eq!(view.date_check(), "Unknown");
        view.check_update(Arc::new(FixedReleases(Some(release("v999.0.0"))))).await;

        assert!(view.is_update_available());
        assert_eq!(view.latest_version(), Some("v999.0.0"));
        assert_eq!(view.alert(), Some("A new version v999.0.0 is available!"));
        assert_eq!(view.date_check(), today());
        assert!(!view.is_checking());
    }

    #[tokio::test]
    async fn current_release_and_failures() {
        let mut view = SettingsView::new(AppSettings::default());
        view.check_update(Arc::new(FixedReleases(Some(release(VERSION))))).await;
        assert_eq!(view.alert(), Some("You have the latest version!"));
        assert!(!view.is_update_available());

        view.dismiss_alert();
        view.check_update(Arc::new(FixedReleases(None))).await;
        assert_eq!(view.alert(), Some("Failed to check for updates"));
    }

    #[test]
    fn empty_tag_just_stops_checking() {
        let mut view = SettingsView::new(AppSettings::default());
        let ticket = view.begin_check_update("2025-05-05".into()).unwrap();
        assert!(view.begin_check_update("2025-05-05".into()).is_none());
        view.finish_check_update(ticket, Ok(Release::default()));
        assert!(!view.is_checking());
        assert!(view.alert().is_none());
        assert_eq!(view.date_check(), "2025-05-05");
    }

    #[tokio::test]
    async fn release_date_is_recorded_and_failures_ignored() {
        let mut view = SettingsView::new(AppSettings::default());
        view.fetch_release_date(Arc::new(FixedReleases(None))).await;
        assert_eq!(view.date_version(), "Unknown");

        view.fetch_release_date(Arc::new(FixedReleases(Some(release("v0.1.0"))))).await;
        assert_eq!(view.date_version(), "2025-02-03");
    }

    #[test]
    fn toggles_flip_preferences() {
        let mut view = SettingsView::new(AppSettings::default());
        view.toggle_deep_scan();
        view.toggle_auto_clean();
        view.toggle_auto_clean();
        assert!(view.deep_scan());
        assert!(!view.auto_clean());

        let mut persisted = AppSettings {
            dark_mode: false,
            ..Default::default()
        };
        view.apply_to(&mut persisted);
        assert!(persisted.deep_scan);
        assert!(!persisted.dark_mode);
    }
}
