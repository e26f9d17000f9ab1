//! GitHub Releases
//!
//! Release lookups for the update check. Requests run on the tokio runtime
//! through reqwest; callers on the UI thread go through [`run_in_tokio`].
//!
//! [`run_in_tokio`]: super::run_in_tokio

use std::time::Duration;

use reqwest::Client;

use crate::domain::Release;
use crate::error::{Error, Result};
use crate::services::{ReleaseService, ServiceFuture};

/// GitHub REST API root
pub const GITHUB_API: &str = "https://api.github.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// [`ReleaseService`] backed by the GitHub releases API
#[derive(Debug, Clone)]
pub struct GithubReleases {
    client: Client,
    api: String,
    /// `owner/name`
    repo: String,
}

impl GithubReleases {
    pub fn new(repo: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("sysclean/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api: GITHUB_API.to_string(),
            repo: repo.into(),
        })
    }

    /// Point at another API root (GitHub Enterprise)
    pub fn with_api(mut self, api: impl Into<String>) -> Self {
        self.api = api.into().trim_end_matches('/').to_string();
        self
    }

    pub fn latest_url(&self) -> String {
        format!("{}/repos/{}/releases/latest", self.api, self.repo)
    }

    pub fn tag_url(&self, version: &str) -> String {
        format!("{}/repos/{}/releases/tags/{}", self.api, self.repo, release_tag(version))
    }

    fn fetch(&self, url: String) -> ServiceFuture<Release> {
        let client = self.client.clone();
        Box::pin(async move {
            tracing::debug!("Fetching release from {}", url);
            let response = client
                .get(&url)
                .header("Accept", "application/vnd.github+json")
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                tracing::warn!(%status, url = %url, "Release lookup failed");
                return Err(Error::service(format!("Release lookup failed: HTTP {status}")));
            }
            Ok(response.json::<Release>().await?)
        })
    }
}

impl ReleaseService for GithubReleases {
    fn latest_release(&self) -> ServiceFuture<Release> {
        self.fetch(self.latest_url())
    }

    fn release_for(&self, version: String) -> ServiceFuture<Release> {
        self.fetch(self.tag_url(&version))
    }
}

/// Git tag for a version string, with exactly one leading `v`
pub fn release_tag(version: &str) -> String {
    format!("v{}", version.trim().trim_start_matches(['v', 'V']))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_for_a_repository() {
        let releases = GithubReleases::new("owner/sysclean")
            .unwrap()
            .with_api("https://ghe.example.com/api/v3/");
        assert_eq!(
            releases.latest_url(),
            "https://ghe.example.com/api/v3/repos/owner/sysclean/releases/latest"
        );
        assert_eq!(
            releases.tag_url("1.2.0"),
            "https://ghe.example.com/api/v3/repos/owner/sysclean/releases/tags/v1.2.0"
        );
    }

    #[test]
    fn tags_get_a_single_v() {
        assert_eq!(release_tag("0.3.1"), "v0.3.1");
        assert_eq!(release_tag("v0.3.1"), "v0.3.1");
        assert_eq!(release_tag(" V2 "), "v2");
    }
}
