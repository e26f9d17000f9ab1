//! Release - Published Application Releases

use serde::{Deserialize, Serialize};

use crate::format;

/// The parts of a GitHub release the update check needs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl Release {
    /// `YYYY-MM-DD` of the publish timestamp
    pub fn published_date(&self) -> Option<String> {
        self.published_at.as_deref().and_then(format::date_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_github_payload() {
        let json = r#"{
            "tag_name": "v1.4.0",
            "name": "1.4.0",
            "published_at": "2025-06-01T12:00:00Z",
            "html_url": "https://github.com/owner/repo/releases/tag/v1.4.0",
            "assets": []
        }"#;
        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag_name, "v1.4.0");
        assert_eq!(release.published_date().as_deref(), Some("2025-06-01"));
    }
}
