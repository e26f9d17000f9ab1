//! Embedded assets for SysClean
//!
//! Uses rust-embed to bundle icons at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter(|p| p.starts_with(path))
            .map(Into::into)
            .collect();

        files.extend(Self::iter().filter(|p| p.starts_with(path)).map(Into::into));

        Ok(files)
    }
}

/// Icon bundled under `assets/icons/<name>.svg`
pub fn named_icon(name: &str) -> Icon {
    Icon::empty().path(SharedString::from(format!("icons/{name}.svg")))
}

/// Custom icon names for SysClean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomIconName {
    Refresh,
    Trash,
    Play,
    Stop,
    Scan,
    Sparkles,
    Preview,
    ExternalLink,
}

impl CustomIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::Refresh => "icons/refresh-cw.svg",
            CustomIconName::Trash => "icons/trash-2.svg",
            CustomIconName::Play => "icons/play.svg",
            CustomIconName::Stop => "icons/square.svg",
            CustomIconName::Scan => "icons/scan-search.svg",
            CustomIconName::Sparkles => "icons/sparkles.svg",
            CustomIconName::Preview => "icons/eye.svg",
            CustomIconName::ExternalLink => "icons/external-link.svg",
        }
        .into()
    }
}

impl From<CustomIconName> for Icon {
    fn from(val: CustomIconName) -> Self {
        Icon::empty().path(val.path())
    }
}
